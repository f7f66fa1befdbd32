//! `notEmpty`

use crate::foundation::{LengthMode, Operand, Rule, RuleResult, ValidationError};

/// Fails if any operand is empty.
///
/// Strings are measured after trimming surrounding whitespace, sequences and
/// mappings by element count, and an absent value counts as empty. Numbers
/// and booleans have no length and are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotEmpty {
    /// How strings are measured.
    pub mode: LengthMode,
}

impl NotEmpty {
    /// Creates the rule with the given string length mode.
    pub fn new(mode: LengthMode) -> Self {
        Self { mode }
    }
}

impl Rule for NotEmpty {
    fn evaluate(&self, args: &[Operand<'_>]) -> RuleResult {
        for (i, arg) in args.iter().enumerate() {
            if arg.content_len(self.mode) == Some(0) {
                return Err(ValidationError::required(i + 1).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn not_empty(args: &[Operand<'_>]) -> RuleResult {
        NotEmpty::default().evaluate(args)
    }

    #[rstest]
    #[case::empty_string(Operand::Str(""))]
    #[case::whitespace(Operand::Str("   "))]
    #[case::tabs_and_newlines(Operand::Str("\t\n"))]
    #[case::empty_sequence(Operand::Seq(0))]
    #[case::empty_mapping(Operand::Map(0))]
    #[case::absent(Operand::Absent)]
    fn test_empty_operands_fail(#[case] operand: Operand<'static>) {
        assert!(not_empty(&[operand]).is_err());
    }

    #[rstest]
    #[case::string(Operand::Str("a"))]
    #[case::padded_string(Operand::Str("  a  "))]
    #[case::sequence(Operand::Seq(1))]
    #[case::mapping(Operand::Map(3))]
    #[case::zero_is_skipped(Operand::Int(0))]
    #[case::float_is_skipped(Operand::Float(0.0))]
    #[case::bool_is_skipped(Operand::Bool(false))]
    fn test_non_empty_operands_pass(#[case] operand: Operand<'static>) {
        assert!(not_empty(&[operand]).is_ok());
    }

    #[test]
    fn test_reports_first_empty_position() {
        let names = vec!["x"];
        let tags: HashMap<String, String> = HashMap::new();
        let args = [Operand::from("bob"), Operand::from(&names), Operand::from(&tags)];

        let Err(crate::foundation::RuleError::Invalid(error)) = not_empty(&args) else {
            panic!("expected a validation failure");
        };
        assert_eq!(error.code, "required");
        assert_eq!(error.param("position"), Some("3"));
    }

    #[test]
    fn test_no_operands_pass() {
        assert!(not_empty(&[]).is_ok());
    }
}
