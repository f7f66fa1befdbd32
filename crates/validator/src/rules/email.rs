//! `isEmail`
//!
//! A coarse well-formedness check done in one left-to-right scan. It is not
//! RFC 5322 validation: `a@.c` and `a@b..c` pass.

use crate::foundation::{ContractViolation, Operand, Rule, RuleResult, ValidationError};

/// Fails unless the single string argument looks like an email address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsEmail;

impl Rule for IsEmail {
    fn evaluate(&self, args: &[Operand<'_>]) -> RuleResult {
        let [arg] = args else {
            return Err(ContractViolation::Arity {
                rule: super::IS_EMAIL,
                expected: "exactly 1",
                actual: args.len(),
            }
            .into());
        };

        let Some(input) = arg.as_str() else {
            return Err(ContractViolation::OperandKind {
                rule: super::IS_EMAIL,
                position: 1,
                expected: "string",
                actual: arg.kind(),
            }
            .into());
        };

        if is_well_formed(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_email().into())
        }
    }
}

/// Returns true if `input` has exactly one `@` with something before it, a
/// `.` after it followed by at least one non-`.` character, and no spaces or
/// commas anywhere.
pub fn is_well_formed(input: &str) -> bool {
    let mut at_signs = 0usize;
    let mut local_len = 0usize;
    let mut domain_has_dot = false;
    let mut after_last_dot = 0usize;

    for c in input.chars() {
        match c {
            ' ' | ',' => return false,
            '@' => {
                at_signs += 1;
                if at_signs > 1 {
                    return false;
                }
            }
            _ if at_signs == 0 => local_len += 1,
            '.' => {
                domain_has_dot = true;
                after_last_dot = 0;
            }
            _ if domain_has_dot => after_last_dot += 1,
            _ => {}
        }
    }

    at_signs == 1 && local_len > 0 && domain_has_dot && after_last_dot > 0
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::foundation::RuleError;

    #[rstest]
    #[case::minimal("a@b.c")]
    #[case::typical("user@example.com")]
    #[case::subdomain("first.last@mail.example.org")]
    #[case::dot_right_after_at("a@.c")]
    fn test_accepts(#[case] input: &str) {
        assert!(IsEmail.evaluate(&[Operand::Str(input)]).is_ok());
    }

    #[rstest]
    #[case::no_at("ab.c")]
    #[case::no_dot_after_at("a@bc")]
    #[case::space("a @b.c")]
    #[case::comma("a,b@c.d")]
    #[case::trailing_dot("a@b.")]
    #[case::two_ats("a@b@c.d")]
    #[case::nothing_before_at("@b.c")]
    #[case::empty("")]
    #[case::only_dots_after_dot("a@b..")]
    fn test_rejects(#[case] input: &str) {
        let result = IsEmail.evaluate(&[Operand::Str(input)]);
        assert_eq!(
            result,
            Err(RuleError::Invalid(ValidationError::invalid_email()))
        );
    }

    #[test]
    fn test_missing_argument_is_contract_violation() {
        assert!(matches!(
            IsEmail.evaluate(&[]),
            Err(RuleError::Contract(ContractViolation::Arity { actual: 0, .. }))
        ));
    }

    #[test]
    fn test_non_string_is_contract_violation() {
        assert_eq!(
            IsEmail.evaluate(&[Operand::Int(3)]),
            Err(RuleError::Contract(ContractViolation::OperandKind {
                rule: "isEmail",
                position: 1,
                expected: "string",
                actual: "int",
            }))
        );
    }
}
