//! Core traits for the validation system

use crate::foundation::{Operand, RuleResult};

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A named, reusable predicate invoked through `Context::check`.
///
/// Rules are pure: they keep no state between invocations and never mutate
/// their arguments. A rule reports bad input with
/// [`RuleError::Invalid`](crate::foundation::RuleError::Invalid) and being
/// called the wrong way with
/// [`RuleError::Contract`](crate::foundation::RuleError::Contract).
///
/// Any `Fn(&[Operand<'_>]) -> RuleResult` closure is a rule.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::foundation::{Operand, Rule, RuleResult, ValidationError};
///
/// struct Even;
///
/// impl Rule for Even {
///     fn evaluate(&self, args: &[Operand<'_>]) -> RuleResult {
///         for arg in args {
///             if let Operand::Int(n) = arg {
///                 if n % 2 != 0 {
///                     return Err(ValidationError::new("even", "must be even").into());
///                 }
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Evaluates the rule against an ordered list of operands.
    fn evaluate(&self, args: &[Operand<'_>]) -> RuleResult;
}

impl<F> Rule for F
where
    F: Fn(&[Operand<'_>]) -> RuleResult + Send + Sync,
{
    #[inline]
    fn evaluate(&self, args: &[Operand<'_>]) -> RuleResult {
        self(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn evaluate(&self, _args: &[Operand<'_>]) -> RuleResult {
            Err(ValidationError::new("always_fails", "Always fails").into())
        }
    }

    fn positive(args: &[Operand<'_>]) -> RuleResult {
        match args.first() {
            Some(Operand::Int(n)) if *n > 0 => Ok(()),
            _ => Err(ValidationError::new("positive", "must be positive").into()),
        }
    }

    #[test]
    fn test_struct_rule() {
        assert!(AlwaysFails.evaluate(&[]).is_err());
    }

    #[test]
    fn test_fn_item_is_rule() {
        let rule: &dyn Rule = &positive;
        assert!(rule.evaluate(&[Operand::Int(1)]).is_ok());
        assert!(rule.evaluate(&[Operand::Int(0)]).is_err());
    }
}
