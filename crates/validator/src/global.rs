//! Process-wide default validator
//!
//! Opt-in convenience over a lazily built [`Validator`] with the built-in
//! rules installed. Prefer an owned `Validator` where one can be passed
//! around; this module exists for code that cannot thread one through.
//!
//! Registration takes the write lock. Validation holds a recursive read lock
//! for the whole call: a handler may validate nested values through this
//! module even while a registration is waiting, but it must not register
//! into the default validator itself.

use std::any::Any;
use std::borrow::Cow;
use std::sync::LazyLock;

use parking_lot::RwLock;

use crate::context::Context;
use crate::engine::Validator;
use crate::foundation::{Operand, Rule, RuleResult, ValidationResult};

static DEFAULT: LazyLock<RwLock<Validator>> = LazyLock::new(|| RwLock::new(Validator::new()));

/// Registers a named rule on the default validator.
pub fn register_rule<F>(name: impl Into<Cow<'static, str>>, rule: F)
where
    F: Fn(&[Operand<'_>]) -> RuleResult + Send + Sync + 'static,
{
    DEFAULT.write().register_rule(name, rule);
}

/// Registers a [`Rule`] implementation on the default validator.
pub fn insert_rule<R>(name: impl Into<Cow<'static, str>>, rule: R)
where
    R: Rule + 'static,
{
    DEFAULT.write().insert_rule(name, rule);
}

/// Binds a validation routine to `T` on the default validator.
pub fn register_type<T, F>(handler: F)
where
    T: Any,
    F: Fn(&T, &mut Context<'_>) + Send + Sync + 'static,
{
    DEFAULT.write().register_type(handler);
}

/// Validates `value` with the default validator.
///
/// # Panics
///
/// See [`Validator::validate`].
pub fn validate<T: Any>(value: &T) -> ValidationResult {
    DEFAULT.read_recursive().validate(value)
}

/// Validates a type-erased value with the default validator.
///
/// # Panics
///
/// See [`Validator::validate_any`].
pub fn validate_any(value: &dyn Any) -> ValidationResult {
    DEFAULT.read_recursive().validate_any(value)
}

/// Runs `f` with shared access to the default validator.
pub fn with_default<R>(f: impl FnOnce(&Validator) -> R) -> R {
    f(&DEFAULT.read_recursive())
}

/// Swaps in a new default validator, returning the previous one.
pub fn replace(validator: Validator) -> Validator {
    std::mem::replace(&mut *DEFAULT.write(), validator)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The default validator is shared by every test in this binary, so each
    // test registers its own local types and rule names.

    #[test]
    fn test_builtins_preloaded() {
        with_default(|validator| {
            assert!(validator.rules().contains("notEmpty"));
            assert!(validator.rules().contains("isEmail"));
        });
    }

    #[test]
    fn test_register_and_validate() {
        struct Username(String);

        register_type(|user: &Username, ctx| {
            ctx.check("notEmpty", [&user.0]).message("username required");
        });

        assert!(validate(&Username("ferris".into())).is_ok());
        let err = validate(&Username("  ".into())).unwrap_err();
        assert_eq!(err.message, "username required");
    }

    #[test]
    fn test_register_rule() {
        struct Even(i64);

        register_rule("global_test_even", |args: &[Operand<'_>]| -> RuleResult {
            match args {
                [Operand::Int(n)] if n % 2 == 0 => Ok(()),
                _ => Err(crate::foundation::ValidationError::new("even", "not even").into()),
            }
        });
        register_type(|even: &Even, ctx| {
            ctx.check("global_test_even", [even.0]);
        });

        assert!(validate(&Even(4)).is_ok());
        assert_eq!(validate_any(&Even(3)).unwrap_err().code, "even");
    }
}
