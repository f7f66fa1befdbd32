//! The validation engine
//!
//! A [`Validator`] owns a [`RuleRegistry`], a [`TypeRegistry`] and the
//! [`ValidatorConfig`] they were built with. Fill it during setup, then share
//! it: `validate` only needs `&self`.

use std::any::Any;
use std::borrow::Cow;

use tracing::debug;

use crate::config::ValidatorConfig;
use crate::context::Context;
use crate::foundation::{Operand, Rule, RuleResult, ValidationResult};
use crate::registry::{RuleRegistry, TypeHandler, TypeRegistry};
use crate::rules;

/// Rule and type-handler registries plus configuration.
///
/// # Examples
///
/// ```
/// use vouch::Validator;
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let mut validator = Validator::new();
/// validator.register_type(|person: &Person, ctx| {
///     ctx.check("notEmpty", [&person.name]).message("name required");
///     ctx.check("greaterThan", vouch::operands![0, person.age])
///         .message("age must be positive");
/// });
///
/// let err = validator
///     .validate(&Person { name: String::new(), age: 3 })
///     .unwrap_err();
/// assert_eq!(err.message, "name required");
/// assert!(validator.validate(&Person { name: "bob".into(), age: 3 }).is_ok());
/// ```
#[derive(Debug)]
pub struct Validator {
    config: ValidatorConfig,
    rules: RuleRegistry,
    types: TypeRegistry,
}

impl Validator {
    /// Creates a validator with the default configuration and the built-in
    /// rules installed.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Creates a validator from `config`.
    pub fn with_config(config: ValidatorConfig) -> Self {
        let mut rules = RuleRegistry::new();
        if config.builtin_rules {
            rules::install(&mut rules, config.length_mode);
        }
        Self {
            config,
            rules,
            types: TypeRegistry::new(),
        }
    }

    /// Creates a validator with no rules and no types.
    pub fn empty() -> Self {
        Self::with_config(ValidatorConfig::default().without_builtin_rules())
    }

    /// The configuration this validator was built with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The rule registry.
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// The type-handler registry.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Registers a closure or function as a named rule.
    ///
    /// An existing rule with the same name, built-in or not, is replaced.
    pub fn register_rule<F>(&mut self, name: impl Into<Cow<'static, str>>, rule: F) -> &mut Self
    where
        F: Fn(&[Operand<'_>]) -> RuleResult + Send + Sync + 'static,
    {
        self.rules.register(name, rule);
        self
    }

    /// Registers a [`Rule`] implementation under `name`.
    pub fn insert_rule<R>(&mut self, name: impl Into<Cow<'static, str>>, rule: R) -> &mut Self
    where
        R: Rule + 'static,
    {
        self.rules.insert(name, rule);
        self
    }

    /// Binds a validation routine to the exact type `T`.
    pub fn register_type<T, F>(&mut self, handler: F) -> &mut Self
    where
        T: Any,
        F: Fn(&T, &mut Context<'_>) + Send + Sync + 'static,
    {
        self.types.register(handler);
        self
    }

    /// Validates `value` with the handler registered for `T`.
    ///
    /// Returns the first failure reported by the handler, or `Ok(())`.
    ///
    /// # Panics
    ///
    /// Panics if `T` has no handler, or if the handler uses an unknown rule
    /// or calls a rule with arguments it cannot accept.
    pub fn validate<T: Any>(&self, value: &T) -> ValidationResult {
        self.run(self.types.resolve::<T>(), value)
    }

    /// Validates a type-erased value, dispatching on its runtime type.
    ///
    /// The runtime type is that of the `dyn Any` itself. A `&Box<dyn Any>`
    /// coerces to a `&dyn Any` whose type is the box, so unwrap it with
    /// `as_ref()` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    /// use vouch::Validator;
    ///
    /// let mut validator = Validator::new();
    /// validator.register_type(|n: &u8, ctx| {
    ///     ctx.must(|| *n > 0);
    /// });
    ///
    /// let boxed: Box<dyn Any> = Box::new(5u8);
    /// assert!(validator.validate_any(boxed.as_ref()).is_ok());
    ///
    /// // `&boxed` would dispatch on `Box<dyn Any>`, which has no handler
    /// assert!(validator.types().try_resolve_dyn(&boxed).is_err());
    /// ```
    ///
    /// # Panics
    ///
    /// Same conditions as [`validate`](Self::validate).
    pub fn validate_any(&self, value: &dyn Any) -> ValidationResult {
        self.run(self.types.resolve_dyn(value), value)
    }

    fn run(&self, handler: &dyn TypeHandler, value: &dyn Any) -> ValidationResult {
        let mut ctx = Context::with_must_message(&self.rules, &self.config.must_message);
        handler.handle(value, &mut ctx);

        let result = ctx.into_result();
        if let Err(error) = &result {
            debug!(
                type_name = handler.type_name(),
                code = %error.code,
                message = %error.message,
                "validation failed"
            );
        }
        result
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
