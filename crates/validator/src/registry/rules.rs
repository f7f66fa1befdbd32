//! Rule registry: rule name to rule implementation.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::foundation::{ContractViolation, Operand, Rule, RuleResult};

/// Named rules available to `Context::check`.
///
/// Registration needs `&mut self`; resolution only `&self`. Once a registry
/// is shared it is effectively frozen.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<Cow<'static, str>, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a closure or function as a rule, replacing any rule with the
    /// same name.
    pub fn register<F>(&mut self, name: impl Into<Cow<'static, str>>, rule: F) -> &mut Self
    where
        F: Fn(&[Operand<'_>]) -> RuleResult + Send + Sync + 'static,
    {
        self.insert(name, rule)
    }

    /// Registers any [`Rule`] implementation, replacing any rule with the
    /// same name.
    pub fn insert<R>(&mut self, name: impl Into<Cow<'static, str>>, rule: R) -> &mut Self
    where
        R: Rule + 'static,
    {
        let name = name.into();
        if self.rules.insert(name.clone(), Arc::new(rule)).is_some() {
            debug!(rule = %name, "replaced existing rule");
        } else {
            debug!(rule = %name, "registered rule");
        }
        self
    }

    /// Looks up a rule by name.
    pub fn try_resolve(&self, name: &str) -> Result<&dyn Rule, ContractViolation> {
        self.rules
            .get(name)
            .map(|rule| rule.as_ref())
            .ok_or_else(|| ContractViolation::UnknownRule {
                name: name.to_owned(),
            })
    }

    /// Looks up a rule by name.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::UnknownRule`] if `name` was never
    /// registered. A missing rule is a wiring bug, not bad input.
    pub fn resolve(&self, name: &str) -> &dyn Rule {
        match self.try_resolve(name) {
            Ok(rule) => rule,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Returns true if a rule with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(AsRef::as_ref).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuleError, ValidationError};

    fn fails(code: &'static str) -> impl Fn(&[Operand<'_>]) -> RuleResult + Send + Sync {
        move |_| Err(ValidationError::new(code, "failed").into())
    }

    #[test]
    fn test_resolve_after_register() {
        let mut registry = RuleRegistry::new();
        registry.register("ok", |_| Ok(()));

        assert!(registry.contains("ok"));
        assert!(registry.resolve("ok").evaluate(&[]).is_ok());
    }

    #[test]
    fn test_reregister_replaces() {
        let mut registry = RuleRegistry::new();
        registry.register("rule", fails("first"));
        registry.register("rule", fails("second"));

        assert_eq!(registry.len(), 1);
        let err = registry.resolve("rule").evaluate(&[]).unwrap_err();
        assert_eq!(
            err,
            RuleError::Invalid(ValidationError::new("second", "failed"))
        );
    }

    #[test]
    fn test_try_resolve_unknown() {
        let registry = RuleRegistry::new();
        let err = registry.try_resolve("missing").err();
        assert_eq!(
            err,
            Some(ContractViolation::UnknownRule {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    #[should_panic(expected = "rule `missing` has not been registered")]
    fn test_resolve_unknown_panics() {
        RuleRegistry::new().resolve("missing");
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = RuleRegistry::new();
        registry
            .register("lessThan", |_| Ok(()))
            .register("greaterThan", |_| Ok(()));
        assert_eq!(registry.names(), vec!["greaterThan", "lessThan"]);
        assert!(!registry.is_empty());
    }
}
