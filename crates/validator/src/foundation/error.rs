//! Error types for validation failures and contract violations
//!
//! Two disjoint classes live here:
//!
//! - [`ValidationError`]: data-dependent failures carried as the result of a
//!   validation call. Recoverable by the caller.
//! - [`ContractViolation`]: registry or rule-wiring mistakes made by the
//!   author of a handler. These are raised as panics by the context and the
//!   engine and are never turned into validation failures.
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` so the
//! common case of static codes and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```rust,ignore
/// use vouch::foundation::ValidationError;
///
/// let error = ValidationError::new("greater_than", "value is too small")
///     .with_param("position", "2")
///     .with_param("comparer", "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "greater_than", "invalid_email"
    pub code: Cow<'static, str>,

    /// Human-readable message. Replaced by `Context::message`.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error for the operand at `position` (1-based).
    pub fn required(position: usize) -> Self {
        Self::new("required", "rule required failed").with_param("position", position.to_string())
    }

    /// Creates an "invalid_email" error.
    pub fn invalid_email() -> Self {
        Self::new("invalid_email", "invalid email")
    }

    /// Creates an "unsupported_operand" error for a comparison rule.
    pub fn unsupported_operand(rule: &str, kind: &'static str, position: usize) -> Self {
        let message = if position == 1 {
            format!("{rule}: unsupported type {kind} for comparer")
        } else {
            format!("{rule}: unsupported type {kind} at position {position}")
        };
        Self::new("unsupported_operand", message)
            .with_param("position", position.to_string())
            .with_param("kind", kind)
    }

    /// Creates the error of a failed `must` predicate.
    pub fn must(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("must", message)
    }
}

// ============================================================================
// CONTRACT VIOLATION
// ============================================================================

/// Misuse of the registries or of a rule's calling convention.
///
/// A contract violation means the handler author made a mistake, not that the
/// input is invalid. [`Context`](crate::context::Context) and
/// [`Validator`](crate::engine::Validator) raise these as panics; the
/// `try_*` registry accessors hand them back as values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// `check` named a rule that was never registered.
    #[error("rule `{name}` has not been registered")]
    UnknownRule {
        /// The rule name that failed to resolve.
        name: String,
    },

    /// `validate` was called for a type with no handler.
    #[error("type `{type_name}` has not been registered with register_type")]
    UnregisteredType {
        /// `std::any::type_name` of the value, or `<unknown>` for erased values.
        type_name: &'static str,
    },

    /// A rule received the wrong number of arguments.
    #[error("{rule}: expected {expected} parameters, got {actual}")]
    Arity {
        /// Rule name.
        rule: &'static str,
        /// Human-readable expectation ("at least 2", "exactly 1").
        expected: &'static str,
        /// Number of arguments passed.
        actual: usize,
    },

    /// A rule received an argument of a kind it cannot accept at all.
    #[error("{rule}: parameter at position {position} must be {expected}, got {actual}")]
    OperandKind {
        /// Rule name.
        rule: &'static str,
        /// 1-based argument position.
        position: usize,
        /// Expected operand kind.
        expected: &'static str,
        /// Operand kind actually passed.
        actual: &'static str,
    },
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// What a rule returns when it does not pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The input failed the rule.
    Invalid(ValidationError),
    /// The rule was called incorrectly.
    Contract(ContractViolation),
}

impl From<ValidationError> for RuleError {
    fn from(error: ValidationError) -> Self {
        Self::Invalid(error)
    }
}

impl From<ContractViolation> for RuleError {
    fn from(violation: ContractViolation) -> Self {
        Self::Contract(violation)
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(error) => error.fmt(f),
            Self::Contract(violation) => violation.fmt(f),
        }
    }
}

impl std::error::Error for RuleError {}

/// Outcome of evaluating a rule.
pub type RuleResult = Result<(), RuleError>;

/// Outcome of validating a value.
pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
