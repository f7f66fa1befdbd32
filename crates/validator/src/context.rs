//! Validation context
//!
//! A [`Context`] threads the result of one validation call through a chain
//! of rule invocations. It has two states:
//!
//! - **OK**: the initial state.
//! - **Failed**: entered on the first failing check and never left.
//!
//! Once failed, the context is frozen: `check`, `must` and `must_err` are
//! no-ops, so only the first failure is ever reported and a handler never
//! needs explicit early returns. `message` only rewrites the failure raised
//! by the call directly before it; after a skipped call it is a no-op too.
//!
//! ```rust,ignore
//! ctx.check("notEmpty", [&person.name]).message("name is required");
//! ctx.check("greaterThan", operands![0, person.age]).message("age must be positive");
//! ```

use std::borrow::Cow;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::foundation::{Operand, RuleError, ValidationError, ValidationResult};
use crate::registry::RuleRegistry;

/// Message of a failed `must` when no other message is configured.
pub const DEFAULT_MUST_MESSAGE: &str = "rule failed";

/// Per-call, fail-frozen accumulator of the first validation error.
#[derive(Debug)]
pub struct Context<'r> {
    rules: &'r RuleRegistry,
    must_message: &'r str,
    error: Option<ValidationError>,
    // the last check/must/must_err is the one that failed
    just_failed: bool,
}

impl<'r> Context<'r> {
    /// Creates an OK context resolving rule names through `rules`.
    pub fn new(rules: &'r RuleRegistry) -> Self {
        Self::with_must_message(rules, DEFAULT_MUST_MESSAGE)
    }

    /// Creates an OK context whose failed `must` calls use `must_message`.
    pub fn with_must_message(rules: &'r RuleRegistry, must_message: &'r str) -> Self {
        Self {
            rules,
            must_message,
            error: None,
            just_failed: false,
        }
    }

    /// Runs the rule registered under `name` against `args`.
    ///
    /// No-op on a failed context: the rule is neither resolved nor run.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not registered, or if the rule reports a
    /// [`ContractViolation`](crate::foundation::ContractViolation) such as a
    /// wrong argument count.
    pub fn check<'v, I>(&mut self, name: &str, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Operand<'v>>,
    {
        if self.is_failed() {
            self.just_failed = false;
            return self;
        }

        let rule = self.rules.resolve(name);
        let args: SmallVec<[Operand<'v>; 4]> = args.into_iter().map(Into::into).collect();
        trace!(rule = name, args = args.len(), "evaluating rule");

        match rule.evaluate(&args) {
            Ok(()) => {}
            Err(RuleError::Invalid(error)) => {
                debug!(rule = name, code = %error.code, "rule failed");
                self.fail(error);
            }
            Err(RuleError::Contract(violation)) => panic!("{violation}"),
        }
        self
    }

    /// Fails with the configured `must` message if `predicate` returns false.
    ///
    /// No-op on a failed context: the predicate is not evaluated.
    pub fn must<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnOnce() -> bool,
    {
        let message = self.must_message;
        self.must_err(|| {
            if predicate() {
                Ok(())
            } else {
                Err(ValidationError::must(message.to_owned()))
            }
        })
    }

    /// Fails with the error returned by `f`, if any.
    ///
    /// No-op on a failed context: `f` is not called.
    pub fn must_err<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce() -> ValidationResult,
    {
        if self.is_failed() {
            self.just_failed = false;
            return self;
        }

        if let Err(error) = f() {
            debug!(code = %error.code, "custom check failed");
            self.fail(error);
        }
        self
    }

    /// Replaces the message of the error raised by the preceding call.
    ///
    /// No-op on an OK context, and on a failed context whose preceding call
    /// was skipped: an earlier failure keeps its own message.
    pub fn message(&mut self, text: impl Into<Cow<'static, str>>) -> &mut Self {
        if self.just_failed
            && let Some(error) = self.error.as_mut()
        {
            error.message = text.into();
        }
        self
    }

    /// The stored error, if any check failed.
    pub fn result(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Returns true while no check has failed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true once a check has failed.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    fn fail(&mut self, error: ValidationError) {
        self.error = Some(error);
        self.just_failed = true;
    }

    /// Consumes the context, returning the first error as a `Result`.
    pub fn into_result(self) -> ValidationResult {
        self.error.map_or(Ok(()), Err)
    }
}

// ============================================================================
// TESTS
// ============================================================================
