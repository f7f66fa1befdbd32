//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use vouch::prelude::*;
//!
//! let mut validator = Validator::new();
//! validator.register_type(|order: &Order, ctx: &mut Context<'_>| {
//!     ctx.check("greaterThan", operands![0, order.quantity]);
//! });
//! ```

// ============================================================================
// FOUNDATION: Errors, operands, the rule trait
// ============================================================================

pub use crate::foundation::{
    ContractViolation, LengthMode, Operand, Rule, RuleError, RuleResult, ValidationError,
    ValidationResult,
};

// ============================================================================
// ENGINE: Validator, context, configuration
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::context::Context;
pub use crate::engine::Validator;
pub use crate::operands;

// ============================================================================
// RULES: Built-in rule names
// ============================================================================

pub use crate::rules::{GREATER_THAN, IS_EMAIL, LESS_THAN, NOT_EMPTY};
