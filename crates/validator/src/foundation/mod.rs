//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Errors**: [`ValidationError`], [`ContractViolation`], [`RuleError`]
//! - **Arguments**: [`Operand`], [`LengthMode`]
//! - **Traits**: [`Rule`]
//!
//! Everything else (registries, the context, the built-in rules) is built on
//! top of these types.

pub mod error;
pub mod operand;
pub mod traits;

pub use error::{ContractViolation, RuleError, RuleResult, ValidationError, ValidationResult};
pub use operand::{LengthMode, Operand};
pub use traits::Rule;

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for writing rules.
pub mod prelude {
    pub use super::{
        ContractViolation, LengthMode, Operand, Rule, RuleError, RuleResult, ValidationError,
        ValidationResult,
    };
}
