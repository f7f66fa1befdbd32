//! # vouch
//!
//! Struct validation through named, reusable rules and per-type handlers.
//!
//! ## Quick Start
//!
//! ```rust
//! use vouch::prelude::*;
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! let mut validator = Validator::new();
//! validator.register_type(|person: &Person, ctx| {
//!     ctx.check("notEmpty", [&person.name]).message("name required");
//!     ctx.check("greaterThan", operands![0, person.age])
//!         .message("age must be positive");
//! });
//!
//! let err = validator
//!     .validate(&Person { name: "bob".into(), age: 0 })
//!     .unwrap_err();
//! assert_eq!(err.message, "age must be positive");
//! ```
//!
//! ## How it fits together
//!
//! - A [`RuleRegistry`](registry::RuleRegistry) maps names like
//!   `"greaterThan"` to [`Rule`]s.
//! - A [`TypeRegistry`](registry::TypeRegistry) maps each exact Rust type to
//!   a handler.
//! - [`Validator::validate`] finds the handler for the value's type and runs
//!   it against a fresh [`Context`]. The context keeps the first failure and
//!   ignores every check after it.
//!
//! Author mistakes (an unknown rule, an unregistered type, a rule called with
//! the wrong number of arguments) are not validation failures. They panic.
//!
//! ## Built-in Rules
//!
//! [`rules::NotEmpty`] (`notEmpty`), [`rules::Compare`] (`greaterThan`,
//! `lessThan`) and [`rules::IsEmail`] (`isEmail`). See [`rules`].
//!
//! ## Default validator
//!
//! [`global`] holds a lazily created process-wide [`Validator`] for code that
//! cannot pass one around.

// ValidationError is the error type of every rule call; boxing it would add
// an allocation to each failure.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod context;
pub mod engine;
pub mod foundation;
pub mod global;
#[cfg(feature = "json")]
pub mod json;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rules;

pub use config::ValidatorConfig;
pub use context::Context;
pub use engine::Validator;
pub use foundation::{
    ContractViolation, LengthMode, Operand, Rule, RuleError, RuleResult, ValidationError,
    ValidationResult,
};
