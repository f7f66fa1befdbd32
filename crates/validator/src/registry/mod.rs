//! Registries
//!
//! - [`RuleRegistry`]: rule name to [`Rule`](crate::foundation::Rule)
//! - [`TypeRegistry`]: exact type to [`TypeHandler`]
//!
//! Both are filled during setup through `&mut self` and only read afterwards.

pub mod rules;
pub mod types;

pub use rules::RuleRegistry;
pub use types::{TypeHandler, TypeRegistry};
