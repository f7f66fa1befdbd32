//! Built-in rules
//!
//! | Name          | Rule                      |
//! |---------------|---------------------------|
//! | `notEmpty`    | [`NotEmpty`]              |
//! | `greaterThan` | [`Compare::greater_than`] |
//! | `lessThan`    | [`Compare::less_than`]    |
//! | `isEmail`     | [`IsEmail`]               |
//!
//! `Validator::new` installs all four. Use [`install`] to add them to a
//! [`RuleRegistry`] built by hand.

pub mod compare;
pub mod email;
pub mod empty;

pub use compare::{Compare, Direction};
pub use email::{IsEmail, is_well_formed};
pub use empty::NotEmpty;

use crate::foundation::LengthMode;
use crate::registry::RuleRegistry;

/// Registered name of [`NotEmpty`].
pub const NOT_EMPTY: &str = "notEmpty";
/// Registered name of [`Compare::greater_than`].
pub const GREATER_THAN: &str = "greaterThan";
/// Registered name of [`Compare::less_than`].
pub const LESS_THAN: &str = "lessThan";
/// Registered name of [`IsEmail`].
pub const IS_EMAIL: &str = "isEmail";

/// Registers the built-in rules, measuring strings with `mode`.
///
/// Existing rules with the same names are replaced.
pub fn install(registry: &mut RuleRegistry, mode: LengthMode) {
    registry
        .insert(NOT_EMPTY, NotEmpty::new(mode))
        .insert(GREATER_THAN, Compare::greater_than(mode))
        .insert(LESS_THAN, Compare::less_than(mode))
        .insert(IS_EMAIL, IsEmail);
}
