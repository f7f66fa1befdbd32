//! `serde_json` bridge
//!
//! Lets rules run directly against decoded JSON:
//!
//! ```
//! use serde_json::json;
//! use vouch::Operand;
//!
//! let payload = json!({"name": "bob", "tags": [], "age": 42});
//! assert_eq!(Operand::from(&payload["name"]), Operand::Str("bob"));
//! assert_eq!(Operand::from(&payload["tags"]), Operand::Seq(0));
//! assert_eq!(Operand::from(&payload["age"]), Operand::Uint(42));
//! assert_eq!(Operand::from(&payload["missing"]), Operand::Absent);
//! ```
//!
//! A missing field or `null` becomes [`Operand::Absent`]. Rules that demand
//! a string, such as `isEmail`, treat that as a contract violation and panic.
//! Guard optional fields first: a failing `notEmpty` freezes the context, so
//! the `isEmail` check after it never runs.
//!
//! ```rust,ignore
//! ctx.check("notEmpty", [&body["email"]]).message("email required");
//! ctx.check("isEmail", [&body["email"]]);
//! ```
//!
//! Use `must_err` instead when an absent field should pass.

use serde_json::Value;

use crate::foundation::Operand;

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Operand::Absent,
            Value::Bool(b) => Operand::Bool(*b),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Operand::Uint(u)
                } else if let Some(i) = n.as_i64() {
                    Operand::Int(i)
                } else {
                    n.as_f64().map_or(Operand::Absent, Operand::Float)
                }
            }
            Value::String(s) => Operand::Str(s),
            Value::Array(items) => Operand::Seq(items.len()),
            Value::Object(entries) => Operand::Map(entries.len()),
        }
    }
}
