//! Macros
//!
//! - [`operands!`]: heterogeneous argument list for `Context::check`

/// Builds an array of [`Operand`](crate::foundation::Operand)s from values
/// of different types.
///
/// `check` takes any iterator of values convertible into operands, which is
/// enough when all arguments share a type. Mixed arguments need converting
/// first:
///
/// ```
/// use vouch::{Operand, operands};
///
/// let name = String::from("bob");
/// let args = operands![2, &name, 1.5];
/// assert_eq!(args, [Operand::Int(2), Operand::Str("bob"), Operand::Float(1.5)]);
/// ```
#[macro_export]
macro_rules! operands {
    ($($arg:expr),* $(,)?) => {
        [$($crate::foundation::Operand::from($arg)),*]
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::Operand;

    #[test]
    fn test_mixed_kinds() {
        let tags = vec!["a", "b"];
        let args = operands![0u8, "x", &tags, None::<i32>, true];
        assert_eq!(
            args,
            [
                Operand::Uint(0),
                Operand::Str("x"),
                Operand::Seq(2),
                Operand::Absent,
                Operand::Bool(true),
            ]
        );
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(operands![1, 2,].len(), 2);
    }
}
