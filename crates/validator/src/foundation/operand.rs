//! Rule arguments
//!
//! Rules receive their arguments as a slice of [`Operand`]s: a closed set of
//! comparable kinds borrowed from the value under validation. Anything that
//! can be turned into an operand can be passed to `Context::check`.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// OPERAND
// ============================================================================

/// A single argument passed to a rule.
///
/// Collections only carry their element count: that is all the built-in
/// rules ever look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// Signed integer, widened to `i64`.
    Int(i64),
    /// Unsigned integer, widened to `u64`.
    Uint(u64),
    /// Floating point, widened to `f64`.
    Float(f64),
    /// Borrowed string.
    Str(&'a str),
    /// Sequence or set with the given number of elements.
    Seq(usize),
    /// Mapping with the given number of entries.
    Map(usize),
    /// Boolean.
    Bool(bool),
    /// A missing value (`None`, JSON `null`).
    Absent,
}

impl Operand<'_> {
    /// Short name of the operand's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Int(_) => "int",
            Operand::Uint(_) => "uint",
            Operand::Float(_) => "float",
            Operand::Str(_) => "string",
            Operand::Seq(_) => "sequence",
            Operand::Map(_) => "mapping",
            Operand::Bool(_) => "bool",
            Operand::Absent => "absent",
        }
    }

    /// Returns the string if this is a [`Operand::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Operand::Str(s) => Some(*s),
            _ => None,
        }
    }

    /// Reduces the operand to the number a comparison rule works with.
    ///
    /// Strings, sequences and mappings reduce to their length, numbers to
    /// their value. Booleans and absent values have no magnitude.
    pub fn magnitude(&self, mode: LengthMode) -> Option<f64> {
        match *self {
            Operand::Int(v) => Some(v as f64),
            Operand::Uint(v) => Some(v as f64),
            Operand::Float(v) => Some(v),
            Operand::Str(s) => Some(mode.measure(s) as f64),
            Operand::Seq(len) | Operand::Map(len) => Some(len as f64),
            Operand::Bool(_) | Operand::Absent => None,
        }
    }

    /// Length used by emptiness checks.
    ///
    /// Strings are trimmed first. An absent value has length 0. Numbers and
    /// booleans have no length.
    pub fn content_len(&self, mode: LengthMode) -> Option<usize> {
        match *self {
            Operand::Str(s) => Some(mode.measure(s.trim())),
            Operand::Seq(len) | Operand::Map(len) => Some(len),
            Operand::Absent => Some(0),
            Operand::Int(_) | Operand::Uint(_) | Operand::Float(_) | Operand::Bool(_) => None,
        }
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{v}"),
            Operand::Uint(v) => write!(f, "{v}"),
            Operand::Float(v) => write!(f, "{v}"),
            Operand::Str(s) => write!(f, "{s:?}"),
            Operand::Seq(len) => write!(f, "[{len} elements]"),
            Operand::Map(len) => write!(f, "{{{len} entries}}"),
            Operand::Bool(b) => write!(f, "{b}"),
            Operand::Absent => f.write_str("<absent>"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! numeric_operand {
    ($variant:ident($wide:ty): $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Operand<'_> {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn from(value: $ty) -> Self {
                    Operand::$variant(value as $wide)
                }
            }

            impl From<&$ty> for Operand<'_> {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn from(value: &$ty) -> Self {
                    Operand::$variant(*value as $wide)
                }
            }
        )+
    };
}

numeric_operand!(Int(i64): i8, i16, i32, i64, isize);
numeric_operand!(Uint(u64): u8, u16, u32, u64, usize);
numeric_operand!(Float(f64): f32, f64);

impl From<bool> for Operand<'_> {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<&bool> for Operand<'_> {
    fn from(value: &bool) -> Self {
        Operand::Bool(*value)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(value: &'a str) -> Self {
        Operand::Str(value)
    }
}

impl<'a> From<&'a &str> for Operand<'a> {
    fn from(value: &'a &str) -> Self {
        Operand::Str(value)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(value: &'a String) -> Self {
        Operand::Str(value.as_str())
    }
}

impl<'a> From<&'a Cow<'_, str>> for Operand<'a> {
    fn from(value: &'a Cow<'_, str>) -> Self {
        Operand::Str(value.as_ref())
    }
}

impl<T> From<&[T]> for Operand<'_> {
    fn from(value: &[T]) -> Self {
        Operand::Seq(value.len())
    }
}

impl<T, const N: usize> From<&[T; N]> for Operand<'_> {
    fn from(_: &[T; N]) -> Self {
        Operand::Seq(N)
    }
}

impl<T> From<&Vec<T>> for Operand<'_> {
    fn from(value: &Vec<T>) -> Self {
        Operand::Seq(value.len())
    }
}

impl<T> From<&VecDeque<T>> for Operand<'_> {
    fn from(value: &VecDeque<T>) -> Self {
        Operand::Seq(value.len())
    }
}

impl<T, S> From<&HashSet<T, S>> for Operand<'_> {
    fn from(value: &HashSet<T, S>) -> Self {
        Operand::Seq(value.len())
    }
}

impl<T> From<&BTreeSet<T>> for Operand<'_> {
    fn from(value: &BTreeSet<T>) -> Self {
        Operand::Seq(value.len())
    }
}

impl<K, V, S> From<&HashMap<K, V, S>> for Operand<'_> {
    fn from(value: &HashMap<K, V, S>) -> Self {
        Operand::Map(value.len())
    }
}

impl<K, V> From<&BTreeMap<K, V>> for Operand<'_> {
    fn from(value: &BTreeMap<K, V>) -> Self {
        Operand::Map(value.len())
    }
}

impl<'a, T> From<Option<T>> for Operand<'a>
where
    T: Into<Operand<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::Absent, Into::into)
    }
}

impl<'a> From<&Operand<'a>> for Operand<'a> {
    fn from(value: &Operand<'a>) -> Self {
        *value
    }
}

// ============================================================================
// TESTS
// ============================================================================
