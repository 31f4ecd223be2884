//! Integer representations backing enum values.

use std::fmt;
use std::hash::Hash;

use vmap_value::{Value, ValueTag};

/// A fixed-width integer that can back an enum.
///
/// Each implementor maps to exactly one `ValueTag`, so an integer
/// interpretation of an `i32`-backed enum only accepts `Value::Int32`.
pub trait Underlying: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Tag of the generic value carrying this integer.
    const TAG: ValueTag;

    fn into_value(self) -> Value;

    /// Extract the integer if `value` carries exactly this type.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_underlying {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Underlying for $ty {
                const TAG: ValueTag = ValueTag::$variant;

                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                #[inline]
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(n) => Some(*n),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_underlying! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_match_values() {
        assert_eq!(<u8 as Underlying>::TAG, 7u8.into_value().tag());
        assert_eq!(<i64 as Underlying>::TAG, (-7i64).into_value().tag());
    }

    #[test]
    fn from_value_requires_exact_width() {
        assert_eq!(i32::from_value(&Value::Int32(3)), Some(3));
        assert_eq!(i32::from_value(&Value::Int64(3)), None);
        assert_eq!(u16::from_value(&Value::string("3")), None);
    }
}
