//! Interpretation strategies.
//!
//! An interpreter converts a native enum value to and from a generic
//! `Value`. The strategy, and whether the field may be null, are chosen at
//! the type level by picking a marker type:
//!
//! | Marker              | Representation          | Nullable |
//! |---------------------|-------------------------|----------|
//! | `AsString<true>`    | member name (`Str`)     | yes      |
//! | `AsString<false>`   | member name (`Str`)     | no       |
//! | `AsInteger<true>`   | underlying integer      | yes      |
//! | `AsInteger<false>`  | underlying integer      | no       |
//!
//! The nullability flag is carried for the surrounding framework to act on.
//! It never changes how a present value is converted.

use vmap_value::{Value, ValueTag};

use crate::error::EnumError;
use crate::registry::EnumType;
use crate::underlying::Underlying;

/// Which primitive an interpreter produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InterpretationKind {
    String,
    Integer,
}

/// Conversion strategy between `T` and its generic representation.
pub trait Interpreter<T: EnumType>: Send + Sync + 'static {
    /// Whether a field using this interpreter may hold no value.
    const NULLABLE: bool;

    const KIND: InterpretationKind;

    /// The string strategy, nullable.
    type AsString: Interpreter<T>;

    /// The integer strategy, nullable.
    type AsInteger: Interpreter<T>;

    /// This strategy with nullability turned off.
    type NotNull: Interpreter<T>;

    /// Tag of the values this interpreter produces and accepts.
    fn interpretation_tag() -> ValueTag;

    fn to_interpretation(value: T) -> Result<Value, EnumError>;

    fn from_interpretation(value: &Value) -> Result<T, EnumError>;
}

/// Represents a member by its name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AsString<const NULLABLE: bool = true>;

/// Represents a member by its underlying integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AsInteger<const NULLABLE: bool = true>;

impl<T: EnumType, const NULLABLE: bool> Interpreter<T> for AsString<NULLABLE> {
    const NULLABLE: bool = NULLABLE;
    const KIND: InterpretationKind = InterpretationKind::String;

    type AsString = AsString<true>;
    type AsInteger = AsInteger<true>;
    type NotNull = AsString<false>;

    #[inline]
    fn interpretation_tag() -> ValueTag {
        ValueTag::Str
    }

    fn to_interpretation(value: T) -> Result<Value, EnumError> {
        let entry = T::registry().lookup_by_value(value)?;
        Ok(Value::string(&entry.name))
    }

    fn from_interpretation(value: &Value) -> Result<T, EnumError> {
        let registry = T::registry();
        let Some(name) = value.as_str() else {
            let info = registry.info()?;
            return Err(EnumError::type_mismatch(
                info.qualifier(),
                ValueTag::Str,
                value.tag(),
            ));
        };
        Ok(registry.lookup_by_name(name)?.value)
    }
}

impl<T: EnumType, const NULLABLE: bool> Interpreter<T> for AsInteger<NULLABLE> {
    const NULLABLE: bool = NULLABLE;
    const KIND: InterpretationKind = InterpretationKind::Integer;

    type AsString = AsString<true>;
    type AsInteger = AsInteger<true>;
    type NotNull = AsInteger<false>;

    #[inline]
    fn interpretation_tag() -> ValueTag {
        <T::Underlying as Underlying>::TAG
    }

    fn to_interpretation(value: T) -> Result<Value, EnumError> {
        // Unregistered values are rejected even though the integer is at hand.
        T::registry().lookup_by_value(value)?;
        Ok(value.to_underlying().into_value())
    }

    fn from_interpretation(value: &Value) -> Result<T, EnumError> {
        let registry = T::registry();
        let Some(raw) = <T::Underlying as Underlying>::from_value(value) else {
            let info = registry.info()?;
            return Err(EnumError::type_mismatch(
                info.qualifier(),
                <T::Underlying as Underlying>::TAG,
                value.tag(),
            ));
        };
        Ok(registry.lookup_by_underlying_value(raw)?.value)
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test code uses expect for clarity")]
mod tests;
