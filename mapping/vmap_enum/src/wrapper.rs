//! Nullable enum field wrapper.
//!
//! `Enum<T, I>` is how a declared field carries its interpretation choice:
//! the interpreter `I` is part of the field's type, so it is fixed once per
//! field rather than chosen on every conversion.
//!
//! ```text
//! struct Paint {
//!     color: Enum<Color>,                 // by name, nullable
//!     code: EnumAsInteger<Color>,         // by underlying integer
//!     required: NotNull<Color>,           // by name, never null
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use vmap_value::{TypeDescriptor, Value};

use crate::descriptor::descriptor;
use crate::error::EnumError;
use crate::interpreter::{AsInteger, AsString, Interpreter};
use crate::registry::{EnumType, EnumValueEntry};

/// Enum field interpreted by name.
pub type EnumAsString<T> = Enum<T, AsString<true>>;

/// Enum field interpreted by underlying integer.
pub type EnumAsInteger<T> = Enum<T, AsInteger<true>>;

/// Enum field whose interpreter is declared non-nullable.
pub type NotNull<T, I = AsString<true>> = Enum<T, <I as Interpreter<T>>::NotNull>;

/// A possibly absent enum value with a type-level interpreter.
pub struct Enum<T: EnumType, I: Interpreter<T> = AsString<true>> {
    value: Option<T>,
    _interpreter: PhantomData<fn() -> I>,
}

impl<T: EnumType, I: Interpreter<T>> Enum<T, I> {
    #[inline]
    pub fn new(value: T) -> Self {
        Enum {
            value: Some(value),
            _interpreter: PhantomData,
        }
    }

    #[inline]
    pub fn null() -> Self {
        Enum {
            value: None,
            _interpreter: PhantomData,
        }
    }

    #[inline]
    pub fn value(&self) -> Option<T> {
        self.value
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Whether the declared interpreter permits null.
    #[inline]
    pub fn is_nullable() -> bool {
        <I as Interpreter<T>>::NULLABLE
    }

    /// Convert to the generic representation; null stays null.
    pub fn to_interpretation(&self) -> Result<Value, EnumError> {
        match self.value {
            Some(value) => <I as Interpreter<T>>::to_interpretation(value),
            None => Ok(Value::Null),
        }
    }

    /// Convert from the generic representation; null becomes `Enum::null()`.
    pub fn from_interpretation(value: &Value) -> Result<Self, EnumError> {
        if value.is_null() {
            return Ok(Self::null());
        }
        <I as Interpreter<T>>::from_interpretation(value).map(Self::new)
    }

    // === Registry Access ===

    pub fn entry_by_name(name: &str) -> Result<&'static EnumValueEntry<T>, EnumError> {
        T::registry().lookup_by_name(name)
    }

    pub fn entry_by_value(value: T) -> Result<&'static EnumValueEntry<T>, EnumError> {
        T::registry().lookup_by_value(value)
    }

    pub fn entry_by_underlying_value(
        raw: T::Underlying,
    ) -> Result<&'static EnumValueEntry<T>, EnumError> {
        T::registry().lookup_by_underlying_value(raw)
    }

    pub fn entry_by_index(index: i32) -> Result<&'static EnumValueEntry<T>, EnumError> {
        T::registry().lookup_by_index(index)
    }

    pub fn entries() -> Result<&'static [EnumValueEntry<T>], EnumError> {
        T::registry().entries()
    }
}

impl<T: EnumType + Default, I: Interpreter<T>> Enum<T, I> {
    /// Descriptor for this field's `(T, I)` pair.
    pub fn descriptor() -> Result<&'static TypeDescriptor, EnumError> {
        descriptor::<T, I>()
    }
}

impl<T: EnumType, I: Interpreter<T>> Clone for Enum<T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: EnumType, I: Interpreter<T>> Copy for Enum<T, I> {}

impl<T: EnumType, I: Interpreter<T>> PartialEq for Enum<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: EnumType, I: Interpreter<T>> Eq for Enum<T, I> {}

impl<T: EnumType, I: Interpreter<T>> PartialEq<T> for Enum<T, I> {
    fn eq(&self, other: &T) -> bool {
        self.value == Some(*other)
    }
}

impl<T: EnumType, I: Interpreter<T>> Default for Enum<T, I> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: EnumType, I: Interpreter<T>> From<T> for Enum<T, I> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: EnumType, I: Interpreter<T>> fmt::Debug for Enum<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "Enum({value:?})"),
            None => f.write_str("Enum(null)"),
        }
    }
}
