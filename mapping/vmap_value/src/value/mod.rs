//! Generic tagged values.
//!
//! A `Value` is what crosses the boundary between typed code and codecs: a
//! runtime tag plus a type-erased payload. Primitives are stored inline;
//! strings are shared `Arc<str>`; anything else travels as an `ObjectValue`
//! that remembers the descriptor it was created from.
//!
//! # Thread Safety
//!
//! Every payload is `Send + Sync`, so values can be handed across threads
//! without copying.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::TypeDescriptor;

/// Runtime tag of a `Value`.
///
/// Interpreters compare tags before extracting a payload, so a string never
/// gets read as an integer or the other way round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueTag {
    Null,
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Str,
    Object,
}

impl ValueTag {
    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueTag::Null => "null",
            ValueTag::Bool => "bool",
            ValueTag::Int8 => "int8",
            ValueTag::UInt8 => "uint8",
            ValueTag::Int16 => "int16",
            ValueTag::UInt16 => "uint16",
            ValueTag::Int32 => "int32",
            ValueTag::UInt32 => "uint32",
            ValueTag::Int64 => "int64",
            ValueTag::UInt64 => "uint64",
            ValueTag::Float32 => "float32",
            ValueTag::Float64 => "float64",
            ValueTag::Str => "string",
            ValueTag::Object => "object",
        }
    }

    /// Check if this tag denotes one of the fixed-width integer kinds.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            ValueTag::Int8
                | ValueTag::UInt8
                | ValueTag::Int16
                | ValueTag::UInt16
                | ValueTag::Int32
                | ValueTag::UInt32
                | ValueTag::Int64
                | ValueTag::UInt64
        )
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generic tagged value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent value.
    Null,
    Bool(bool),
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    /// Shared, immutable string.
    Str(Arc<str>),
    /// Instance of a type known only through its descriptor.
    Object(ObjectValue),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Arc::from(s.as_ref()))
    }

    /// Create an object value holding `data`, described by `descriptor`.
    #[inline]
    pub fn object<T: Any + Send + Sync>(data: T, descriptor: &'static TypeDescriptor) -> Self {
        Value::Object(ObjectValue::new(data, descriptor))
    }

    /// Runtime tag of this value.
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::Null => ValueTag::Null,
            Value::Bool(_) => ValueTag::Bool,
            Value::Int8(_) => ValueTag::Int8,
            Value::UInt8(_) => ValueTag::UInt8,
            Value::Int16(_) => ValueTag::Int16,
            Value::UInt16(_) => ValueTag::UInt16,
            Value::Int32(_) => ValueTag::Int32,
            Value::UInt32(_) => ValueTag::UInt32,
            Value::Int64(_) => ValueTag::Int64,
            Value::UInt64(_) => ValueTag::UInt64,
            Value::Float32(_) => ValueTag::Float32,
            Value::Float64(_) => ValueTag::Float64,
            Value::Str(_) => ValueTag::Str,
            Value::Object(_) => ValueTag::Object,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string payload, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the object payload, if this is an object.
    #[inline]
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Generates `From<int>` for each fixed-width integer and its variant.
macro_rules! impl_from_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(n: $ty) -> Self {
                    Value::$variant(n)
                }
            }
        )*
    };
}

impl_from_int! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
}

/// Type-erased instance paired with the descriptor that created it.
///
/// Equality is identity: two object values are equal when they share the
/// same allocation.
#[derive(Clone)]
pub struct ObjectValue {
    descriptor: &'static TypeDescriptor,
    data: Arc<dyn Any + Send + Sync>,
}

impl ObjectValue {
    pub fn new<T: Any + Send + Sync>(data: T, descriptor: &'static TypeDescriptor) -> Self {
        ObjectValue {
            descriptor,
            data: Arc::new(data),
        }
    }

    /// Descriptor of the concrete type held by this object.
    #[inline]
    pub fn descriptor(&self) -> &'static TypeDescriptor {
        self.descriptor
    }

    /// Borrow the payload as `T`, if that is what it holds.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.data.downcast_ref::<T>()
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValue")
            .field("class", &self.descriptor.class_id().name())
            .field("qualifier", &self.descriptor.qualifier())
            .finish_non_exhaustive()
    }
}
