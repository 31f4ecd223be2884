//! Type descriptors for enum types.
//!
//! Every enum descriptor shares `ENUM_CLASS_ID`, so a generic codec can tell
//! "this is some enum" from the class id alone. The descriptor's dispatcher
//! then performs conversions without the codec knowing `T` or the chosen
//! interpreter.
//!
//! Descriptors are built once per `(T, I)` pair and cached for the process
//! lifetime.

use std::any::{type_name, TypeId};
use std::marker::PhantomData;
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;
use vmap_value::{ClassId, DispatcherHandle, TypeDescriptor, Value, ValueTag};

use crate::error::EnumError;
use crate::interpreter::{InterpretationKind, Interpreter};
use crate::registry::{EnumInfo, EnumType};

/// Class shared by all enum descriptors.
pub static ENUM_CLASS_ID: LazyLock<ClassId> = LazyLock::new(|| ClassId::register("vmap::Enum"));

/// Cached descriptors, keyed by `TypeId::of::<(T, I)>()`.
static DESCRIPTORS: LazyLock<RwLock<FxHashMap<TypeId, &'static TypeDescriptor>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Type-erased conversions for one enum descriptor.
///
/// Object values passed in or returned hold the native enum value. Null
/// passes through both directions unchanged; rejecting it is up to the
/// caller, guided by `is_nullable`.
pub trait EnumDispatcher: Send + Sync {
    fn qualifier(&self) -> &str;

    fn interpretation_kind(&self) -> InterpretationKind;

    /// Tag of the interpreted values.
    fn interpretation_tag(&self) -> ValueTag;

    fn is_nullable(&self) -> bool;

    /// Legal member names in declaration order.
    fn entry_names(&self) -> Vec<&str>;

    /// Convert an enum object into its interpretation.
    fn to_interpretation(&self, value: &Value) -> Result<Value, EnumError>;

    /// Convert an interpretation back into an enum object.
    fn from_interpretation(&self, value: &Value) -> Result<Value, EnumError>;
}

struct Dispatcher<T: EnumType, I> {
    info: &'static EnumInfo<T>,
    _interpreter: PhantomData<fn() -> I>,
}

impl<T, I> EnumDispatcher for Dispatcher<T, I>
where
    T: EnumType + Default,
    I: Interpreter<T>,
{
    fn qualifier(&self) -> &str {
        self.info.qualifier()
    }

    fn interpretation_kind(&self) -> InterpretationKind {
        <I as Interpreter<T>>::KIND
    }

    fn interpretation_tag(&self) -> ValueTag {
        <I as Interpreter<T>>::interpretation_tag()
    }

    fn is_nullable(&self) -> bool {
        <I as Interpreter<T>>::NULLABLE
    }

    fn entry_names(&self) -> Vec<&str> {
        self.info.names().collect()
    }

    fn to_interpretation(&self, value: &Value) -> Result<Value, EnumError> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Object(obj) => match obj.downcast_ref::<T>() {
                Some(&native) => <I as Interpreter<T>>::to_interpretation(native),
                None => Err(EnumError::ObjectMismatch {
                    qualifier: self.info.qualifier().to_owned(),
                    found: obj.descriptor().qualifier().unwrap_or("<anonymous>").to_owned(),
                }),
            },
            other => Err(EnumError::type_mismatch(
                self.info.qualifier(),
                ValueTag::Object,
                other.tag(),
            )),
        }
    }

    fn from_interpretation(&self, value: &Value) -> Result<Value, EnumError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        let native = <I as Interpreter<T>>::from_interpretation(value)?;
        Ok(Value::object(native, descriptor::<T, I>()?))
    }
}

/// Allocate a default `T` for decoders that fill values in place.
fn create_default<T: EnumType + Default>(descriptor: &'static TypeDescriptor) -> Value {
    Value::object(T::default(), descriptor)
}

fn build_descriptor<T, I>(info: &'static EnumInfo<T>) -> TypeDescriptor
where
    T: EnumType + Default,
    I: Interpreter<T>,
{
    let dispatcher: Box<dyn EnumDispatcher> = Box::new(Dispatcher::<T, I> {
        info,
        _interpreter: PhantomData,
    });
    TypeDescriptor::new(*ENUM_CLASS_ID)
        .with_qualifier(info.qualifier())
        .with_factory(create_default::<T>)
        .with_dispatcher(DispatcherHandle::new(dispatcher))
}

/// The descriptor for enum `T` interpreted by `I`.
///
/// Built on first request and cached; concurrent first callers all receive
/// the same instance.
pub fn descriptor<T, I>() -> Result<&'static TypeDescriptor, EnumError>
where
    T: EnumType + Default,
    I: Interpreter<T>,
{
    let key = TypeId::of::<(T, I)>();
    let cached = DESCRIPTORS.read().get(&key).copied();
    if let Some(desc) = cached {
        return Ok(desc);
    }

    // Build the registry body outside the cache lock.
    let info = T::registry().info()?;

    let mut cache = DESCRIPTORS.write();
    if let Some(desc) = cache.get(&key).copied() {
        return Ok(desc);
    }
    let desc: &'static TypeDescriptor = Box::leak(Box::new(build_descriptor::<T, I>(info)));
    cache.insert(key, desc);
    debug!(
        qualifier = info.qualifier(),
        interpreter = type_name::<I>(),
        "enum descriptor created"
    );
    Ok(desc)
}

/// Check if `descriptor` describes an enum type.
#[inline]
pub fn is_enum_descriptor(descriptor: &TypeDescriptor) -> bool {
    descriptor.class_id() == *ENUM_CLASS_ID
}

/// The enum dispatcher of `descriptor`, if it describes an enum type.
pub fn enum_dispatcher(descriptor: &TypeDescriptor) -> Option<&dyn EnumDispatcher> {
    if !is_enum_descriptor(descriptor) {
        return None;
    }
    descriptor
        .dispatcher()?
        .downcast_ref::<Box<dyn EnumDispatcher>>()
        .map(|dispatcher| &**dispatcher)
}
