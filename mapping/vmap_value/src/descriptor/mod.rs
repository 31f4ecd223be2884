//! Type descriptors.
//!
//! A `TypeDescriptor` is the metadata record a generic codec consults for a
//! type it does not know at compile time: which class the type belongs to,
//! its qualifier, how to allocate a fresh instance, and an opaque dispatcher
//! that the class's own crate knows how to interpret.
//!
//! Descriptors are built once and then shared as `&'static` references.

use std::any::Any;
use std::fmt;

use crate::{ClassId, Value};

/// Allocates a default-initialized instance of the described type.
///
/// The descriptor passes itself in, so the new object can point back at it.
pub type Factory = fn(&'static TypeDescriptor) -> Value;

/// Opaque, class-specific dispatcher.
///
/// The generic layer only stores and forwards it; the crate that owns the
/// class downcasts it back to its own dispatcher type.
pub struct DispatcherHandle(Box<dyn Any + Send + Sync>);

impl DispatcherHandle {
    pub fn new<D: Any + Send + Sync>(dispatcher: D) -> Self {
        DispatcherHandle(Box::new(dispatcher))
    }

    #[inline]
    pub fn downcast_ref<D: Any>(&self) -> Option<&D> {
        self.0.downcast_ref::<D>()
    }
}

impl fmt::Debug for DispatcherHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DispatcherHandle(..)")
    }
}

/// Metadata record describing one concrete type to the generic framework.
#[derive(Debug)]
pub struct TypeDescriptor {
    class_id: ClassId,
    qualifier: Option<String>,
    factory: Option<Factory>,
    dispatcher: Option<DispatcherHandle>,
}

impl TypeDescriptor {
    /// Create a descriptor with only a class id.
    pub fn new(class_id: ClassId) -> Self {
        TypeDescriptor {
            class_id,
            qualifier: None,
            factory: None,
            dispatcher: None,
        }
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    #[must_use]
    pub fn with_factory(mut self, factory: Factory) -> Self {
        self.factory = Some(factory);
        self
    }

    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: DispatcherHandle) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    #[inline]
    pub fn class_id(&self) -> ClassId {
        self.class_id
    }

    /// Qualifier distinguishing this type within its class.
    #[inline]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    #[inline]
    pub fn factory(&self) -> Option<Factory> {
        self.factory
    }

    #[inline]
    pub fn dispatcher(&self) -> Option<&DispatcherHandle> {
        self.dispatcher.as_ref()
    }

    /// Allocate a fresh instance through the factory, if there is one.
    pub fn create_instance(&'static self) -> Option<Value> {
        self.factory.map(|factory| factory(self))
    }
}
