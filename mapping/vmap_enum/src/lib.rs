//! Runtime reflection and interpretation for enum types.
//!
//! Generic codecs handle enums without compile-time knowledge of each
//! concrete type by going through three pieces:
//!
//! - `EnumRegistry<T>`: per-type member metadata, looked up by name,
//!   underlying value, or declaration index
//! - `Interpreter<T>` strategies (`AsString`, `AsInteger`): convert between
//!   `T` and a generic `Value`
//! - enum `TypeDescriptor`s: a shared class id, the type's qualifier, a
//!   default-instance factory, and an `EnumDispatcher` for type-erased
//!   conversions
//!
//! # Architecture
//!
//! ```text
//! declare_enum! / EnumRegistry::new(declare)
//!     └── EnumRegistry<T> (OnceLock, built on first access)
//!             └── Interpreter<T> (AsString<N> | AsInteger<N>)
//!                     └── descriptor::<T, I>() (cached per (T, I))
//!                             └── EnumDispatcher (type-erased)
//! ```
//!
//! Registration runs exactly once per type, before any lookup observes the
//! registry. After that everything is immutable and shared freely across
//! threads.

mod declare;
mod descriptor;
mod error;
mod interpreter;
mod registry;
mod underlying;
mod wrapper;

#[cfg(test)]
mod test_helpers;

pub use descriptor::{
    descriptor, enum_dispatcher, is_enum_descriptor, EnumDispatcher, ENUM_CLASS_ID,
};
pub use error::{EnumError, LookupKey, RegistrationError};
pub use interpreter::{AsInteger, AsString, InterpretationKind, Interpreter};
pub use registry::{DeclareFn, EnumInfo, EnumInfoBuilder, EnumRegistry, EnumType, EnumValueEntry};
pub use underlying::Underlying;
pub use wrapper::{Enum, EnumAsInteger, EnumAsString, NotNull};
