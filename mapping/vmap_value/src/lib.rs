//! Boundary types for the vmap mapping layer.
//!
//! This crate holds the pieces every mapping component agrees on:
//! - `Value`: the generic tagged value that carries type-erased payloads
//! - `ValueTag`: the runtime tag used to check a value's primitive kind
//! - `ClassId`: process-wide identifiers for families of types
//! - `TypeDescriptor`: class id, qualifier, factory, and dispatcher handle
//!
//! Nothing here knows about concrete wire formats. Codecs read and write
//! `Value`s and route through `TypeDescriptor`s.

mod class_id;
mod descriptor;
mod value;

pub use class_id::ClassId;
pub use descriptor::{DispatcherHandle, Factory, TypeDescriptor};
pub use value::{ObjectValue, Value, ValueTag};
