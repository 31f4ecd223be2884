//! Error types for enum lookups, interpretation, and registration.
//!
//! Every failure aborts the single conversion that hit it. Nothing here
//! retries or substitutes a default; callers propagate with `?`.

use std::fmt;

use vmap_value::ValueTag;

/// Key that a failed lookup was searching for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupKey {
    Name(String),
    /// Underlying integer value, rendered as text.
    Value(String),
    Index(i32),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Name(name) => write!(f, "name `{name}`"),
            LookupKey::Value(value) => write!(f, "value {value}"),
            LookupKey::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// Failure of a lookup or conversion on a registered enum type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
    /// A lookup by name, underlying value, or index matched no entry.
    #[error("enum `{qualifier}`: no entry with {key}")]
    NotFound { qualifier: String, key: LookupKey },

    /// A generic value carried a tag other than the one the interpreter reads.
    #[error("enum `{qualifier}`: interpretation must be {expected}, found {found}")]
    TypeMismatch {
        qualifier: String,
        expected: ValueTag,
        found: ValueTag,
    },

    /// An object value held something other than this enum type.
    #[error("enum `{qualifier}`: object of type `{found}` is not this enum")]
    ObjectMismatch { qualifier: String, found: String },

    /// The registry body for this type could not be built.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

impl EnumError {
    pub(crate) fn not_found(qualifier: &str, key: LookupKey) -> Self {
        tracing::trace!(qualifier, %key, "enum lookup miss");
        EnumError::NotFound {
            qualifier: qualifier.to_owned(),
            key,
        }
    }

    pub(crate) fn type_mismatch(qualifier: &str, expected: ValueTag, found: ValueTag) -> Self {
        EnumError::TypeMismatch {
            qualifier: qualifier.to_owned(),
            expected,
            found,
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, EnumError::NotFound { .. })
    }

    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, EnumError::TypeMismatch { .. })
    }
}

/// Rejected declaration of an enum member.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("enum `{qualifier}`: duplicate name `{name}`")]
    DuplicateName { qualifier: String, name: String },

    #[error("enum `{qualifier}`: `{name}` reuses underlying value {value} of `{existing}`")]
    DuplicateValue {
        qualifier: String,
        name: String,
        existing: String,
        value: String,
    },

    /// Declared index differs from the entry's position.
    #[error("enum `{qualifier}`: `{name}` declared at index {found}, expected {expected}")]
    IndexOutOfOrder {
        qualifier: String,
        name: String,
        expected: i32,
        found: i32,
    },

    #[error("enum `{qualifier}`: entry count exceeds i32::MAX")]
    TooManyEntries { qualifier: String },
}
