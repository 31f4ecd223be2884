//! Per-type registry of enum members.
//!
//! Each enum type owns one `static EnumRegistry<T>`. The registry body
//! (`EnumInfo<T>`) is built exactly once, on first access, by the type's
//! declaration function, and is read-only from then on.
//!
//! # Design
//!
//! - Entries live once, in declaration order, in `by_index`
//! - `by_name` and `by_underlying` store positions into `by_index`, so the
//!   three views can never disagree
//! - Duplicate names, duplicate values, and out-of-order indices are
//!   rejected while building; nothing is overwritten

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::{EnumError, LookupKey, RegistrationError};
use crate::underlying::Underlying;

/// An enum type whose members are described by an `EnumRegistry`.
///
/// Usually implemented through `declare_enum!`.
pub trait EnumType: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Integer representation backing each member.
    type Underlying: Underlying;

    fn to_underlying(self) -> Self::Underlying;

    /// The process-wide registry for this type.
    fn registry() -> &'static EnumRegistry<Self>;
}

/// One declared member of an enum type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumValueEntry<T> {
    /// The native value.
    pub value: T,

    /// Declaration position.
    pub index: i32,

    /// Name used by string interpretations.
    pub name: String,
}

/// Registry body for one enum type.
#[derive(Clone, Debug)]
pub struct EnumInfo<T: EnumType> {
    name_qualifier: String,
    by_name: FxHashMap<String, usize>,
    by_underlying: FxHashMap<T::Underlying, usize>,
    by_index: Vec<EnumValueEntry<T>>,
}

impl<T: EnumType> EnumInfo<T> {
    /// Unique name of the enum type.
    #[inline]
    pub fn qualifier(&self) -> &str {
        &self.name_qualifier
    }

    pub fn lookup_by_name(&self, name: &str) -> Result<&EnumValueEntry<T>, EnumError> {
        self.by_name
            .get(name)
            .map(|&pos| &self.by_index[pos])
            .ok_or_else(|| EnumError::not_found(&self.name_qualifier, LookupKey::Name(name.to_owned())))
    }

    pub fn lookup_by_underlying_value(
        &self,
        raw: T::Underlying,
    ) -> Result<&EnumValueEntry<T>, EnumError> {
        self.by_underlying
            .get(&raw)
            .map(|&pos| &self.by_index[pos])
            .ok_or_else(|| {
                EnumError::not_found(&self.name_qualifier, LookupKey::Value(raw.to_string()))
            })
    }

    #[inline]
    pub fn lookup_by_value(&self, value: T) -> Result<&EnumValueEntry<T>, EnumError> {
        self.lookup_by_underlying_value(value.to_underlying())
    }

    /// Look up an entry by declaration index.
    ///
    /// Negative and past-the-end indices are `NotFound`.
    pub fn lookup_by_index(&self, index: i32) -> Result<&EnumValueEntry<T>, EnumError> {
        usize::try_from(index)
            .ok()
            .and_then(|pos| self.by_index.get(pos))
            .ok_or_else(|| EnumError::not_found(&self.name_qualifier, LookupKey::Index(index)))
    }

    /// All entries in declaration order.
    #[inline]
    pub fn entries(&self) -> &[EnumValueEntry<T>] {
        &self.by_index
    }

    /// Member names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_index.iter().map(|entry| entry.name.as_str())
    }

    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }
}

/// Collects entries for an `EnumInfo` and validates them as they arrive.
#[derive(Debug)]
pub struct EnumInfoBuilder<T: EnumType> {
    info: EnumInfo<T>,
}

impl<T: EnumType> EnumInfoBuilder<T> {
    pub fn new(qualifier: impl Into<String>) -> Self {
        EnumInfoBuilder {
            info: EnumInfo {
                name_qualifier: qualifier.into(),
                by_name: FxHashMap::default(),
                by_underlying: FxHashMap::default(),
                by_index: Vec::new(),
            },
        }
    }

    /// Register one member.
    ///
    /// `index` must equal the number of members registered before it.
    pub fn register_entry(
        &mut self,
        value: T,
        index: i32,
        name: impl Into<String>,
    ) -> Result<&mut Self, RegistrationError> {
        let name = name.into();
        let info = &mut self.info;
        let qualifier = info.name_qualifier.as_str();

        let pos = info.by_index.len();
        let expected = i32::try_from(pos)
            .map_err(|_| RegistrationError::TooManyEntries { qualifier: qualifier.to_owned() })?;
        if index != expected {
            return Err(RegistrationError::IndexOutOfOrder {
                qualifier: qualifier.to_owned(),
                name,
                expected,
                found: index,
            });
        }

        if info.by_name.contains_key(&name) {
            return Err(RegistrationError::DuplicateName {
                qualifier: qualifier.to_owned(),
                name,
            });
        }

        let raw = value.to_underlying();
        if let Some(&existing) = info.by_underlying.get(&raw) {
            return Err(RegistrationError::DuplicateValue {
                qualifier: qualifier.to_owned(),
                name,
                existing: info.by_index[existing].name.clone(),
                value: raw.to_string(),
            });
        }

        info.by_name.insert(name.clone(), pos);
        info.by_underlying.insert(raw, pos);
        info.by_index.push(EnumValueEntry { value, index, name });
        Ok(self)
    }

    /// Register the next member at the next free index.
    pub fn push(&mut self, value: T, name: impl Into<String>) -> Result<&mut Self, RegistrationError> {
        let index = i32::try_from(self.info.by_index.len()).map_err(|_| {
            RegistrationError::TooManyEntries {
                qualifier: self.info.name_qualifier.clone(),
            }
        })?;
        self.register_entry(value, index, name)
    }

    pub fn build(self) -> EnumInfo<T> {
        self.info
    }
}

/// Declaration function that produces the registry body for one type.
pub type DeclareFn<T> = fn() -> Result<EnumInfo<T>, RegistrationError>;

/// Exactly-once, lazily built registry for one enum type.
///
/// Meant to live in a `static`:
///
/// ```text
/// static REGISTRY: EnumRegistry<Color> = EnumRegistry::new(declare_color);
/// ```
///
/// The declaration function runs inside `OnceLock::get_or_init`, so
/// concurrent first callers never build the body twice and every lookup
/// observes a fully registered type.
pub struct EnumRegistry<T: EnumType> {
    cell: OnceLock<Result<EnumInfo<T>, RegistrationError>>,
    declare: DeclareFn<T>,
}

impl<T: EnumType> EnumRegistry<T> {
    pub const fn new(declare: DeclareFn<T>) -> Self {
        EnumRegistry {
            cell: OnceLock::new(),
            declare,
        }
    }

    fn init(&self) -> &Result<EnumInfo<T>, RegistrationError> {
        self.cell.get_or_init(|| {
            let result = (self.declare)();
            match &result {
                Ok(info) => debug!(
                    qualifier = info.qualifier(),
                    entries = info.len(),
                    "enum registry built"
                ),
                Err(err) => warn!(%err, "enum registration failed"),
            }
            result
        })
    }

    /// Run the registration phase now.
    ///
    /// Lookups do this implicitly; calling it during startup surfaces a bad
    /// declaration before any conversion runs.
    pub fn ensure_registered(&self) -> Result<(), RegistrationError> {
        self.init()
            .as_ref()
            .map(|_| ())
            .map_err(RegistrationError::clone)
    }

    /// Check if the body has been built successfully.
    pub fn is_registered(&self) -> bool {
        matches!(self.cell.get(), Some(Ok(_)))
    }

    /// The registry body, building it on first access.
    pub fn info(&self) -> Result<&EnumInfo<T>, EnumError> {
        self.init()
            .as_ref()
            .map_err(|err| EnumError::Registration(err.clone()))
    }

    // === Lookup Methods ===

    pub fn lookup_by_name(&self, name: &str) -> Result<&EnumValueEntry<T>, EnumError> {
        self.info()?.lookup_by_name(name)
    }

    pub fn lookup_by_underlying_value(
        &self,
        raw: T::Underlying,
    ) -> Result<&EnumValueEntry<T>, EnumError> {
        self.info()?.lookup_by_underlying_value(raw)
    }

    pub fn lookup_by_value(&self, value: T) -> Result<&EnumValueEntry<T>, EnumError> {
        self.info()?.lookup_by_value(value)
    }

    pub fn lookup_by_index(&self, index: i32) -> Result<&EnumValueEntry<T>, EnumError> {
        self.info()?.lookup_by_index(index)
    }

    pub fn entries(&self) -> Result<&[EnumValueEntry<T>], EnumError> {
        Ok(self.info()?.entries())
    }
}

impl<T: EnumType> fmt::Debug for EnumRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumRegistry")
            .field("registered", &self.is_registered())
            .finish_non_exhaustive()
    }
}
