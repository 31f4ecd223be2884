//! Process-wide class identifiers.
//!
//! A `ClassId` names a family of type descriptors (for example "every enum
//! descriptor") so a generic dispatcher can recognize the family without
//! knowing the concrete type. Ids are assigned sequentially on registration.

use std::fmt;
use std::sync::LazyLock;

use parking_lot::RwLock;

/// Names of all registered classes, indexed by id.
static CLASS_NAMES: LazyLock<RwLock<Vec<&'static str>>> = LazyLock::new(|| RwLock::new(Vec::new()));

/// Identifier shared by every type descriptor of one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassId {
    id: usize,
    name: &'static str,
}

impl ClassId {
    /// Register a new class and return its identifier.
    ///
    /// Every call yields a fresh id, even for a name seen before. Callers keep
    /// the result in a `static` so each class is registered once.
    pub fn register(name: &'static str) -> Self {
        let mut names = CLASS_NAMES.write();
        let id = names.len();
        names.push(name);
        ClassId { id, name }
    }

    /// Numeric id, unique within the process.
    #[inline]
    pub fn id(self) -> usize {
        self.id
    }

    /// Human-readable class name.
    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Number of classes registered so far.
    pub fn count() -> usize {
        CLASS_NAMES.read().len()
    }

    /// Look up the name registered for `id`.
    pub fn name_of(id: usize) -> Option<&'static str> {
        CLASS_NAMES.read().get(id).copied()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}
