//! Name tables resolving identifiers to native functions.

use crate::{stdlib::SCIENTIFIC_FUNCTIONS, values::function::NativeFunction};

type Entries = &'static [(&'static str, &'static NativeFunction)];

/// An immutable set of functions an expression may call.
///
/// Entries are sorted by name for binary search.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    entries: Entries,
}

impl Environment {
    /// No names resolve.
    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    /// `sin`, `cos` and `tan`.
    pub fn scientific() -> Self {
        Self {
            entries: &SCIENTIFIC_FUNCTIONS,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&'static NativeFunction> {
        let entries: Entries = self.entries;
        entries
            .binary_search_by(|(probe, _)| (*probe).cmp(name))
            .ok()
            .map(|index| entries[index].1)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let entries: Entries = self.entries;
        entries.iter().map(|(name, _)| *name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
