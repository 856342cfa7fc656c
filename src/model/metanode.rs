//! MetaNode — a node type in the metagraph.

use serde::{Deserialize, Serialize};

/// A node type (e.g. `Gene`, `Disease`).
///
/// Ordered by name, then abbreviation, so metanodes sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MetaNode {
    pub name: String,
    /// Uppercase ASCII abbreviation used in metapath strings (e.g. `G`, `D`).
    pub abbrev: String,
}

impl MetaNode {
    pub fn new(name: impl Into<String>, abbrev: impl Into<String>) -> Self {
        Self { name: name.into(), abbrev: abbrev.into() }
    }

    /// Whether `abbrev` is usable in metapath abbreviations.
    pub fn is_valid_abbrev(abbrev: &str) -> bool {
        !abbrev.is_empty() && abbrev.chars().all(|c| c.is_ascii_uppercase())
    }
}

impl std::fmt::Display for MetaNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
