//! MetaEdge — an edge type connecting two metanodes.

use serde::{Deserialize, Serialize};
use super::MetaNode;

/// Orientation of a metaedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    /// Undirected.
    Both,
}

impl Direction {
    pub fn inverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Both => Direction::Both,
        }
    }
}

/// An edge type: `source -[kind]-> target`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MetaEdge {
    pub source: MetaNode,
    pub target: MetaNode,
    pub kind: String,
    /// Lowercase abbreviation of `kind` (e.g. `i` for `interacts`).
    pub kind_abbrev: String,
    pub direction: Direction,
}

impl MetaEdge {
    pub fn new(
        source: MetaNode,
        target: MetaNode,
        kind: impl Into<String>,
        kind_abbrev: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            source,
            target,
            kind: kind.into(),
            kind_abbrev: kind_abbrev.into(),
            direction,
        }
    }

    /// The same relationship traversed from the other end.
    pub fn inverse(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            kind: self.kind.clone(),
            kind_abbrev: self.kind_abbrev.clone(),
            direction: self.direction.inverse(),
        }
    }

    /// Abbreviation such as `GiG`, `Gr>G` or `G<rG`.
    pub fn abbrev(&self) -> String {
        let kind = match self.direction {
            Direction::Forward => format!("{}>", self.kind_abbrev),
            Direction::Backward => format!("<{}", self.kind_abbrev),
            Direction::Both => self.kind_abbrev.clone(),
        };
        format!("{}{}{}", self.source.abbrev, kind, self.target.abbrev)
    }

    /// Whether `kind_abbrev` is usable in metapath abbreviations.
    pub fn is_valid_kind_abbrev(kind_abbrev: &str) -> bool {
        !kind_abbrev.is_empty()
            && kind_abbrev.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    }
}

impl std::fmt::Display for MetaEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}
