//! MetaGraph — the schema of a heterogeneous network.
//!
//! Holds every metanode and metaedge and resolves the abbreviations used
//! to name them. Metapath abbreviations alternate uppercase metanode
//! abbreviations with metaedge kind abbreviations, e.g. `GiGaD` is
//! `Gene -interacts- Gene -associates- Disease`. A directed kind carries
//! `>` after it (forward) or `<` before it (backward): `Gr>G`, `G<rG`.

use hashbrown::HashMap;
use serde::Serialize;

use super::{Direction, MetaEdge, MetaNode, MetaPath};
use crate::{Error, Result};

/// Registry of metanodes and metaedges.
///
/// Only `add_metanode` / `add_metaedge` keep the lookup maps in step, so
/// the registry serializes but does not deserialize.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetaGraph {
    /// name → metanode
    metanodes: HashMap<String, MetaNode>,
    /// abbrev → metanode name
    metanode_abbrevs: HashMap<String, String>,
    /// metaedge abbrev → metaedge (inverses included)
    metaedges: HashMap<String, MetaEdge>,
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    MetaNode(&'a str),
    Kind(&'a str),
}

impl MetaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a metanode.
    pub fn add_metanode(&mut self, name: &str, abbrev: &str) -> Result<MetaNode> {
        if !MetaNode::is_valid_abbrev(abbrev) {
            return Err(Error::InvalidAbbreviation(format!(
                "metanode abbreviation '{abbrev}' must be uppercase ASCII"
            )));
        }
        if self.metanodes.contains_key(name) {
            return Err(Error::ConstraintViolation(format!("metanode '{name}' already exists")));
        }
        if let Some(existing) = self.metanode_abbrevs.get(abbrev) {
            return Err(Error::ConstraintViolation(format!(
                "abbreviation '{abbrev}' already used by metanode '{existing}'"
            )));
        }
        let metanode = MetaNode::new(name, abbrev);
        self.metanode_abbrevs.insert(abbrev.to_string(), name.to_string());
        self.metanodes.insert(name.to_string(), metanode.clone());
        Ok(metanode)
    }

    /// Register a metaedge between two existing metanodes, along with its
    /// inverse. Returns the metaedge in the requested orientation.
    pub fn add_metaedge(
        &mut self,
        source: &str,
        target: &str,
        kind: &str,
        kind_abbrev: &str,
        direction: Direction,
    ) -> Result<MetaEdge> {
        if !MetaEdge::is_valid_kind_abbrev(kind_abbrev) {
            return Err(Error::InvalidAbbreviation(format!(
                "kind abbreviation '{kind_abbrev}' must be lowercase ASCII or digits"
            )));
        }
        let source = self.metanode(source)?.clone();
        let target = self.metanode(target)?.clone();
        let metaedge = MetaEdge::new(source, target, kind, kind_abbrev, direction);
        let inverse = metaedge.inverse();

        for edge in [&metaedge, &inverse] {
            if self.metaedges.contains_key(&edge.abbrev()) {
                return Err(Error::ConstraintViolation(format!(
                    "metaedge '{}' already exists",
                    edge.abbrev()
                )));
            }
        }
        self.metaedges.insert(inverse.abbrev(), inverse);
        self.metaedges.insert(metaedge.abbrev(), metaedge.clone());
        Ok(metaedge)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Resolve a metanode by name.
    pub fn metanode(&self, name: &str) -> Result<&MetaNode> {
        self.metanodes
            .get(name)
            .ok_or_else(|| Error::UnknownNodeType(name.to_string()))
    }

    /// Resolve a metanode by abbreviation.
    pub fn metanode_by_abbrev(&self, abbrev: &str) -> Result<&MetaNode> {
        self.metanode_abbrevs
            .get(abbrev)
            .and_then(|name| self.metanodes.get(name))
            .ok_or_else(|| Error::UnknownNodeType(abbrev.to_string()))
    }

    pub fn contains_metanode(&self, metanode: &MetaNode) -> bool {
        self.metanodes.get(&metanode.name) == Some(metanode)
    }

    pub fn contains_metaedge(&self, metaedge: &MetaEdge) -> bool {
        self.metaedges.get(&metaedge.abbrev()) == Some(metaedge)
    }

    /// Resolve a single metaedge by its exact abbreviation.
    pub fn metaedge(&self, abbrev: &str) -> Result<&MetaEdge> {
        self.metaedges
            .get(abbrev)
            .ok_or_else(|| Error::UnknownEdgeType(abbrev.to_string()))
    }

    /// Find the metaedge joining two metanodes (by name) with the given kind
    /// and direction.
    pub fn find_metaedge(
        &self,
        source: &str,
        target: &str,
        kind: &str,
        direction: Direction,
    ) -> Result<&MetaEdge> {
        self.metaedges
            .values()
            .find(|e| {
                e.source.name == source
                    && e.target.name == target
                    && e.kind == kind
                    && e.direction == direction
            })
            .ok_or_else(|| {
                Error::UnknownEdgeType(format!("{source} -[{kind}, {direction:?}]- {target}"))
            })
    }

    /// All metanodes, sorted.
    pub fn metanodes(&self) -> Vec<&MetaNode> {
        let mut out: Vec<&MetaNode> = self.metanodes.values().collect();
        out.sort();
        out
    }

    /// All metaedges including inverses, sorted.
    pub fn metaedges(&self) -> Vec<&MetaEdge> {
        let mut out: Vec<&MetaEdge> = self.metaedges.values().collect();
        out.sort();
        out
    }

    // ========================================================================
    // Abbreviation parsing
    // ========================================================================

    /// Resolve a metapath abbreviation such as `GiGaD`.
    pub fn metapath_from_abbrev(&self, abbrev: &str) -> Result<MetaPath> {
        let tokens = tokenize(abbrev)?;
        if tokens.len() < 3 || tokens.len() % 2 == 0 {
            return Err(Error::MalformedMetapath(format!(
                "'{abbrev}' must alternate metanode and metaedge abbreviations"
            )));
        }

        let mut edges = Vec::with_capacity(tokens.len() / 2);
        for step in tokens.windows(3).step_by(2) {
            let (Token::MetaNode(src), Token::Kind(kind), Token::MetaNode(tgt)) =
                (&step[0], &step[1], &step[2])
            else {
                return Err(Error::MalformedMetapath(format!(
                    "'{abbrev}' must alternate metanode and metaedge abbreviations"
                )));
            };
            let edge_abbrev = format!("{src}{kind}{tgt}");
            edges.push(self.metaedge(&edge_abbrev)?.clone());
        }
        MetaPath::new(edges)
    }
}

/// Split an abbreviation into alternating metanode / kind runs.
fn tokenize(abbrev: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut upper: Option<bool> = None;

    for (i, c) in abbrev.char_indices() {
        let is_upper = if c.is_ascii_uppercase() {
            true
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '<' || c == '>' {
            false
        } else {
            return Err(Error::InvalidAbbreviation(format!(
                "unexpected character '{c}' in '{abbrev}'"
            )));
        };
        if let Some(prev) = upper {
            if prev != is_upper {
                tokens.push(make_token(&abbrev[start..i], prev));
                start = i;
            }
        }
        upper = Some(is_upper);
    }
    if let Some(prev) = upper {
        tokens.push(make_token(&abbrev[start..], prev));
    }
    Ok(tokens)
}

fn make_token(run: &str, upper: bool) -> Token<'_> {
    if upper { Token::MetaNode(run) } else { Token::Kind(run) }
}
