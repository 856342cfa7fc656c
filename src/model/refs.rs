//! Borrowed references to metagraph objects that may still need resolving.
//!
//! Callers can hand the diffusion core either a resolved object or the
//! name/abbreviation the backend resolves on their behalf.

use super::{MetaEdge, MetaNode, MetaPath};

/// A metanode, or its name.
#[derive(Debug, Clone, Copy)]
pub enum MetaNodeRef<'a> {
    Resolved(&'a MetaNode),
    Name(&'a str),
}

impl<'a> From<&'a MetaNode> for MetaNodeRef<'a> {
    fn from(m: &'a MetaNode) -> Self { MetaNodeRef::Resolved(m) }
}

impl<'a> From<&'a str> for MetaNodeRef<'a> {
    fn from(s: &'a str) -> Self { MetaNodeRef::Name(s) }
}

/// A metaedge, or its abbreviation.
#[derive(Debug, Clone, Copy)]
pub enum MetaEdgeRef<'a> {
    Resolved(&'a MetaEdge),
    Abbrev(&'a str),
}

impl<'a> From<&'a MetaEdge> for MetaEdgeRef<'a> {
    fn from(m: &'a MetaEdge) -> Self { MetaEdgeRef::Resolved(m) }
}

impl<'a> From<&'a str> for MetaEdgeRef<'a> {
    fn from(s: &'a str) -> Self { MetaEdgeRef::Abbrev(s) }
}

/// A metapath, an unvalidated chain of metaedges, or an abbreviation.
#[derive(Debug, Clone, Copy)]
pub enum MetaPathRef<'a> {
    Resolved(&'a MetaPath),
    Edges(&'a [MetaEdge]),
    Abbrev(&'a str),
}

impl<'a> From<&'a MetaPath> for MetaPathRef<'a> {
    fn from(m: &'a MetaPath) -> Self { MetaPathRef::Resolved(m) }
}

impl<'a> From<&'a [MetaEdge]> for MetaPathRef<'a> {
    fn from(e: &'a [MetaEdge]) -> Self { MetaPathRef::Edges(e) }
}

impl<'a> From<&'a Vec<MetaEdge>> for MetaPathRef<'a> {
    fn from(e: &'a Vec<MetaEdge>) -> Self { MetaPathRef::Edges(e.as_slice()) }
}

impl<'a> From<&'a str> for MetaPathRef<'a> {
    fn from(s: &'a str) -> Self { MetaPathRef::Abbrev(s) }
}
