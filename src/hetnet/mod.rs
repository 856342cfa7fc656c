//! # Hetnet Backend Trait
//!
//! This is THE contract between the diffusion core and any typed-network
//! store. The core only reads through it; building and mutating the
//! network is the backend's business.
//!
//! ## Implementations
//!
//! | Backend | Module | Description |
//! |---------|--------|-------------|
//! | `MemoryHetnet` | `memory` | In-memory for testing/embedding |

pub mod memory;

use crate::config::AbbrevPolicy;
use crate::model::*;
use crate::{Error, Result};

pub use memory::MemoryHetnet;

// ============================================================================
// HetnetBackend Trait
// ============================================================================

/// The read contract the diffusion core queries.
///
/// Implementations must be safe to read from several threads at once;
/// the core never caches anything it gets back.
pub trait HetnetBackend: Send + Sync {
    // ========================================================================
    // Metagraph resolution
    // ========================================================================

    /// Resolve a metanode by name.
    fn metanode(&self, name: &str) -> Result<MetaNode>;

    /// Resolve a metapath abbreviation (e.g. `GiGaD`).
    fn metapath_from_abbrev(&self, abbrev: &str) -> Result<MetaPath>;

    /// Resolve a metaedge abbreviation.
    ///
    /// The abbreviation is parsed as a metapath. Under
    /// `AbbrevPolicy::FirstEdge` a multi-step path yields its first
    /// metaedge; under `AbbrevPolicy::SingleEdge` it is rejected.
    fn metaedge_from_abbrev(&self, abbrev: &str, policy: AbbrevPolicy) -> Result<MetaEdge> {
        let metapath = self.metapath_from_abbrev(abbrev)?;
        if policy == AbbrevPolicy::SingleEdge && metapath.len() != 1 {
            return Err(Error::UnknownEdgeType(format!(
                "'{abbrev}' names a {}-step metapath, not a single metaedge",
                metapath.len()
            )));
        }
        Ok(metapath.edges()[0].clone())
    }

    // ========================================================================
    // Nodes and edges
    // ========================================================================

    /// All nodes of a metanode, in no particular order.
    ///
    /// Fails with `UnknownNodeType` if the metanode is not part of this
    /// network's metagraph.
    fn nodes_of(&self, metanode: &MetaNode) -> Result<Vec<NodeId>>;

    /// Targets of the outgoing edges of `node` with type `metaedge`.
    /// Parallel edges appear once per edge.
    fn targets_of(&self, node: &NodeId, metaedge: &MetaEdge) -> Result<Vec<NodeId>>;

    /// Get a node by id. Returns None if not found.
    fn node(&self, id: &NodeId) -> Result<Option<Node>>;

    /// Total number of nodes.
    fn node_count(&self) -> usize;

    /// Total number of edges, each undirected or directed edge counted once.
    fn edge_count(&self) -> usize;
}
