//! # hetnet-diffusion — Metapath Diffusion over Typed Networks
//!
//! Propagates weights across a heterogeneous network along a metapath
//! (a chain of edge types), with degree damping that controls how much
//! high-degree nodes dilute what flows through them.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `HetnetBackend` is the contract between the diffusion
//!    core and whatever stores the network
//! 2. **Clean DTOs**: `MetaNode`, `MetaEdge`, `MetaPath`, `NodeId` cross all
//!    boundaries
//! 3. **Nothing cached**: positions and matrices are rebuilt per call and
//!    dropped after the multiplication that consumes them
//! 4. **Explicit ordering**: results come back in position order, never in
//!    hash order
//!
//! ## Quick Start
//!
//! ```rust
//! use hetnet_diffusion::{Hetnet, Direction, DiffusionConfig, PropertyMap};
//!
//! # fn example() -> hetnet_diffusion::Result<()> {
//! let hetnet = Hetnet::open_memory();
//! let net = hetnet.backend();
//! net.add_metanode("Gene", "G")?;
//! net.add_metanode("Disease", "D")?;
//! net.add_metaedge("Gene", "Disease", "associates", "a", Direction::Both)?;
//!
//! let tp53 = net.add_node("Gene", "TP53", "TP53", PropertyMap::new())?;
//! let cancer = net.add_node("Disease", "DOID:162", "cancer", PropertyMap::new())?;
//! net.add_edge(&tp53, &cancer, "associates", Direction::Both)?;
//!
//! let scores = hetnet.diffuse("GaD", [(tp53, 1.0)], &DiffusionConfig::default())?;
//! assert_eq!(scores.get(&cancer), Some(1.0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Backends
//!
//! | Backend | Description |
//! |---------|-------------|
//! | `MemoryHetnet` | In-memory network for testing/embedding |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod hetnet;
pub mod diffusion;
pub mod config;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    MetaNode, MetaEdge, MetaPath, MetaGraph, Direction,
    Node, NodeId, Identifier, PropertyMap,
    MetaNodeRef, MetaEdgeRef, MetaPathRef,
};

// ============================================================================
// Re-exports: Backend, config, diffusion
// ============================================================================

pub use hetnet::{HetnetBackend, MemoryHetnet};
pub use config::{DiffusionConfig, AbbrevPolicy};
pub use diffusion::{
    DiffusionScores, NodePositions,
    diffuse_along_metapath, dual_normalize, metaedge_to_adjacency_matrix, node_positions,
};

use std::borrow::Borrow;

use ndarray::Array2;

// ============================================================================
// Top-level Hetnet handle
// ============================================================================

/// The primary entry point. A `Hetnet` wraps a backend and runs
/// diffusions against it.
pub struct Hetnet<B: HetnetBackend> {
    backend: B,
}

impl<B: HetnetBackend> Hetnet<B> {
    /// Create a Hetnet with the given backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Diffuse `source_weights` along `metapath`.
    pub fn diffuse<'a, I, K, W>(
        &self,
        metapath: impl Into<MetaPathRef<'a>>,
        source_weights: I,
        config: &DiffusionConfig,
    ) -> Result<DiffusionScores>
    where
        I: IntoIterator<Item = (K, W)>,
        K: Borrow<NodeId>,
        W: Borrow<f64>,
    {
        diffusion::diffuse_along_metapath(&self.backend, metapath, source_weights, config)
    }

    /// Matrix positions of the nodes of `metanode`.
    pub fn positions<'a>(&self, metanode: impl Into<MetaNodeRef<'a>>) -> Result<NodePositions> {
        diffusion::node_positions(&self.backend, metanode)
    }

    /// Unnormalized 0/1 adjacency matrix of `metaedge`. An abbreviation is
    /// resolved under `config.metaedge_abbrev`.
    pub fn adjacency<'a>(
        &self,
        metaedge: impl Into<MetaEdgeRef<'a>>,
        config: &DiffusionConfig,
    ) -> Result<Array2<f64>> {
        diffusion::metaedge_to_adjacency_matrix(&self.backend, metaedge, config.metaedge_abbrev)
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// In-memory network for testing and embedding.
impl Hetnet<MemoryHetnet> {
    pub fn open_memory() -> Self {
        Self::with_backend(MemoryHetnet::new())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("Unknown edge type: {0}")]
    UnknownEdgeType(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Malformed metapath: {0}")]
    MalformedMetapath(String),

    #[error("Invalid abbreviation: {0}")]
    InvalidAbbreviation(String),

    #[error("Adjacency matrix for {metaedge} has {got} columns, expected {expected}")]
    ShapeMismatch { metaedge: String, expected: usize, got: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
