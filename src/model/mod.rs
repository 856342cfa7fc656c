//! # Heterogeneous Network Model
//!
//! Clean DTOs that describe a typed network: the metagraph (node types,
//! edge types, metapaths) and the nodes that populate it.
//! These types cross every boundary: backend ↔ diffusion ↔ export ↔ user.
//!
//! Design rule: NO matrices, NO locks here.
//! This module is pure data — no I/O, no state.

pub mod metanode;
pub mod metaedge;
pub mod metapath;
pub mod metagraph;
pub mod node;
pub mod property_map;
pub mod refs;

pub use metanode::MetaNode;
pub use metaedge::{MetaEdge, Direction};
pub use metapath::MetaPath;
pub use metagraph::MetaGraph;
pub use node::{Node, NodeId, Identifier};
pub use property_map::PropertyMap;
pub use refs::{MetaNodeRef, MetaEdgeRef, MetaPathRef};
