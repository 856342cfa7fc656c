//! # Metapath Diffusion
//!
//! Propagates weights from nodes of one metanode to nodes of another by
//! walking a metapath one metaedge at a time:
//!
//! ```text
//! weights (source positions)
//!   → for each metaedge:
//!       adjacency (target × source, 0/1)
//!       → dual_normalize(row_damping, column_damping)
//!       → adjacency · weights
//!   → scores (target positions)
//! ```
//!
//! Every stage rebuilds what it needs from the backend on each call.
//! Nothing is cached, so positions and matrices never outlive a call.

pub mod positions;
pub mod adjacency;
pub mod normalize;
pub mod engine;
pub mod scores;

pub use positions::{NodePositions, node_positions};
pub use adjacency::{metaedge_to_adjacency_matrix, resolve_metaedge};
pub use normalize::{dual_normalize, dual_normalize_in_place};
pub use engine::{diffuse_along_metapath, resolve_metapath};
pub use scores::DiffusionScores;
