//! The diffusion engine: chained, normalized matrix-vector products along
//! a metapath.

use std::borrow::Borrow;

use ndarray::Array1;
use tracing::debug;

use crate::config::DiffusionConfig;
use crate::hetnet::HetnetBackend;
use crate::model::{MetaPath, MetaPathRef, NodeId};
use crate::{Error, Result};
use super::adjacency::adjacency_matrix;
use super::{dual_normalize, node_positions, DiffusionScores};

/// Resolve and validate a metapath before any matrix work.
pub fn resolve_metapath<H>(graph: &H, metapath: MetaPathRef<'_>) -> Result<MetaPath>
where
    H: HetnetBackend + ?Sized,
{
    match metapath {
        MetaPathRef::Resolved(m) => Ok(m.clone()),
        MetaPathRef::Edges(edges) => MetaPath::new(edges.iter().cloned()),
        MetaPathRef::Abbrev(abbrev) => graph.metapath_from_abbrev(abbrev),
    }
}

/// Diffuse `source_weights` along `metapath`.
///
/// `source_weights` maps nodes of the metapath's source metanode to a
/// weight; nodes left out weigh 0 and a repeated node keeps its last
/// weight. A key that is not a node of the source metanode fails with
/// `UnknownNode`.
///
/// Each metaedge's adjacency matrix is normalized with the same
/// `config.row_damping` / `config.column_damping` before it multiplies
/// the running score vector.
pub fn diffuse_along_metapath<'a, H, I, K, W>(
    graph: &H,
    metapath: impl Into<MetaPathRef<'a>>,
    source_weights: I,
    config: &DiffusionConfig,
) -> Result<DiffusionScores>
where
    H: HetnetBackend + ?Sized,
    I: IntoIterator<Item = (K, W)>,
    K: Borrow<NodeId>,
    W: Borrow<f64>,
{
    let metapath = resolve_metapath(graph, metapath.into())?;

    // Initialize node weights
    let source_positions = node_positions(graph, metapath.source())?;
    let mut scores = Array1::<f64>::zeros(source_positions.len());
    let mut weighted = 0usize;
    for (node, weight) in source_weights {
        let node = node.borrow();
        let i = source_positions.position(node).ok_or_else(|| {
            Error::UnknownNode(format!("{node} is not a {} node", metapath.source()))
        })?;
        scores[i] = *weight.borrow();
        weighted += 1;
    }

    debug!(
        metapath = %metapath,
        sources = weighted,
        row_damping = config.row_damping,
        column_damping = config.column_damping,
        "diffusing along metapath"
    );

    for (step, metaedge) in metapath.iter().enumerate() {
        let adjacency = adjacency_matrix(graph, metaedge)?;
        debug!(
            step,
            metaedge = %metaedge,
            rows = adjacency.nrows(),
            columns = adjacency.ncols(),
            edges = adjacency.iter().filter(|&&x| x != 0.0).count(),
            "built adjacency matrix"
        );
        if adjacency.ncols() != scores.len() {
            return Err(Error::ShapeMismatch {
                metaedge: metaedge.abbrev(),
                expected: scores.len(),
                got: adjacency.ncols(),
            });
        }

        let adjacency = dual_normalize(adjacency, config.row_damping, config.column_damping);
        scores = adjacency.dot(&scores);
    }

    let target_positions = node_positions(graph, metapath.target())?;
    let entries = target_positions.into_nodes().into_iter().zip(scores.iter().copied()).collect();
    Ok(DiffusionScores::new(entries))
}
