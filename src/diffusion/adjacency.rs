//! Adjacency matrices for a single metaedge.

use ndarray::Array2;

use crate::config::AbbrevPolicy;
use crate::hetnet::HetnetBackend;
use crate::model::{MetaEdge, MetaEdgeRef};
use crate::{Error, Result};
use super::node_positions;

/// Resolve a metaedge given as an object or an abbreviation.
pub fn resolve_metaedge<H>(graph: &H, metaedge: MetaEdgeRef<'_>, policy: AbbrevPolicy) -> Result<MetaEdge>
where
    H: HetnetBackend + ?Sized,
{
    match metaedge {
        MetaEdgeRef::Resolved(m) => Ok(m.clone()),
        MetaEdgeRef::Abbrev(abbrev) => graph.metaedge_from_abbrev(abbrev, policy),
    }
}

/// Build the 0/1 adjacency matrix of a metaedge.
///
/// Rows are target nodes and columns are source nodes, both in
/// `node_positions` order: entry `(i, j)` is 1 when source `j` has at
/// least one edge of this type to target `i`.
pub fn metaedge_to_adjacency_matrix<'a, H>(
    graph: &H,
    metaedge: impl Into<MetaEdgeRef<'a>>,
    policy: AbbrevPolicy,
) -> Result<Array2<f64>>
where
    H: HetnetBackend + ?Sized,
{
    let metaedge = resolve_metaedge(graph, metaedge.into(), policy)?;
    adjacency_matrix(graph, &metaedge)
}

pub(crate) fn adjacency_matrix<H>(graph: &H, metaedge: &MetaEdge) -> Result<Array2<f64>>
where
    H: HetnetBackend + ?Sized,
{
    let sources = node_positions(graph, &metaedge.source)?;
    let targets = node_positions(graph, &metaedge.target)?;

    let mut matrix = Array2::<f64>::zeros((targets.len(), sources.len()));
    for (source, j) in sources.iter() {
        for target in graph.targets_of(source, metaedge)? {
            let i = targets.position(&target).ok_or_else(|| {
                Error::UnknownNode(format!("{target} (target of {} edge from {source})", metaedge.abbrev()))
            })?;
            // Parallel edges collapse to a single 1.
            matrix[[i, j]] = 1.0;
        }
    }
    Ok(matrix)
}
