//! Node positions — dense matrix indices for the nodes of one metanode.

use hashbrown::HashMap;

use crate::hetnet::HetnetBackend;
use crate::model::{MetaNode, MetaNodeRef, NodeId};
use crate::Result;

/// Bijection between the sorted nodes of a metanode and `0..n`.
///
/// Nodes are sorted by their natural identity order, so the same network
/// always yields the same positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePositions {
    metanode: MetaNode,
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
}

impl NodePositions {
    pub fn metanode(&self) -> &MetaNode {
        &self.metanode
    }

    pub fn position(&self, node: &NodeId) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn node(&self, position: usize) -> Option<&NodeId> {
        self.nodes.get(position)
    }

    /// Nodes in position order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `(node, position)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, usize)> {
        self.nodes.iter().enumerate().map(|(i, n)| (n, i))
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

/// Build the positions of every node of `metanode`, given as a resolved
/// metanode or a name.
pub fn node_positions<'a, H>(graph: &H, metanode: impl Into<MetaNodeRef<'a>>) -> Result<NodePositions>
where
    H: HetnetBackend + ?Sized,
{
    let metanode = match metanode.into() {
        MetaNodeRef::Resolved(m) => m.clone(),
        MetaNodeRef::Name(name) => graph.metanode(name)?,
    };

    let mut nodes = graph.nodes_of(&metanode)?;
    nodes.sort();
    nodes.dedup();

    let index = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.clone(), i))
        .collect();

    Ok(NodePositions { metanode, nodes, index })
}
