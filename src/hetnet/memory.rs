//! In-memory hetnet backend.
//!
//! This is the reference implementation of `HetnetBackend`.
//! It uses simple HashMaps protected by RwLock.
//!
//! ## Limitations
//!
//! - **Append-only**: nodes and edges can be added but not removed.
//! - **Not atomic across collections**: `add_edge` updates both endpoints
//!   under one lock, but a concurrent reader may observe a node before its
//!   edges exist. Build the network first, then diffuse.
//!
//! Every edge is stored twice: under its metaedge on the source node and
//! under the inverse metaedge on the target node, so any metapath can walk
//! an edge from either end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::*;
use crate::{Error, Result};
use super::HetnetBackend;

// ============================================================================
// MemoryHetnet
// ============================================================================

/// In-memory heterogeneous network. Cloning shares the same storage.
#[derive(Clone)]
pub struct MemoryHetnet {
    inner: Arc<HetnetInner>,
}

struct HetnetInner {
    metagraph: RwLock<MetaGraph>,
    nodes: RwLock<HashMap<NodeId, Node>>,
    /// metanode name → node IDs (poor man's type index)
    metanode_index: RwLock<HashMap<String, Vec<NodeId>>>,
    /// node → metaedge → edge targets
    adjacency: RwLock<HashMap<NodeId, HashMap<MetaEdge, Vec<NodeId>>>>,
    edge_count: AtomicUsize,
}

impl Default for MemoryHetnet {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHetnet {
    pub fn new() -> Self {
        Self::with_metagraph(MetaGraph::new())
    }

    /// Start from an existing schema.
    pub fn with_metagraph(metagraph: MetaGraph) -> Self {
        Self {
            inner: Arc::new(HetnetInner {
                metagraph: RwLock::new(metagraph),
                nodes: RwLock::new(HashMap::new()),
                metanode_index: RwLock::new(HashMap::new()),
                adjacency: RwLock::new(HashMap::new()),
                edge_count: AtomicUsize::new(0),
            }),
        }
    }

    /// Snapshot of the schema.
    pub fn metagraph(&self) -> MetaGraph {
        self.inner.metagraph.read().clone()
    }

    // ========================================================================
    // Schema
    // ========================================================================

    pub fn add_metanode(&self, name: &str, abbrev: &str) -> Result<MetaNode> {
        self.inner.metagraph.write().add_metanode(name, abbrev)
    }

    pub fn add_metaedge(
        &self,
        source: &str,
        target: &str,
        kind: &str,
        kind_abbrev: &str,
        direction: Direction,
    ) -> Result<MetaEdge> {
        self.inner
            .metagraph
            .write()
            .add_metaedge(source, target, kind, kind_abbrev, direction)
    }

    // ========================================================================
    // Nodes and edges
    // ========================================================================

    /// Add a node of an existing metanode.
    pub fn add_node(
        &self,
        metanode: &str,
        identifier: impl Into<Identifier>,
        name: impl Into<String>,
        data: PropertyMap,
    ) -> Result<NodeId> {
        self.inner.metagraph.read().metanode(metanode)?;

        let id = NodeId::new(metanode, identifier);
        {
            let mut nodes = self.inner.nodes.write();
            if nodes.contains_key(&id) {
                return Err(Error::ConstraintViolation(format!("node {id} already exists")));
            }
            let mut node = Node::new(id.clone(), name);
            node.data = data;
            nodes.insert(id.clone(), node);
        }

        self.inner
            .metanode_index
            .write()
            .entry(metanode.to_string())
            .or_default()
            .push(id.clone());
        self.inner.adjacency.write().insert(id.clone(), HashMap::new());

        Ok(id)
    }

    /// Add an edge. The metaedge is looked up from the endpoint metanodes,
    /// `kind` and `direction`. Repeating a call adds a parallel edge.
    pub fn add_edge(
        &self,
        source: &NodeId,
        target: &NodeId,
        kind: &str,
        direction: Direction,
    ) -> Result<()> {
        {
            let nodes = self.inner.nodes.read();
            for id in [source, target] {
                if !nodes.contains_key(id) {
                    return Err(Error::NotFound(format!("Node {id}")));
                }
            }
        }

        let metaedge = self
            .inner
            .metagraph
            .read()
            .find_metaedge(&source.metanode, &target.metanode, kind, direction)?
            .clone();
        let inverse = metaedge.inverse();

        {
            let mut adj = self.inner.adjacency.write();
            adj.entry(source.clone())
                .or_default()
                .entry(metaedge)
                .or_default()
                .push(target.clone());
            adj.entry(target.clone())
                .or_default()
                .entry(inverse)
                .or_default()
                .push(source.clone());
        }
        self.inner.edge_count.fetch_add(1, Ordering::Relaxed);

        Ok(())
    }
}

// ============================================================================
// HetnetBackend impl
// ============================================================================

impl HetnetBackend for MemoryHetnet {
    fn metanode(&self, name: &str) -> Result<MetaNode> {
        self.inner.metagraph.read().metanode(name).cloned()
    }

    fn metapath_from_abbrev(&self, abbrev: &str) -> Result<MetaPath> {
        self.inner.metagraph.read().metapath_from_abbrev(abbrev)
    }

    fn nodes_of(&self, metanode: &MetaNode) -> Result<Vec<NodeId>> {
        if !self.inner.metagraph.read().contains_metanode(metanode) {
            return Err(Error::UnknownNodeType(metanode.name.clone()));
        }
        Ok(self
            .inner
            .metanode_index
            .read()
            .get(&metanode.name)
            .cloned()
            .unwrap_or_default())
    }

    fn targets_of(&self, node: &NodeId, metaedge: &MetaEdge) -> Result<Vec<NodeId>> {
        if !self.inner.metagraph.read().contains_metaedge(metaedge) {
            return Err(Error::UnknownEdgeType(metaedge.abbrev()));
        }
        let adj = self.inner.adjacency.read();
        let edges = adj
            .get(node)
            .ok_or_else(|| Error::UnknownNode(node.to_string()))?;
        Ok(edges.get(metaedge).cloned().unwrap_or_default())
    }

    fn node(&self, id: &NodeId) -> Result<Option<Node>> {
        Ok(self.inner.nodes.read().get(id).cloned())
    }

    fn node_count(&self) -> usize {
        self.inner.nodes.read().len()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> MemoryHetnet {
        let net = MemoryHetnet::new();
        net.add_metanode("Gene", "G").unwrap();
        net.add_metanode("Disease", "D").unwrap();
        net.add_metaedge("Gene", "Disease", "associates", "a", Direction::Both).unwrap();
        net.add_metaedge("Gene", "Gene", "regulates", "r", Direction::Forward).unwrap();
        net
    }

    #[test]
    fn test_add_and_get_node() {
        let net = schema();
        let mut data = PropertyMap::new();
        data.insert("chromosome".into(), serde_json::json!("17"));

        let id = net.add_node("Gene", 7157, "TP53", data).unwrap();
        let node = net.node(&id).unwrap().unwrap();

        assert_eq!(node.name, "TP53");
        assert_eq!(node.get("chromosome"), Some(&serde_json::json!("17")));
        assert_eq!(net.node_count(), 1);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let net = schema();
        net.add_node("Gene", 1, "A", PropertyMap::new()).unwrap();
        let err = net.add_node("Gene", 1, "A again", PropertyMap::new()).unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[test]
    fn test_unknown_metanode() {
        let net = schema();
        let err = net.add_node("Pathway", "WP1", "x", PropertyMap::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownNodeType(_)));

        let err = net.nodes_of(&MetaNode::new("Pathway", "PW")).unwrap_err();
        assert!(matches!(err, Error::UnknownNodeType(_)));
    }

    #[test]
    fn test_edge_stored_both_ways() {
        let net = schema();
        let g = net.add_node("Gene", 1, "A", PropertyMap::new()).unwrap();
        let d = net.add_node("Disease", "DOID:1", "X", PropertyMap::new()).unwrap();
        net.add_edge(&g, &d, "associates", Direction::Both).unwrap();

        let gad = net.metagraph().metaedge("GaD").unwrap().clone();
        assert_eq!(net.targets_of(&g, &gad).unwrap(), vec![d.clone()]);
        assert_eq!(net.targets_of(&d, &gad.inverse()).unwrap(), vec![g.clone()]);
        assert!(net.targets_of(&d, &gad).unwrap().is_empty());
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn test_directed_edges() {
        let net = schema();
        let a = net.add_node("Gene", 1, "A", PropertyMap::new()).unwrap();
        let b = net.add_node("Gene", 2, "B", PropertyMap::new()).unwrap();
        net.add_edge(&a, &b, "regulates", Direction::Forward).unwrap();

        let fwd = net.metagraph().metaedge("Gr>G").unwrap().clone();
        assert_eq!(net.targets_of(&a, &fwd).unwrap(), vec![b.clone()]);
        assert!(net.targets_of(&b, &fwd).unwrap().is_empty());
        assert_eq!(net.targets_of(&b, &fwd.inverse()).unwrap(), vec![a]);
    }

    #[test]
    fn test_parallel_edges_kept() {
        let net = schema();
        let g = net.add_node("Gene", 1, "A", PropertyMap::new()).unwrap();
        let d = net.add_node("Disease", 1, "X", PropertyMap::new()).unwrap();
        net.add_edge(&g, &d, "associates", Direction::Both).unwrap();
        net.add_edge(&g, &d, "associates", Direction::Both).unwrap();

        let gad = net.metagraph().metaedge("GaD").unwrap().clone();
        assert_eq!(net.targets_of(&g, &gad).unwrap().len(), 2);
        assert_eq!(net.edge_count(), 2);
    }

    #[test]
    fn test_edge_errors() {
        let net = schema();
        let g = net.add_node("Gene", 1, "A", PropertyMap::new()).unwrap();
        let missing = NodeId::new("Disease", 99);
        assert!(matches!(
            net.add_edge(&g, &missing, "associates", Direction::Both),
            Err(Error::NotFound(_))
        ));

        let d = net.add_node("Disease", 99, "X", PropertyMap::new()).unwrap();
        assert!(matches!(
            net.add_edge(&g, &d, "treats", Direction::Both),
            Err(Error::UnknownEdgeType(_))
        ));
    }

    #[test]
    fn test_clone_shares_storage() {
        let net = schema();
        let view = net.clone();
        net.add_node("Gene", 1, "A", PropertyMap::new()).unwrap();
        assert_eq!(view.node_count(), 1);
    }
}
