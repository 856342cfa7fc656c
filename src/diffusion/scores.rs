//! DiffusionScores — the ordered result of a diffusion.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// Scores for every node of the metapath's target metanode, in position
/// order (position 0 first).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiffusionScores {
    entries: Vec<(NodeId, f64)>,
}

impl DiffusionScores {
    pub fn new(entries: Vec<(NodeId, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, node: &NodeId) -> Option<f64> {
        self.entries.iter().find(|(n, _)| n == node).map(|(_, s)| *s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, f64)> {
        self.entries.iter().map(|(n, s)| (n, *s))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.entries.iter().map(|(n, _)| n)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all scores.
    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    /// Entries by descending score. Ties keep position order.
    pub fn ranked(&self) -> Vec<(&NodeId, f64)> {
        let mut out: Vec<(&NodeId, f64)> = self.iter().collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }

    /// The `k` highest-scoring entries.
    pub fn top(&self, k: usize) -> Vec<(&NodeId, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }

    /// Lookup table by node. Loses the position order.
    pub fn to_map(&self) -> HashMap<NodeId, f64> {
        self.entries.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<(NodeId, f64)> {
        self.entries
    }
}

impl IntoIterator for DiffusionScores {
    type Item = (NodeId, f64);
    type IntoIter = std::vec::IntoIter<(NodeId, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
