//! MetaPath — a type-chained sequence of metaedges.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{MetaEdge, MetaNode};
use crate::{Error, Result};

/// An ordered, non-empty chain of metaedges where each edge's target
/// metanode is the next edge's source metanode.
///
/// Construction validates the chain, so a `MetaPath` value is always
/// well-formed. Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<MetaEdge>", into = "Vec<MetaEdge>")]
pub struct MetaPath {
    edges: SmallVec<[MetaEdge; 4]>,
}

impl MetaPath {
    /// Build a metapath, failing with `MalformedMetapath` if `edges` is
    /// empty or does not chain.
    pub fn new(edges: impl IntoIterator<Item = MetaEdge>) -> Result<Self> {
        let edges: SmallVec<[MetaEdge; 4]> = edges.into_iter().collect();
        if edges.is_empty() {
            return Err(Error::MalformedMetapath("metapath has no metaedges".into()));
        }
        for (i, pair) in edges.windows(2).enumerate() {
            if pair[0].target != pair[1].source {
                return Err(Error::MalformedMetapath(format!(
                    "metaedge {} ({}) ends at {} but metaedge {} ({}) starts at {}",
                    i,
                    pair[0].abbrev(),
                    pair[0].target,
                    i + 1,
                    pair[1].abbrev(),
                    pair[1].source,
                )));
            }
        }
        Ok(Self { edges })
    }

    /// Source metanode of the first metaedge.
    pub fn source(&self) -> &MetaNode {
        &self.edges[0].source
    }

    /// Target metanode of the last metaedge.
    pub fn target(&self) -> &MetaNode {
        &self.edges[self.edges.len() - 1].target
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false: an empty metapath cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[MetaEdge] {
        &self.edges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetaEdge> {
        self.edges.iter()
    }

    /// The same walk traversed from target back to source.
    pub fn inverse(&self) -> Self {
        Self { edges: self.edges.iter().rev().map(MetaEdge::inverse).collect() }
    }

    /// Abbreviation such as `GiGaD`: metanode abbreviations shared between
    /// consecutive metaedges appear once.
    pub fn abbrev(&self) -> String {
        let mut out = self.source().abbrev.clone();
        for edge in &self.edges {
            let full = edge.abbrev();
            out.push_str(&full[edge.source.abbrev.len()..]);
        }
        out
    }
}

impl TryFrom<Vec<MetaEdge>> for MetaPath {
    type Error = Error;

    fn try_from(edges: Vec<MetaEdge>) -> Result<Self> {
        MetaPath::new(edges)
    }
}

impl From<MetaPath> for Vec<MetaEdge> {
    fn from(path: MetaPath) -> Self {
        path.edges.into_vec()
    }
}

impl<'a> IntoIterator for &'a MetaPath {
    type Item = &'a MetaEdge;
    type IntoIter = std::slice::Iter<'a, MetaEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl std::fmt::Display for MetaPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    fn edge(src: (&str, &str), tgt: (&str, &str), kind: &str, dir: Direction) -> MetaEdge {
        MetaEdge::new(
            MetaNode::new(src.0, src.1),
            MetaNode::new(tgt.0, tgt.1),
            kind,
            &kind[..1],
            dir,
        )
    }

    #[test]
    fn test_chained_path() {
        let gig = edge(("Gene", "G"), ("Gene", "G"), "interacts", Direction::Both);
        let gad = edge(("Gene", "G"), ("Disease", "D"), "associates", Direction::Both);
        let path = MetaPath::new([gig, gad]).unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path.source().name, "Gene");
        assert_eq!(path.target().name, "Disease");
        assert_eq!(path.abbrev(), "GiGaD");
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = MetaPath::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::MalformedMetapath(_)));
    }

    #[test]
    fn test_unchained_path_rejected() {
        let gad = edge(("Gene", "G"), ("Disease", "D"), "associates", Direction::Both);
        let gig = edge(("Gene", "G"), ("Gene", "G"), "interacts", Direction::Both);
        let err = MetaPath::new([gad, gig]).unwrap_err();
        assert!(matches!(err, Error::MalformedMetapath(_)));
    }

    #[test]
    fn test_json_goes_through_validation() {
        let gad = edge(("Gene", "G"), ("Disease", "D"), "associates", Direction::Both);
        let path = MetaPath::new([gad.clone()]).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<MetaPath>(&json).unwrap(), path);

        assert!(serde_json::from_str::<MetaPath>("[]").is_err());

        let unchained = serde_json::to_string(&vec![gad.clone(), gad]).unwrap();
        let err = serde_json::from_str::<MetaPath>(&unchained).unwrap_err();
        assert!(err.to_string().contains("Malformed metapath"));
    }

    #[test]
    fn test_inverse_path() {
        let gr = edge(("Gene", "G"), ("Gene", "G"), "regulates", Direction::Forward);
        let gad = edge(("Gene", "G"), ("Disease", "D"), "associates", Direction::Both);
        let path = MetaPath::new([gr, gad]).unwrap();
        let inv = path.inverse();

        assert_eq!(inv.source().name, "Disease");
        assert_eq!(inv.target().name, "Gene");
        assert_eq!(inv.abbrev(), "DaG<rG");
    }
}
