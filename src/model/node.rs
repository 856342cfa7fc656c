//! Node in the heterogeneous network.

use serde::{Deserialize, Serialize};
use super::PropertyMap;

/// A node identifier within its metanode.
///
/// Natural order: every integer sorts before every text identifier, then
/// by value. This is the order used to assign matrix positions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Int(i) => write!(f, "{i}"),
            Identifier::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Identifier {
    fn from(i: i64) -> Self { Identifier::Int(i) }
}

impl From<i32> for Identifier {
    fn from(i: i32) -> Self { Identifier::Int(i64::from(i)) }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self { Identifier::Text(s.to_string()) }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self { Identifier::Text(s) }
}

/// Node identity: metanode name plus identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId {
    pub metanode: String,
    pub identifier: Identifier,
}

impl NodeId {
    pub fn new(metanode: impl Into<String>, identifier: impl Into<Identifier>) -> Self {
        Self { metanode: metanode.into(), identifier: identifier.into() }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.metanode, self.identifier)
    }
}

/// A node in the heterogeneous network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Human-readable name (e.g. a gene symbol).
    pub name: String,
    pub data: PropertyMap,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), data: PropertyMap::new() }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}
