//! PropertyMap — the free-form data attached to a node.

use std::collections::HashMap;

/// A map of property names to JSON values.
pub type PropertyMap = HashMap<String, serde_json::Value>;
