//! Diffusion configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```json
//! { "row_damping": 0.5, "metaedge_abbrev": "single_edge" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// How a metaedge abbreviation that names several steps is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbbrevPolicy {
    /// Resolve as a metapath and keep only its first metaedge.
    #[default]
    FirstEdge,
    /// Reject anything that is not exactly one metaedge.
    SingleEdge,
}

/// Parameters of a metapath diffusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffusionConfig {
    /// Exponent of source (out-)degree in column normalization.
    pub column_damping: f64,
    /// Exponent of target (in-)degree in row normalization.
    pub row_damping: f64,
    pub metaedge_abbrev: AbbrevPolicy,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            column_damping: 1.0,
            row_damping: 0.0,
            metaedge_abbrev: AbbrevPolicy::FirstEdge,
        }
    }
}

impl DiffusionConfig {
    pub fn with_damping(mut self, row_damping: f64, column_damping: f64) -> Self {
        self.row_damping = row_damping;
        self.column_damping = column_damping;
        self
    }

    /// Reject multi-step metaedge abbreviations.
    pub fn strict(mut self) -> Self {
        self.metaedge_abbrev = AbbrevPolicy::SingleEdge;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = DiffusionConfig::default();
        assert_eq!(config.column_damping, 1.0);
        assert_eq!(config.row_damping, 0.0);
        assert_eq!(config.metaedge_abbrev, AbbrevPolicy::FirstEdge);
    }

    #[test]
    fn test_partial_json() {
        let config = DiffusionConfig::from_json_str(
            r#"{ "row_damping": 0.5, "metaedge_abbrev": "single_edge" }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            DiffusionConfig {
                column_damping: 1.0,
                row_damping: 0.5,
                metaedge_abbrev: AbbrevPolicy::SingleEdge,
            }
        );
    }

    #[test]
    fn test_bad_json() {
        let err = DiffusionConfig::from_json_str("{ \"row_damping\": \"high\" }").unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DiffusionConfig::from_json_file("/nonexistent/diffusion.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_builders() {
        let config = DiffusionConfig::default().with_damping(0.3, 0.7).strict();
        assert_eq!(config.row_damping, 0.3);
        assert_eq!(config.column_damping, 0.7);
        assert_eq!(config.metaedge_abbrev, AbbrevPolicy::SingleEdge);
    }
}
