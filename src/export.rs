//! Score export — serialize diffusion results for downstream tools.
//!
//! ```text
//! DiffusionScores → export_scores_tsv()  → metanode / identifier / name / score rows
//!                 → export_scores_json() → array of objects
//! ```
//!
//! Rows keep the scores' position order. Node names come from the
//! backend; a node the backend no longer knows gets an empty name.

use std::io::Write;

use serde::Serialize;

use crate::diffusion::DiffusionScores;
use crate::hetnet::HetnetBackend;
use crate::model::{Identifier, NodeId};
use crate::Result;

/// One exported score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub metanode: String,
    pub identifier: Identifier,
    pub name: String,
    pub score: f64,
}

/// Pair each score with its node's name.
pub fn score_records<B>(backend: &B, scores: &DiffusionScores) -> Result<Vec<ScoreRecord>>
where
    B: HetnetBackend + ?Sized,
{
    scores
        .iter()
        .map(|(id, score)| -> Result<ScoreRecord> {
            Ok(ScoreRecord {
                metanode: id.metanode.clone(),
                identifier: id.identifier.clone(),
                name: node_name(backend, id)?,
                score,
            })
        })
        .collect()
}

/// Write scores as tab-separated values with a header line.
pub fn export_scores_tsv<B>(backend: &B, scores: &DiffusionScores, writer: &mut dyn Write) -> Result<()>
where
    B: HetnetBackend + ?Sized,
{
    writeln!(writer, "metanode\tidentifier\tname\tscore")?;
    for record in score_records(backend, scores)? {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            escape_tsv(&record.metanode),
            escape_tsv(&record.identifier.to_string()),
            escape_tsv(&record.name),
            record.score,
        )?;
    }
    Ok(())
}

/// Render scores as a pretty-printed JSON array.
pub fn export_scores_json<B>(backend: &B, scores: &DiffusionScores) -> Result<String>
where
    B: HetnetBackend + ?Sized,
{
    let records = score_records(backend, scores)?;
    Ok(serde_json::to_string_pretty(&records)?)
}

fn node_name<B>(backend: &B, id: &NodeId) -> Result<String>
where
    B: HetnetBackend + ?Sized,
{
    Ok(backend.node(id)?.map(|n| n.name).unwrap_or_default())
}

/// Tabs and newlines would break the row layout.
fn escape_tsv(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}
