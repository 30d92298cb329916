use crate::analysis::BatchSummary;
use serde::{Deserialize, Serialize};

/// Means are `null` when no sequence of that kind was seen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    pub dna_sequences: u64,
    pub mean_dna_length: Option<f64>,
    pub rna_sequences: u64,
    pub mean_rna_length: Option<f64>,
    pub invalid_sequences: u64,
}

impl From<&BatchSummary> for SummaryExport {
    fn from(summary: &BatchSummary) -> Self {
        Self {
            dna_sequences: summary.dna_count,
            mean_dna_length: summary.mean_dna_length(),
            rna_sequences: summary.rna_count,
            mean_rna_length: summary.mean_rna_length(),
            invalid_sequences: summary.invalid_count,
        }
    }
}
