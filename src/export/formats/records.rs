use crate::analysis::RecordReport;
use crate::sequence::{CompositionCounts, Orf, SequenceStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordExport {
    pub header: String,
    pub sequence_type: String,
    pub length: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orfs: Option<Vec<OrfExport>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsExport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrfExport {
    pub start: usize,
    pub stop: usize,
    pub end: usize,
    pub sequence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsExport {
    pub length: usize,
    pub counts: CountsExport,
    pub orf_count: usize,
}

/// Only one of `T` and `U` is present, matching the sequence type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountsExport {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "G")]
    pub g: usize,
    #[serde(rename = "T", default, skip_serializing_if = "Option::is_none")]
    pub t: Option<usize>,
    #[serde(rename = "U", default, skip_serializing_if = "Option::is_none")]
    pub u: Option<usize>,
    #[serde(rename = "Ambiguous")]
    pub ambiguous: usize,
}

impl From<&Orf> for OrfExport {
    fn from(orf: &Orf) -> Self {
        Self {
            start: orf.start,
            stop: orf.stop,
            end: orf.end(),
            sequence: orf.sequence.clone(),
        }
    }
}

impl From<&CompositionCounts> for CountsExport {
    fn from(counts: &CompositionCounts) -> Self {
        let (t, u) = if counts.residue == 'U' {
            (None, Some(counts.residue_count))
        } else {
            (Some(counts.residue_count), None)
        };
        Self {
            a: counts.a,
            c: counts.c,
            g: counts.g,
            t,
            u,
            ambiguous: counts.ambiguous,
        }
    }
}

impl From<&SequenceStats> for StatsExport {
    fn from(stats: &SequenceStats) -> Self {
        Self {
            length: stats.length,
            counts: CountsExport::from(&stats.counts),
            orf_count: stats.orf_count,
        }
    }
}

impl From<&RecordReport> for RecordExport {
    fn from(report: &RecordReport) -> Self {
        Self {
            header: report.header.clone(),
            sequence_type: report.sequence_type.label().to_string(),
            length: report.sequence.len(),
            orfs: report
                .orfs
                .as_ref()
                .map(|scan| scan.orfs.iter().map(OrfExport::from).collect()),
            stats: report.stats.as_ref().map(StatsExport::from),
        }
    }
}
