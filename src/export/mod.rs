pub mod formats;

use crate::analysis::FileReport;
use crate::export::formats::records::RecordExport;
use crate::export::formats::summary::SummaryExport;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const RECORD_TYPE: &str = "fasta-orf-tools.analysis";
pub const EXPORT_VERSION: &str = "1.0";

/// Root structure of a JSON report for one input file.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisExport {
    #[serde(rename = "$type")]
    pub record_type: String,

    pub version: String,
    #[serde(serialize_with = "serialize_datetime", deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    pub input: String,
    pub analysis: String,
    pub frame_anchor: String,
    pub records: Vec<RecordExport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryExport>,
}

impl AnalysisExport {
    pub fn from_report(report: &FileReport, frame_anchor: &str) -> Self {
        Self {
            record_type: RECORD_TYPE.to_string(),
            version: EXPORT_VERSION.to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            input: report.path.display().to_string(),
            analysis: report.analysis.name().to_string(),
            frame_anchor: frame_anchor.to_string(),
            records: report.records.iter().map(RecordExport::from).collect(),
            summary: report.summary.as_ref().map(SummaryExport::from),
        }
    }
}

/// Write the exports as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: &mut W, exports: &[AnalysisExport]) -> Result<()> {
    let json = serde_json::to_string_pretty(exports).context("Failed to serialize report")?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}
