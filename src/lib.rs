pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod record;
pub mod sequence;
pub mod sequence_processor;
pub mod types;
pub mod utils;

// Re-export main API
pub use analysis::{analyze_file, AnalysisOptions, BatchSummary, FileReport, RecordReport};
pub use error::RecordError;
pub use record::{extract_sequence, Sequence};
pub use sequence::{classify, compute_stats, scan, Orf, OrfScan, SequenceStats, SequenceType};
pub use types::{Analysis, FrameAnchor, OutputFormat};
