//! Sequence-level computations: alphabet classification, ORF detection and
//! composition statistics. Everything here works on in-memory strings and
//! never touches the filesystem.

pub mod classifier;
pub mod orf;
pub mod stats;

pub use classifier::{classify, CodonSet, SequenceType};
pub use orf::{scan, Orf, OrfScan, OrfScanner};
pub use stats::{compute_stats, CompositionCounts, SequenceStats, StatsComputer};
