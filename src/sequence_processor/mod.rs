pub mod core;
pub mod readers;

// Re-export commonly used items
pub use core::{ProcessingStats, SequenceProcessor, SequenceReader};
pub use readers::FastaReader;
