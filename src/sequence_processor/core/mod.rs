pub(crate) mod processor;
pub(crate) mod stats;
mod reader;

pub use processor::SequenceProcessor;
pub use reader::SequenceReader;
pub use stats::ProcessingStats;
