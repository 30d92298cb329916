use super::stats::ProcessingStats;
use crate::record::Sequence;
use anyhow::Result;

/// Consumes sequences one record at a time, in file order.
pub trait SequenceProcessor {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()>;
    fn update_progress(&mut self, stats: &ProcessingStats);
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}
