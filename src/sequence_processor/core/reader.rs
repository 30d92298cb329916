use super::processor::SequenceProcessor;
use super::stats::ProcessingStats;
use anyhow::Result;
use indicatif::ProgressBar;

pub trait SequenceReader {
    fn read_sequences<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats>;
}
