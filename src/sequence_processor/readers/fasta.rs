use crate::record::{next_sequence, record_reader, RecordReader};
use crate::sequence_processor::core::*;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use niffler::get_reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub struct FastaReader {
    reader: RecordReader<Box<dyn Read>>,
}

impl FastaReader {
    /// Open a FASTA file, plain or compressed.
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let (inner_reader, compression) = get_reader(Box::new(file))
            .with_context(|| format!("Failed to detect compression of {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?compression, "opened FASTA input");
        Ok(Self::from_reader(inner_reader))
    }

    pub fn from_reader(inner_reader: Box<dyn Read>) -> Self {
        Self {
            reader: record_reader(inner_reader),
        }
    }
}

impl SequenceReader for FastaReader {
    fn read_sequences<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();

        loop {
            let record_number = stats.processed + 1;
            let sequence = next_sequence(&mut self.reader)
                .with_context(|| format!("Malformed FASTA record #{}", record_number))?;
            let Some(sequence) = sequence else {
                break;
            };

            processor
                .process_sequence(&sequence)
                .with_context(|| format!("Failed to process record '{}'", sequence.id))?;

            stats.processed += 1;
            stats.residues += sequence.data.len() as u64;
            progress.inc(1);
            processor.update_progress(&stats);
        }

        processor.finalize()?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sequence;
    use std::io::Cursor;

    #[derive(Default)]
    struct Collect {
        ids: Vec<String>,
        finalized: bool,
    }

    impl SequenceProcessor for Collect {
        fn process_sequence(&mut self, sequence: &Sequence) -> Result<()> {
            self.ids.push(sequence.id.clone());
            Ok(())
        }

        fn update_progress(&mut self, _stats: &ProcessingStats) {}

        fn finalize(&mut self) -> Result<()> {
            self.finalized = true;
            Ok(())
        }
    }

    fn reader_for(text: &'static str) -> FastaReader {
        FastaReader::from_reader(Box::new(Cursor::new(text.as_bytes())))
    }

    #[test]
    fn test_reads_every_record_including_last() {
        let mut reader = reader_for(">a\nACGT\n>b\nAUGA\nUU\n>c\nNNN");
        let mut collect = Collect::default();
        let stats = reader
            .read_sequences(&mut collect, &ProgressBar::hidden())
            .unwrap();

        assert_eq!(collect.ids, vec!["a", "b", "c"]);
        assert!(collect.finalized);
        assert_eq!(stats.processed, 3);
        assert_eq!(stats.residues, 13);
    }

    #[test]
    fn test_malformed_record_aborts() {
        let mut reader = reader_for(">a\nACGT\n>b\n>c\nACGT\n");
        let mut collect = Collect::default();
        let err = reader
            .read_sequences(&mut collect, &ProgressBar::hidden())
            .unwrap_err();

        assert!(err.to_string().contains("#2"));
        assert_eq!(collect.ids, vec!["a"]);
        assert!(!collect.finalized);
    }

    #[test]
    fn test_leading_blank_lines_and_indented_headers() {
        for text in ["\n>a\nACGT\n", "  >a\nACGT\n", "\n\n  >  a\n  ACGT\n\n>b\nAUG\n"] {
            let mut reader = reader_for(text);
            let mut collect = Collect::default();
            reader
                .read_sequences(&mut collect, &ProgressBar::hidden())
                .unwrap();
            assert_eq!(collect.ids[0], "a", "{text:?}");
        }
    }

    #[test]
    fn test_io_error_is_not_repeated() {
        let mut reader = reader_for("ACGT\n>a\nACGT\n");
        let mut collect = Collect::default();
        let err = reader
            .read_sequences(&mut collect, &ProgressBar::hidden())
            .unwrap_err();
        let message = format!("{:#}", err);
        assert_eq!(message.matches("Expected > at record start").count(), 1, "{message}");
    }

    #[test]
    fn test_empty_input_has_no_records() {
        let mut reader = reader_for("");
        let mut collect = Collect::default();
        let stats = reader
            .read_sequences(&mut collect, &ProgressBar::hidden())
            .unwrap();
        assert_eq!(stats.processed, 0);
    }
}
