//! Per-file orchestration: runs the selected computations over every record
//! of a FASTA file and accumulates the batch summary.

pub mod summary;

pub use summary::BatchSummary;

use crate::record::Sequence;
use crate::sequence::{OrfScan, OrfScanner, SequenceStats, SequenceType, StatsComputer};
use crate::sequence_processor::{FastaReader, ProcessingStats, SequenceProcessor, SequenceReader};
use crate::types::{Analysis, FrameAnchor};
use anyhow::Result;
use indicatif::ProgressBar;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    pub frame_anchor: FrameAnchor,
}

/// Everything computed for a single record.
#[derive(Debug, Clone)]
pub struct RecordReport {
    pub header: String,
    pub sequence: String,
    pub sequence_type: SequenceType,
    pub orfs: Option<OrfScan>,
    pub stats: Option<SequenceStats>,
}

impl fmt::Display for RecordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">{}", self.header)?;
        writeln!(f, "{}", self.sequence)?;
        writeln!(f, "Type: {}", self.sequence_type)?;
        if let Some(orfs) = &self.orfs {
            write!(f, "{}", orfs)?;
        }
        if let Some(stats) = &self.stats {
            write!(f, "{}", stats)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub analysis: Analysis,
    pub records: Vec<RecordReport>,
    pub summary: Option<BatchSummary>,
    pub stats: ProcessingStats,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        if let Some(summary) = &self.summary {
            write!(f, "{}", summary)?;
        }
        Ok(())
    }
}

/// Runs the configured computations for each record read.
pub struct FastaAnalyzer {
    analysis: Analysis,
    scanner: OrfScanner,
    records: Vec<RecordReport>,
    summary: BatchSummary,
    progress: ProgressBar,
}

impl FastaAnalyzer {
    pub fn new(analysis: Analysis, options: AnalysisOptions) -> Self {
        Self {
            analysis,
            scanner: OrfScanner::new(options.frame_anchor),
            records: Vec::new(),
            summary: BatchSummary::new(),
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn analyze(&self, sequence: &Sequence) -> RecordReport {
        let sequence_type = SequenceType::classify(&sequence.data);

        let orfs = self
            .analysis
            .includes_orfs()
            .then(|| self.scanner.scan(&sequence.data));
        let stats = if self.analysis.includes_stats() {
            StatsComputer::new(self.scanner).compute(&sequence.data, sequence_type)
        } else {
            None
        };

        RecordReport {
            header: sequence.header(),
            sequence: sequence.data.clone(),
            sequence_type,
            orfs,
            stats,
        }
    }

    pub fn summary(&self) -> &BatchSummary {
        &self.summary
    }

    pub fn into_report(self, path: PathBuf, stats: ProcessingStats) -> FileReport {
        let summary = self
            .analysis
            .includes_summary()
            .then_some(self.summary);
        FileReport {
            path,
            analysis: self.analysis,
            records: self.records,
            summary,
            stats,
        }
    }
}

impl SequenceProcessor for FastaAnalyzer {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        let report = self.analyze(sequence);
        tracing::debug!(
            record = %sequence.id,
            length = sequence.data.len(),
            sequence_type = %report.sequence_type,
            orfs = report.orfs.as_ref().map(OrfScan::count),
            "analyzed record"
        );

        self.summary.record(report.sequence_type, sequence.data.len());
        self.records.push(report);
        Ok(())
    }

    fn update_progress(&mut self, stats: &ProcessingStats) {
        self.progress
            .set_message(format!("{} records, {} bases", stats.processed, stats.residues));
    }

    fn finalize(&mut self) -> Result<()> {
        self.progress.finish_and_clear();
        Ok(())
    }
}

/// Read `path` and run `analysis` on each of its records.
pub fn analyze_file(
    path: &Path,
    analysis: Analysis,
    options: &AnalysisOptions,
    progress: ProgressBar,
) -> Result<FileReport> {
    let mut reader = FastaReader::new(path)?;
    let mut analyzer = FastaAnalyzer::new(analysis, *options).with_progress(progress.clone());

    let stats = reader.read_sequences(&mut analyzer, &progress)?;
    if stats.processed == 0 {
        tracing::warn!(path = %path.display(), "no FASTA records found");
    }
    tracing::info!(
        path = %path.display(),
        records = stats.processed,
        analysis = analysis.name(),
        "finished file"
    );

    Ok(analyzer.into_report(path.to_path_buf(), stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(id: &str, data: &str) -> Sequence {
        Sequence {
            id: id.to_string(),
            description: None,
            data: data.to_string(),
        }
    }

    #[test]
    fn test_classify_only() {
        let analyzer = FastaAnalyzer::new(Analysis::Classify, AnalysisOptions::default());
        let report = analyzer.analyze(&sequence("s1", "ATGAATGATAA"));
        assert_eq!(report.sequence_type, SequenceType::Dna);
        assert!(report.orfs.is_none());
        assert!(report.stats.is_none());
        assert_eq!(report.to_string(), ">s1\nATGAATGATAA\nType: DNA\n");
    }

    #[test]
    fn test_orf_report_text() {
        let analyzer = FastaAnalyzer::new(Analysis::Orfs, AnalysisOptions::default());
        let report = analyzer.analyze(&sequence("s2", "AUGAAUUGA"));
        assert_eq!(
            report.to_string(),
            ">s2\nAUGAAUUGA\nType: RNA\nFound 1 ORF:\n- Start at 0, Stop at 6, ORF: AUGAAUUGA\n"
        );
    }

    #[test]
    fn test_invalid_record_has_no_stats() {
        let analyzer = FastaAnalyzer::new(Analysis::Stats, AnalysisOptions::default());
        let report = analyzer.analyze(&sequence("bad", "ATGU"));
        assert_eq!(report.sequence_type, SequenceType::Invalid);
        assert!(report.stats.is_none());
    }

    #[test]
    fn test_summary_accumulates_per_record() {
        let mut analyzer = FastaAnalyzer::new(Analysis::Stats, AnalysisOptions::default());
        analyzer.process_sequence(&sequence("a", "ACGT")).unwrap();
        analyzer.process_sequence(&sequence("b", "ACGU")).unwrap();
        analyzer.process_sequence(&sequence("c", "ACGTTT")).unwrap();
        analyzer.process_sequence(&sequence("d", "TU")).unwrap();

        let summary = analyzer.summary();
        assert_eq!(summary.dna_count, 2);
        assert_eq!(summary.mean_dna_length(), Some(5.0));
        assert_eq!(summary.rna_count, 1);
        assert_eq!(summary.invalid_count, 1);

        let report = analyzer.into_report(PathBuf::from("x.fa"), ProcessingStats::default());
        assert_eq!(report.records.len(), 4);
        assert!(report.summary.is_some());
    }

    #[test]
    fn test_orfs_analysis_has_no_summary() {
        let analyzer = FastaAnalyzer::new(Analysis::Orfs, AnalysisOptions::default());
        let report = analyzer.into_report(PathBuf::from("x.fa"), ProcessingStats::default());
        assert!(report.summary.is_none());
    }

    #[test]
    fn test_frame_anchor_reaches_scanner() {
        let options = AnalysisOptions {
            frame_anchor: FrameAnchor::Absolute,
        };
        let analyzer = FastaAnalyzer::new(Analysis::Full, options);
        let report = analyzer.analyze(&sequence("off", "CATGATGAAATAA"));
        assert_eq!(report.orfs.as_ref().map(OrfScan::count), Some(0));
        assert_eq!(report.stats.as_ref().map(|s| s.orf_count), Some(0));
    }
}
