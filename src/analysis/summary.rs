use crate::sequence::SequenceType;
use std::fmt;

/// Running totals over the records of one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub dna_count: u64,
    pub dna_total_length: u64,
    pub rna_count: u64,
    pub rna_total_length: u64,
    pub invalid_count: u64,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sequence_type: SequenceType, length: usize) {
        match sequence_type {
            SequenceType::Dna => {
                self.dna_count += 1;
                self.dna_total_length += length as u64;
            }
            SequenceType::Rna => {
                self.rna_count += 1;
                self.rna_total_length += length as u64;
            }
            SequenceType::Invalid => self.invalid_count += 1,
        }
    }

    /// `None` when the file held no DNA sequences.
    pub fn mean_dna_length(&self) -> Option<f64> {
        mean(self.dna_total_length, self.dna_count)
    }

    /// `None` when the file held no RNA sequences.
    pub fn mean_rna_length(&self) -> Option<f64> {
        mean(self.rna_total_length, self.rna_count)
    }

    pub fn total(&self) -> u64 {
        self.dna_count + self.rna_count + self.invalid_count
    }
}

fn mean(total: u64, count: u64) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(total as f64 / count as f64)
    }
}

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{:.2}", value),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---SUMMARY---")?;
        writeln!(f, "Valid DNA sequences: {}", self.dna_count)?;
        writeln!(f, "Mean DNA length: {}", format_mean(self.mean_dna_length()))?;
        writeln!(f, "Valid RNA sequences: {}", self.rna_count)?;
        writeln!(f, "Mean RNA length: {}", format_mean(self.mean_rna_length()))?;
        writeln!(f, "Invalid sequences: {}", self.invalid_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_means() {
        let mut summary = BatchSummary::new();
        summary.record(SequenceType::Dna, 10);
        summary.record(SequenceType::Dna, 5);
        summary.record(SequenceType::Rna, 9);
        summary.record(SequenceType::Invalid, 100);

        assert_eq!(summary.mean_dna_length(), Some(7.5));
        assert_eq!(summary.mean_rna_length(), Some(9.0));
        assert_eq!(summary.invalid_count, 1);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_no_sequences_of_a_kind() {
        let mut summary = BatchSummary::new();
        summary.record(SequenceType::Dna, 12);

        assert_eq!(summary.mean_rna_length(), None);
        let text = summary.to_string();
        assert!(text.contains("Mean DNA length: 12.00\n"));
        assert!(text.contains("Mean RNA length: n/a\n"));
    }

    #[test]
    fn test_empty_batch() {
        let summary = BatchSummary::new();
        assert_eq!(summary.mean_dna_length(), None);
        assert_eq!(summary.mean_rna_length(), None);
        assert_eq!(
            summary.to_string(),
            "---SUMMARY---\nValid DNA sequences: 0\nMean DNA length: n/a\nValid RNA sequences: 0\nMean RNA length: n/a\nInvalid sequences: 0\n"
        );
    }
}
