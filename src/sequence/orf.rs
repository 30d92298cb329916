//! Open reading frame detection.
//!
//! Each start codon found in the sequence opens its own reading frame:
//! candidate stop codons are read at `start + 3`, `start + 6`, ... and every
//! in-frame stop codon that fits inside the sequence yields an ORF. A single
//! start codon can therefore pair with several stops, and closely spaced
//! start codons produce overlapping ORFs.
//!
//! With [`FrameAnchor::Absolute`] the start codon must additionally sit at a
//! multiple of 3 from position 0.

use super::classifier::SequenceType;
use crate::types::FrameAnchor;
use serde::Serialize;
use std::fmt;

const CODON_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orf {
    /// Index of the first base of the start codon.
    pub start: usize,
    /// Index of the first base of the stop codon.
    pub stop: usize,
    /// Bases from the start codon through the end of the stop codon.
    pub sequence: String,
}

impl Orf {
    /// Exclusive end, just past the stop codon.
    pub fn end(&self) -> usize {
        self.stop + CODON_LEN
    }
}

impl fmt::Display for Orf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Start at {}, Stop at {}, ORF: {}",
            self.start, self.stop, self.sequence
        )
    }
}

/// All ORFs found in one sequence, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrfScan {
    pub sequence_type: SequenceType,
    pub orfs: Vec<Orf>,
}

impl OrfScan {
    pub fn count(&self) -> usize {
        self.orfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orfs.is_empty()
    }
}

impl fmt::Display for OrfScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} ORF:", self.count())?;
        for orf in &self.orfs {
            writeln!(f, "- {}", orf)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrfScanner {
    anchor: FrameAnchor,
}

impl OrfScanner {
    pub fn new(anchor: FrameAnchor) -> Self {
        Self { anchor }
    }

    pub fn scan(&self, sequence: &str) -> OrfScan {
        let sequence_type = SequenceType::classify(sequence);
        let mut orfs = Vec::new();

        let Some(codons) = sequence_type.codons() else {
            return OrfScan {
                sequence_type,
                orfs,
            };
        };

        // Classified sequences are pure ASCII, so byte offsets are char offsets.
        let bytes = sequence.as_bytes();
        let len = bytes.len();
        let mut cursor = 0;

        while cursor < len {
            let Some(start) = find_codon(bytes, codons.start, cursor) else {
                break;
            };

            if self.anchor.accepts(start) {
                let candidates = (start + CODON_LEN..)
                    .step_by(CODON_LEN)
                    .take_while(|&stop| stop + CODON_LEN <= len);

                for stop in candidates {
                    if codons.is_stop(&bytes[stop..stop + CODON_LEN]) {
                        orfs.push(Orf {
                            start,
                            stop,
                            sequence: sequence[start..stop + CODON_LEN].to_string(),
                        });
                    }
                }
            }

            cursor = start + CODON_LEN;
        }

        OrfScan {
            sequence_type,
            orfs,
        }
    }
}

/// Scan with start-anchored frames.
pub fn scan(sequence: &str) -> OrfScan {
    OrfScanner::default().scan(sequence)
}

fn find_codon(haystack: &[u8], codon: &[u8; 3], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(CODON_LEN)
        .position(|window| window == &codon[..])
        .map(|offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dna_orf() {
        let result = scan("ATGAAATGATT");
        assert_eq!(result.count(), 1);
        assert_eq!(result.sequence_type, SequenceType::Dna);
        assert_eq!(
            result.orfs[0],
            Orf {
                start: 0,
                stop: 6,
                sequence: "ATGAAATGA".to_string(),
            }
        );
    }

    #[test]
    fn test_single_rna_orf_covers_whole_sequence() {
        let seq = "AUGAAUUGA";
        let result = scan(seq);
        assert_eq!(result.count(), 1);
        assert_eq!(result.orfs[0].start, 0);
        assert_eq!(result.orfs[0].end(), seq.len());
        assert_eq!(result.orfs[0].sequence, seq);
    }

    #[test]
    fn test_no_start_codon() {
        let result = scan("CCCTAATAGTGA");
        assert!(result.is_empty());
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn test_invalid_sequence_has_no_orfs() {
        let result = scan("ATGTAAUGA");
        assert_eq!(result.sequence_type, SequenceType::Invalid);
        assert!(result.is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_every_in_frame_stop_is_reported() {
        // one start, two in-frame stops
        let result = scan("ATGTAACCCTAG");
        let stops: Vec<usize> = result.orfs.iter().map(|o| o.stop).collect();
        assert_eq!(stops, vec![3, 9]);
        assert!(result.orfs.iter().all(|o| o.start == 0));
        assert_eq!(result.orfs[1].sequence, "ATGTAACCCTAG");
    }

    #[test]
    fn test_out_of_frame_stop_is_ignored() {
        assert!(scan("ATGATAAC").is_empty());
    }

    #[test]
    fn test_frames_are_anchored_to_each_start() {
        // second ATG at index 4 is off frame 0 but still opens a frame
        let result = scan("CATGATGAAATAA");
        let pairs: Vec<(usize, usize)> = result.orfs.iter().map(|o| (o.start, o.stop)).collect();
        assert_eq!(pairs, vec![(1, 10), (4, 10)]);
    }

    #[test]
    fn test_absolute_anchor_drops_off_frame_starts() {
        let scanner = OrfScanner::new(FrameAnchor::Absolute);
        let result = scanner.scan("CATGATGAAATAA");
        assert!(result.is_empty());

        let result = scanner.scan("ATGAAATGATT");
        assert_eq!(result.count(), 1);
        assert_eq!(result.orfs[0].start, 0);
    }

    #[test]
    fn test_nested_start_codons() {
        // ATG at 0 and at 3 share the TAA at 6
        let result = scan("ATGATGTAA");
        let pairs: Vec<(usize, usize)> = result.orfs.iter().map(|o| (o.start, o.stop)).collect();
        assert_eq!(pairs, vec![(0, 6), (3, 6)]);
    }

    #[test]
    fn test_partial_trailing_window_is_skipped() {
        assert!(scan("ATGAAATG").is_empty());
    }

    #[test]
    fn test_report_format() {
        let report = scan("ATGAAATGATT").to_string();
        assert_eq!(
            report,
            "Found 1 ORF:\n- Start at 0, Stop at 6, ORF: ATGAAATGA\n"
        );
        assert_eq!(scan("CCC").to_string(), "Found 0 ORF:\n");
    }

    #[test]
    fn test_scan_is_repeatable() {
        let seq = "ATGTAACCCTAGATGA";
        assert_eq!(scan(seq), scan(seq));
    }
}
