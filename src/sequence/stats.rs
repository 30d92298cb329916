use super::classifier::SequenceType;
use super::orf::OrfScanner;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Per-symbol counts for one sequence.
///
/// Iterates and serializes in the fixed order A, C, G, T-or-U, Ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    /// `'T'` for DNA, `'U'` for RNA.
    pub residue: char,
    pub residue_count: usize,
    pub ambiguous: usize,
}

impl CompositionCounts {
    fn new(residue: char) -> Self {
        Self {
            a: 0,
            c: 0,
            g: 0,
            residue,
            residue_count: 0,
            ambiguous: 0,
        }
    }

    /// Count every symbol of `sequence`. Anything that is not A, C, G or the
    /// alphabet's own residue lands in the ambiguous bucket, including the
    /// other alphabet's residue.
    pub fn tally(sequence: &str, residue: char) -> Self {
        let mut counts = Self::new(residue);
        for symbol in sequence.chars() {
            match symbol {
                'A' => counts.a += 1,
                'C' => counts.c += 1,
                'G' => counts.g += 1,
                s if s == residue => counts.residue_count += 1,
                _ => counts.ambiguous += 1,
            }
        }
        counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> {
        let residue_key = if self.residue == 'U' { "U" } else { "T" };
        [
            ("A", self.a),
            ("C", self.c),
            ("G", self.g),
            (residue_key, self.residue_count),
            ("Ambiguous", self.ambiguous),
        ]
        .into_iter()
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for CompositionCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(5))?;
        for (key, count) in self.iter() {
            map.serialize_entry(key, &count)?;
        }
        map.end()
    }
}

impl fmt::Display for CompositionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(key, count)| format!("{}: {}", key, count))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStats {
    pub length: usize,
    pub sequence_type: SequenceType,
    pub counts: CompositionCounts,
    pub orf_count: usize,
}

impl fmt::Display for SequenceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Length: {}", self.length)?;
        writeln!(f, "Counts: {}", self.counts)?;
        writeln!(f, "Number of ORFs: {}", self.orf_count)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsComputer {
    scanner: OrfScanner,
}

impl StatsComputer {
    pub fn new(scanner: OrfScanner) -> Self {
        Self { scanner }
    }

    /// Composition and ORF count for `sequence` read as `sequence_type`.
    /// Returns `None` for `Invalid`: stats are only reported for classified
    /// sequences.
    pub fn compute(&self, sequence: &str, sequence_type: SequenceType) -> Option<SequenceStats> {
        let residue = sequence_type.residue()?;
        let counts = CompositionCounts::tally(sequence, residue);
        let orf_count = self.scanner.scan(sequence).count();

        Some(SequenceStats {
            length: sequence.chars().count(),
            sequence_type,
            counts,
            orf_count,
        })
    }
}

pub fn compute_stats(sequence: &str, sequence_type: SequenceType) -> Option<SequenceStats> {
    StatsComputer::default().compute(sequence, sequence_type)
}
