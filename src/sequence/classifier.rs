use serde::Serialize;
use std::fmt;

/// IUPAC ambiguity codes accepted in both DNA and RNA sequences.
const AMBIGUITY_CODES: &[u8] = b"NRYKMSWBDHVXZ";

const DNA_STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];
const RNA_STOP_CODONS: [&[u8; 3]; 3] = [b"UAA", b"UAG", b"UGA"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SequenceType {
    #[serde(rename = "DNA")]
    Dna,
    #[serde(rename = "RNA")]
    Rna,
    Invalid,
}

/// Start and stop codons for one nucleotide alphabet.
#[derive(Debug, Clone, Copy)]
pub struct CodonSet {
    pub start: &'static [u8; 3],
    pub stops: [&'static [u8; 3]; 3],
}

impl CodonSet {
    pub fn is_stop(&self, window: &[u8]) -> bool {
        self.stops.iter().any(|stop| &stop[..] == window)
    }
}

impl SequenceType {
    /// Classify a sequence by its alphabet alone.
    ///
    /// The DNA check runs first, so a sequence with neither `T` nor `U`
    /// (e.g. `ACGN`) is reported as DNA. The empty string is `Invalid`.
    pub fn classify(sequence: &str) -> Self {
        let bytes = sequence.as_bytes();
        if bytes.is_empty() {
            return SequenceType::Invalid;
        }

        if bytes.iter().all(|&b| is_dna_symbol(b)) {
            SequenceType::Dna
        } else if bytes.iter().all(|&b| is_rna_symbol(b)) {
            SequenceType::Rna
        } else {
            SequenceType::Invalid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SequenceType::Dna => "DNA",
            SequenceType::Rna => "RNA",
            SequenceType::Invalid => "Invalid",
        }
    }

    /// The residue that separates the two alphabets: `T` for DNA, `U` for RNA.
    pub fn residue(&self) -> Option<char> {
        match self {
            SequenceType::Dna => Some('T'),
            SequenceType::Rna => Some('U'),
            SequenceType::Invalid => None,
        }
    }

    pub fn codons(&self) -> Option<CodonSet> {
        match self {
            SequenceType::Dna => Some(CodonSet {
                start: b"ATG",
                stops: DNA_STOP_CODONS,
            }),
            SequenceType::Rna => Some(CodonSet {
                start: b"AUG",
                stops: RNA_STOP_CODONS,
            }),
            SequenceType::Invalid => None,
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(sequence: &str) -> SequenceType {
    SequenceType::classify(sequence)
}

fn is_dna_symbol(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T') || AMBIGUITY_CODES.contains(&b)
}

fn is_rna_symbol(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'U') || AMBIGUITY_CODES.contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dna() {
        assert_eq!(classify("ATGCATGCATGC"), SequenceType::Dna);
        assert_eq!(classify("ACGTNRYKMSWBDHVXZ"), SequenceType::Dna);
    }

    #[test]
    fn test_classify_rna() {
        assert_eq!(classify("AUGCAUGCAUGC"), SequenceType::Rna);
        assert_eq!(classify("ACGUNRYKMSWBDHVXZ"), SequenceType::Rna);
    }

    #[test]
    fn test_neither_t_nor_u_is_dna() {
        // DNA check runs before the RNA check
        assert_eq!(classify("ACG"), SequenceType::Dna);
        assert_eq!(classify("GGCCAANN"), SequenceType::Dna);
    }

    #[test]
    fn test_mixed_t_and_u_is_invalid() {
        assert_eq!(classify("ATGCATGCU"), SequenceType::Invalid);
        assert_eq!(classify("UT"), SequenceType::Invalid);
    }

    #[test]
    fn test_empty_is_invalid() {
        assert_eq!(classify(""), SequenceType::Invalid);
    }

    #[test]
    fn test_foreign_symbols_are_invalid() {
        assert_eq!(classify("ACGT-ACGT"), SequenceType::Invalid);
        assert_eq!(classify("ACGTE"), SequenceType::Invalid);
        assert_eq!(classify("acgt"), SequenceType::Invalid);
        assert_eq!(classify("ACGTÅ"), SequenceType::Invalid);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let seq = "AUGNNUGA";
        assert_eq!(classify(seq), classify(seq));
    }

    #[test]
    fn test_codon_sets() {
        let dna = SequenceType::Dna.codons().unwrap();
        assert_eq!(dna.start, b"ATG");
        assert!(dna.is_stop(b"TGA"));
        assert!(!dna.is_stop(b"UGA"));

        let rna = SequenceType::Rna.codons().unwrap();
        assert_eq!(rna.start, b"AUG");
        assert!(rna.is_stop(b"UAG"));

        assert!(SequenceType::Invalid.codons().is_none());
    }
}
