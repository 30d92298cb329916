use thiserror::Error;

/// Failures while turning FASTA text into sequences.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record does not start with a '>' header line")]
    MissingHeader,

    #[error("record header is empty")]
    EmptyHeader,

    #[error("record '{0}' has no sequence characters")]
    EmptySequence(String),

    #[error("failed to read FASTA record")]
    Io(#[from] std::io::Error),
}
