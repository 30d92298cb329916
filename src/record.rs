//! Extraction of sequences from FASTA records.

use crate::error::RecordError;
use bio::io::fasta::{self, FastaRead};
use std::io::{self, BufRead, BufReader, Read};

const TERMINATOR: u8 = b'*';

/// `bio` FASTA reader over normalized lines.
pub(crate) type RecordReader<R> = fasta::Reader<BufReader<NormalizedLines<BufReader<R>>>>;

pub(crate) fn record_reader<R: Read>(inner: R) -> RecordReader<R> {
    fasta::Reader::new(NormalizedLines::new(BufReader::new(inner)))
}

/// Line filter in front of the FASTA parser.
///
/// Every line is trimmed of surrounding whitespace and blank lines are
/// dropped, so indented headers and leading blank lines parse. Whitespace
/// between `>` and the header text is removed as well.
pub(crate) struct NormalizedLines<R> {
    inner: R,
    line: Vec<u8>,
    pos: usize,
}

impl<R: BufRead> NormalizedLines<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
            pos: 0,
        }
    }

    /// Load the next non-blank line; `false` at end of input.
    fn fill_line(&mut self) -> io::Result<bool> {
        let mut raw = Vec::new();
        loop {
            raw.clear();
            if self.inner.read_until(b'\n', &mut raw)? == 0 {
                return Ok(false);
            }

            let trimmed = trim_ascii_whitespace(&raw);
            if trimmed.is_empty() {
                continue;
            }

            self.line.clear();
            match trimmed.strip_prefix(b">") {
                Some(header) => {
                    self.line.push(b'>');
                    self.line.extend_from_slice(trim_ascii_whitespace(header));
                }
                None => self.line.extend_from_slice(trimmed),
            }
            self.line.push(b'\n');
            self.pos = 0;
            return Ok(true);
        }
    }
}

impl<R: BufRead> Read for NormalizedLines<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.line.len() && !self.fill_line()? {
            return Ok(0);
        }
        let n = buf.len().min(self.line.len() - self.pos);
        buf[..n].copy_from_slice(&self.line[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// One extracted FASTA record. `data` is uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub description: Option<String>,
    pub data: String,
}

impl Sequence {
    /// The header line without its leading `>`.
    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} {}", self.id, desc),
            None => self.id.clone(),
        }
    }
}

/// Build a [`Sequence`] from a parsed record.
///
/// Whitespace is dropped, then the leading run of letters is the sequence.
/// A `*` terminator right after it is accepted silently; anything else after
/// the letters is discarded with a warning.
pub fn sequence_from_record(record: &fasta::Record) -> Result<Sequence, RecordError> {
    if record.id().is_empty() {
        return Err(RecordError::EmptyHeader);
    }

    let residues: Vec<u8> = record
        .seq()
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let letters = residues
        .iter()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();

    if letters == 0 {
        return Err(RecordError::EmptySequence(record.id().to_string()));
    }

    let rest = &residues[letters..];
    let rest = rest.strip_prefix(&[TERMINATOR]).unwrap_or(rest);
    if !rest.is_empty() {
        tracing::warn!(
            record = record.id(),
            discarded = rest.len(),
            "ignoring characters after the sequence"
        );
    }

    let data: String = residues[..letters]
        .iter()
        .map(|b| b.to_ascii_uppercase() as char)
        .collect();

    Ok(Sequence {
        id: record.id().to_string(),
        description: record.desc().map(str::to_string),
        data,
    })
}

/// Read the next record from `reader`, or `None` at end of input.
pub(crate) fn next_sequence<R: Read>(
    reader: &mut RecordReader<R>,
) -> Result<Option<Sequence>, RecordError> {
    let mut record = fasta::Record::new();
    reader.read(&mut record)?;
    if record.is_empty() {
        // A bare '>' line reads the same as end of input; only a following
        // record tells them apart.
        reader.read(&mut record)?;
        if record.is_empty() {
            return Ok(None);
        }
        return Err(RecordError::EmptyHeader);
    }
    sequence_from_record(&record).map(Some)
}

/// Extract the sequence from a single FASTA record given as text.
pub fn extract_sequence(text: &str) -> Result<Sequence, RecordError> {
    if !text.trim_start().starts_with('>') {
        return Err(RecordError::MissingHeader);
    }

    let mut reader = record_reader(text.as_bytes());
    match next_sequence(&mut reader)? {
        Some(sequence) => Ok(sequence),
        None => Err(RecordError::EmptyHeader),
    }
}
