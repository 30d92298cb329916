use serde::{Deserialize, Serialize};

/// How candidate stop codons are framed relative to a start codon.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameAnchor {
    /// Every start codon opens its own frame, wherever it sits.
    #[default]
    #[value(name = "start")]
    Start,
    /// Only start codons at a multiple of 3 from position 0 are considered.
    #[value(name = "absolute")]
    Absolute,
}

impl FrameAnchor {
    pub fn accepts(&self, start: usize) -> bool {
        match self {
            FrameAnchor::Start => true,
            FrameAnchor::Absolute => start % 3 == 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FrameAnchor::Start => "start",
            FrameAnchor::Absolute => "absolute",
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

/// Which computations run for each record of a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Analysis {
    Classify,
    Orfs,
    Stats,
    Full,
}

impl Analysis {
    pub fn includes_orfs(&self) -> bool {
        matches!(self, Analysis::Orfs | Analysis::Full)
    }

    pub fn includes_stats(&self) -> bool {
        matches!(self, Analysis::Stats | Analysis::Full)
    }

    /// The batch summary is only reported alongside composition stats.
    pub fn includes_summary(&self) -> bool {
        self.includes_stats()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Analysis::Classify => "classify",
            Analysis::Orfs => "orfs",
            Analysis::Stats => "stats",
            Analysis::Full => "report",
        }
    }
}
