use crate::types::{FrameAnchor, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log debug output to stderr (overridden by FASTA_ORF_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
pub struct InputArgs {
    /// FASTA files to analyze (plain or compressed)
    #[arg(required = true)]
    pub fasta_files: Vec<String>,

    /// Output format (default from config, otherwise text)
    #[arg(short = 'f', long = "format")]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<String>,

    /// Frame anchoring for stop codon search (default from config, otherwise start)
    #[arg(long)]
    pub frame_anchor: Option<FrameAnchor>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify each record as DNA, RNA or Invalid
    Classify(InputArgs),

    /// List the open reading frames of each record
    Orfs(InputArgs),

    /// Composition statistics per record plus a per-file summary
    Stats(InputArgs),

    /// Type, ORFs and statistics for each record plus a per-file summary
    Report(InputArgs),

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
