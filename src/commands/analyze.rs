use crate::analysis::{analyze_file, AnalysisOptions, FileReport};
use crate::cli::InputArgs;
use crate::config::Config;
use crate::export::{write_json, AnalysisExport};
use crate::types::{Analysis, OutputFormat};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Analyze every input file and write one report covering all of them.
pub fn run(input: InputArgs, analysis: Analysis, config: &Config) -> Result<()> {
    let format = input.format.unwrap_or(config.output_format);
    let options = AnalysisOptions {
        frame_anchor: input.frame_anchor.unwrap_or(config.frame_anchor),
    };

    let mut reports = Vec::with_capacity(input.fasta_files.len());
    for fasta_file in &input.fasta_files {
        let path = PathBuf::from(fasta_file);
        let progress = ProgressBarBuilder::new(format!("Reading {}", path.display()))
            .visible(config.show_progress)
            .with_tick(Duration::from_millis(120))
            .build()?;

        let report = analyze_file(&path, analysis, &options, progress)
            .with_context(|| format!("Failed to analyze {}", path.display()))?;
        reports.push(report);
    }

    match &input.output_file {
        Some(output_file) => {
            let file = File::create(Path::new(output_file))
                .with_context(|| format!("Failed to create {}", output_file))?;
            let mut writer = BufWriter::new(file);
            write_reports(&mut writer, &reports, format, &options)?;
            writer.flush()?;
            eprintln!("Report written to: {}", output_file);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_reports(&mut writer, &reports, format, &options)?;
        }
    }

    Ok(())
}

pub fn write_reports<W: Write>(
    writer: &mut W,
    reports: &[FileReport],
    format: OutputFormat,
    options: &AnalysisOptions,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let multiple = reports.len() > 1;
            for report in reports {
                if multiple {
                    writeln!(writer, "=== {} ===\n", report.path.display())?;
                }
                write!(writer, "{}", report)?;
                if multiple {
                    writeln!(writer)?;
                }
            }
        }
        OutputFormat::Json => {
            let exports: Vec<AnalysisExport> = reports
                .iter()
                .map(|report| AnalysisExport::from_report(report, options.frame_anchor.name()))
                .collect();
            write_json(writer, &exports)?;
        }
    }
    Ok(())
}
