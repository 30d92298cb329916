use crate::cli::InputArgs;
use crate::commands::analyze;
use crate::config::Config;
use crate::types::Analysis;
use anyhow::Result;

pub fn run(input: InputArgs, config: &Config) -> Result<()> {
    analyze::run(input, Analysis::Stats, config)
}
