use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FASTA_ORF_LOG";

/// Install the stderr subscriber. `FASTA_ORF_LOG` takes precedence over the
/// verbosity flag.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
