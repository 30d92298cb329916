use clap::Parser;
use fasta_orf_tools::cli::{self, Commands};
use fasta_orf_tools::commands;
use fasta_orf_tools::config::Config;
use fasta_orf_tools::utils::logging::init_logging;

fn main() {
    let args = cli::Args::parse();
    init_logging(args.verbose);

    let config = Config::load();

    let result = match args.command {
        Commands::Classify(input) => commands::classify::run(input, &config),
        Commands::Orfs(input) => commands::orfs::run(input, &config),
        Commands::Stats(input) => commands::stats::run(input, &config),
        Commands::Report(input) => commands::report::run(input, &config),
        Commands::InitConfig { force } => commands::init_config::run(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
