//! monsync - monitor sync client
//!
//! A command-line tool for pushing monitor definitions to a monitoring
//! service and listing the monitors it knows about.

use clap::Parser;
use monsync::cli::args::{generate_completions, Cli, Commands};
use monsync::cli::init_logging;
use monsync::commands::{load_config, run_list, run_sync};
use monsync::config::Config;
use monsync::error::{AppError, ConfigError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Merge config before logging so a verbose setting from either source applies
    let config = load_config(&cli);
    let verbose = match &config {
        Ok(config) => config.general.verbose,
        Err(_) => cli.verbose,
    };
    init_logging(verbose);
    if let Ok(Config { source: Some(path), .. }) = &config {
        log::debug!("Loaded config from {}", path.display());
    }

    // Run the appropriate command
    let result = config.and_then(|config| run(&cli, &config));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        Commands::List => run_list(&config.api, cli.format),

        Commands::Sync(args) => run_sync(args, &config.api, cli.format, config.general.dry_run),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::MissingField(_)) => {
            eprintln!();
            eprintln!("Hint: Set the API host with --api-host or MONSYNC_API_HOST,");
            eprintln!("      or add 'host' under [api] in monsync.toml.");
        }
        AppError::Api(monsync::error::ApiError::Transport { .. }) => {
            eprintln!();
            eprintln!("Hint: Check network access to the API host.");
        }
        _ => {}
    }
}
