//! Main entry point for the bundlecfg CLI.
//!
//! - `config`: list, show, set or delete settings
//! - `completions`: generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = bundlecfg::init_logger(cli.verbose, cli.quiet);
    let log_level = logger.level();
    logger.install();

    let global = GlobalOptions {
        log_level,
        app_config: cli.app_config,
        user_config: cli.user_config,
        prefer_local: cli.prefer_local,
    };

    let result = match cli.command {
        cli::Command::Config(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !e.is_reported() {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
