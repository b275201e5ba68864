//! Stencil CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use stencil_cli::{Args, report};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:? = log_level; "Starting Stencil");
    debug!(args:? = args; "Parsed arguments");

    if let Err(err) = stencil_cli::run(&args) {
        report(&err);
        process::exit(1);
    }

    info!("Completed successfully");
}
