//! gallery - CLI and JSON-lines server for the image gallery.
//!
//! A thin transport over `gallery-memory`: one-shot list/like commands
//! against a seed file, and a `serve` mode that keeps one store alive for
//! a whole stdin session.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{images, serve};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries JSON only
    init_logging(cli.verbose, cli.json_logs);

    let seed = cli.seed.as_deref();
    let result = match cli.command {
        Commands::Images(cmd) => images::handle(cmd, seed).await,
        Commands::Serve(args) => serve::run(args, seed).await,
    };

    if let Err(err) = result {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
