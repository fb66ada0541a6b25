//! Sentiscope CLI - compare structures by review sentiment.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let result = commands::load_engine(cli.corpus.as_deref(), cli.lexicon.as_deref()).and_then(
        |engine| match cli.command {
            Commands::List { json } => commands::list::run(&engine, json),

            Commands::Score { text, json } => commands::score::run(&engine, &text, json),

            Commands::Rate { structure, json } => commands::rate::run(&engine, &structure, json),

            Commands::Compare {
                left,
                right,
                detail,
                json,
            } => commands::compare::run(&engine, &left, &right, detail, json),
        },
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
