//! mdoc CLI - Document builder.
//!
//! Provides commands for:
//! - `demo`: Render the showcase document to markdown and HTML files

mod commands;
mod error;
mod output;
mod showcase;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::DemoArgs;
use output::Output;

/// mdoc - Document builder.
#[derive(Parser)]
#[command(name = "mdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the showcase document.
    Demo(DemoArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Demo(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Demo(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
