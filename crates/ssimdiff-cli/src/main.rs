mod commands;
mod summary;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ssimdiff", about = "Structural similarity of two color images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Do not print error messages
    #[arg(short, long)]
    quiet: bool,

    #[command(flatten)]
    compare: commands::compare::CompareArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.compare.images.len() != 2 {
        println!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    }

    match commands::compare::run(&cli.compare) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
