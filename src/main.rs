use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use hyperheaders::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        tracing::error!(error = %err, "failed to read stdin");
        return ExitCode::FAILURE;
    }

    match cli.render(&input) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "invalid header block");
            ExitCode::FAILURE
        }
    }
}
