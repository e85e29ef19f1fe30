//! mfsr-demo binary
//!
//! Steps a majority feedback shift register and prints its states.

use std::io::{self, Write};

use clap::Parser;
use mfsr_cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, stdout carries the register output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mfsr_demo=info,mfsr_cli=info,mfsr_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    mfsr_cli::run(&config, &mut out)?;
    out.flush()?;

    Ok(())
}
