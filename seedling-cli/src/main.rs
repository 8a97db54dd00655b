//! Seedling - deterministic default mnemonics for simulated chains.
//!
//! Resolve provider options, inspect seeded generators, and replay the
//! entropy behind a recorded seed.

mod commands;
mod config;

use clap::Parser;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Defaults(cmd) => cmd.execute()?,
        Commands::Prng(cmd) => cmd.execute()?,
        Commands::Entropy(cmd) => cmd.execute()?,
    }
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` selects debug and `-vv` trace.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
