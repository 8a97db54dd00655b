//! CLI command definitions and handlers.

mod defaults;
mod entropy;
mod prng;

use clap::{Parser, Subcommand};
pub use defaults::DefaultsCommand;
pub use entropy::EntropyCommand;
pub use prng::PrngCommand;

/// Seedling - deterministic default mnemonics for simulated chains.
#[derive(Parser)]
#[command(name = "seedling")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve provider options, filling in seed and mnemonic.
    #[command(name = "defaults", alias = "options")]
    Defaults(DefaultsCommand),

    /// Print raw draws from a seeded generator.
    #[command(name = "prng")]
    Prng(PrngCommand),

    /// Show the entropy and mnemonic a supplied seed decodes to.
    #[command(name = "entropy")]
    Entropy(EntropyCommand),
}
