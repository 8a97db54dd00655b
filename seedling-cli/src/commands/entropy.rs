//! Entropy replay for a supplied seed.

use clap::Args;
use colored::Colorize;
use seedling::{EntropyMnemonicDeriver, SeedResolver};

/// Show the entropy and mnemonic a supplied seed decodes to.
#[derive(Args)]
pub struct EntropyCommand {
    /// Seed to replay.
    #[arg(short, long, env = "SEEDLING_SEED")]
    seed: String,
}

impl EntropyCommand {
    /// Execute the entropy command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        if self.seed.is_empty() {
            return Err("seed must not be empty".into());
        }
        let resolved = SeedResolver::os().resolve(Some(self.seed.as_str()))?;
        let entropy = EntropyMnemonicDeriver::entropy(&resolved);
        let mnemonic = EntropyMnemonicDeriver::derive(&resolved)?;
        print_entropy(
            resolved.value(),
            resolved.algorithm().generator_name(),
            &hex::encode(&entropy[..]),
            &mnemonic,
        );
        Ok(())
    }
}

#[rustfmt::skip]
fn print_entropy(seed: &str, generator: &str, entropy: &str, mnemonic: &str) {
    println!();
    println!("      {}       {}", "Seed".cyan().bold(), seed);
    println!("      {}  {}", "Generator".cyan().bold(), generator);
    println!("      {}    {}", "Entropy".cyan().bold(), entropy.dimmed());
    println!("      {}   {}", "Mnemonic".cyan().bold(), mnemonic.green());
    println!();
}
