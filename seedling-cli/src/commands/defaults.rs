//! Provider options defaulting command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use seedling::{Flavor, ProviderOptions};

use crate::config::{self, Overrides};

/// Resolve provider options, filling in seed and mnemonic.
#[derive(Args)]
pub struct DefaultsCommand {
    /// JSON file with base options.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed to derive the mnemonic from (fresh if omitted).
    #[arg(short, long, env = "SEEDLING_SEED")]
    seed: Option<String>,

    /// Mnemonic to use as is.
    #[arg(short, long, env = "SEEDLING_MNEMONIC")]
    mnemonic: Option<String>,

    /// Connector flavor (ethereum or tezos).
    #[arg(short, long, env = "SEEDLING_FLAVOR")]
    flavor: Option<Flavor>,

    /// Sub-provider to install (repeatable).
    #[arg(long = "sub-provider")]
    sub_providers: Vec<String>,

    /// Print the resolved options as JSON.
    #[arg(long)]
    json: bool,
}

impl DefaultsCommand {
    /// Execute the defaults command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let base = match &self.config {
            Some(path) => config::load(path)?,
            None => ProviderOptions::default(),
        };
        let supplied_seed = self.seed.is_some() || base.seed.as_deref().is_some_and(|s| !s.is_empty());

        let options = Overrides {
            seed: self.seed,
            mnemonic: self.mnemonic,
            flavor: self.flavor,
            sub_providers: self.sub_providers,
        }
        .apply(base)
        .with_os_defaults()?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&options)?);
        } else {
            print_options(&options, supplied_seed);
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_options(options: &ProviderOptions, supplied_seed: bool) {
    let seed = options.seed.as_deref().unwrap_or_default();
    let mnemonic = options.mnemonic.as_deref().unwrap_or_default();
    let origin = if supplied_seed { "(supplied)" } else { "(generated)" };

    println!();
    println!("      {}        {}", "Flavor".cyan().bold(), options.flavor);
    println!("      {}          {} {}", "Seed".cyan().bold(), seed.green(), origin.dimmed());
    println!("      {}      {}", "Mnemonic".cyan().bold(), mnemonic);
    if !options.sub_providers.is_empty() {
        println!("      {} {}", "Sub-providers".cyan().bold(), options.sub_providers.join(", "));
    }
    println!();
}
