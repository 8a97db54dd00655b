//! Layered provider options: JSON file, then environment, then flags.

use std::fs;
use std::path::Path;

use seedling::{Flavor, ProviderOptions};

/// Read provider options from a JSON file.
///
/// Keys follow the camelCase layout (`seed`, `mnemonic`, `flavor`,
/// `subProviders`); missing keys take their defaults.
pub fn load(path: &Path) -> Result<ProviderOptions, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
    let options = serde_json::from_str(&raw)
        .map_err(|e| format!("invalid config {}: {e}", path.display()))?;
    log::debug!("loaded options from {}", path.display());
    Ok(options)
}

/// Values given on the command line or through `SEEDLING_*` variables.
#[derive(Debug, Default)]
pub struct Overrides {
    pub seed: Option<String>,
    pub mnemonic: Option<String>,
    pub flavor: Option<Flavor>,
    pub sub_providers: Vec<String>,
}

impl Overrides {
    /// Apply on top of `base`. Set values replace, unset values keep `base`.
    pub fn apply(self, mut base: ProviderOptions) -> ProviderOptions {
        if let Some(seed) = self.seed {
            base.seed = Some(seed);
        }
        if let Some(mnemonic) = self.mnemonic {
            base.mnemonic = Some(mnemonic);
        }
        if let Some(flavor) = self.flavor {
            base.flavor = flavor;
        }
        if !self.sub_providers.is_empty() {
            base.sub_providers = self.sub_providers;
        }
        base
    }
}
