//! Provider options and the mnemonic defaulting pass.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand_core::RngCore;

use crate::entropy::EntropyMnemonicDeriver;
use crate::seed::SeedResolver;
use crate::{Error, Result};

/// Connector family a provider is built for.
///
/// Only the tag lives here; constructing the connector is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Flavor {
    /// Ethereum simulator.
    #[default]
    Ethereum,
    /// Tezos simulator.
    Tezos,
}

impl Flavor {
    /// Short identifier, as used in config files and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Tezos => "tezos",
        }
    }

    /// All known flavors.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ethereum, Self::Tezos]
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Flavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ethereum" | "eth" => Ok(Self::Ethereum),
            "tezos" | "xtz" => Ok(Self::Tezos),
            _ => Err(Error::UnknownFlavor(s.into())),
        }
    }
}

/// Options for building a simulated chain provider.
///
/// Only `seed` and `mnemonic` are filled in by [`with_defaults`]; the other
/// fields are carried through as given.
///
/// [`with_defaults`]: ProviderOptions::with_defaults
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ProviderOptions {
    /// Seed the default mnemonic is derived from.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub seed: Option<String>,
    /// BIP-39 mnemonic for the provider's accounts.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mnemonic: Option<String>,
    /// Connector family.
    pub flavor: Flavor,
    /// Installed sub-providers, passed through untouched.
    pub sub_providers: Vec<String>,
}

impl ProviderOptions {
    /// Options with the given seed and nothing else set.
    #[must_use]
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: Some(seed.into()),
            ..Self::default()
        }
    }

    /// Whether a non-empty mnemonic is already present.
    #[must_use]
    pub fn has_mnemonic(&self) -> bool {
        self.mnemonic.as_deref().is_some_and(|m| !m.is_empty())
    }

    /// Fill in `seed` and `mnemonic` if they are absent.
    ///
    /// The seed is always resolved and written back, so the result can be
    /// replayed by passing the recorded seed on a later run. The mnemonic is
    /// derived only when none was supplied; an existing one is kept as is.
    /// Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if a fresh seed is needed and `resolver`'s
    /// entropy source fails.
    pub fn with_defaults<R: RngCore>(mut self, resolver: &mut SeedResolver<R>) -> Result<Self> {
        let resolved = resolver.resolve(self.seed.as_deref())?;

        if self.has_mnemonic() {
            log::trace!("mnemonic supplied, skipping derivation");
        } else {
            let phrase = EntropyMnemonicDeriver::derive(&resolved)?;
            self.mnemonic = Some(String::from(phrase.as_str()));
            log::debug!(
                "derived default mnemonic with {} generator",
                resolved.algorithm().generator_name()
            );
        }

        self.seed = Some(resolved.into_value());
        Ok(self)
    }

    /// [`with_defaults`](Self::with_defaults) using the operating system's RNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the OS RNG is unavailable.
    #[cfg(feature = "getrandom")]
    pub fn with_os_defaults(self) -> Result<Self> {
        self.with_defaults(&mut SeedResolver::os())
    }
}

impl fmt::Debug for ProviderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderOptions")
            .field("seed", &self.seed)
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "[REDACTED]"))
            .field("flavor", &self.flavor)
            .field("sub_providers", &self.sub_providers)
            .finish()
    }
}
