//! Error types for seed resolution and mnemonic derivation.

use alloc::string::String;
use core::fmt;

/// Errors that can occur while defaulting provider options.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The ambient entropy source could not produce bytes for a fresh seed.
    Entropy(String),
    /// Entropy could not be encoded as a mnemonic.
    Mnemonic(bip39::Error),
    /// Flavor tag does not name a known connector.
    UnknownFlavor(String),
    /// Algorithm tag is neither `modern` nor `legacy`.
    UnknownAlgorithm(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy(msg) => write!(f, "entropy source unavailable: {msg}"),
            Self::Mnemonic(e) => write!(f, "mnemonic error: {e}"),
            Self::UnknownFlavor(flavor) => {
                write!(f, "unknown flavor '{flavor}', expected one of: ethereum, tezos")
            }
            Self::UnknownAlgorithm(tag) => {
                write!(f, "unknown algorithm '{tag}', expected one of: modern, legacy")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mnemonic(e) => Some(e),
            Self::Entropy(_) | Self::UnknownFlavor(_) | Self::UnknownAlgorithm(_) => None,
        }
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::Mnemonic(err)
    }
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        use alloc::string::ToString;
        Self::Entropy(err.to_string())
    }
}

/// A convenient Result type alias for seedling operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_bad_tag() {
        let err = Error::UnknownFlavor("solana".into());
        assert_eq!(
            err.to_string(),
            "unknown flavor 'solana', expected one of: ethereum, tezos"
        );
    }

    #[test]
    fn entropy_failure_keeps_message() {
        let err = Error::Entropy("device gone".into());
        assert!(err.to_string().contains("device gone"));
    }
}
