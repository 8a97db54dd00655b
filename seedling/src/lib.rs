//! # Seedling - Deterministic Default Mnemonics
//!
//! Derives a reproducible BIP-39 mnemonic for a simulated chain environment
//! when the caller did not supply one.
//!
//! ## Pipeline
//!
//! 1. [`SeedResolver`] picks the seed and binds the PRNG [`Algorithm`] to its
//!    provenance: freshly generated seeds use Alea, caller-supplied seeds use
//!    the legacy ARC4 generator.
//! 2. [`EntropyMnemonicDeriver`] draws 16 bytes from that generator and turns
//!    them into a 12-word phrase.
//! 3. [`ProviderOptions::with_defaults`] writes the seed and mnemonic back so
//!    the run can be replayed.
//!
//! # Example
//!
//! ```
//! use seedling::{EntropyMnemonicDeriver, SeedResolver};
//!
//! # fn main() -> seedling::Result<()> {
//! let mut resolver = SeedResolver::os();
//! let resolved = resolver.resolve(Some("hello."))?;
//!
//! let first = EntropyMnemonicDeriver::derive(&resolved)?;
//! let second = EntropyMnemonicDeriver::derive(&resolved)?;
//! assert_eq!(first, second);
//! assert_eq!(first.split_whitespace().count(), 12);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::unreadable_literal,
    clippy::many_single_char_names
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod entropy;
pub mod error;
pub mod options;
pub mod prng;
pub mod seed;

pub use entropy::{ENTROPY_LEN, EntropyMnemonicDeriver};
pub use error::{Error, Result};
pub use options::{Flavor, ProviderOptions};
pub use prng::{Alea, Algorithm, Arc4, Generator, Prng};
pub use seed::{ResolvedSeed, SEED_LEN, SeedResolver};

pub use rand_core;
