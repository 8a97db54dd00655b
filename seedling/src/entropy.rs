//! Entropy sampling and the entropy → mnemonic step.
//!
//! The byte mapping is fixed: byte `i` is `trunc(next_i * 255)`. The
//! multiplier is 255, not 256, so `0xff` never appears in sampled entropy.
//! Previously recorded seeds depend on this exact mapping.

use alloc::string::{String, ToString};

use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use crate::Result;
use crate::prng::Prng;
use crate::seed::ResolvedSeed;

/// Entropy bytes per mnemonic (128 bits, 12 words).
pub const ENTROPY_LEN: usize = 16;

/// Draw `N` bytes from `rng`, one draw per byte in order.
pub fn sample_bytes<const N: usize, P: Prng + ?Sized>(rng: &mut P) -> [u8; N] {
    let mut buf = [0u8; N];
    for byte in &mut buf {
        *byte = (rng.next_f64() * 255.0) as u8;
    }
    buf
}

/// Turns a [`ResolvedSeed`] into mnemonic entropy and words.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyMnemonicDeriver;

impl EntropyMnemonicDeriver {
    /// Sample the [`ENTROPY_LEN`] entropy bytes for `resolved`.
    ///
    /// A new generator is keyed for every call, so repeated calls with the
    /// same seed return the same bytes.
    pub fn entropy(resolved: &ResolvedSeed) -> Zeroizing<[u8; ENTROPY_LEN]> {
        let mut rng = resolved.algorithm().seed(resolved.value());
        Zeroizing::new(sample_bytes(&mut rng))
    }

    /// Derive the English mnemonic for `resolved`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Mnemonic`] if the entropy cannot be encoded.
    pub fn derive(resolved: &ResolvedSeed) -> Result<Zeroizing<String>> {
        Self::derive_in(Language::English, resolved)
    }

    /// Derive the mnemonic for `resolved` using the specified wordlist.
    ///
    /// See [`derive`](Self::derive) for details.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Mnemonic`] if the entropy cannot be encoded.
    pub fn derive_in(language: Language, resolved: &ResolvedSeed) -> Result<Zeroizing<String>> {
        let entropy = Self::entropy(resolved);
        let mnemonic = Mnemonic::from_entropy_in(language, entropy.as_slice())?;
        Ok(Zeroizing::new(mnemonic.to_string()))
    }
}
