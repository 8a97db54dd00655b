//! ARC4-based generator matching `seedrandom`'s default algorithm.
//!
//! The seed string is folded into a key of at most 256 entries, the RC4
//! permutation is scheduled from it, and the first 256 keystream bytes are
//! discarded. Floats are assembled from 48 to 53 bits of keystream so every
//! value has full double precision.

use alloc::vec::Vec;
use core::fmt;

use super::{Prng, TWO_POW_32};

/// Keystream bytes per float before extension.
const CHUNKS: usize = 6;

/// Denominator matching [`CHUNKS`] bytes, 256^6.
const START_DENOM: f64 = 281474976710656.0;

/// Numerator floor, 2^52.
const SIGNIFICANCE: u64 = 1 << 52;

/// Numerator ceiling, 2^53.
const OVERFLOW: u64 = 1 << 53;

/// RC4-drop[256] generator keyed by a seed string.
#[derive(Clone)]
pub struct Arc4 {
    i: u8,
    j: u8,
    s: [u8; 256],
}

impl Arc4 {
    /// Key a new generator from `seed`.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        let key = mix_key(seed);
        let mut rng = Self::from_key(&key);
        for _ in 0..256 {
            rng.byte();
        }
        rng
    }

    fn from_key(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };
        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(s[i]);
            s.swap(i, usize::from(j));
        }

        Self { i: 0, j: 0, s }
    }

    fn byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[usize::from(self.i)];
        self.j = self.j.wrapping_add(t);
        self.s.swap(usize::from(self.i), usize::from(self.j));
        let idx = self.s[usize::from(self.i)].wrapping_add(self.s[usize::from(self.j)]);
        self.s[usize::from(idx)]
    }

    /// Next `count` keystream bytes as a big-endian integer.
    fn take(&mut self, count: usize) -> u64 {
        let mut r = 0u64;
        for _ in 0..count {
            r = (r << 8) | u64::from(self.byte());
        }
        r
    }
}

/// Fold the UTF-16 code units of `seed` into an RC4 key.
///
/// Positions wrap at 256, and each code unit is smeared with 19 times the
/// entry it overwrites.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear = 0u32;
    for (pos, unit) in seed.encode_utf16().enumerate() {
        let slot = pos & 0xff;
        smear ^= u32::from(key.get(slot).copied().unwrap_or(0)) * 19;
        let mixed = (smear + u32::from(unit)) as u8;
        if slot < key.len() {
            key[slot] = mixed;
        } else {
            key.push(mixed);
        }
    }
    key
}

impl Prng for Arc4 {
    fn next_f64(&mut self) -> f64 {
        let mut n = self.take(CHUNKS);
        let mut d = START_DENOM;
        let mut x = 0u64;
        while n < SIGNIFICANCE {
            n = (n + x) << 8;
            d *= 256.0;
            x = self.take(1);
        }
        while n >= OVERFLOW {
            n >>= 1;
            d /= 2.0;
            x >>= 1;
        }
        (n + x) as f64 / d
    }

    fn int32(&mut self) -> i32 {
        self.take(4) as u32 as i32
    }

    fn quick(&mut self) -> f64 {
        self.take(4) as f64 / TWO_POW_32
    }

    fn double(&mut self) -> f64 {
        self.next_f64()
    }
}

impl fmt::Debug for Arc4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arc4").finish_non_exhaustive()
    }
}
