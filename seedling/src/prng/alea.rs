//! Alea, Johannes Baagøe's multiply-with-carry generator over doubles.

use core::fmt;

use rand_core::RngCore;
use zeroize::Zeroizing;

use super::{Prng, TWO_POW_32, TWO_POW_NEG_32};
use crate::Result;

/// 2^-53.
const TWO_POW_NEG_53: f64 = 1.1102230246251565e-16;

/// Bytes of ambient entropy used to key a fresh generator.
const AMBIENT_KEY_LEN: usize = 16;

/// Alea generator keyed by a seed string.
#[derive(Clone)]
pub struct Alea {
    s0: f64,
    s1: f64,
    s2: f64,
    c: f64,
}

impl Alea {
    /// Key a new generator from `seed`.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        let mut mash = Mash::new();
        let mut s0 = mash.hash(" ");
        let mut s1 = mash.hash(" ");
        let mut s2 = mash.hash(" ");

        s0 -= mash.hash(seed);
        if s0 < 0.0 {
            s0 += 1.0;
        }
        s1 -= mash.hash(seed);
        if s1 < 0.0 {
            s1 += 1.0;
        }
        s2 -= mash.hash(seed);
        if s2 < 0.0 {
            s2 += 1.0;
        }

        Self { s0, s1, s2, c: 1.0 }
    }

    /// Key a new generator from ambient entropy.
    ///
    /// Draws 16 bytes from `source` and uses their hex encoding as the seed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Entropy`] if `source` cannot produce bytes.
    pub fn from_entropy<R: RngCore + ?Sized>(source: &mut R) -> Result<Self> {
        let mut key = Zeroizing::new([0u8; AMBIENT_KEY_LEN]);
        source.try_fill_bytes(&mut key[..])?;
        let seed = Zeroizing::new(hex::encode(&key[..]));
        Ok(Self::new(&seed))
    }
}

impl Prng for Alea {
    fn next_f64(&mut self) -> f64 {
        let t = 2091639.0 * self.s0 + self.c * TWO_POW_NEG_32;
        self.s0 = self.s1;
        self.s1 = self.s2;
        // 0 <= t < 2091640, so the cast truncates.
        self.c = f64::from(t as i32);
        self.s2 = t - self.c;
        self.s2
    }

    fn int32(&mut self) -> i32 {
        to_uint32(self.next_f64() * TWO_POW_32) as i32
    }

    fn quick(&mut self) -> f64 {
        self.next_f64()
    }

    fn double(&mut self) -> f64 {
        let high = self.next_f64();
        let low = self.next_f64();
        high + f64::from((low * 2097152.0) as i32) * TWO_POW_NEG_53
    }
}

impl fmt::Debug for Alea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alea").finish_non_exhaustive()
    }
}

/// Baagøe's Mash string hash. State carries over between calls.
struct Mash {
    n: f64,
}

impl Mash {
    const fn new() -> Self {
        Self { n: 4022871197.0 }
    }

    fn hash(&mut self, data: &str) -> f64 {
        for unit in data.encode_utf16() {
            self.n += f64::from(unit);
            let mut h = 0.02519603282416938 * self.n;
            self.n = f64::from(to_uint32(h));
            h -= self.n;
            h *= self.n;
            self.n = f64::from(to_uint32(h));
            h -= self.n;
            self.n += h * TWO_POW_32;
        }
        f64::from(to_uint32(self.n)) * TWO_POW_NEG_32
    }
}

/// Truncate a non-negative double and wrap it into 32 bits.
fn to_uint32(x: f64) -> u32 {
    x as u64 as u32
}
