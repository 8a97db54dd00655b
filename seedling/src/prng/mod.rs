//! Seeded pseudo-random generators compatible with `seedrandom`.
//!
//! Two families are kept side by side:
//!
//! - [`Alea`]: Johannes Baagøe's fast floating-point generator, used for
//!   seeds this crate generates itself.
//! - [`Arc4`]: the RC4-drop[256] generator that `seedrandom` uses by default,
//!   kept so previously recorded seeds keep decoding to the same stream.
//!
//! Both reproduce the reference JavaScript output bit for bit, including the
//! UTF-16 treatment of seed strings.

mod alea;
mod arc4;

use core::fmt;
use core::str::FromStr;

pub use alea::Alea;
pub use arc4::Arc4;

use crate::Error;

/// 2^-32, the scale both generators use for 32-bit fractions.
pub(crate) const TWO_POW_NEG_32: f64 = 2.3283064365386963e-10;

/// 2^32 as a float.
pub(crate) const TWO_POW_32: f64 = 4294967296.0;

/// A pull-based stream of pseudo-random numbers.
pub trait Prng {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Next value as a signed 32-bit integer.
    fn int32(&mut self) -> i32;

    /// Next value in `[0, 1)` with 32 bits of precision.
    fn quick(&mut self) -> f64;

    /// Next value in `[0, 1)` with 53 bits of precision.
    fn double(&mut self) -> f64;
}

/// Which generator family interprets a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Alea. Bound to seeds generated by this crate.
    Modern,
    /// ARC4. Bound to every caller-supplied seed.
    Legacy,
}

impl Algorithm {
    /// Build a fresh generator of this family keyed by `seed`.
    #[must_use]
    pub fn seed(self, seed: &str) -> Generator {
        match self {
            Self::Modern => Generator::Alea(Alea::new(seed)),
            Self::Legacy => Generator::Arc4(Arc4::new(seed)),
        }
    }

    /// Short identifier for CLI usage.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }

    /// Name of the underlying generator.
    #[must_use]
    pub const fn generator_name(self) -> &'static str {
        match self {
            Self::Modern => "alea",
            Self::Legacy => "arc4",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "modern" | "alea" => Ok(Self::Modern),
            "legacy" | "arc4" | "default" => Ok(Self::Legacy),
            _ => Err(Error::UnknownAlgorithm(s.into())),
        }
    }
}

/// A seeded generator of either family.
#[derive(Debug, Clone)]
pub enum Generator {
    /// Alea stream.
    Alea(Alea),
    /// ARC4 stream.
    Arc4(Arc4),
}

impl Generator {
    /// The family this generator belongs to.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Alea(_) => Algorithm::Modern,
            Self::Arc4(_) => Algorithm::Legacy,
        }
    }
}

impl Prng for Generator {
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::Alea(g) => g.next_f64(),
            Self::Arc4(g) => g.next_f64(),
        }
    }

    fn int32(&mut self) -> i32 {
        match self {
            Self::Alea(g) => g.int32(),
            Self::Arc4(g) => g.int32(),
        }
    }

    fn quick(&mut self) -> f64 {
        match self {
            Self::Alea(g) => g.quick(),
            Self::Arc4(g) => g.quick(),
        }
    }

    fn double(&mut self) -> f64 {
        match self {
            Self::Alea(g) => g.double(),
            Self::Arc4(g) => g.double(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_builds_matching_family() {
        assert_eq!(Algorithm::Modern.seed("x").algorithm(), Algorithm::Modern);
        assert_eq!(Algorithm::Legacy.seed("x").algorithm(), Algorithm::Legacy);
    }

    #[test]
    fn generator_dispatch_matches_direct_use() {
        let mut direct = Arc4::new("hello.");
        let mut tagged = Algorithm::Legacy.seed("hello.");
        for _ in 0..8 {
            assert_eq!(direct.next_f64().to_bits(), tagged.next_f64().to_bits());
        }
    }

    #[test]
    fn parse_algorithm_aliases() {
        assert_eq!("Modern".parse::<Algorithm>().unwrap(), Algorithm::Modern);
        assert_eq!("alea".parse::<Algorithm>().unwrap(), Algorithm::Modern);
        assert_eq!("ARC4".parse::<Algorithm>().unwrap(), Algorithm::Legacy);
        assert!(matches!(
            "xorshift".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn clone_snapshots_stream_position() {
        let mut rng = Algorithm::Modern.seed("snapshot");
        rng.next_f64();
        let mut fork = rng.clone();
        assert_eq!(rng.next_f64().to_bits(), fork.next_f64().to_bits());
    }
}
