//! Seed resolution and provenance-bound algorithm selection.
//!
//! A seed never travels alone: [`ResolvedSeed`] pairs the seed text with the
//! [`Algorithm`] that must decode it, and only [`SeedResolver`] can build one.
//!
//! | Seed provenance   | Algorithm            |
//! |-------------------|----------------------|
//! | supplied by caller | [`Algorithm::Legacy`] |
//! | generated here     | [`Algorithm::Modern`] |

use alloc::string::String;

use rand_core::RngCore;

use crate::Result;
use crate::prng::{Alea, Algorithm, Prng};

/// Length of freshly generated seeds.
pub const SEED_LEN: usize = 10;

/// Characters a fresh seed is drawn from.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A seed together with the algorithm its provenance dictates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedSeed {
    value: String,
    algorithm: Algorithm,
}

impl ResolvedSeed {
    pub(crate) fn new(value: String, algorithm: Algorithm) -> Self {
        Self { value, algorithm }
    }

    /// The seed text.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The algorithm bound to this seed.
    #[inline]
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether the seed was generated rather than supplied.
    #[inline]
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        matches!(self.algorithm, Algorithm::Modern)
    }

    /// Consume and return the seed text.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }
}

/// Decides the seed for a defaulting pass.
///
/// Holds the ambient entropy source used when no seed was supplied. Each
/// fresh seed keys its own generator from that source.
#[derive(Debug)]
pub struct SeedResolver<R> {
    source: R,
}

impl<R: RngCore> SeedResolver<R> {
    /// Create a resolver drawing fresh-seed entropy from `source`.
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    /// Resolve `existing` into a seed and its algorithm.
    ///
    /// A present, non-empty seed is kept and bound to
    /// [`Algorithm::Legacy`]. Otherwise a new [`SEED_LEN`]-character
    /// alphanumeric seed is generated and bound to [`Algorithm::Modern`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Entropy`] if a fresh seed is needed and the
    /// entropy source fails.
    pub fn resolve(&mut self, existing: Option<&str>) -> Result<ResolvedSeed> {
        match existing {
            Some(seed) if !seed.is_empty() => {
                log::debug!(
                    "using supplied seed with {} generator",
                    Algorithm::Legacy.generator_name()
                );
                Ok(ResolvedSeed::new(String::from(seed), Algorithm::Legacy))
            }
            _ => {
                let mut rng = Alea::from_entropy(&mut self.source)?;
                let value = random_alphanumeric(SEED_LEN, &mut rng);
                log::debug!(
                    "generated fresh {SEED_LEN}-character seed with {} generator",
                    Algorithm::Modern.generator_name()
                );
                Ok(ResolvedSeed::new(value, Algorithm::Modern))
            }
        }
    }

    /// Consume the resolver and return its entropy source.
    pub fn into_inner(self) -> R {
        self.source
    }
}

#[cfg(feature = "getrandom")]
impl SeedResolver<rand_core::OsRng> {
    /// Create a resolver backed by the operating system's RNG.
    pub const fn os() -> Self {
        Self::new(rand_core::OsRng)
    }
}

/// Draw `len` characters from the alphanumeric alphabet.
///
/// Character `i` is `ALPHABET[trunc(next_i * 62)]`.
pub fn random_alphanumeric<P: Prng + ?Sized>(len: usize, rng: &mut P) -> String {
    (0..len)
        .map(|_| {
            let idx = (rng.next_f64() * ALPHABET.len() as f64) as usize;
            char::from(ALPHABET[idx])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::prng::Arc4;
    use rand_core::impls;

    /// Entropy source that always yields the same byte.
    struct Fixed(u8);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            impls::next_u32_via_fill(self)
        }

        fn next_u64(&mut self) -> u64 {
            impls::next_u64_via_fill(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// Entropy source that is never available.
    struct Broken;

    impl RngCore for Broken {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
            Err(rand_core::Error::new("no entropy device"))
        }
    }

    #[test]
    fn supplied_seed_binds_legacy() {
        let mut resolver = SeedResolver::new(Fixed(0));
        let resolved = resolver.resolve(Some("ganache")).unwrap();
        assert_eq!(resolved.value(), "ganache");
        assert_eq!(resolved.algorithm(), Algorithm::Legacy);
        assert!(!resolved.is_fresh());
    }

    #[test]
    fn absent_seed_binds_modern() {
        let mut resolver = SeedResolver::new(Fixed(0));
        let resolved = resolver.resolve(None).unwrap();
        assert_eq!(resolved.algorithm(), Algorithm::Modern);
        assert!(resolved.is_fresh());
    }

    #[test]
    fn empty_seed_is_treated_as_absent() {
        let mut resolver = SeedResolver::new(Fixed(0));
        let resolved = resolver.resolve(Some("")).unwrap();
        assert_eq!(resolved.algorithm(), Algorithm::Modern);
        assert_eq!(resolved.value().len(), SEED_LEN);
    }

    #[test]
    fn fresh_seed_is_alphanumeric() {
        let mut resolver = SeedResolver::new(Fixed(0x5a));
        let resolved = resolver.resolve(None).unwrap();
        assert_eq!(resolved.value().len(), SEED_LEN);
        assert!(resolved.value().bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn fixed_source_gives_exact_seed() {
        // 16 zero bytes key Alea with "000...0" (32 hex digits).
        let mut resolver = SeedResolver::new(Fixed(0));
        let resolved = resolver.resolve(None).unwrap();
        assert_eq!(resolved.value(), "v8KdEcI5QS");
    }

    #[test]
    fn supplied_seed_does_not_touch_entropy() {
        let mut resolver = SeedResolver::new(Broken);
        assert!(resolver.resolve(Some("kept")).is_ok());
    }

    #[test]
    fn entropy_failure_propagates() {
        let mut resolver = SeedResolver::new(Broken);
        let err = resolver.resolve(None).unwrap_err();
        assert!(matches!(err, Error::Entropy(_)));
    }

    #[test]
    fn alphanumeric_reference_strings() {
        assert_eq!(random_alphanumeric(10, &mut Alea::new("hello.")), "dzdPTl1ezw");
        assert_eq!(random_alphanumeric(10, &mut Arc4::new("hello.")), "5XtODnzxxr");
    }
}
