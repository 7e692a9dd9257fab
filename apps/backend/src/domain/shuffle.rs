//! Seeded randomness for schedule generation.
//!
//! Every shuffle in the engine draws from an explicitly seeded ChaCha
//! generator so that schedule generation is reproducible: callers may pass
//! a seed, and when they don't, the drawn seed is returned so it can be
//! logged alongside the generated schedule.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Build a deterministic RNG from an optional caller-supplied seed.
///
/// Returns the generator together with the effective seed.
pub fn rng_for_seed(seed: Option<u64>) -> (ChaCha12Rng, u64) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (ChaCha12Rng::seed_from_u64(seed), seed)
}
