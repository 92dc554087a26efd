use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex};

/// A seedable random-integer generator for reproducible sequences.
///
/// Uses the xoshiro256** PRNG. The free [`crate::random_between`] draws from
/// the process-wide thread RNG with no seeding control; this type exists for
/// callers (mostly tests) that need the same sequence twice.
///
/// # Examples
///
/// ```
/// use kitbag_numbers::SeededRandom;
///
/// let a = SeededRandom::new(Some([7u8; 32]));
/// let b = SeededRandom::new(Some([7u8; 32]));
/// assert_eq!(a.random_between(0, 100), b.random_between(0, 100));
/// ```
pub struct SeededRandom {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl SeededRandom {
    /// Create a generator with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        let rng = Xoshiro256StarStar::from_seed(seed);

        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Generate a random integer in `[min, max]` (inclusive).
    ///
    /// Reversed bounds are swapped, matching [`crate::random_between`].
    pub fn random_between(&self, min: i64, max: i64) -> i64 {
        if min == max {
            return min;
        }
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(lo..=hi)
    }

    /// Generate a random f64 in `[0, 1)`.
    pub fn random(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen::<f64>()
    }
}
