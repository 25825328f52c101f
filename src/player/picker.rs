//! Random selection for `PLAY_RANDOM`
//!
//! The trait lets tests swap in a deterministic picker.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index among `len` candidates
pub trait VideoPicker {
    /// Pick an index in `0..len`, or None when there is nothing to pick
    fn pick(&mut self, len: usize) -> Option<usize>;
}

/// Uniform random picker backed by `rand`
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Picker with a fixed seed, for reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}
