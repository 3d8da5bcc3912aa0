//! Dice rolled at the end of each turn in dice mode.

use fastrand::Rng;

/// A die with a configurable number of faces, backed by its own generator so
/// a seeded game replays the same rolls.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: Rng,
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice {
    /// Dice seeded from the system entropy source.
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Roll a value uniformly in `[1, faces]`. Returns `None` for a die with
    /// no faces.
    pub fn roll(&mut self, faces: u32) -> Option<u32> {
        if faces == 0 {
            return None;
        }
        Some(self.rng.u32(1..=faces))
    }
}
