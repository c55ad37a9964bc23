use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed integers.
///
/// Game targets and fallback picks are drawn through this trait so callers
/// can substitute a fixed sequence.
pub trait RandomSource {
    /// Returns a value in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

/// OS-seeded generator used by the binary.
#[derive(Debug, Clone)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}
