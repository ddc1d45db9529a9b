use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of randomness for schedule generation. Injected so tests can swap in
/// a deterministic implementation.
pub trait RandomSource {
    /// Generator backing the shuffles, `None` keeps every ordering as it is.
    fn rng(&mut self) -> Option<&mut dyn Rng>;
}

pub fn shuffle<T>(random: &mut dyn RandomSource, items: &mut [T]) {
    if let Some(rng) = random.rng() {
        items.shuffle(rng);
    }
}

pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn rng(&mut self) -> Option<&mut dyn Rng> {
        Some(&mut self.rng)
    }
}

/// Leaves every shuffle untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityRandom;

impl RandomSource for IdentityRandom {
    fn rng(&mut self) -> Option<&mut dyn Rng> {
        None
    }
}
