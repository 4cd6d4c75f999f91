use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of randomness for generating wirings and pairings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Reproducible: the same value always yields the same wiring
    Fixed(u64),
    /// Drawn from system entropy, different on every construction
    Entropy,
}

impl Seed {
    pub fn rng(self) -> StdRng {
        match self {
            Seed::Fixed(value) => StdRng::seed_from_u64(value),
            Seed::Entropy => StdRng::from_entropy(),
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Fixed(value)
    }
}
