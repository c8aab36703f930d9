use clap::ValueEnum;
use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use std::fmt;

/// Random source a session spins with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Generator {
    /// Fast non-cryptographic PRNG
    Fast,
    /// Cryptographically secure generator
    Secure,
}

impl Generator {
    /// Builds the generator, seeded when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Box<dyn RngCore> {
        match (self, seed) {
            (Generator::Fast, Some(seed)) => Box::new(SmallRng::seed_from_u64(seed)),
            (Generator::Fast, None) => Box::new(SmallRng::from_entropy()),
            (Generator::Secure, Some(seed)) => Box::new(ChaCha20Rng::seed_from_u64(seed)),
            (Generator::Secure, None) => Box::new(OsRng),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Fast => f.write_str("fast PRNG"),
            Generator::Secure => f.write_str("secure RNG"),
        }
    }
}
