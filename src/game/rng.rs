//! Deterministic random source for the simulation.
//!
//! Every random decision in a run (food placement, random spawn cells) draws
//! from one [`SeededRng`] in a fixed order, so a seed fully determines a run.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A run seed, given either as a number or as free text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    /// Numeric form fed to the generator. Text is hashed with 64-bit FNV-1a.
    ///
    /// The generator behind it is `SmallRng`, so a seed replays a run only on
    /// the same target width and `rand` release.
    pub fn to_u64(&self) -> u64 {
        match self {
            Seed::Number(value) => *value,
            Seed::Text(text) => fnv1a64(text.as_bytes()),
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes.iter().fold(OFFSET, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}

/// Sequential random stream owned by the engine
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    inner: SmallRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the configured value, or from entropy when there is none
    pub fn from_seed(seed: Option<&Seed>) -> Self {
        match seed {
            Some(seed) => Self::new(seed.to_u64()),
            None => {
                let seed: u64 = rand::random();
                warn!(seed, "no seed configured, run is not reproducible");
                Self::new(seed)
            }
        }
    }

    /// The numeric seed this stream started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`; `len` must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Index drawn proportionally to `weights`, or `None` if every weight is zero
    pub fn weighted_index(&mut self, weights: &[u32]) -> Option<usize> {
        let distribution = WeightedIndex::new(weights).ok()?;
        Some(distribution.sample(&mut self.inner))
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
