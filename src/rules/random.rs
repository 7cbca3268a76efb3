//! Injectable source of uniform samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Production source backed by `StdRng`.
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// Seeded when `seed` is given (reproducible runs), otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl RandomSource for RngSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed list of samples. Panics on a draw past the end, which
/// makes "no sample was drawn" assertable.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    samples: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.samples.pop_front().expect("unexpected random draw")
    }
}
