//! Spread functions - distance of a glyph from the running origin.

use std::fmt;

use enum_dispatch::enum_dispatch;

/// Adjusts the base spread for one glyph.
#[enum_dispatch]
pub trait SpreadFunction {
    fn spread(&mut self, base: i32) -> i32;
}

/// Returns the base spread unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactSpread;

impl SpreadFunction for ExactSpread {
    fn spread(&mut self, base: i32) -> i32 {
        base
    }
}

/// Base spread jittered by up to half its magnitude either way.
#[derive(Clone, Debug)]
pub struct RandomSpread {
    rng: fastrand::Rng,
}

impl RandomSpread {
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for RandomSpread {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadFunction for RandomSpread {
    fn spread(&mut self, base: i32) -> i32 {
        let half = (base.unsigned_abs() / 2) as i64;
        let jitter = self.rng.i64(-half..=half);
        (base as i64 + jitter).clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }
}

/// All available spread functions.
#[enum_dispatch(SpreadFunction)]
#[derive(Clone, Debug)]
pub enum SpreadStrategy {
    ExactSpread,
    RandomSpread,
}

impl SpreadStrategy {
    /// One instance of every variant, in UI order; random ones seeded if `seed` is set.
    pub fn all(seed: Option<u64>) -> Vec<SpreadStrategy> {
        let random = seed.map_or_else(RandomSpread::new, RandomSpread::with_seed);
        vec![ExactSpread.into(), random.into()]
    }
}

impl Default for SpreadStrategy {
    fn default() -> Self {
        RandomSpread::new().into()
    }
}

impl fmt::Display for SpreadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpreadStrategy::ExactSpread(_) => f.write_str("Exact spread"),
            SpreadStrategy::RandomSpread(_) => f.write_str("Random spread"),
        }
    }
}
