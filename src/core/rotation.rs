//! Rotation functions - the angle added to the running transform per glyph.

use std::f32::consts::TAU;
use std::fmt;

use enum_dispatch::enum_dispatch;
use log::trace;

/// Yields a rotation in radians for one glyph.
///
/// The character is part of the signature for uniformity; the built-in
/// variants ignore it.
#[enum_dispatch]
pub trait RotationFunction {
    fn rotation(&mut self, ch: char) -> f32;
}

/// Continuous random angle in [0, 2π).
#[derive(Clone, Debug)]
pub struct RandomRotation {
    rng: fastrand::Rng,
}

impl RandomRotation {
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for RandomRotation {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationFunction for RandomRotation {
    fn rotation(&mut self, _ch: char) -> f32 {
        self.rng.f32() * TAU
    }
}

/// One of the eight multiples of 45°, picked uniformly.
#[derive(Clone, Debug)]
pub struct Random45 {
    rng: fastrand::Rng,
}

impl Random45 {
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for Random45 {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationFunction for Random45 {
    fn rotation(&mut self, _ch: char) -> f32 {
        let degrees = self.rng.u32(0..8) * 45;
        trace!("rotation: {}", degrees);
        (degrees as f32).to_radians()
    }
}

/// All available rotation functions.
#[enum_dispatch(RotationFunction)]
#[derive(Clone, Debug)]
pub enum RotationStrategy {
    RandomRotation,
    Random45,
}

impl RotationStrategy {
    /// One instance of every variant, in UI order; seeded if `seed` is set.
    pub fn all(seed: Option<u64>) -> Vec<RotationStrategy> {
        match seed {
            Some(seed) => vec![RandomRotation::with_seed(seed).into(), Random45::with_seed(seed).into()],
            None => vec![RandomRotation::new().into(), Random45::new().into()],
        }
    }
}

impl Default for RotationStrategy {
    fn default() -> Self {
        Random45::new().into()
    }
}

impl fmt::Display for RotationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationStrategy::RandomRotation(_) => f.write_str("Random rotation"),
            RotationStrategy::Random45(_) => f.write_str("Random 45° increments"),
        }
    }
}
