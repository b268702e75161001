//! Random primitives shared by every shape generator.
//!
//! All randomness flows through the [`RandomSource`] trait so that the composer
//! and the runner can be driven by a seeded generator (reproducible output) or a
//! scripted source in tests. Only [`RandomSource::unit`] has to be provided; the
//! integer, color and opacity draws are derived from it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Lowest opacity a shape can be drawn with.
pub const MIN_OPACITY: f64 = 0.3;
/// Highest opacity a shape can be drawn with.
pub const MAX_OPACITY: f64 = 1.0;

/// A provider of uniformly distributed random values.
pub trait RandomSource {
    /// Returns a value uniformly drawn from `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Returns an integer uniformly drawn from the inclusive range `[min, max]`.
    ///
    /// Callers are expected to pass `min <= max`. A reversed range collapses to
    /// `min` instead of panicking.
    fn int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as f64;
        let offset = (self.unit() * span).floor() as i64;
        (min + offset).min(max)
    }

    /// Returns a color uniformly sampled over the full 24-bit space.
    fn color(&mut self) -> Color {
        Color(self.int(0, i64::from(Color::MAX)) as u32)
    }

    /// Returns an opacity in `[0.30, 1.00]` with two-decimal precision.
    fn opacity(&mut self) -> Opacity {
        let raw = MIN_OPACITY + self.unit() * (MAX_OPACITY - MIN_OPACITY);
        Opacity::new(raw)
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// A generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// A generator whose draws are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..=max)
    }
}

/// A 24-bit RGB color, rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    pub const MAX: u32 = 0xFF_FFFF;

    pub fn new(rgb: u32) -> Self {
        Self(rgb & Self::MAX)
    }

    pub fn rgb(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// An opacity value in `[0.30, 1.00]`, kept at two-decimal precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f64);

impl Opacity {
    /// Rounds `value` to two decimals and clamps it into the allowed range.
    pub fn new(value: f64) -> Self {
        let rounded = (value * 100.0).round() / 100.0;
        Self(rounded.clamp(MIN_OPACITY, MAX_OPACITY))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
