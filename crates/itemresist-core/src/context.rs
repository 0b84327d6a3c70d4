//! Per-explosion inputs to the drop filter

use crate::power::{ExplosionSource, extract_power};
use crate::rng::{BlastRng, sanitize_draw};
use crate::survival::non_negative;

/// Blast power and random source for one explosion
///
/// Lives for a single filter pass. Concurrent explosions each need their own
/// context.
pub struct BlastContext<'a, R: BlastRng + ?Sized> {
    power: f32,
    rng: &'a mut R,
}

impl<'a, R: BlastRng + ?Sized> BlastContext<'a, R> {
    /// Negative or non-finite power is clamped to 0
    pub fn new(power: f32, rng: &'a mut R) -> Self {
        let clamped = non_negative(power);
        if clamped != power {
            log::debug!("Clamping blast power {} to {}", power, clamped);
        }
        Self {
            power: clamped,
            rng,
        }
    }

    /// Read the power once from the host explosion
    pub fn from_explosion<E: ExplosionSource + ?Sized>(explosion: &E, rng: &'a mut R) -> Self {
        Self::new(extract_power(explosion), rng)
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    /// Fresh uniform draw in [0, 1); call once per evaluated drop
    pub fn draw(&mut self) -> f32 {
        sanitize_draw(self.rng.next_draw())
    }
}
