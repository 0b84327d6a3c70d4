//! RNG trait abstraction for blast evaluation
//!
//! Allows the drop filter to work with both:
//! - the host world's random source (anything implementing `rand::Rng`)
//! - a fixed draw, for replaying a known roll

/// Random source consumed by the survival roll
pub trait BlastRng {
    /// Generate random f32 in [0.0, 1.0)
    fn next_draw(&mut self) -> f32;
}

// Blanket implementation for any type implementing rand::Rng
// This covers ThreadRng as well as seeded generators like Xoshiro256StarStar
impl<T: ?Sized + rand::Rng> BlastRng for T {
    fn next_draw(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}

/// Random source that always yields the same draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedDraw(f32);

impl FixedDraw {
    /// Create a fixed draw, clamped into [0.0, 1.0)
    pub fn new(draw: f32) -> Self {
        Self(sanitize_draw(draw))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl BlastRng for FixedDraw {
    fn next_draw(&mut self) -> f32 {
        self.0
    }
}

/// Largest f32 strictly below 1.0
const MAX_DRAW: f32 = 1.0 - f32::EPSILON / 2.0;

/// Clamp a draw into the unit interval the attenuation formula expects
pub(crate) fn sanitize_draw(draw: f32) -> f32 {
    if draw.is_nan() {
        0.0
    } else {
        draw.clamp(0.0, MAX_DRAW)
    }
}
