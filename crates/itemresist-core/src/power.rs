//! Blast power accessor
//!
//! The host keeps an explosion's radius private. Everything that needs the
//! value goes through [`extract_power`], which never fails.

use serde::{Deserialize, Serialize};

/// Host explosion object
pub trait ExplosionSource {
    /// Explosion radius, `None` when the host cannot provide it
    fn radius(&self) -> Option<f32>;
}

/// Plain explosion value for hosts that expose the radius directly
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub radius: Option<f32>,
}

impl Explosion {
    pub fn new(radius: f32) -> Self {
        Self {
            radius: Some(radius),
        }
    }

    /// Explosion whose radius could not be read
    pub fn unknown() -> Self {
        Self { radius: None }
    }
}

impl ExplosionSource for Explosion {
    fn radius(&self) -> Option<f32> {
        self.radius
    }
}

/// Blast power of an explosion, 0.0 when unavailable or invalid
pub fn extract_power<E: ExplosionSource + ?Sized>(explosion: &E) -> f32 {
    match explosion.radius() {
        Some(radius) if radius.is_finite() && radius >= 0.0 => radius,
        Some(radius) => {
            log::debug!("Explosion reported invalid radius {}, using 0", radius);
            0.0
        }
        None => {
            log::debug!("Explosion radius unavailable, using 0");
            0.0
        }
    }
}
