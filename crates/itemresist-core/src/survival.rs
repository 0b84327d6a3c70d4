//! Blast attenuation roll
//!
//! Reproduces the per-block destructibility check the host runs when an
//! explosion ray passes through a solid block. All arithmetic stays in `f32`
//! so results match the host bit for bit.

use itemresist_materials::sanitize_resistance;

use crate::rng::sanitize_draw;

/// Lower bound of the random attenuation factor
pub const ATTENUATION_BASE: f32 = 0.7;
/// Width of the random attenuation factor
pub const ATTENUATION_SPREAD: f32 = 0.6;
/// Added to a material's resistance before scaling
pub const RESISTANCE_OFFSET: f32 = 0.3;
/// Scale applied to the offset resistance
pub const RESISTANCE_SCALE: f32 = 0.3;

/// Result of the survival roll for one drop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Survives,
    Destroyed,
}

impl Outcome {
    pub fn is_survived(self) -> bool {
        self == Outcome::Survives
    }
}

/// Blast magnitude after the random attenuation factor
pub fn attenuated_magnitude(power: f32, draw: f32) -> f32 {
    non_negative(power) * (ATTENUATION_BASE + sanitize_draw(draw) * ATTENUATION_SPREAD)
}

/// Blast magnitude left over after passing through a material
///
/// Zero-resistance materials subtract nothing.
pub fn remaining_magnitude(power: f32, resistance: f32, draw: f32) -> f32 {
    let mut f = attenuated_magnitude(power, draw);
    let resistance = sanitize_resistance(resistance);

    if resistance > 0.0 {
        f -= (resistance + RESISTANCE_OFFSET) * RESISTANCE_SCALE;
    }

    f
}

/// Whether a material with `resistance` survives a blast of `power`
///
/// `draw` must be a fresh uniform value in [0, 1) for every evaluated drop.
/// Negative or non-finite power is treated as 0. Negative or NaN resistance
/// is treated as 0 and infinite resistance as `f32::MAX`.
pub fn survives(power: f32, resistance: f32, draw: f32) -> Outcome {
    let f = remaining_magnitude(power, resistance, draw);
    if f.is_nan() || f <= 0.0 {
        Outcome::Destroyed
    } else {
        Outcome::Survives
    }
}

/// Clamp negative and non-finite inputs to 0
pub(crate) fn non_negative(value: f32) -> f32 {
    if !value.is_finite() || value < 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_zero_power_zero_resistance_destroyed() {
        for draw in [0.0, 0.25, 0.5, 0.999] {
            assert_eq!(survives(0.0, 0.0, draw), Outcome::Destroyed);
        }
    }

    #[test]
    fn test_zero_resistance_survives_any_blast() {
        // f = 10 * 0.7 = 7
        assert_eq!(survives(10.0, 0.0, 0.0), Outcome::Survives);
        assert!((remaining_magnitude(10.0, 0.0, 0.0) - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_resistance_reduces_magnitude() {
        // f = 7 - 10.3 * 0.3 = 3.91
        assert_eq!(survives(10.0, 10.0, 0.0), Outcome::Survives);
        assert!((remaining_magnitude(10.0, 10.0, 0.0) - 3.91).abs() < 1e-5);
    }

    #[test]
    fn test_weak_blast_destroyed_by_resistance() {
        // f = 0.7 - 3.09 = -2.39
        assert_eq!(survives(1.0, 10.0, 0.0), Outcome::Destroyed);
        assert!((remaining_magnitude(1.0, 10.0, 0.0) + 2.39).abs() < 1e-5);
    }

    #[test]
    fn test_draw_widens_magnitude() {
        let low = attenuated_magnitude(4.0, 0.0);
        let high = attenuated_magnitude(4.0, 0.999);
        assert!((low - 2.8).abs() < 1e-5);
        assert!(high > low);
        assert!(high < 4.0 * 1.3 + 1e-5);
    }

    #[test]
    fn test_matches_host_formula_bitwise() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(99);

        for _ in 0..1000 {
            let power: f32 = rng.gen_range(0.0..16.0);
            let resistance: f32 = rng.gen_range(0.0..20.0);
            let draw: f32 = rng.r#gen();

            let mut expected = power * (0.7_f32 + draw * 0.6_f32);
            if resistance > 0.0 {
                expected -= (resistance + 0.3_f32) * 0.3_f32;
            }

            assert_eq!(
                remaining_magnitude(power, resistance, draw).to_bits(),
                expected.to_bits()
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1234);

        for _ in 0..500 {
            let power: f32 = rng.gen_range(0.0..10.0);
            let resistance: f32 = rng.gen_range(0.0..10.0);
            let draw: f32 = rng.r#gen();
            assert_eq!(
                survives(power, resistance, draw),
                survives(power, resistance, draw)
            );
        }
    }

    #[test]
    fn test_monotonic_in_resistance() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(4321);

        for _ in 0..500 {
            let power: f32 = rng.gen_range(0.0..10.0);
            let draw: f32 = rng.r#gen();
            let mut resistances: Vec<f32> = (0..8).map(|_| rng.gen_range(0.0..15.0)).collect();
            resistances.push(0.0);
            resistances.sort_by(|a, b| a.total_cmp(b));

            let mut seen_destroyed = false;
            for resistance in resistances {
                let outcome = survives(power, resistance, draw);
                if seen_destroyed {
                    assert_eq!(outcome, Outcome::Destroyed);
                }
                seen_destroyed |= outcome == Outcome::Destroyed;
            }
        }
    }

    #[test]
    fn test_negative_inputs_clamped() {
        assert_eq!(survives(-5.0, 0.0, 0.5), Outcome::Destroyed);
        assert_eq!(
            remaining_magnitude(10.0, -3.0, 0.0),
            remaining_magnitude(10.0, 0.0, 0.0)
        );
        assert_eq!(survives(f32::NAN, 1.0, 0.5), Outcome::Destroyed);
    }

    #[test]
    fn test_infinite_inputs_clamped() {
        assert_eq!(survives(f32::INFINITY, f32::INFINITY, 0.0), Outcome::Destroyed);
        assert_eq!(survives(f32::INFINITY, 0.0, 0.5), Outcome::Destroyed);
        assert_eq!(survives(1.0, f32::INFINITY, 0.0), Outcome::Destroyed);
        assert!(remaining_magnitude(f32::INFINITY, f32::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_outcome_is_survived() {
        assert!(Outcome::Survives.is_survived());
        assert!(!Outcome::Destroyed.is_survived());
    }
}
