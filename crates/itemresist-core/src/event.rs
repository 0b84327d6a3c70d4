//! Explosion detonate hook
//!
//! Entry point the host calls once an explosion has collected the entities
//! it affects, before they are damaged.

use serde::{Deserialize, Serialize};

use crate::context::BlastContext;
use crate::entity::AffectedEntity;
use crate::filter::{DropFilter, FilterReport};
use crate::power::ExplosionSource;
use crate::rng::BlastRng;

/// Explosion together with the entities it reached
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetonateEvent<E> {
    pub explosion: E,
    pub affected_entities: Vec<AffectedEntity>,
}

impl<E: ExplosionSource> DetonateEvent<E> {
    pub fn new(explosion: E, affected_entities: Vec<AffectedEntity>) -> Self {
        Self {
            explosion,
            affected_entities,
        }
    }
}

/// What one detonate pass did
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetonateOutcome {
    /// Power the pass used, after the accessor default and clamping
    pub power: f32,
    pub report: FilterReport,
}

/// Remove block drops that do not survive the explosion
///
/// Blast power is read once per event. Non-item entities and non-block items
/// are left in place.
pub fn handle_detonate<E: ExplosionSource, R: BlastRng + ?Sized>(
    event: &mut DetonateEvent<E>,
    filter: &DropFilter<'_>,
    rng: &mut R,
) -> DetonateOutcome {
    let mut ctx = BlastContext::from_explosion(&event.explosion, rng);
    let report = filter.retain_survivors(&mut event.affected_entities, &mut ctx);
    DetonateOutcome {
        power: ctx.power(),
        report,
    }
}
