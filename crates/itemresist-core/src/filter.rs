//! Drop filter - decides which affected drops survive an explosion

use itemresist_materials::{MaterialId, Materials};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::{Classification, ClassificationSets};
use crate::context::BlastContext;
use crate::entity::AffectedDrop;
use crate::rng::BlastRng;
use crate::survival::{Outcome, survives};

/// Why a single drop was kept or removed
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropDecision {
    /// Not a block item, always kept
    NotABlock,
    ForcedSurvive(MaterialId),
    ForcedDestroy(MaterialId),
    /// Went through the survival roll
    Rolled {
        material: MaterialId,
        resistance: f32,
        draw: f32,
        outcome: Outcome,
    },
}

impl DropDecision {
    pub fn survives(&self) -> bool {
        match self {
            DropDecision::NotABlock | DropDecision::ForcedSurvive(_) => true,
            DropDecision::ForcedDestroy(_) => false,
            DropDecision::Rolled { outcome, .. } => outcome.is_survived(),
        }
    }
}

/// Tally of decisions made during one filter pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    pub not_blocks: usize,
    pub forced_survive: usize,
    pub forced_destroy: usize,
    pub rolled_survived: usize,
    pub rolled_destroyed: usize,
}

impl FilterReport {
    pub fn record(&mut self, decision: &DropDecision) {
        match decision {
            DropDecision::NotABlock => self.not_blocks += 1,
            DropDecision::ForcedSurvive(_) => self.forced_survive += 1,
            DropDecision::ForcedDestroy(_) => self.forced_destroy += 1,
            DropDecision::Rolled { outcome, .. } => match outcome {
                Outcome::Survives => self.rolled_survived += 1,
                Outcome::Destroyed => self.rolled_destroyed += 1,
            },
        }
    }

    pub fn total(&self) -> usize {
        self.survived() + self.destroyed()
    }

    pub fn survived(&self) -> usize {
        self.not_blocks + self.forced_survive + self.rolled_survived
    }

    pub fn destroyed(&self) -> usize {
        self.forced_destroy + self.rolled_destroyed
    }
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kept, {} destroyed (non-block {}, forced survive {}, forced destroy {}, rolled {}/{})",
            self.survived(),
            self.destroyed(),
            self.not_blocks,
            self.forced_survive,
            self.forced_destroy,
            self.rolled_survived,
            self.rolled_survived + self.rolled_destroyed
        )
    }
}

/// Combines the override sets with the survival roll
///
/// Holds only shared references; the sets and material table are never
/// mutated by a pass.
#[derive(Clone, Copy)]
pub struct DropFilter<'a> {
    sets: &'a ClassificationSets,
    materials: &'a Materials,
}

impl<'a> DropFilter<'a> {
    pub fn new(sets: &'a ClassificationSets, materials: &'a Materials) -> Self {
        Self { sets, materials }
    }

    /// Decide the fate of a single drop
    ///
    /// Only drops that reach the survival roll consume a random draw.
    pub fn decide<R: BlastRng + ?Sized>(
        &self,
        material: Option<MaterialId>,
        ctx: &mut BlastContext<'_, R>,
    ) -> DropDecision {
        let Some(material) = material else {
            return DropDecision::NotABlock;
        };

        match self.sets.classify(material) {
            Classification::ForceSurvive => DropDecision::ForcedSurvive(material),
            Classification::ForceDestroy => DropDecision::ForcedDestroy(material),
            Classification::Unclassified => {
                let resistance = self.materials.resistance(material);
                let draw = ctx.draw();
                DropDecision::Rolled {
                    material,
                    resistance,
                    draw,
                    outcome: survives(ctx.power(), resistance, draw),
                }
            }
        }
    }

    /// Remove non-surviving drops in place, preserving the order of survivors
    pub fn retain_survivors<D: AffectedDrop, R: BlastRng + ?Sized>(
        &self,
        drops: &mut Vec<D>,
        ctx: &mut BlastContext<'_, R>,
    ) -> FilterReport {
        let mut report = FilterReport::default();

        drops.retain(|drop| {
            let decision = self.decide(drop.material_id(), ctx);
            log::trace!("Drop decision: {:?}", decision);
            report.record(&decision);
            decision.survives()
        });

        log::debug!("Blast power {}: {}", ctx.power(), report);
        report
    }

    /// Surviving drops, in their original order
    pub fn filter<D: AffectedDrop, R: BlastRng + ?Sized>(
        &self,
        drops: impl IntoIterator<Item = D>,
        ctx: &mut BlastContext<'_, R>,
    ) -> Vec<D> {
        self.filter_with_report(drops, ctx).0
    }

    pub fn filter_with_report<D: AffectedDrop, R: BlastRng + ?Sized>(
        &self,
        drops: impl IntoIterator<Item = D>,
        ctx: &mut BlastContext<'_, R>,
    ) -> (Vec<D>, FilterReport) {
        let mut drops: Vec<D> = drops.into_iter().collect();
        let report = self.retain_survivors(&mut drops, ctx);
        (drops, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedDraw;

    struct CountingRng {
        draws: usize,
    }

    impl BlastRng for CountingRng {
        fn next_draw(&mut self) -> f32 {
            self.draws += 1;
            0.0
        }
    }

    #[test]
    fn test_non_block_kept_without_draw() {
        let sets = ClassificationSets::empty();
        let materials = Materials::new();
        let filter = DropFilter::new(&sets, &materials);
        let mut rng = CountingRng { draws: 0 };
        let mut ctx = BlastContext::new(0.0, &mut rng);

        assert_eq!(filter.decide(None, &mut ctx), DropDecision::NotABlock);
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn test_forced_decisions_skip_roll() {
        let sets = ClassificationSets::new([MaterialId::STONE], [MaterialId::DIRT]);
        let materials = Materials::new();
        let filter = DropFilter::new(&sets, &materials);
        let mut rng = CountingRng { draws: 0 };
        let mut ctx = BlastContext::new(100.0, &mut rng);

        let stone = filter.decide(Some(MaterialId::STONE), &mut ctx);
        let dirt = filter.decide(Some(MaterialId::DIRT), &mut ctx);

        assert_eq!(stone, DropDecision::ForcedDestroy(MaterialId::STONE));
        assert!(!stone.survives());
        assert_eq!(dirt, DropDecision::ForcedSurvive(MaterialId::DIRT));
        assert!(dirt.survives());
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn test_one_draw_per_rolled_drop() {
        let sets = ClassificationSets::empty();
        let materials = Materials::new();
        let filter = DropFilter::new(&sets, &materials);
        let mut rng = CountingRng { draws: 0 };
        let mut ctx = BlastContext::new(4.0, &mut rng);

        let drops = vec![
            Some(MaterialId::STONE),
            None,
            Some(MaterialId::SAND),
            Some(MaterialId::GLASS),
        ];
        filter.filter(drops, &mut ctx);
        assert_eq!(rng.draws, 3);
    }

    #[test]
    fn test_rolled_decision_records_inputs() {
        let sets = ClassificationSets::empty();
        let materials = Materials::new();
        let filter = DropFilter::new(&sets, &materials);
        let mut rng = FixedDraw::new(0.5);
        let mut ctx = BlastContext::new(4.0, &mut rng);

        match filter.decide(Some(MaterialId::STONE), &mut ctx) {
            DropDecision::Rolled {
                material,
                resistance,
                draw,
                outcome,
            } => {
                assert_eq!(material, MaterialId::STONE);
                assert_eq!(resistance, 6.0);
                assert_eq!(draw, 0.5);
                // 4 * 1.0 - 6.3 * 0.3 = 2.11
                assert_eq!(outcome, Outcome::Survives);
            }
            other => panic!("Expected rolled decision, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_power_destroys_unclassified() {
        let sets = ClassificationSets::new(std::iter::empty(), [MaterialId::OBSIDIAN]);
        let materials = Materials::new();
        let filter = DropFilter::new(&sets, &materials);
        let mut rng = FixedDraw::new(0.9);
        let mut ctx = BlastContext::new(0.0, &mut rng);

        let survivors = filter.filter(
            vec![
                Some(MaterialId::STONE),
                Some(MaterialId::TNT),
                Some(MaterialId::OBSIDIAN),
                None,
            ],
            &mut ctx,
        );
        assert_eq!(survivors, vec![Some(MaterialId::OBSIDIAN), None]);
    }

    #[test]
    fn test_report_counts() {
        let sets = ClassificationSets::new([MaterialId::BEDROCK], [MaterialId::DIRT]);
        let materials = Materials::new();
        let filter = DropFilter::new(&sets, &materials);
        let mut rng = FixedDraw::new(0.0);
        let mut ctx = BlastContext::new(1.0, &mut rng);

        let (survivors, report) = filter.filter_with_report(
            vec![
                None,
                Some(MaterialId::DIRT),
                Some(MaterialId::BEDROCK),
                Some(MaterialId::TNT),
                Some(MaterialId::OBSIDIAN),
            ],
            &mut ctx,
        );

        assert_eq!(survivors.len(), 3);
        assert_eq!(
            report,
            FilterReport {
                not_blocks: 1,
                forced_survive: 1,
                forced_destroy: 1,
                rolled_survived: 1,
                rolled_destroyed: 1,
            }
        );
        assert_eq!(report.total(), 5);
        assert_eq!(report.survived(), 3);
        assert_eq!(report.destroyed(), 2);
    }
}
