//! Per-material override rules
//!
//! Two named block tags force a decision regardless of the survival roll:
//! `itemresist:force_resist` keeps a drop, `itemresist:force_explode` destroys
//! it. A material in both sets is kept.

use ahash::AHashSet;
use itemresist_materials::MaterialId;

/// Tag marking materials whose drops are always destroyed
pub const FORCE_EXPLODE_TAG: &str = "itemresist:force_explode";
/// Tag marking materials whose drops always survive
pub const FORCE_RESIST_TAG: &str = "itemresist:force_resist";

/// Override class of a material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    ForceSurvive,
    ForceDestroy,
    Unclassified,
}

/// The two override sets, resolved once at startup and shared read-only
#[derive(Clone, Debug, Default)]
pub struct ClassificationSets {
    force_destroy: AHashSet<MaterialId>,
    force_survive: AHashSet<MaterialId>,
}

impl ClassificationSets {
    pub fn new(
        force_destroy: impl IntoIterator<Item = MaterialId>,
        force_survive: impl IntoIterator<Item = MaterialId>,
    ) -> Self {
        Self {
            force_destroy: force_destroy.into_iter().collect(),
            force_survive: force_survive.into_iter().collect(),
        }
    }

    /// Sets with no overrides; every material goes through the survival roll
    pub fn empty() -> Self {
        Self::default()
    }

    /// Classify a material. ForceSurvive is checked first.
    pub fn classify(&self, material: MaterialId) -> Classification {
        if self.force_survive.contains(&material) {
            Classification::ForceSurvive
        } else if self.force_destroy.contains(&material) {
            Classification::ForceDestroy
        } else {
            Classification::Unclassified
        }
    }

    pub fn force_destroy(&self) -> &AHashSet<MaterialId> {
        &self.force_destroy
    }

    pub fn force_survive(&self) -> &AHashSet<MaterialId> {
        &self.force_survive
    }

    /// Materials listed in both sets (resolved as ForceSurvive)
    pub fn overlapping(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.force_survive
            .iter()
            .filter(|id| self.force_destroy.contains(*id))
            .copied()
    }
}
