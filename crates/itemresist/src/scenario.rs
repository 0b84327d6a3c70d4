//! Blast scenarios loaded from RON files
//!
//! A scenario lists what an explosion caught, by name, so a drop set can be
//! replayed against different tags and seeds.

use anyhow::{Context, Result, bail};
use itemresist_core::{
    AffectedEntity, DetonateEvent, DropFilter, EntityId, Explosion, FilterReport, Item, ItemDrop,
    ItemStack, Materials, handle_detonate,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Something caught in the blast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScenarioEntity {
    /// Dropped block item, by material name
    Block(String, u32),
    /// Dropped non-block item
    Item(String, u32),
    /// Any other entity (mob, player, ...)
    Entity(String),
}

/// Top-level scenario definition loaded from RON files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlastScenario {
    /// Scenario name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Blast power; `None` replays an explosion whose power could not be read
    #[serde(default)]
    pub power: Option<f32>,

    /// Entities caught in the blast, in host order
    pub entities: Vec<ScenarioEntity>,
}

/// Named entity that made it through the blast
#[derive(Debug, Clone, PartialEq)]
pub struct Survivor {
    pub id: EntityId,
    pub label: String,
}

/// Outcome of replaying one scenario
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub power: f32,
    pub seed: u64,
    pub survivors: Vec<Survivor>,
    pub report: FilterReport,
}

impl BlastScenario {
    /// Load scenario from RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;

        let scenario = ron::from_str(&content)
            .with_context(|| format!("Failed to parse RON scenario: {}", path.display()))?;

        Ok(scenario)
    }

    /// Save scenario to RON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize scenario to RON")?;

        std::fs::write(path.as_ref(), ron).with_context(|| {
            format!("Failed to write scenario file: {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Build the host event; entity ids follow list order
    pub fn to_event(&self, materials: &Materials) -> Result<DetonateEvent<Explosion>> {
        let mut affected = Vec::with_capacity(self.entities.len());

        for (index, entity) in self.entities.iter().enumerate() {
            let id = EntityId(index as u64);
            let entity = match entity {
                ScenarioEntity::Block(name, count) => {
                    let Some(material) = materials.by_name(name) else {
                        bail!("Scenario {} references unknown block {}", self.name, name);
                    };
                    AffectedEntity::ItemDrop(ItemDrop::new(id, ItemStack::block(material, *count)))
                }
                ScenarioEntity::Item(name, count) => AffectedEntity::ItemDrop(ItemDrop::new(
                    id,
                    ItemStack::new(Item::Other(name.clone()), *count),
                )),
                ScenarioEntity::Entity(_) => AffectedEntity::Other { id },
            };
            affected.push(entity);
        }

        let explosion = match self.power {
            Some(power) => Explosion::new(power),
            None => Explosion::unknown(),
        };

        Ok(DetonateEvent::new(explosion, affected))
    }

    fn label(&self, id: EntityId) -> String {
        match self.entities.get(id.0 as usize) {
            Some(ScenarioEntity::Block(name, count)) => format!("{count}x {name} (block)"),
            Some(ScenarioEntity::Item(name, count)) => format!("{count}x {name}"),
            Some(ScenarioEntity::Entity(name)) => name.clone(),
            None => id.to_string(),
        }
    }

    /// Replay the scenario with a seeded random source
    pub fn run(&self, filter: &DropFilter<'_>, materials: &Materials, seed: u64) -> Result<ScenarioResult> {
        let mut event = self.to_event(materials)?;
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);

        log::info!(
            "Running scenario '{}' ({} entities, seed {})",
            self.name,
            event.affected_entities.len(),
            seed
        );

        let outcome = handle_detonate(&mut event, filter, &mut rng);

        let survivors = event
            .affected_entities
            .iter()
            .map(|entity| Survivor {
                id: entity.id(),
                label: self.label(entity.id()),
            })
            .collect();

        Ok(ScenarioResult {
            power: outcome.power,
            seed,
            survivors,
            report: outcome.report,
        })
    }
}
