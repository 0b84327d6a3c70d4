//! Material definitions and registry

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Namespace assumed for material names that carry none
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Identifier of a placeable block material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

impl MaterialId {
    pub const AIR: MaterialId = MaterialId(0);

    // Natural terrain
    pub const STONE: MaterialId = MaterialId(1);
    pub const DIRT: MaterialId = MaterialId(2);
    pub const GRASS_BLOCK: MaterialId = MaterialId(3);
    pub const SAND: MaterialId = MaterialId(4);
    pub const GRAVEL: MaterialId = MaterialId(5);
    pub const NETHERRACK: MaterialId = MaterialId(6);
    pub const END_STONE: MaterialId = MaterialId(7);
    pub const BEDROCK: MaterialId = MaterialId(8);

    // Building blocks
    pub const COBBLESTONE: MaterialId = MaterialId(9);
    pub const OAK_LOG: MaterialId = MaterialId(10);
    pub const OAK_PLANKS: MaterialId = MaterialId(11);
    pub const OAK_LEAVES: MaterialId = MaterialId(12);
    pub const GLASS: MaterialId = MaterialId(13);
    pub const WHITE_WOOL: MaterialId = MaterialId(14);
    pub const GLOWSTONE: MaterialId = MaterialId(15);
    pub const TORCH: MaterialId = MaterialId(16);

    // Blast resistant
    pub const OBSIDIAN: MaterialId = MaterialId(17);
    pub const CRYING_OBSIDIAN: MaterialId = MaterialId(18);
    pub const ANCIENT_DEBRIS: MaterialId = MaterialId(19);
    pub const ANVIL: MaterialId = MaterialId(20);
    pub const ENCHANTING_TABLE: MaterialId = MaterialId(21);

    // Storage blocks
    pub const IRON_BLOCK: MaterialId = MaterialId(22);
    pub const GOLD_BLOCK: MaterialId = MaterialId(23);
    pub const DIAMOND_BLOCK: MaterialId = MaterialId(24);

    // Special
    pub const TNT: MaterialId = MaterialId(25);
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Definition of a material's properties
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    pub id: MaterialId,
    pub name: String,

    /// Resistance against explosions (0.0 = no resistance)
    pub blast_resistance: f32,
    /// Can exist as a placed block (false for air and unregistered slots)
    pub placeable: bool,
}

impl Default for MaterialDef {
    fn default() -> Self {
        Self {
            id: MaterialId::AIR,
            name: "unknown".to_string(),
            blast_resistance: 0.0,
            placeable: false,
        }
    }
}

impl MaterialDef {
    /// A placeable block with the given blast resistance
    pub fn block(id: MaterialId, name: &str, blast_resistance: f32) -> Self {
        Self {
            id,
            name: name.to_string(),
            blast_resistance,
            placeable: true,
        }
    }
}

/// Registry of all materials
#[derive(Clone, Debug)]
pub struct Materials {
    materials: Vec<MaterialDef>,
    by_name: HashMap<String, MaterialId>,
}

impl Materials {
    pub fn new() -> Self {
        let mut materials = Self::empty();
        materials.register_defaults();
        materials
    }

    /// Registry containing only air
    pub fn empty() -> Self {
        let mut materials = Self {
            materials: Vec::new(),
            by_name: HashMap::new(),
        };
        materials.register(MaterialDef {
            id: MaterialId::AIR,
            name: "air".to_string(),
            ..Default::default()
        });
        materials
    }

    fn register_defaults(&mut self) {
        // Natural terrain
        self.register(MaterialDef::block(MaterialId::STONE, "stone", 6.0));
        self.register(MaterialDef::block(MaterialId::DIRT, "dirt", 0.5));
        self.register(MaterialDef::block(MaterialId::GRASS_BLOCK, "grass_block", 0.6));
        self.register(MaterialDef::block(MaterialId::SAND, "sand", 0.5));
        self.register(MaterialDef::block(MaterialId::GRAVEL, "gravel", 0.6));
        self.register(MaterialDef::block(MaterialId::NETHERRACK, "netherrack", 0.4));
        self.register(MaterialDef::block(MaterialId::END_STONE, "end_stone", 9.0));
        self.register(MaterialDef::block(MaterialId::BEDROCK, "bedrock", 3_600_000.0));

        // Building blocks
        self.register(MaterialDef::block(MaterialId::COBBLESTONE, "cobblestone", 6.0));
        self.register(MaterialDef::block(MaterialId::OAK_LOG, "oak_log", 2.0));
        self.register(MaterialDef::block(MaterialId::OAK_PLANKS, "oak_planks", 3.0));
        self.register(MaterialDef::block(MaterialId::OAK_LEAVES, "oak_leaves", 0.2));
        self.register(MaterialDef::block(MaterialId::GLASS, "glass", 0.3));
        self.register(MaterialDef::block(MaterialId::WHITE_WOOL, "white_wool", 0.8));
        self.register(MaterialDef::block(MaterialId::GLOWSTONE, "glowstone", 0.3));
        self.register(MaterialDef::block(MaterialId::TORCH, "torch", 0.0));

        // Blast resistant
        self.register(MaterialDef::block(MaterialId::OBSIDIAN, "obsidian", 1200.0));
        self.register(MaterialDef::block(
            MaterialId::CRYING_OBSIDIAN,
            "crying_obsidian",
            1200.0,
        ));
        self.register(MaterialDef::block(
            MaterialId::ANCIENT_DEBRIS,
            "ancient_debris",
            1200.0,
        ));
        self.register(MaterialDef::block(MaterialId::ANVIL, "anvil", 1200.0));
        self.register(MaterialDef::block(
            MaterialId::ENCHANTING_TABLE,
            "enchanting_table",
            1200.0,
        ));

        // Storage blocks
        self.register(MaterialDef::block(MaterialId::IRON_BLOCK, "iron_block", 6.0));
        self.register(MaterialDef::block(MaterialId::GOLD_BLOCK, "gold_block", 6.0));
        self.register(MaterialDef::block(MaterialId::DIAMOND_BLOCK, "diamond_block", 6.0));

        // TNT offers no resistance at all
        self.register(MaterialDef::block(MaterialId::TNT, "tnt", 0.0));
    }

    /// Register (or replace) a material definition
    pub fn register(&mut self, material: MaterialDef) {
        let id = material.id.0 as usize;

        // Ensure vec is large enough
        if self.materials.len() <= id {
            self.materials.resize(id + 1, MaterialDef::default());
        }

        if let Some(previous) = self.materials.get(id) {
            if previous.name != material.name && self.by_name.get(&previous.name) == Some(&material.id)
            {
                self.by_name.remove(&previous.name);
            }
        }

        // A name maps to exactly one id; the previous owner is unregistered
        if let Some(&owner) = self.by_name.get(&material.name) {
            if owner != material.id {
                log::warn!(
                    "Material name {} moves from {} to {}, unregistering {}",
                    material.name,
                    owner,
                    material.id,
                    owner
                );
                if let Some(slot) = self.materials.get_mut(owner.0 as usize) {
                    *slot = MaterialDef::default();
                }
            }
        }

        if !material.blast_resistance.is_finite() || material.blast_resistance < 0.0 {
            log::warn!(
                "Material {} has invalid blast resistance {}, clamping",
                material.name,
                material.blast_resistance
            );
        }

        self.by_name.insert(material.name.clone(), material.id);
        self.materials[id] = MaterialDef {
            blast_resistance: sanitize_resistance(material.blast_resistance),
            ..material
        };
    }

    /// Get material definition by ID (unregistered IDs resolve to air)
    pub fn get(&self, id: MaterialId) -> &MaterialDef {
        self.materials
            .get(id.0 as usize)
            .unwrap_or(&self.materials[0])
    }

    /// Blast resistance of a material, 0.0 for unregistered IDs
    pub fn resistance(&self, id: MaterialId) -> f32 {
        self.get(id).blast_resistance
    }

    /// Whether the ID refers to a registered, placeable block
    pub fn is_placeable(&self, id: MaterialId) -> bool {
        self.get(id).placeable
    }

    /// Look up a material by name
    ///
    /// Accepts both bare names (`stone`) and names in the default
    /// namespace (`minecraft:stone`).
    pub fn by_name(&self, name: &str) -> Option<MaterialId> {
        if let Some(id) = self.by_name.get(name) {
            return Some(*id);
        }

        match name.split_once(':') {
            Some((DEFAULT_NAMESPACE, path)) => self.by_name.get(path).copied(),
            Some(_) => None,
            None => self
                .by_name
                .get(&format!("{DEFAULT_NAMESPACE}:{name}"))
                .copied(),
        }
    }

    /// Iterate over all registered placeable materials
    pub fn iter(&self) -> impl Iterator<Item = &MaterialDef> {
        self.materials.iter().filter(|def| def.placeable)
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a blast resistance into the finite, non-negative range
///
/// Negative and NaN values become 0. Infinity becomes `f32::MAX`, which is
/// still larger than any blast can overcome.
pub fn sanitize_resistance(resistance: f32) -> f32 {
    if resistance.is_nan() || resistance < 0.0 {
        0.0
    } else {
        resistance.min(f32::MAX)
    }
}
