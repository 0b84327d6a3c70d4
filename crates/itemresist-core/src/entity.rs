//! Host entities caught in an explosion

use itemresist_materials::MaterialId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle the host uses to identify (and remove) an entity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Item carried by a stack
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Item {
    /// Item that places a block
    Block(MaterialId),
    /// Any other item (tools, food, ...)
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Item,
    pub count: u32,
}

impl ItemStack {
    pub fn new(item: Item, count: u32) -> Self {
        Self { item, count }
    }

    pub fn block(material: MaterialId, count: u32) -> Self {
        Self::new(Item::Block(material), count)
    }
}

/// Dropped item stack lying in the world
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDrop {
    pub id: EntityId,
    pub stack: ItemStack,
}

impl ItemDrop {
    pub fn new(id: EntityId, stack: ItemStack) -> Self {
        Self { id, stack }
    }
}

/// Anything the host reports as affected by a blast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AffectedEntity {
    ItemDrop(ItemDrop),
    /// Mobs, players, projectiles... never touched by the filter
    Other { id: EntityId },
}

impl AffectedEntity {
    pub fn id(&self) -> EntityId {
        match self {
            AffectedEntity::ItemDrop(drop) => drop.id,
            AffectedEntity::Other { id } => *id,
        }
    }
}

/// An entity the drop filter can inspect
pub trait AffectedDrop {
    /// Block material carried by this drop, if it is a placeable block item
    fn material_id(&self) -> Option<MaterialId>;
}

impl AffectedDrop for ItemStack {
    fn material_id(&self) -> Option<MaterialId> {
        match self.item {
            Item::Block(material) => Some(material),
            Item::Other(_) => None,
        }
    }
}

impl AffectedDrop for ItemDrop {
    fn material_id(&self) -> Option<MaterialId> {
        self.stack.material_id()
    }
}

impl AffectedDrop for AffectedEntity {
    fn material_id(&self) -> Option<MaterialId> {
        match self {
            AffectedEntity::ItemDrop(drop) => drop.material_id(),
            AffectedEntity::Other { .. } => None,
        }
    }
}

impl AffectedDrop for Option<MaterialId> {
    fn material_id(&self) -> Option<MaterialId> {
        *self
    }
}

impl AffectedDrop for MaterialId {
    fn material_id(&self) -> Option<MaterialId> {
        Some(*self)
    }
}
