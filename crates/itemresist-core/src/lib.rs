//! Explosion drop filtering
//!
//! Decides which item drops caught in an explosion are destroyed and which
//! persist:
//! - per-material overrides from two block tags (ClassificationSets)
//! - the host's blast attenuation roll for everything else (survives)
//! - the pass over the affected entities (DropFilter, handle_detonate)

pub mod classify;
pub mod context;
pub mod entity;
pub mod error;
pub mod event;
pub mod filter;
pub mod power;
pub mod rng;
pub mod survival;
pub mod tags;

pub use classify::{Classification, ClassificationSets, FORCE_EXPLODE_TAG, FORCE_RESIST_TAG};
pub use context::BlastContext;
pub use entity::{AffectedDrop, AffectedEntity, EntityId, Item, ItemDrop, ItemStack};
pub use error::TagError;
pub use event::{DetonateEvent, DetonateOutcome, handle_detonate};
pub use filter::{DropDecision, DropFilter, FilterReport};
pub use power::{Explosion, ExplosionSource, extract_power};
pub use rng::{BlastRng, FixedDraw};
pub use survival::{Outcome, survives};
pub use tags::{TagEntry, TagFile, TagLoader};

// Re-export the material table for hosts that only depend on this crate
pub use itemresist_materials::{MaterialDef, MaterialId, Materials};
