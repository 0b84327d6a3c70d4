//! Block material data for itemresist
//!
//! This crate provides the material-property table the blast filter queries:
//! - Material identifiers (MaterialId)
//! - Material definitions with blast resistance (MaterialDef)
//! - The registry with name lookup (Materials)

mod materials;

pub use materials::{DEFAULT_NAMESPACE, MaterialDef, MaterialId, Materials, sanitize_resistance};
