//! Command-line driver for itemresist
//!
//! Loads the classification tags and replays blast scenarios against them.

pub mod config;
pub mod scenario;

pub use config::ResistConfig;
pub use scenario::{BlastScenario, ScenarioEntity, ScenarioResult, Survivor};
