//! Configuration module orchestrator.
//!
//! Serde model of a configurator snapshot. Field names follow the JSON the
//! presentation layer already produces (`totalWidth`, `isElastic`, `type`).

mod core;

pub use core::{DoorStyle, SolutionConfig, UnitConfig};
