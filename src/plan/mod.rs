//! Plan module orchestrator.
//!
//! Combines validation, allocation, the L-shape split and unit structure into
//! one renderer-facing value, with the crate's logging and metrics attached.

mod core;

pub use core::{LayoutPlan, PlacedUnit, Planner, PlannerConfig, Run, RunKind};
