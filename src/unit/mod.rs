//! Unit module orchestrator.
//!
//! Holds the value types every other module consumes; the definitions live in
//! the private `core` module.

mod core;

pub use core::{LayoutRequest, UnitId, UnitKind, UnitSpec};
