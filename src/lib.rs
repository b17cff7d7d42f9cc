//! Width allocation and arrangement core for a cabinet module configurator.
//!
//! A configuration is a left-to-right sequence of units inside a total width.
//! [`allocate`] resolves each unit's width, [`split`] cuts the sequence around
//! its corner unit for L-shaped walls, and [`Planner`] ties both together with
//! per-unit structure for a renderer. Nothing here keeps state between calls;
//! callers pass a fresh [`SolutionConfig`] snapshot every time.

pub mod config;
pub mod error;
pub mod key;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod plan;
pub mod structure;
pub mod unit;

pub use config::{DoorStyle, SolutionConfig, UnitConfig};
pub use error::{LayoutError, Result};
pub use key::LayoutKey;
pub use layout::{Arrangement, LayoutMode, WidthAllocation, allocate, fixed_width, split};
pub use logging::{LogLevel, Logger, LoggingError};
pub use metrics::{MetricSnapshot, PlanMetrics};
pub use plan::{LayoutPlan, PlacedUnit, Planner, PlannerConfig, Run, RunKind};
pub use structure::{Body, UnitStructure, describe};
pub use unit::{LayoutRequest, UnitId, UnitKind, UnitSpec};
