//! Per-unit visual structure (shelves, doors, drawer fronts, niches).
//!
//! Everything here is abstract geometry for a renderer to consume; no styling.

mod core;

pub use core::{
    Body, DEFAULT_TOP_CABINET_HEIGHT, DRAWER_FRONTS, LOWBOARD_FRACTION, UnitStructure,
    default_shelf_count, describe, shelf_offsets,
};
