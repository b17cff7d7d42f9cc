//! Layout module orchestrator.
//!
//! The two pure operations of the crate live here: width allocation across a
//! unit sequence and the L-shape split around a corner unit. Neither keeps
//! state between calls.

mod allocate;
mod arrangement;

pub use allocate::{WidthAllocation, allocate, fixed_width};
pub use arrangement::{Arrangement, LayoutMode, split};
