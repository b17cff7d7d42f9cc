use std::collections::HashMap;

use crate::unit::{UnitId, UnitSpec};

/// Resolved width per unit id, in millimetres.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidthAllocation {
    widths: HashMap<UnitId, f64>,
}

impl WidthAllocation {
    pub fn get(&self, id: &str) -> Option<f64> {
        self.widths.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UnitId, f64)> {
        self.widths.iter().map(|(id, width)| (id, *width))
    }

    /// Sum of every allocated width.
    pub fn total(&self) -> f64 {
        self.widths.values().sum()
    }

    pub fn into_map(self) -> HashMap<UnitId, f64> {
        self.widths
    }

    fn assign(&mut self, id: &UnitId, width: f64) {
        self.widths.insert(id.clone(), width);
    }
}

impl From<WidthAllocation> for HashMap<UnitId, f64> {
    fn from(allocation: WidthAllocation) -> Self {
        allocation.into_map()
    }
}

/// Sum of nominal widths over the fixed (non-elastic) units.
pub fn fixed_width(units: &[UnitSpec]) -> f64 {
    units
        .iter()
        .filter(|unit| !unit.elastic)
        .map(|unit| unit.width)
        .sum()
}

/// Distribute `total_width` across `units`.
///
/// Fixed units always keep their nominal width, even when together they
/// exceed `total_width`; the overcommit is not reported here. Whatever is left
/// (never below zero) is split equally and unrounded between elastic units.
/// With no elastic units the leftover stays unallocated.
///
/// The function is total: it never fails and never validates. A negative
/// `total_width` gives an unspecified result. Repeated ids collapse into one
/// entry, with elastic assignments written after fixed ones so the last
/// occurrence wins. Use [`LayoutRequest::validate`](crate::LayoutRequest::validate)
/// to reject such input up front.
pub fn allocate(total_width: f64, units: &[UnitSpec]) -> WidthAllocation {
    let (elastic, fixed): (Vec<&UnitSpec>, Vec<&UnitSpec>) =
        units.iter().partition(|unit| unit.elastic);

    let fixed_used: f64 = fixed.iter().map(|unit| unit.width).sum();
    let remaining = (total_width - fixed_used).max(0.0);

    let mut allocation = WidthAllocation {
        widths: HashMap::with_capacity(units.len()),
    };

    for unit in &fixed {
        allocation.assign(&unit.id, unit.width);
    }

    if !elastic.is_empty() {
        let share = remaining / elastic.len() as f64;
        for unit in &elastic {
            allocation.assign(&unit.id, share);
        }
    }

    allocation
}
