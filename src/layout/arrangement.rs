use serde::{Deserialize, Serialize};

use crate::unit::UnitSpec;

/// How the caller places the unit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "L_shape")]
    LShape,
}

/// A unit sequence split around its first corner unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrangement<'a> {
    pub left: &'a [UnitSpec],
    pub corner: Option<&'a UnitSpec>,
    pub right: &'a [UnitSpec],
}

impl<'a> Arrangement<'a> {
    /// Walks left, corner, right in the original order.
    pub fn iter(&self) -> impl Iterator<Item = &'a UnitSpec> + use<'a> {
        self.left
            .iter()
            .chain(self.corner)
            .chain(self.right.iter())
    }

    pub fn has_corner(&self) -> bool {
        self.corner.is_some()
    }
}

/// Partition `units` around the first [`UnitKind::Corner`](crate::UnitKind::Corner).
///
/// Without a corner everything lands in `left`. Corner units after the first
/// one stay in `right` as ordinary units. The splitter knows nothing about
/// [`LayoutMode`]; callers in linear mode simply skip it.
pub fn split(units: &[UnitSpec]) -> Arrangement<'_> {
    match units.iter().position(|unit| unit.kind.is_corner()) {
        Some(idx) => Arrangement {
            left: &units[..idx],
            corner: Some(&units[idx]),
            right: &units[idx + 1..],
        },
        None => Arrangement {
            left: units,
            corner: None,
            right: &[],
        },
    }
}
