use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Stable identifier of a unit within one configuration.
pub type UnitId = String;

/// Closed set of cabinet module kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitKind {
    #[default]
    CabinetDoor,
    Drawers,
    OpenShelf,
    TvSpace,
    Corner,
}

impl UnitKind {
    pub fn is_corner(self) -> bool {
        matches!(self, UnitKind::Corner)
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            UnitKind::CabinetDoor => 0,
            UnitKind::Drawers => 1,
            UnitKind::OpenShelf => 2,
            UnitKind::TvSpace => 3,
            UnitKind::Corner => 4,
        }
    }
}

/// One cabinet module in the left-to-right sequence.
///
/// `width` is the nominal width in millimetres. It is only honoured for fixed
/// units; elastic units receive their width from the allocator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub id: UnitId,
    pub elastic: bool,
    pub width: f64,
    pub kind: UnitKind,
}

impl UnitSpec {
    pub fn fixed(id: impl Into<UnitId>, width: f64) -> Self {
        Self {
            id: id.into(),
            elastic: false,
            width,
            kind: UnitKind::default(),
        }
    }

    pub fn elastic(id: impl Into<UnitId>) -> Self {
        Self {
            id: id.into(),
            elastic: true,
            width: 0.0,
            kind: UnitKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: UnitKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_nominal_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

/// Total width plus the ordered units to lay out inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    pub total_width: f64,
    pub units: Vec<UnitSpec>,
}

impl LayoutRequest {
    pub fn new(total_width: f64, units: Vec<UnitSpec>) -> Self {
        Self { total_width, units }
    }

    /// Rejects input the allocator would silently accept: a non-positive or
    /// non-finite total width and repeated unit ids.
    pub fn validate(&self) -> Result<()> {
        if !self.total_width.is_finite() || self.total_width <= 0.0 {
            return Err(LayoutError::InvalidTotalWidth(self.total_width));
        }

        let mut seen = HashSet::with_capacity(self.units.len());
        for unit in &self.units {
            if !seen.insert(unit.id.as_str()) {
                return Err(LayoutError::DuplicateUnitId(unit.id.clone()));
            }
        }

        Ok(())
    }
}
