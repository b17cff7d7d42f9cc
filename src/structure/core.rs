use serde::Serialize;

use crate::config::UnitConfig;
use crate::unit::UnitKind;

/// Top cabinet height used when a unit asks for one without a height.
pub const DEFAULT_TOP_CABINET_HEIGHT: f64 = 500.0;
/// Drawer units always show this many equal fronts.
pub const DRAWER_FRONTS: u32 = 4;
/// Share of a TV niche taken by the lowboard under the screen.
pub const LOWBOARD_FRACTION: f64 = 0.25;

/// Shelves a unit gets when its configuration leaves the count unset.
pub fn default_shelf_count(kind: UnitKind) -> u8 {
    match kind {
        UnitKind::CabinetDoor => 3,
        UnitKind::OpenShelf => 4,
        UnitKind::Corner | UnitKind::Drawers | UnitKind::TvSpace => 0,
    }
}

/// What fills the main body of a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Body {
    /// Carcass with optional door. `shelves` are offsets in millimetres from
    /// the top of the body and are empty while the door is closed.
    Cabinet {
        shelf_count: u8,
        shelves: Vec<f64>,
        door: bool,
    },
    Drawers {
        fronts: u32,
        front_height: f64,
    },
    TvNiche {
        lowboard_height: f64,
    },
}

/// Abstract visual structure of one unit. Heights are in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitStructure {
    pub top_cabinet: Option<f64>,
    pub body_height: f64,
    pub body: Body,
}

/// Derive the structure of `unit` for a solution of the given overall height.
///
/// A shelf count or top cabinet height that is absent or zero falls back to
/// [`default_shelf_count`] or [`DEFAULT_TOP_CABINET_HEIGHT`]. Open shelves
/// never carry a door.
pub fn describe(unit: &UnitConfig, height: f64) -> UnitStructure {
    let top_cabinet = unit
        .has_top_cabinet
        .then(|| {
            unit.top_cabinet_height
                .filter(|&height| height > 0.0)
                .unwrap_or(DEFAULT_TOP_CABINET_HEIGHT)
        });
    let body_height = (height - top_cabinet.unwrap_or(0.0)).max(0.0);

    let body = match unit.kind {
        UnitKind::Drawers => Body::Drawers {
            fronts: DRAWER_FRONTS,
            front_height: body_height / DRAWER_FRONTS as f64,
        },
        UnitKind::TvSpace => Body::TvNiche {
            lowboard_height: body_height * LOWBOARD_FRACTION,
        },
        kind @ (UnitKind::CabinetDoor | UnitKind::OpenShelf | UnitKind::Corner) => {
            let shelf_count = unit
                .shelf_count
                .filter(|&count| count > 0)
                .unwrap_or_else(|| default_shelf_count(kind));
            let door = unit.has_door && kind != UnitKind::OpenShelf;
            let shelves = if door {
                Vec::new()
            } else {
                shelf_offsets(shelf_count, body_height)
            };
            Body::Cabinet {
                shelf_count,
                shelves,
                door,
            }
        }
    };

    UnitStructure {
        top_cabinet,
        body_height,
        body,
    }
}

/// Evenly spaced shelf offsets: shelf `i` of `count` sits at `i / (count + 1)`.
pub fn shelf_offsets(count: u8, body_height: f64) -> Vec<f64> {
    let slots = f64::from(count) + 1.0;
    (1..=count)
        .map(|idx| body_height * f64::from(idx) / slots)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_cabinet_hides_shelves() {
        let unit = UnitConfig::new("a", UnitKind::CabinetDoor).with_door(true);
        let structure = describe(&unit, 2400.0);

        assert_eq!(structure.top_cabinet, None);
        assert_eq!(structure.body_height, 2400.0);
        assert_eq!(
            structure.body,
            Body::Cabinet {
                shelf_count: 3,
                shelves: Vec::new(),
                door: true,
            }
        );
    }

    #[test]
    fn open_cabinet_spaces_shelves_evenly() {
        let unit = UnitConfig::new("a", UnitKind::CabinetDoor).with_shelves(4);
        let structure = describe(&unit, 2000.0);

        match structure.body {
            Body::Cabinet { shelves, door, .. } => {
                assert!(!door);
                assert_eq!(shelves, vec![400.0, 800.0, 1200.0, 1600.0]);
            }
            other => panic!("expected cabinet body, got {other:?}"),
        }
    }

    #[test]
    fn open_shelf_ignores_door_flag() {
        let unit = UnitConfig::new("a", UnitKind::OpenShelf).with_door(true);
        match describe(&unit, 1000.0).body {
            Body::Cabinet {
                shelf_count, door, shelves,
            } => {
                assert_eq!(shelf_count, 4);
                assert!(!door);
                assert_eq!(shelves.len(), 4);
            }
            other => panic!("expected cabinet body, got {other:?}"),
        }
    }

    #[test]
    fn zero_shelf_count_falls_back_to_default() {
        let door = UnitConfig::new("a", UnitKind::CabinetDoor).with_shelves(0);
        match describe(&door, 1000.0).body {
            Body::Cabinet {
                shelf_count, shelves, ..
            } => {
                assert_eq!(shelf_count, 3);
                assert_eq!(shelves, vec![250.0, 500.0, 750.0]);
            }
            other => panic!("expected cabinet body, got {other:?}"),
        }

        let open = UnitConfig::new("b", UnitKind::OpenShelf).with_shelves(0);
        match describe(&open, 1000.0).body {
            Body::Cabinet { shelf_count, .. } => assert_eq!(shelf_count, 4),
            other => panic!("expected cabinet body, got {other:?}"),
        }
    }

    #[test]
    fn zero_top_cabinet_height_uses_default() {
        let unit = UnitConfig::new("a", UnitKind::CabinetDoor).with_top_cabinet(Some(0.0));
        let structure = describe(&unit, 2400.0);

        assert_eq!(structure.top_cabinet, Some(DEFAULT_TOP_CABINET_HEIGHT));
        assert_eq!(structure.body_height, 1900.0);
    }

    #[test]
    fn max_shelf_count_is_evenly_spaced() {
        let offsets = shelf_offsets(u8::MAX, 2560.0);

        assert_eq!(offsets.len(), 255);
        assert_eq!(offsets[0], 10.0);
        assert_eq!(offsets[254], 2550.0);
    }

    #[test]
    fn top_cabinet_reduces_body_height() {
        let unit = UnitConfig::new("tv", UnitKind::TvSpace).with_top_cabinet(Some(450.0));
        let structure = describe(&unit, 2400.0);

        assert_eq!(structure.top_cabinet, Some(450.0));
        assert_eq!(structure.body_height, 1950.0);
        assert_eq!(
            structure.body,
            Body::TvNiche {
                lowboard_height: 487.5
            }
        );

        let defaulted = UnitConfig::new("d", UnitKind::Drawers).with_top_cabinet(None);
        let structure = describe(&defaulted, 2400.0);
        assert_eq!(structure.top_cabinet, Some(DEFAULT_TOP_CABINET_HEIGHT));
        assert_eq!(
            structure.body,
            Body::Drawers {
                fronts: 4,
                front_height: 475.0
            }
        );
    }

    #[test]
    fn corner_defaults_to_no_shelves() {
        let unit = UnitConfig::new("c", UnitKind::Corner);
        match describe(&unit, 2000.0).body {
            Body::Cabinet { shelf_count, .. } => assert_eq!(shelf_count, 0),
            other => panic!("expected cabinet body, got {other:?}"),
        }
    }

    #[test]
    fn oversized_top_cabinet_clamps_body() {
        let unit = UnitConfig::new("a", UnitKind::CabinetDoor).with_top_cabinet(Some(3000.0));
        assert_eq!(describe(&unit, 2400.0).body_height, 0.0);
    }
}
