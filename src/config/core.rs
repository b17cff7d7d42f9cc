use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::LayoutMode;
use crate::unit::{LayoutRequest, UnitId, UnitKind, UnitSpec};

/// Door front style. Only carried through for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorStyle {
    Flat,
    Shaker,
    Glass,
}

/// Full configuration of one cabinet unit as the configurator stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitConfig {
    pub id: UnitId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: UnitKind,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub is_elastic: bool,
    #[serde(default)]
    pub has_top_cabinet: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_cabinet_height: Option<f64>,
    #[serde(default)]
    pub texture_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_count: Option<u8>,
    #[serde(default)]
    pub has_door: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_style: Option<DoorStyle>,
}

impl UnitConfig {
    pub fn new(id: impl Into<UnitId>, kind: UnitKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            width: 0.0,
            is_elastic: false,
            has_top_cabinet: false,
            top_cabinet_height: None,
            texture_id: String::new(),
            shelf_count: None,
            has_door: false,
            door_style: None,
        }
    }

    pub fn fixed(mut self, width: f64) -> Self {
        self.width = width;
        self.is_elastic = false;
        self
    }

    pub fn elastic(mut self) -> Self {
        self.is_elastic = true;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_shelves(mut self, count: u8) -> Self {
        self.shelf_count = Some(count);
        self
    }

    pub fn with_door(mut self, has_door: bool) -> Self {
        self.has_door = has_door;
        self
    }

    pub fn with_top_cabinet(mut self, height: Option<f64>) -> Self {
        self.has_top_cabinet = true;
        self.top_cabinet_height = height;
        self
    }

    /// The part of the unit the allocator and splitter look at.
    pub fn spec(&self) -> UnitSpec {
        UnitSpec {
            id: self.id.clone(),
            elastic: self.is_elastic,
            width: self.width,
            kind: self.kind,
        }
    }
}

/// Snapshot of a whole solution. Callers pass a fresh one on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub layout_mode: LayoutMode,
    pub total_width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub depth: f64,
    #[serde(default)]
    pub units: Vec<UnitConfig>,
}

impl SolutionConfig {
    pub fn new(total_width: f64, height: f64, depth: f64) -> Self {
        Self {
            name: None,
            layout_mode: LayoutMode::Linear,
            total_width,
            height,
            depth,
            units: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    pub fn with_unit(mut self, unit: UnitConfig) -> Self {
        self.units.push(unit);
        self
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn specs(&self) -> Vec<UnitSpec> {
        self.units.iter().map(UnitConfig::spec).collect()
    }

    pub fn request(&self) -> LayoutRequest {
        LayoutRequest::new(self.total_width, self.specs())
    }

    pub fn unit(&self, id: &str) -> Option<&UnitConfig> {
        self.units.iter().find(|unit| unit.id == id)
    }
}
