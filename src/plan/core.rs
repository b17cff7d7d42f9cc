use std::ops::Range;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde_json::json;

use crate::config::{SolutionConfig, UnitConfig};
use crate::error::Result;
use crate::key::LayoutKey;
use crate::layout::{LayoutMode, WidthAllocation, allocate, fixed_width, split};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{MetricSnapshot, PlanMetrics};
use crate::structure::{UnitStructure, describe};
use crate::unit::{UnitId, UnitKind};

/// Planner settings. Everything is optional; the default planner is silent.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Optional structured logger used by the planner.
    pub logger: Option<Logger>,
    /// Target field on every event the planner emits.
    pub target: String,
    /// Level of the per-plan summary event.
    pub level: LogLevel,
    /// Emit a `Warn` event when fixed units exceed the total width.
    pub warn_on_overcommit: bool,
    /// Counters shared with whoever holds the handle.
    pub metrics: Option<Arc<Mutex<PlanMetrics>>>,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            logger: None,
            target: "cabinet::plan".to_string(),
            level: LogLevel::Debug,
            warn_on_overcommit: true,
            metrics: None,
            metrics_target: "cabinet::plan.metrics".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn warn_on_overcommit(mut self, enabled: bool) -> Self {
        self.warn_on_overcommit = enabled;
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(PlanMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<PlanMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Which stretch of the arrangement a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    /// The whole sequence in linear mode.
    Main,
    Left,
    Corner,
    Right,
}

/// A unit with its resolved width and its offset inside the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedUnit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub offset: f64,
    pub width: f64,
    pub structure: UnitStructure,
}

/// Units drawn side by side on one wall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub kind: RunKind,
    pub width: f64,
    pub units: Vec<PlacedUnit>,
}

/// Everything a renderer needs for one configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub mode: LayoutMode,
    pub total_width: f64,
    pub runs: Vec<Run>,
    pub fixed_used: f64,
    pub allocated: f64,
    /// Space no unit received. Only non-zero without elastic units.
    pub unallocated: f64,
    /// How far fixed units overshoot the total width.
    pub overflow: f64,
    pub key: LayoutKey,
}

impl LayoutPlan {
    pub fn is_overcommitted(&self) -> bool {
        self.overflow > 0.0
    }

    pub fn run(&self, kind: RunKind) -> Option<&Run> {
        self.runs.iter().find(|run| run.kind == kind)
    }

    /// Placed units in their original sequence order.
    pub fn units(&self) -> impl Iterator<Item = &PlacedUnit> {
        self.runs.iter().flat_map(|run| run.units.iter())
    }

    pub fn unit(&self, id: &str) -> Option<&PlacedUnit> {
        self.units().find(|unit| unit.id == id)
    }
}

/// Turns configuration snapshots into layout plans.
///
/// The planner never holds on to a snapshot; it only owns its settings and
/// the optional metrics handle, so a single instance can be shared.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PlannerConfig {
        &mut self.config
    }

    /// Validate, allocate, split and describe `solution`.
    pub fn plan(&self, solution: &SolutionConfig) -> Result<LayoutPlan> {
        let request = solution.request();
        if let Err(err) = request.validate() {
            self.with_metrics(PlanMetrics::record_rejected);
            self.emit(
                LogLevel::Warn,
                "plan_rejected",
                [json_str("reason", err.to_string())],
            );
            return Err(err);
        }

        let allocation = allocate(request.total_width, &request.units);
        let runs = match solution.layout_mode {
            LayoutMode::Linear => vec![place(
                RunKind::Main,
                &solution.units,
                &allocation,
                solution.height,
            )],
            LayoutMode::LShape => {
                let arrangement = split(&request.units);
                let left_end = arrangement.left.len();
                let corner_end = left_end + usize::from(arrangement.has_corner());
                let mut runs = vec![place(
                    RunKind::Left,
                    slice(&solution.units, 0..left_end),
                    &allocation,
                    solution.height,
                )];
                if arrangement.has_corner() {
                    runs.push(place(
                        RunKind::Corner,
                        slice(&solution.units, left_end..corner_end),
                        &allocation,
                        solution.height,
                    ));
                }
                runs.push(place(
                    RunKind::Right,
                    slice(&solution.units, corner_end..solution.units.len()),
                    &allocation,
                    solution.height,
                ));
                runs
            }
        };

        let fixed_used = fixed_width(&request.units);
        let allocated = allocation.total();
        let plan = LayoutPlan {
            mode: solution.layout_mode,
            total_width: request.total_width,
            runs,
            fixed_used,
            allocated,
            unallocated: (request.total_width - allocated).max(0.0),
            overflow: (fixed_used - request.total_width).max(0.0),
            key: LayoutKey::of(request.total_width, &request.units),
        };

        self.with_metrics(|metrics| {
            metrics.record_plan(request.units.len(), plan.is_overcommitted());
        });
        self.report(&plan);
        Ok(plan)
    }

    /// Log the current metrics snapshot, if metrics are enabled.
    pub fn emit_metrics(&self) -> Result<Option<MetricSnapshot>> {
        let Some(snapshot) = self.metrics_snapshot() else {
            return Ok(None);
        };
        if let Some(logger) = self.config.logger.as_ref() {
            logger.log_event(snapshot.to_log_event(&self.config.metrics_target))?;
        }
        Ok(Some(snapshot))
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        self.config.metrics.as_ref().map(|metrics| {
            metrics
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .snapshot()
        })
    }

    fn report(&self, plan: &LayoutPlan) {
        self.emit(
            self.config.level,
            "plan_computed",
            [
                json_kv("mode", json!(plan.mode)),
                json_kv("units", plan.units().count() as u64),
                json_kv("total_width", plan.total_width),
                json_kv("allocated", plan.allocated),
                json_kv("unallocated", plan.unallocated),
                json_str("key", plan.key.to_string()),
            ],
        );

        if plan.is_overcommitted() && self.config.warn_on_overcommit {
            self.emit(
                LogLevel::Warn,
                "fixed_units_overcommitted",
                [
                    json_kv("fixed_used", plan.fixed_used),
                    json_kv("total_width", plan.total_width),
                    json_kv("overflow", plan.overflow),
                ],
            );
        }
    }

    fn emit<const N: usize>(
        &self,
        level: LogLevel,
        message: &str,
        fields: [(String, serde_json::Value); N],
    ) {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, &self.config.target, message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn with_metrics(&self, update: impl FnOnce(&mut PlanMetrics)) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            let mut guard = metrics.lock().unwrap_or_else(PoisonError::into_inner);
            update(&mut *guard);
        }
    }
}

fn slice(units: &[UnitConfig], range: Range<usize>) -> &[UnitConfig] {
    units.get(range).unwrap_or(&[])
}

fn place(
    kind: RunKind,
    units: &[UnitConfig],
    allocation: &WidthAllocation,
    height: f64,
) -> Run {
    let mut cursor = 0.0;
    let placed = units
        .iter()
        .map(|unit| {
            let width = allocation.get(&unit.id).unwrap_or(0.0);
            let placed = PlacedUnit {
                id: unit.id.clone(),
                kind: unit.kind,
                offset: cursor,
                width,
                structure: describe(unit, height),
            };
            cursor += width;
            placed
        })
        .collect();

    Run {
        kind,
        width: cursor,
        units: placed,
    }
}
