use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running counters kept by a [`Planner`](crate::Planner).
#[derive(Debug, Default, Clone)]
pub struct PlanMetrics {
    plans: u64,
    units: u64,
    overcommits: u64,
    rejected: u64,
}

impl PlanMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_plan(&mut self, unit_count: usize, overcommitted: bool) {
        self.plans = self.plans.saturating_add(1);
        self.units = self.units.saturating_add(unit_count as u64);
        if overcommitted {
            self.overcommits = self.overcommits.saturating_add(1);
        }
    }

    pub fn record_rejected(&mut self) {
        self.rejected = self.rejected.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            plans: self.plans,
            units: self.units,
            overcommits: self.overcommits,
            rejected: self.rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub plans: u64,
    pub units: u64,
    pub overcommits: u64,
    pub rejected: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "plan_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("plans".to_string(), json!(self.plans));
        map.insert("units".to_string(), json!(self.units));
        map.insert("overcommits".to_string(), json!(self.overcommits));
        map.insert("rejected".to_string(), json!(self.rejected));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = PlanMetrics::new();
        metrics.record_plan(3, false);
        metrics.record_plan(2, true);
        metrics.record_rejected();

        let snapshot = metrics.snapshot();
        assert_eq!(
            snapshot,
            MetricSnapshot {
                plans: 2,
                units: 5,
                overcommits: 1,
                rejected: 1,
            }
        );

        let event = snapshot.to_log_event("cabinet::metrics");
        assert_eq!(event.message, "plan_metrics");
        assert_eq!(event.fields.get("units"), Some(&json!(5)));
    }
}
