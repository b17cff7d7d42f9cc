use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cabinet_layout::logging::{LogEvent, LogSink, LoggingResult};
use cabinet_layout::{
    LayoutMode, Logger, Planner, PlannerConfig, SolutionConfig, UnitConfig, UnitKind, UnitSpec,
    allocate, split,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

const UNIT_COUNT: usize = 64;

fn specs() -> Vec<UnitSpec> {
    (0..UNIT_COUNT)
        .map(|idx| match idx % 4 {
            0 => UnitSpec::fixed(format!("fixed_{idx}"), 450.0),
            1 if idx == UNIT_COUNT / 2 + 1 => {
                UnitSpec::fixed(format!("corner_{idx}"), 900.0).with_kind(UnitKind::Corner)
            }
            _ => UnitSpec::elastic(format!("elastic_{idx}")),
        })
        .collect()
}

fn solution() -> SolutionConfig {
    let mut config =
        SolutionConfig::new(60_000.0, 2400.0, 450.0).with_mode(LayoutMode::LShape);
    for spec in specs() {
        let unit = UnitConfig::new(spec.id.clone(), spec.kind)
            .fixed(spec.width)
            .with_shelves(3);
        config.units.push(if spec.elastic { unit.elastic() } else { unit });
    }
    config
}

fn allocate_bench(c: &mut Criterion) {
    let units = specs();
    c.bench_function("allocate_64_units", |b| {
        b.iter(|| allocate(black_box(60_000.0), black_box(&units)));
    });
}

fn split_bench(c: &mut Criterion) {
    let units = specs();
    c.bench_function("split_64_units", |b| {
        b.iter(|| split(black_box(&units)).left.len());
    });
}

fn plan_bench(c: &mut Criterion) {
    let config = solution();
    let mut planner_config = PlannerConfig::default().with_logger(Logger::new(NullSink));
    planner_config.enable_metrics();
    let planner = Planner::new(planner_config);

    c.bench_function("plan_l_shape_64_units", |b| {
        b.iter(|| planner.plan(black_box(&config)).expect("plan"));
    });
}

criterion_group!(benches, allocate_bench, split_bench, plan_bench);
criterion_main!(benches);
