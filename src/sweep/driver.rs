//! Grid construction and the sequential sweep loop.
//!
//! A `SweepPlan` is a validated configuration plus the laid-out
//! impact-parameter grid; `run_sweep` executes its tests in order,
//! feeding one shared result sink and reporting progress on the console.

use indicatif::{ProgressBar, ProgressStyle};

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::output::sink::{OutputError, ResultSink};
use crate::simulation::analysis::{analyze, EncounterResult};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;

/// Sweep progress line: percentage plus humanized elapsed and remaining times.
const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed}] [{wide_bar:.cyan/blue}] {percent}% ({pos}/{len}, {eta})";

/// Evenly spaced closed-interval grid with `n` points.
/// Callers guarantee `n >= 2`; both endpoints are included.
pub fn grid_points(min: f64, max: f64, n: usize) -> Vec<f64> {
    let step = (max - min) / (n - 1) as f64;
    (0..n).map(|i| min + step * i as f64).collect()
}

/// A validated sweep: immutable configuration plus the impact-parameter
/// grid derived from it.
pub struct SweepPlan {
    pub config: ScenarioConfig,
    pub grid: Vec<f64>,
}

impl SweepPlan {
    /// Validate `config` and lay out the test grid.
    pub fn new(config: ScenarioConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = grid_points(config.sweep.b_min, config.sweep.b_max, config.sweep.tests);
        Ok(Self { config, grid })
    }

    /// Grid spacing between consecutive tests.
    pub fn step(&self) -> f64 {
        (self.config.sweep.b_max - self.config.sweep.b_min)
            / (self.config.sweep.tests - 1) as f64
    }
}

/// Run every grid point in order, emitting trajectories and the final
/// summary to `sink`. Tests are independent: each one is built fresh from
/// the immutable configuration and its own grid value.
pub fn run_sweep(
    plan: &SweepPlan,
    sink: &mut dyn ResultSink,
) -> Result<Vec<EncounterResult>, OutputError> {
    let params = Parameters::from_config(&plan.config.parameters);
    let engine = Engine::new(params.clone());
    let mut results = Vec::with_capacity(plan.grid.len());

    let bar = ProgressBar::new(plan.grid.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );

    for (i, &b) in plan.grid.iter().enumerate() {
        let index = i + 1;
        let mut scenario = Scenario::build(&plan.config, &params, b);

        sink.begin_test(index)?;
        let report = engine.run(&mut scenario, sink)?;
        sink.end_test()?;

        results.push(analyze(&scenario, &report, index, b));
        bar.inc(1);
    }
    bar.finish_with_message("sweep complete");

    sink.write_summary(&results)?;
    Ok(results)
}
