//! The shared step/sample/stop loop driving one encounter.
//!
//! The same engine runs every variant: it advances the state with the
//! Euler steppers, records samples at the configured cadence, tracks the
//! running minima every step, and halts on the stop rule or the timeout.

use crate::output::sink::{OutputError, ResultSink};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{Encounter, Scenario};
use crate::simulation::states::{Observation, RunningMinima, Sample};
use crate::simulation::stopping::Outcome;

/// Final kinematics and accumulated scalars of one finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: Outcome,
    pub elapsed: f64,      // simulated seconds at termination
    pub min_distance: f64, // closest probe-perturber approach, tracked every step
    pub min_impact_parameter: Option<f64>, // patched variant only
    pub exit: Observation, // state at termination
}

/// Runs encounters to termination with shared numerical settings.
pub struct Engine {
    pub params: Parameters,
}

impl Engine {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    /// Run `scenario` to completion, recording samples into `sink`.
    ///
    /// Samples carry the post-step state together with the separation of
    /// that same state. Termination is only decided at sampling steps
    /// (timeout at the top of the loop, thresholds right after a sample
    /// is recorded), so every stop leaves its final sample in the sink.
    pub fn run(
        &self,
        scenario: &mut Scenario,
        sink: &mut dyn ResultSink,
    ) -> Result<RunReport, OutputError> {
        let dt = self.params.dt;
        let steps_per_sample = self.params.steps_per_sample();

        let mut t = 0.0;
        let mut countdown = 0u64; // 0 forces a sample, so t = 0 is recorded
        let mut minima = RunningMinima::new(
            scenario.encounter.separation(),
            scenario.encounter.impact_parameter_estimate(),
        );

        let outcome = loop {
            if t >= self.params.max_time {
                break Outcome::Timeout;
            }

            if countdown == 0 {
                countdown = steps_per_sample;
                let sample = make_sample(t, &scenario.encounter);
                let distance = sample.distance;
                sink.record_sample(&sample)?;
                if let Some(outcome) = scenario.stop.check(t, distance) {
                    break outcome;
                }
            }
            countdown -= 1;

            scenario.encounter.step(dt);
            t += dt;
            minima.update(
                scenario.encounter.separation(),
                scenario.encounter.impact_parameter_estimate(),
            );
        };

        Ok(RunReport {
            outcome,
            elapsed: t,
            min_distance: minima.distance,
            min_impact_parameter: minima.impact_parameter,
            exit: scenario.encounter.observe(),
        })
    }
}

fn make_sample(t: f64, encounter: &Encounter) -> Sample {
    let obs = encounter.observe();
    Sample {
        t,
        probe: obs.probe,
        perturber: obs.perturber,
        distance: encounter.separation(),
        impact_parameter: encounter.impact_parameter_estimate(),
    }
}
