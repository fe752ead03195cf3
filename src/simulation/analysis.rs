//! Post-encounter kinematic analysis.
//!
//! Turns one finished `RunReport` into the summary row for that test:
//! deflection angle, speed changes, closest approach, outcome.

use crate::simulation::engine::RunReport;
use crate::simulation::scenario::{Encounter, Scenario};
use crate::simulation::states::Vec2;
use crate::simulation::stopping::Outcome;

/// Per-test summary, one row of the sweep's global output.
#[derive(Debug, Clone)]
pub struct EncounterResult {
    pub index: usize,             // 1-based test number
    pub parameter: f64,           // swept impact parameter
    pub min_distance: f64,        // closest approach over the whole run
    pub delta_v: f64,             // heliocentric speed change
    pub delta_v_rel: Option<f64>, // perturber-relative change, patched variant
    pub deflection: f64,          // radians, in [0, pi]
    pub outcome: Outcome,
    pub elapsed: f64, // simulated seconds at termination
}

/// Angle between entry and exit velocities, in [0, pi].
///
/// The cosine argument is clamped to [-1, 1]: near-parallel vectors can
/// push it past 1 by a rounding error, and acos of that is NaN.
pub fn deflection_angle(v_in: Vec2, v_out: Vec2) -> f64 {
    let cos = v_in.dot(&v_out) / (v_in.norm() * v_out.norm());
    cos.clamp(-1.0, 1.0).acos()
}

/// Change in speed between entry and exit.
pub fn speed_change(v_in: Vec2, v_out: Vec2) -> f64 {
    v_out.norm() - v_in.norm()
}

/// Rescale an exit velocity to its magnitude at infinite separation from
/// a body with gravitational parameter `mu`, keeping the exit direction.
///
/// Valid for hyperbolic exits (`|v|^2 > 2 mu / r`); a bound exit state
/// produces NaN components, which propagate into the summary untouched.
pub fn asymptotic_velocity(v: Vec2, r: f64, mu: f64) -> Vec2 {
    let speed = v.norm();
    let v_inf = (speed * speed - 2.0 * mu / r).sqrt();
    (v_inf / speed) * v
}

/// Derive the summary metrics for one finished run.
///
/// Per variant:
/// - Cartesian: the exit velocity is first corrected to its asymptotic
///   magnitude, then compared against the configured approach.
/// - Polar: raw heliocentric exit velocity, deflection in the
///   perturber-relative frame.
/// - Patched: as polar, plus the relative-frame speed change.
pub fn analyze(
    scenario: &Scenario,
    report: &RunReport,
    index: usize,
    parameter: f64,
) -> EncounterResult {
    let entry = &scenario.entry;
    let v_pert_out = report
        .exit
        .perturber
        .map(|p| p.v)
        .unwrap_or_else(Vec2::zeros);

    let (delta_v, delta_v_rel, deflection) = match &scenario.encounter {
        Encounter::SingleBodyCartesian { gravity, .. } => {
            let r_exit = report.exit.probe.x.norm();
            let v_out = asymptotic_velocity(report.exit.probe.v, r_exit, gravity.mu);
            (
                speed_change(entry.velocity, v_out),
                None,
                deflection_angle(entry.velocity, v_out),
            )
        }
        Encounter::TwoBodyPolar { .. } => {
            let v_out = report.exit.probe.v;
            let v_rel_out = v_out - v_pert_out;
            (
                speed_change(entry.velocity, v_out),
                None,
                deflection_angle(entry.velocity_rel, v_rel_out),
            )
        }
        Encounter::ThreeBodyPatched { .. } => {
            let v_out = report.exit.probe.v;
            let v_rel_out = v_out - v_pert_out;
            (
                speed_change(entry.velocity, v_out),
                Some(speed_change(entry.velocity_rel, v_rel_out)),
                deflection_angle(entry.velocity_rel, v_rel_out),
            )
        }
    };

    EncounterResult {
        index,
        parameter,
        min_distance: report.min_distance,
        delta_v,
        delta_v_rel,
        deflection,
        outcome: report.outcome,
        elapsed: report.elapsed,
    }
}
