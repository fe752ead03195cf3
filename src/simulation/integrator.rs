//! Fixed-step explicit Euler integrators.
//!
//! First-order scheme: every new value is computed from the pre-step state
//! before any field is assigned, so the updates within one step are
//! simultaneous. Local truncation error is O(dt^2); accuracy is bought by
//! shrinking `dt`, not by a higher-order scheme.

use super::forces::{CentralGravity, PerturbedPolarGravity};
use super::states::{CartesianState, PerturberPolar, PolarState};

/// Advance a Cartesian probe by one step of size `dt`.
pub fn euler_step_cartesian(probe: &mut CartesianState, gravity: &CentralGravity, dt: f64) {
    // Evaluate the force at the pre-step position
    let a = gravity.acceleration(probe.x);

    // x_n+1 = x_n + dt * v_n
    // v_n+1 = v_n + dt * a(x_n)
    let x_next = probe.x + dt * probe.v;
    let v_next = probe.v + dt * a;

    probe.x = x_next;
    probe.v = v_next;
}

/// Advance a polar probe and its perturber by one step of size `dt`.
///
/// The perturber angle advances at its fixed circular rate; the probe
/// follows the perturbed rates, all from the shared pre-step state.
pub fn euler_step_polar(
    probe: &mut PolarState,
    pert: &mut PerturberPolar,
    gravity: &PerturbedPolarGravity,
    dt: f64,
) {
    let rates = gravity.rates(probe, pert);

    let pert_theta_next = pert.theta + dt * pert.omega;
    let r_next = probe.r + dt * rates.r_dot;
    let theta_next = probe.theta + dt * rates.theta_dot;
    let v_r_next = probe.v_r + dt * rates.v_r_dot;
    let omega_next = probe.omega + dt * rates.omega_dot;

    pert.theta = pert_theta_next;
    probe.r = r_next;
    probe.theta = theta_next;
    probe.v_r = v_r_next;
    probe.omega = omega_next;
}
