//! Gravitational models for the flyby variants.
//!
//! Two force laws cover all three encounter geometries:
//! - [`CentralGravity`]: inverse-square pull from one fixed body, used by
//!   the Cartesian variant
//! - [`PerturbedPolarGravity`]: central primary plus an orbiting perturber,
//!   expressed as polar state rates, used by both polar variants

use crate::simulation::states::{PerturberPolar, PolarState, Vec2};

/// Inverse-square gravity from a single body fixed at the origin.
pub struct CentralGravity {
    pub mu: f64, // G * M of the central body
}

impl CentralGravity {
    /// Acceleration felt by a probe at position `x`.
    pub fn acceleration(&self, x: Vec2) -> Vec2 {
        // a = -mu * x / |x|^3, pointing back toward the origin
        let r2 = x.dot(&x);
        let inv_r = r2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;
        -(self.mu * inv_r3) * x
    }
}

/// Instantaneous rates of change of a polar probe state.
#[derive(Debug, Clone, Copy)]
pub struct PolarRates {
    pub r_dot: f64,     // radial position rate
    pub theta_dot: f64, // angular position rate
    pub v_r_dot: f64,   // radial velocity rate
    pub omega_dot: f64, // angular velocity rate
}

/// Central gravity plus an orbiting perturber, in the polar frame of the
/// primary.
///
/// The radial rate combines the centrifugal term, the primary's pull and
/// the perturber's contribution; the angular rate combines the perturber's
/// torque with the Coriolis coupling of radial and angular motion.
pub struct PerturbedPolarGravity {
    pub mu_primary: f64,   // G * M of the central primary
    pub mu_perturber: f64, // G * M of the perturber
    pub sign: f64,         // -1 attractive perturbation, +1 repulsive
}

impl PerturbedPolarGravity {
    /// Rates for the probe given the current probe and perturber states.
    pub fn rates(&self, probe: &PolarState, pert: &PerturberPolar) -> PolarRates {
        // Angle between probe and perturber as seen from the primary
        let delta = probe.theta - pert.theta;
        let (sin_d, cos_d) = delta.sin_cos();

        // Probe-perturber separation by the law of cosines
        let d2 = probe.r * probe.r + pert.r * pert.r - 2.0 * probe.r * pert.r * cos_d;
        let d3 = d2 * d2.sqrt();

        // Radial: centrifugal + central pull + perturbation along r
        let v_r_dot = probe.r * probe.omega * probe.omega
            - self.mu_primary / (probe.r * probe.r)
            + self.sign * self.mu_perturber * (probe.r - pert.r * cos_d) / d3;

        // Angular: perturbation torque + Coriolis term
        let omega_dot = self.sign * self.mu_perturber * pert.r * sin_d / (probe.r * d3)
            - 2.0 * probe.v_r * probe.omega / probe.r;

        PolarRates {
            r_dot: probe.v_r,
            theta_dot: probe.omega,
            v_r_dot,
            omega_dot,
        }
    }
}

/// Probe-perturber separation by the law of cosines.
pub fn polar_separation(probe: &PolarState, pert: &PerturberPolar) -> f64 {
    let cos_d = (probe.theta - pert.theta).cos();
    (probe.r * probe.r + pert.r * pert.r - 2.0 * probe.r * pert.r * cos_d).sqrt()
}
