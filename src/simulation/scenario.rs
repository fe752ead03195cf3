//! Build fully-initialized encounters from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) plus one swept impact parameter
//! and produces the runtime bundle for a single test:
//! - `Encounter`: variant state and force model at t = 0
//! - `EntryState`: the entry velocities the analyzer compares against
//! - `StopRule`: the termination thresholds for this geometry
//!
//! Construction assumes a validated configuration; `ScenarioConfig::validate`
//! guards every square root and arcsine taken here.

use crate::configuration::config::{ScenarioConfig, VariantConfig};
use crate::simulation::coords::{to_cartesian, to_polar};
use crate::simulation::forces::{polar_separation, CentralGravity, PerturbedPolarGravity};
use crate::simulation::integrator::{euler_step_cartesian, euler_step_polar};
use crate::simulation::params::Parameters;
use crate::simulation::states::{
    CartesianState, Observation, PerturberPolar, PolarState, Vec2,
};
use crate::simulation::stopping::StopRule;

/// Entry kinematics recorded before integration starts.
#[derive(Debug, Clone, Copy)]
pub struct EntryState {
    pub velocity: Vec2,     // heliocentric (asymptotic for the Cartesian variant)
    pub velocity_rel: Vec2, // relative to the perturber
}

/// Variant state plus force model for one encounter.
pub enum Encounter {
    /// Probe past a single fixed body at the origin, Cartesian frame.
    SingleBodyCartesian {
        gravity: CentralGravity,
        probe: CartesianState,
    },
    /// Probe and perturber on independent orbits around a shared primary.
    TwoBodyPolar {
        gravity: PerturbedPolarGravity,
        probe: PolarState,
        perturber: PerturberPolar,
    },
    /// Same equations as [`Encounter::TwoBodyPolar`], with the probe
    /// injected at the perturber's sphere-of-influence boundary.
    ThreeBodyPatched {
        gravity: PerturbedPolarGravity,
        probe: PolarState,
        perturber: PerturberPolar,
    },
}

impl Encounter {
    /// Advance the encounter by one Euler step.
    pub fn step(&mut self, dt: f64) {
        match self {
            Encounter::SingleBodyCartesian { gravity, probe } => {
                euler_step_cartesian(probe, gravity, dt)
            }
            Encounter::TwoBodyPolar {
                gravity,
                probe,
                perturber,
            }
            | Encounter::ThreeBodyPatched {
                gravity,
                probe,
                perturber,
            } => euler_step_polar(probe, perturber, gravity, dt),
        }
    }

    /// Probe-perturber separation in the current state.
    pub fn separation(&self) -> f64 {
        match self {
            Encounter::SingleBodyCartesian { probe, .. } => probe.x.norm(),
            Encounter::TwoBodyPolar {
                probe, perturber, ..
            }
            | Encounter::ThreeBodyPatched {
                probe, perturber, ..
            } => polar_separation(probe, perturber),
        }
    }

    /// Cartesian snapshot of the active bodies.
    pub fn observe(&self) -> Observation {
        match self {
            Encounter::SingleBodyCartesian { probe, .. } => Observation {
                probe: *probe,
                perturber: None,
            },
            Encounter::TwoBodyPolar {
                probe, perturber, ..
            }
            | Encounter::ThreeBodyPatched {
                probe, perturber, ..
            } => Observation {
                probe: to_cartesian(probe),
                perturber: Some(to_cartesian(&perturber.as_polar_state())),
            },
        }
    }

    /// Instantaneous impact-parameter estimate `|r_rel x v_rel| / |v_rel|`,
    /// tracked for the patched variant only.
    pub fn impact_parameter_estimate(&self) -> Option<f64> {
        match self {
            Encounter::ThreeBodyPatched {
                probe, perturber, ..
            } => {
                let p = to_cartesian(probe);
                let m = to_cartesian(&perturber.as_polar_state());
                let rel_x = p.x - m.x;
                let rel_v = p.v - m.v;
                let cross = rel_x.x * rel_v.y - rel_x.y * rel_v.x;
                Some(cross.abs() / rel_v.norm())
            }
            _ => None,
        }
    }
}

/// One fully-initialized test: state, entry bookkeeping, and thresholds.
pub struct Scenario {
    pub encounter: Encounter,
    pub entry: EntryState,
    pub stop: StopRule,
}

impl Scenario {
    /// Construct the initial state for impact parameter `b`.
    pub fn build(cfg: &ScenarioConfig, params: &Parameters, b: f64) -> Self {
        match &cfg.variant {
            VariantConfig::SingleBodyCartesian {
                start_distance_factor,
                v_infinity,
                perturber,
            } => {
                let mu = params.g * perturber.mass;

                // Probe starts on the -x side, offset by b in y, moving +x.
                // Its speed is the v_infinity boost for the finite start
                // distance: v^2 = v_inf^2 + 2 mu / d0
                let d0 = start_distance_factor * perturber.radius;
                let v_init = (v_infinity * v_infinity + 2.0 * mu / d0).sqrt();
                let probe = CartesianState {
                    x: Vec2::new(-d0, b),
                    v: Vec2::new(v_init, 0.0),
                };

                // The analyzer compares against the asymptotic approach
                let v_in = Vec2::new(*v_infinity, 0.0);

                Scenario {
                    encounter: Encounter::SingleBodyCartesian {
                        gravity: CentralGravity { mu },
                        probe,
                    },
                    entry: EntryState {
                        velocity: v_in,
                        velocity_rel: v_in,
                    },
                    stop: StopRule {
                        collision_radius: perturber.radius,
                        escape_distance: d0,
                        warmup: params.warmup(),
                    },
                }
            }

            VariantConfig::TwoBodyPolar {
                primary_mass,
                perturber,
                probe_orbit_radius,
                probe_radial_velocity,
                escape_distance,
                perturbation,
            } => {
                let mu_primary = params.g * primary_mass;

                // Perturber on its circular orbit, rate from the primary's mass
                let pert = PerturberPolar {
                    r: perturber.orbit_radius,
                    theta: perturber.initial_angle_deg.to_radians(),
                    omega: circular_rate(mu_primary, perturber.orbit_radius),
                };

                // Probe ahead of the perturber by the angle subtending b
                // at its own orbit radius
                let r_s = *probe_orbit_radius;
                let probe = PolarState {
                    r: r_s,
                    theta: pert.theta + (b / r_s).asin(),
                    v_r: *probe_radial_velocity,
                    omega: circular_rate(mu_primary, r_s),
                };

                let v_probe = to_cartesian(&probe).v;
                let v_pert = to_cartesian(&pert.as_polar_state()).v;

                Scenario {
                    encounter: Encounter::TwoBodyPolar {
                        gravity: PerturbedPolarGravity {
                            mu_primary,
                            mu_perturber: params.g * perturber.mass,
                            sign: perturbation.factor(),
                        },
                        probe,
                        perturber: pert,
                    },
                    entry: EntryState {
                        velocity: v_probe,
                        velocity_rel: v_probe - v_pert,
                    },
                    stop: StopRule {
                        collision_radius: perturber.radius,
                        escape_distance: *escape_distance,
                        warmup: params.warmup(),
                    },
                }
            }

            VariantConfig::ThreeBodyPatched {
                primary_mass,
                perturber,
                entry_radius_factor,
                v_infinity,
                perturbation,
            } => {
                let mu_primary = params.g * primary_mass;
                let mu_perturber = params.g * perturber.mass;

                let pert = PerturberPolar {
                    r: perturber.orbit_radius,
                    theta: perturber.initial_angle_deg.to_radians(),
                    omega: circular_rate(mu_primary, perturber.orbit_radius),
                };
                let pert_k = to_cartesian(&pert.as_polar_state());
                let (sin_m, cos_m) = pert.theta.sin_cos();

                // Entry point on the sphere-of-influence circle: trailing
                // the perturber along its orbit, offset sideways by b
                let r_e = entry_radius_factor * perturber.radius;
                let along = (r_e * r_e - b * b).sqrt();
                let x = pert_k.x
                    + Vec2::new(along * sin_m - b * cos_m, -along * cos_m - b * sin_m);

                // Relative entry velocity points along the perturber's
                // motion, boosted from v_infinity for the finite entry radius
                let v_entry = (v_infinity * v_infinity + 2.0 * mu_perturber / r_e).sqrt();
                let v_rel = Vec2::new(-v_entry * sin_m, v_entry * cos_m);
                let v = v_rel + pert_k.v;

                let probe = to_polar(&CartesianState { x, v });

                Scenario {
                    encounter: Encounter::ThreeBodyPatched {
                        gravity: PerturbedPolarGravity {
                            mu_primary,
                            mu_perturber,
                            sign: perturbation.factor(),
                        },
                        probe,
                        perturber: pert,
                    },
                    entry: EntryState {
                        velocity: v,
                        velocity_rel: v_rel,
                    },
                    stop: StopRule {
                        collision_radius: perturber.radius,
                        escape_distance: r_e,
                        warmup: params.warmup(),
                    },
                }
            }
        }
    }
}

/// Angular rate of a circular orbit of radius `r` around a body with
/// gravitational parameter `mu`.
fn circular_rate(mu: f64, r: f64) -> f64 {
    (mu / (r * r * r)).sqrt()
}
