//! Configuration types for loading sweep scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! flyby sweep. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters shared by every test
//! - [`SweepConfig`]      – the impact-parameter grid
//! - [`VariantConfig`]    – which encounter geometry to integrate
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! name: mars_flyby
//!
//! parameters:
//!   dt: 0.05                # integration step, seconds
//!   max_time: 1.8e5         # timeout, seconds of simulated time
//!   output_interval: 180.0  # seconds between recorded samples
//!   # g: 6.6743e-11         # optional, defaults to CODATA
//!
//! sweep:
//!   tests: 240
//!   b_min: 6.779e6          # impact parameter range, meters
//!   b_max: 2.0337e7
//!
//! variant:
//!   type: single_body_cartesian
//!   start_distance_factor: 20.0   # initial |x|, in perturber radii
//!   v_infinity: 3000.0            # asymptotic approach speed, m/s
//!   perturber:
//!     mass: 6.4171e23
//!     radius: 3.3895e6
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! representation; nothing here is mutated after loading.

use serde::Deserialize;
use thiserror::Error;

/// Invalid or contradictory scenario input, rejected before any simulation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("sweep bounds are inverted: b_min = {min:e} m exceeds b_max = {max:e} m")]
    InvertedInterval { min: f64, max: f64 },

    #[error("a sweep needs at least two tests, got {0}")]
    TooFewTests(usize),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("initial separation {separation:e} m must exceed the largest impact parameter magnitude {b:e} m")]
    SeparationTooSmall { separation: f64, b: f64 },

    #[error("largest impact parameter magnitude {b:e} m lies beyond the probe orbit radius {radius:e} m")]
    ImpactBeyondOrbit { b: f64, radius: f64 },
}

/// Sign of the perturber's contribution to the polar equations of motion.
/// `attractive` is the physically expected pull toward the perturber.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerturbationSign {
    #[default]
    #[serde(rename = "attractive")]
    Attractive,
    #[serde(rename = "repulsive")]
    Repulsive,
}

impl PerturbationSign {
    /// Multiplier applied to both perturbation terms.
    pub fn factor(self) -> f64 {
        match self {
            PerturbationSign::Attractive => -1.0,
            PerturbationSign::Repulsive => 1.0,
        }
    }
}

/// Numerical parameters shared by every test in the sweep.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,              // integration step, seconds
    pub max_time: f64,        // timeout, seconds of simulated time
    pub output_interval: f64, // seconds between recorded samples
    #[serde(default = "default_g")]
    pub g: f64, // gravitational constant
}

fn default_g() -> f64 {
    6.6743e-11
}

/// The impact-parameter grid swept by the driver.
#[derive(Deserialize, Debug, Clone)]
pub struct SweepConfig {
    pub tests: usize, // number of grid points, at least 2
    pub b_min: f64,   // smallest impact parameter, meters
    pub b_max: f64,   // largest impact parameter, meters
}

/// A massive body fixed at the origin.
#[derive(Deserialize, Debug, Clone)]
pub struct CentralBodyConfig {
    pub mass: f64,   // kg
    pub radius: f64, // collision radius, meters
}

/// A massive body on a circular orbit around the primary.
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitingPerturberConfig {
    pub mass: f64,              // kg
    pub radius: f64,            // collision radius, meters
    pub orbit_radius: f64,      // circular orbit radius, meters
    pub initial_angle_deg: f64, // angular position at t = 0, degrees
}

/// Which encounter geometry the sweep integrates.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VariantConfig {
    /// Probe past a single fixed body at the origin, Cartesian frame.
    SingleBodyCartesian {
        start_distance_factor: f64, // initial |x|, in perturber radii
        v_infinity: f64,            // asymptotic approach speed, m/s
        perturber: CentralBodyConfig,
    },
    /// Probe and perturber on independent orbits around a shared primary,
    /// polar frame.
    TwoBodyPolar {
        primary_mass: f64, // kg
        perturber: OrbitingPerturberConfig,
        probe_orbit_radius: f64,    // meters
        probe_radial_velocity: f64, // m/s, positive outward
        escape_distance: f64,       // separation ending the encounter, meters
        #[serde(default)]
        perturbation: PerturbationSign,
    },
    /// Probe injected at the perturber's sphere-of-influence boundary.
    ThreeBodyPatched {
        primary_mass: f64, // kg
        perturber: OrbitingPerturberConfig,
        entry_radius_factor: f64, // sphere-of-influence radius, in perturber radii
        v_infinity: f64,          // approach speed at infinity, m/s
        #[serde(default)]
        perturbation: PerturbationSign,
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub name: String, // output directory name
    pub parameters: ParametersConfig,
    pub sweep: SweepConfig,
    pub variant: VariantConfig,
}

impl ScenarioConfig {
    /// Cross-field validation. Any failure is fatal before the first test;
    /// a sweep never starts on a configuration that could fail later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dt", self.parameters.dt)?;
        positive("max_time", self.parameters.max_time)?;
        positive("output_interval", self.parameters.output_interval)?;

        if self.sweep.tests < 2 {
            return Err(ConfigError::TooFewTests(self.sweep.tests));
        }
        if self.sweep.b_min > self.sweep.b_max {
            return Err(ConfigError::InvertedInterval {
                min: self.sweep.b_min,
                max: self.sweep.b_max,
            });
        }

        // The grid may span negative b; the geometric bounds below compare
        // against the largest magnitude in the sweep.
        let b_extent = self.sweep.b_min.abs().max(self.sweep.b_max.abs());

        match &self.variant {
            VariantConfig::SingleBodyCartesian {
                start_distance_factor,
                v_infinity,
                perturber,
            } => {
                positive("start_distance_factor", *start_distance_factor)?;
                positive("v_infinity", *v_infinity)?;
                positive("perturber.mass", perturber.mass)?;
                positive("perturber.radius", perturber.radius)?;

                let separation = start_distance_factor * perturber.radius;
                if separation <= b_extent {
                    return Err(ConfigError::SeparationTooSmall {
                        separation,
                        b: b_extent,
                    });
                }
            }

            VariantConfig::TwoBodyPolar {
                primary_mass,
                perturber,
                probe_orbit_radius,
                escape_distance,
                ..
            } => {
                positive("primary_mass", *primary_mass)?;
                positive("probe_orbit_radius", *probe_orbit_radius)?;
                positive("escape_distance", *escape_distance)?;
                validate_perturber(perturber)?;

                // The probe's initial angle is asin(b / r); keep it defined
                if b_extent > *probe_orbit_radius {
                    return Err(ConfigError::ImpactBeyondOrbit {
                        b: b_extent,
                        radius: *probe_orbit_radius,
                    });
                }
            }

            VariantConfig::ThreeBodyPatched {
                primary_mass,
                perturber,
                entry_radius_factor,
                v_infinity,
                ..
            } => {
                positive("primary_mass", *primary_mass)?;
                positive("entry_radius_factor", *entry_radius_factor)?;
                positive("v_infinity", *v_infinity)?;
                validate_perturber(perturber)?;

                let separation = entry_radius_factor * perturber.radius;
                if separation <= b_extent {
                    return Err(ConfigError::SeparationTooSmall {
                        separation,
                        b: b_extent,
                    });
                }
            }
        }

        Ok(())
    }
}

fn validate_perturber(p: &OrbitingPerturberConfig) -> Result<(), ConfigError> {
    positive("perturber.mass", p.mass)?;
    positive("perturber.radius", p.radius)?;
    positive("perturber.orbit_radius", p.orbit_radius)?;
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
