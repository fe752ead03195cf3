//! Numerical parameters shared by every test in a sweep.
//!
//! `Parameters` holds the resolved runtime settings:
//! - integration step size and timeout,
//! - sampling cadence,
//! - gravitational constant `g`

use crate::configuration::config::ParametersConfig;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,              // step size, seconds
    pub max_time: f64,        // timeout, seconds of simulated time
    pub output_interval: f64, // seconds between recorded samples
    pub g: f64,               // gravitational constant
}

impl Parameters {
    pub fn from_config(cfg: &ParametersConfig) -> Self {
        Self {
            dt: cfg.dt,
            max_time: cfg.max_time,
            output_interval: cfg.output_interval,
            g: cfg.g,
        }
    }

    /// Integration steps between samples, at least one.
    pub fn steps_per_sample(&self) -> u64 {
        ((self.output_interval / self.dt) as u64).max(1)
    }

    /// Simulated seconds before the escape criterion may fire.
    pub fn warmup(&self) -> f64 {
        10.0 * self.output_interval
    }
}
