//! Core state types for a flyby encounter.
//!
//! Defines the body states in the coordinate system each variant
//! integrates in:
//! - `CartesianState` for the single-body variant (and for snapshots)
//! - `PolarState` / `PerturberPolar` for the polar variants
//!
//! plus the per-run accumulators and the trajectory `Sample` record
//! handed to the result sink.

use nalgebra::Vector2;
pub type Vec2 = Vector2<f64>;

/// Position and velocity of one body in Cartesian coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CartesianState {
    pub x: Vec2, // position
    pub v: Vec2, // velocity
}

/// Position and velocity of one body in the polar frame.
#[derive(Debug, Clone, Copy)]
pub struct PolarState {
    pub r: f64,     // radial position
    pub theta: f64, // angular position
    pub v_r: f64,   // radial velocity
    pub omega: f64, // angular velocity
}

/// Perturbing body on a fixed circular orbit around the primary.
#[derive(Debug, Clone, Copy)]
pub struct PerturberPolar {
    pub r: f64,     // orbital radius, constant
    pub theta: f64, // angular position
    pub omega: f64, // circular angular rate, constant
}

impl PerturberPolar {
    /// View the perturber as a full polar state (its radial velocity is zero).
    pub fn as_polar_state(&self) -> PolarState {
        PolarState {
            r: self.r,
            theta: self.theta,
            v_r: 0.0,
            omega: self.omega,
        }
    }
}

/// Cartesian snapshot of the active bodies at one instant.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub probe: CartesianState,
    pub perturber: Option<CartesianState>, // absent in the single-body variant
}

/// One recorded trajectory point, produced at the sampling cadence.
#[derive(Debug, Clone)]
pub struct Sample {
    pub t: f64,
    pub probe: CartesianState,
    pub perturber: Option<CartesianState>,
    pub distance: f64,                 // probe-perturber separation
    pub impact_parameter: Option<f64>, // instantaneous estimate, patched variant only
}

/// Running minima accumulated over one encounter.
///
/// `update` folds with `min`, so the recorded values never increase; a
/// halted run simply stops feeding it.
#[derive(Debug, Clone)]
pub struct RunningMinima {
    pub distance: f64,
    pub impact_parameter: Option<f64>,
}

impl RunningMinima {
    pub fn new(distance: f64, impact_parameter: Option<f64>) -> Self {
        Self {
            distance,
            impact_parameter,
        }
    }

    pub fn update(&mut self, distance: f64, impact_parameter: Option<f64>) {
        self.distance = self.distance.min(distance);
        if let (Some(current), Some(next)) = (self.impact_parameter, impact_parameter) {
            self.impact_parameter = Some(current.min(next));
        }
    }
}
