//! Polar <-> Cartesian transforms for positions and velocities.
//!
//! The polar angular component is a rate (rad/s), so the Cartesian
//! tangential speed is `r * omega`.

use super::states::{CartesianState, PolarState, Vec2};

/// Map a polar state to Cartesian position and velocity.
pub fn to_cartesian(p: &PolarState) -> CartesianState {
    let (sin_t, cos_t) = p.theta.sin_cos();
    let x = Vec2::new(p.r * cos_t, p.r * sin_t);
    let v = Vec2::new(
        p.v_r * cos_t - p.r * p.omega * sin_t,
        p.v_r * sin_t + p.r * p.omega * cos_t,
    );
    CartesianState { x, v }
}

/// Map Cartesian position and velocity to a polar state.
///
/// Callers must keep the body away from the origin; `r = 0` has no
/// angular coordinate.
pub fn to_polar(k: &CartesianState) -> PolarState {
    let r = k.x.x.hypot(k.x.y);
    let theta = k.x.y.atan2(k.x.x);
    let v_r = (k.x.x * k.v.x + k.x.y * k.v.y) / r;
    let omega = (k.x.x * k.v.y - k.x.y * k.v.x) / (r * r);
    PolarState {
        r,
        theta,
        v_r,
        omega,
    }
}
