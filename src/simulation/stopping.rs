//! Terminal outcomes and the stop rule evaluated at sampling steps.

/// Mutually exclusive terminal states of one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Collision,
    Escape,
    Timeout,
}

impl Outcome {
    /// Label written to the summary output.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Collision => "collision",
            Outcome::Escape => "escape",
            Outcome::Timeout => "timeout",
        }
    }

    pub fn is_collision(&self) -> bool {
        matches!(self, Outcome::Collision)
    }
}

/// Distance thresholds checked once per sampling interval, after the
/// sample is recorded.
///
/// Collision outranks escape when both hold at the same check. The
/// warm-up window keeps a run alive long enough to leave an initial
/// separation that already sits at or beyond the escape threshold.
#[derive(Debug, Clone)]
pub struct StopRule {
    pub collision_radius: f64, // perturber physical radius
    pub escape_distance: f64,  // separation at which the encounter is over
    pub warmup: f64,           // simulated seconds before escape may fire
}

impl StopRule {
    /// Decide whether the run halts at this sampling step.
    pub fn check(&self, t: f64, distance: f64) -> Option<Outcome> {
        if distance < self.collision_radius {
            return Some(Outcome::Collision);
        }
        if distance >= self.escape_distance && t > self.warmup {
            return Some(Outcome::Escape);
        }
        None
    }
}
