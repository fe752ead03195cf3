pub mod configuration;
pub mod output;
pub mod simulation;
pub mod sweep;

pub use simulation::analysis::{
    analyze, asymptotic_velocity, deflection_angle, speed_change, EncounterResult,
};
pub use simulation::coords::{to_cartesian, to_polar};
pub use simulation::engine::{Engine, RunReport};
pub use simulation::forces::{polar_separation, CentralGravity, PerturbedPolarGravity, PolarRates};
pub use simulation::integrator::{euler_step_cartesian, euler_step_polar};
pub use simulation::params::Parameters;
pub use simulation::scenario::{Encounter, EntryState, Scenario};
pub use simulation::states::{
    CartesianState, Observation, PerturberPolar, PolarState, RunningMinima, Sample, Vec2,
};
pub use simulation::stopping::{Outcome, StopRule};

pub use configuration::config::{
    CentralBodyConfig, ConfigError, OrbitingPerturberConfig, ParametersConfig, PerturbationSign,
    ScenarioConfig, SweepConfig, VariantConfig,
};

pub use output::sink::{CsvSink, MemorySink, OutputError, ResultSink, TrajectoryLayout};

pub use sweep::driver::{grid_points, run_sweep, SweepPlan};
