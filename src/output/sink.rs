//! Result sinks: durable CSV storage and an in-memory collector.
//!
//! The engine decides *when* to record; a [`ResultSink`] decides *where*
//! the record goes. [`CsvSink`] writes one trajectory file per test plus
//! a sweep-wide summary; [`MemorySink`] keeps everything in memory for
//! tests and library callers.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::configuration::config::VariantConfig;
use crate::simulation::analysis::EncounterResult;
use crate::simulation::states::{CartesianState, Sample, Vec2};

/// Failure to create or write the output target. Fatal for the whole
/// sweep: a partially-written result set is worse than none.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("could not create output directory {}: {}", .path.display(), .source)]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("could not write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}

/// Which columns a trajectory file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryLayout {
    /// `t,x,y,v_x,v_y,d`
    Probe,
    /// `t,x_pert,y_pert,x_probe,y_probe,v_x_pert,v_y_pert,v_x_probe,v_y_probe,d`
    ProbeAndPerturber,
    /// As [`TrajectoryLayout::ProbeAndPerturber`] plus `b_est`
    ProbeAndPerturberWithImpact,
}

impl TrajectoryLayout {
    /// Layout implied by the configured encounter geometry.
    pub fn for_variant(variant: &VariantConfig) -> Self {
        match variant {
            VariantConfig::SingleBodyCartesian { .. } => TrajectoryLayout::Probe,
            VariantConfig::TwoBodyPolar { .. } => TrajectoryLayout::ProbeAndPerturber,
            VariantConfig::ThreeBodyPatched { .. } => {
                TrajectoryLayout::ProbeAndPerturberWithImpact
            }
        }
    }

    fn header(&self) -> &'static str {
        match self {
            TrajectoryLayout::Probe => "t,x,y,v_x,v_y,d",
            TrajectoryLayout::ProbeAndPerturber => {
                "t,x_pert,y_pert,x_probe,y_probe,v_x_pert,v_y_pert,v_x_probe,v_y_probe,d"
            }
            TrajectoryLayout::ProbeAndPerturberWithImpact => {
                "t,x_pert,y_pert,x_probe,y_probe,v_x_pert,v_y_pert,v_x_probe,v_y_probe,d,b_est"
            }
        }
    }
}

/// Destination for trajectory samples and per-test summaries.
///
/// The engine calls `record_sample` between one `begin_test`/`end_test`
/// pair per test; the driver calls `write_summary` once after the last
/// test. A sample recorded with no test open is a driver bug and trips
/// a debug assertion.
pub trait ResultSink {
    /// Open the trajectory stream for test `index` (1-based).
    fn begin_test(&mut self, index: usize) -> Result<(), OutputError>;

    /// Record one trajectory sample of the current test.
    fn record_sample(&mut self, sample: &Sample) -> Result<(), OutputError>;

    /// Close the current test's trajectory stream.
    fn end_test(&mut self) -> Result<(), OutputError>;

    /// Write the whole sweep's summary rows.
    fn write_summary(&mut self, results: &[EncounterResult]) -> Result<(), OutputError>;
}

/// CSV sink: one `data_NNN.csv` per test plus a final `global.csv`,
/// all inside a directory created for this sweep.
pub struct CsvSink {
    dir: PathBuf,
    layout: TrajectoryLayout,
    trajectory: Option<BufWriter<File>>,
    trajectory_path: PathBuf,
}

impl CsvSink {
    /// Create the output directory and the sink. Fails if the directory
    /// already exists: results of an earlier sweep are never overwritten.
    pub fn create(dir: impl Into<PathBuf>, layout: TrajectoryLayout) -> Result<Self, OutputError> {
        let dir = dir.into();
        fs::create_dir(&dir).map_err(|source| OutputError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            layout,
            trajectory: None,
            trajectory_path: PathBuf::new(),
        })
    }

    fn write_err(&self, source: io::Error) -> OutputError {
        OutputError::Write {
            path: self.trajectory_path.clone(),
            source,
        }
    }
}

impl ResultSink for CsvSink {
    fn begin_test(&mut self, index: usize) -> Result<(), OutputError> {
        let path = self.dir.join(format!("data_{index:03}.csv"));
        let file = File::create(&path).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.trajectory_path = path;
        writeln!(writer, "{}", self.layout.header()).map_err(|e| self.write_err(e))?;
        self.trajectory = Some(writer);
        Ok(())
    }

    fn record_sample(&mut self, sample: &Sample) -> Result<(), OutputError> {
        debug_assert!(self.trajectory.is_some(), "sample recorded outside an active test");
        let Some(writer) = self.trajectory.as_mut() else {
            return Ok(());
        };

        let result = match self.layout {
            TrajectoryLayout::Probe => writeln!(
                writer,
                "{:.8e},{:.12e},{:.12e},{:.12e},{:.12e},{:.12e}",
                sample.t,
                sample.probe.x.x,
                sample.probe.x.y,
                sample.probe.v.x,
                sample.probe.v.y,
                sample.distance,
            ),
            TrajectoryLayout::ProbeAndPerturber => {
                let pert = perturber_or_origin(sample);
                writeln!(
                    writer,
                    "{:.8e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e}",
                    sample.t,
                    pert.x.x,
                    pert.x.y,
                    sample.probe.x.x,
                    sample.probe.x.y,
                    pert.v.x,
                    pert.v.y,
                    sample.probe.v.x,
                    sample.probe.v.y,
                    sample.distance,
                )
            }
            TrajectoryLayout::ProbeAndPerturberWithImpact => {
                let pert = perturber_or_origin(sample);
                writeln!(
                    writer,
                    "{:.8e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e}",
                    sample.t,
                    pert.x.x,
                    pert.x.y,
                    sample.probe.x.x,
                    sample.probe.x.y,
                    pert.v.x,
                    pert.v.y,
                    sample.probe.v.x,
                    sample.probe.v.y,
                    sample.distance,
                    sample.impact_parameter.unwrap_or(f64::NAN),
                )
            }
        };
        result.map_err(|e| self.write_err(e))
    }

    fn end_test(&mut self) -> Result<(), OutputError> {
        if let Some(mut writer) = self.trajectory.take() {
            writer.flush().map_err(|e| self.write_err(e))?;
        }
        Ok(())
    }

    fn write_summary(&mut self, results: &[EncounterResult]) -> Result<(), OutputError> {
        let path = self.dir.join("global.csv");
        let map_err = |source| OutputError::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(map_err)?;
        let mut writer = BufWriter::new(file);

        let with_rel = self.layout == TrajectoryLayout::ProbeAndPerturberWithImpact;
        let header = if with_rel {
            "i,b,d_min,delta_v,delta_v_rel,deflection_angle,collision,t,outcome"
        } else {
            "i,b,d_min,delta_v,deflection_angle,collision,t,outcome"
        };
        writeln!(writer, "{header}").map_err(map_err)?;

        for r in results {
            let collision = r.outcome.is_collision() as u8;
            let row = if with_rel {
                writeln!(
                    writer,
                    "{},{:.15e},{:.15e},{:.15e},{:.15e},{:.15e},{},{:.15e},{}",
                    r.index,
                    r.parameter,
                    r.min_distance,
                    r.delta_v,
                    r.delta_v_rel.unwrap_or(f64::NAN),
                    r.deflection.to_degrees(),
                    collision,
                    r.elapsed,
                    r.outcome.label(),
                )
            } else {
                writeln!(
                    writer,
                    "{},{:.15e},{:.15e},{:.15e},{:.15e},{},{:.15e},{}",
                    r.index,
                    r.parameter,
                    r.min_distance,
                    r.delta_v,
                    r.deflection.to_degrees(),
                    collision,
                    r.elapsed,
                    r.outcome.label(),
                )
            };
            row.map_err(map_err)?;
        }

        writer.flush().map_err(map_err)
    }
}

fn perturber_or_origin(sample: &Sample) -> CartesianState {
    sample.perturber.unwrap_or(CartesianState {
        x: Vec2::zeros(),
        v: Vec2::zeros(),
    })
}

/// Collects everything in memory. Used by tests and by library callers
/// that post-process results without touching storage.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub trajectories: Vec<Vec<Sample>>, // one list of samples per test
    pub summary: Vec<EncounterResult>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for MemorySink {
    fn begin_test(&mut self, _index: usize) -> Result<(), OutputError> {
        self.trajectories.push(Vec::new());
        Ok(())
    }

    fn record_sample(&mut self, sample: &Sample) -> Result<(), OutputError> {
        debug_assert!(!self.trajectories.is_empty(), "sample recorded outside an active test");
        if let Some(current) = self.trajectories.last_mut() {
            current.push(sample.clone());
        }
        Ok(())
    }

    fn end_test(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn write_summary(&mut self, results: &[EncounterResult]) -> Result<(), OutputError> {
        self.summary = results.to_vec();
        Ok(())
    }
}
