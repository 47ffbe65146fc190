//! Baking API: evaluate every movement on every frame of a window and keep
//! the result as plain arrays.

use serde::{Deserialize, Serialize};

use crate::diagnostics::CurveObserver;
use crate::error::{MotionError, Result};
use crate::sampling::{Trajectory, TrajectoryFrame};
use crate::store::MotionStore;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BakingConfig {
    /// First frame to bake; defaults to the first keyframe. Clamped to the
    /// keyframe span, which the window must overlap.
    pub start_frame: Option<u64>,
    /// Last frame to bake (inclusive); defaults to the last keyframe. Clamped to the keyframe span.
    pub end_frame: Option<u64>,
    /// Also bake the slope of each curve, in value units per frame.
    #[serde(default)]
    pub include_velocities: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedMovement {
    pub movement: String,
    /// One value per baked frame.
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocities: Option<Vec<f64>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedTrajectory {
    pub framerate: u32,
    pub start_frame: u64,
    pub end_frame: u64,
    /// Lexical movement order.
    pub tracks: Vec<BakedMovement>,
}

impl BakedTrajectory {
    pub fn frame_count(&self) -> usize {
        (self.end_frame - self.start_frame + 1) as usize
    }

    pub fn track(&self, movement: &str) -> Option<&BakedMovement> {
        self.tracks.iter().find(|t| t.movement == movement)
    }

    /// Frame-major view of the baked values.
    pub fn frames(&self) -> impl Iterator<Item = TrajectoryFrame> + '_ {
        (0..self.frame_count()).map(move |i| TrajectoryFrame {
            frame: self.start_frame + i as u64,
            values: self
                .tracks
                .iter()
                .map(|t| (t.movement.clone(), t.values[i]))
                .collect(),
        })
    }
}

/// Bake a store's trajectory using the provided config.
pub fn bake_trajectory(store: &MotionStore, cfg: &BakingConfig) -> Result<BakedTrajectory> {
    bake(store.generate_trajectory()?, store.framerate(), cfg)
}

/// [`bake_trajectory`], reporting each curve to `observer` first.
pub fn bake_trajectory_observed(
    store: &MotionStore,
    cfg: &BakingConfig,
    observer: &mut dyn CurveObserver,
) -> Result<BakedTrajectory> {
    bake(
        store.generate_trajectory_observed(observer)?,
        store.framerate(),
        cfg,
    )
}

fn bake(trajectory: Trajectory, framerate: u32, cfg: &BakingConfig) -> Result<BakedTrajectory> {
    if let (Some(start), Some(end)) = (cfg.start_frame, cfg.end_frame) {
        if start > end {
            return Err(MotionError::configuration(format!(
                "baking window start {start} is after end {end}"
            )));
        }
    }

    let (first, last) = (trajectory.start_frame(), trajectory.end_frame());
    let misses_start = cfg.start_frame.is_some_and(|start| start > last);
    let misses_end = cfg.end_frame.is_some_and(|end| end < first);
    if misses_start || misses_end {
        return Err(MotionError::configuration(format!(
            "baking window {}..={} does not overlap keyframes {first}..={last}",
            cfg.start_frame.map_or_else(|| first.to_string(), |f| f.to_string()),
            cfg.end_frame.map_or_else(|| last.to_string(), |f| f.to_string()),
        )));
    }
    let start = cfg.start_frame.unwrap_or(first).clamp(first, last);
    let end = cfg.end_frame.unwrap_or(last).clamp(start, last);

    let tracks = trajectory
        .curves()
        .iter()
        .map(|(movement, curve)| {
            let values = (start..=end).map(|f| curve.eval(f as f64)).collect();
            let velocities = cfg
                .include_velocities
                .then(|| (start..=end).map(|f| curve.derivative(f as f64)).collect());
            BakedMovement {
                movement: movement.clone(),
                values,
                velocities,
            }
        })
        .collect();

    Ok(BakedTrajectory {
        framerate,
        start_frame: start,
        end_frame: end,
        tracks,
    })
}

/// Export baked data as serde_json::Value (stable schema for hosts).
pub fn export_baked_json(baked: &BakedTrajectory) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
