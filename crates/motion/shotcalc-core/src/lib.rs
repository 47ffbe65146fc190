//! shotcalc core
//!
//! Turns sparse camera keyframes into a dense, frame-by-frame trajectory for
//! stop-motion rigs:
//! - [`timecode`]: `HH:MM:SS:FF` time codes and absolute frame counts.
//! - [`interp`]: monotone cubic (PCHIP) curves through keyframe samples.
//! - [`store`]: per-movement keyframe storage and trajectory generation.
//! - [`project`] / [`baking`]: project file rows in, baked frame tables out.
//!
//! Everything here is synchronous and single-threaded. A [`MotionStore`] is a
//! plain value; callers serialize mutation and reads.

pub mod baking;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod interp;
pub mod project;
pub mod sampling;
pub mod store;
pub mod timecode;

pub use baking::{bake_trajectory, export_baked_json, BakedMovement, BakedTrajectory, BakingConfig};
pub use config::Config;
pub use data::{Keyframe, MovementValues, Sample};
pub use diagnostics::{CurveObserver, LogObserver, RecordingObserver};
pub use error::{MotionError, Result};
pub use interp::{Curve, CurveError};
pub use project::{CellValue, Project, ProjectRow};
pub use sampling::{Trajectory, TrajectoryFrame};
pub use store::{MotionStore, MovementCurve};
pub use timecode::{FrameAddress, TimeAddress, TimeCodeParts};
