//! Caller-invoked inspection of built curves.
//!
//! Curve fitting itself never plots or logs its output. Hosts that want to
//! look at the curves pass a [`CurveObserver`] to
//! [`MotionStore::generate_trajectory_observed`](crate::MotionStore::generate_trajectory_observed).

use log::{log, Level};

use crate::data::Sample;
use crate::interp::Curve;

/// Receives every curve a store builds, before any frame is produced.
pub trait CurveObserver {
    fn on_curve(&mut self, movement: &str, samples: &[Sample], curve: &Curve);
}

/// Frames between preview points when no explicit count is given.
pub const DEFAULT_PREVIEW_SPACING: f64 = 10.0;

/// One preview point per [`DEFAULT_PREVIEW_SPACING`] frames of the curve's own
/// span, never fewer than two.
pub fn default_preview_count(curve: &Curve) -> usize {
    let (first, last) = curve.span();
    (((last - first) / DEFAULT_PREVIEW_SPACING).floor() as usize).max(2)
}

/// `count` evenly spaced `(frame, value)` points from the first to the last
/// knot, both included.
pub fn preview_points(curve: &Curve, count: usize) -> Vec<(f64, f64)> {
    let (first, last) = curve.span();
    match count {
        0 => Vec::new(),
        1 => vec![(first, curve.eval(first))],
        _ => {
            let step = (last - first) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    let x = if i + 1 == count {
                        last
                    } else {
                        first + step * i as f64
                    };
                    (x, curve.eval(x))
                })
                .collect()
        }
    }
}

/// Logs a preview of each curve through the `log` facade.
#[derive(Clone, Copy, Debug)]
pub struct LogObserver {
    pub level: Level,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self {
            level: Level::Debug,
        }
    }
}

impl CurveObserver for LogObserver {
    fn on_curve(&mut self, movement: &str, samples: &[Sample], curve: &Curve) {
        let points = preview_points(curve, default_preview_count(curve));
        log!(
            self.level,
            "curve '{movement}': {} keyframes, preview {:?}",
            samples.len(),
            points
        );
    }
}

/// Preview captured by [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq)]
pub struct CurvePreview {
    pub movement: String,
    pub samples: Vec<Sample>,
    pub points: Vec<(f64, f64)>,
}

/// Keeps a preview of each curve it is shown.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub previews: Vec<CurvePreview>,
}

impl CurveObserver for RecordingObserver {
    fn on_curve(&mut self, movement: &str, samples: &[Sample], curve: &Curve) {
        self.previews.push(CurvePreview {
            movement: movement.to_string(),
            samples: samples.to_vec(),
            points: preview_points(curve, default_preview_count(curve)),
        });
    }
}
