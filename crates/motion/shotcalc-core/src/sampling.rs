//! Dense per-frame sampling of movement curves.
//!
//! Model:
//! - A [`Trajectory`] owns one fitted [`Curve`] per movement and a frame range.
//! - Iterating yields one [`TrajectoryFrame`] per integer frame, inclusive of
//!   both ends, evaluating every curve at that frame.
//! - Dropping the iterator early needs no cleanup. To start over, ask the
//!   store for a new trajectory; that also picks up keyframe changes.

use std::collections::BTreeMap;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::interp::Curve;

/// Values of every movement at one frame, keyed in lexical movement order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryFrame {
    pub frame: u64,
    pub values: BTreeMap<String, f64>,
}

/// Finite, lazily evaluated sequence of frames.
#[derive(Debug)]
pub struct Trajectory {
    curves: Vec<(String, Curve)>,
    start: u64,
    end: u64,
    next_frame: u64,
    remaining: u64,
}

impl Trajectory {
    /// `curves` should already be in the order frames are reported in.
    pub(crate) fn new(curves: Vec<(String, Curve)>, start: u64, end: u64) -> Self {
        Self {
            curves,
            start,
            end,
            next_frame: start,
            remaining: end.saturating_sub(start) + 1,
        }
    }

    #[inline]
    pub fn start_frame(&self) -> u64 {
        self.start
    }

    #[inline]
    pub fn end_frame(&self) -> u64 {
        self.end
    }

    /// Total number of frames from start to end, regardless of progress.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn curves(&self) -> &[(String, Curve)] {
        &self.curves
    }

    pub fn curve(&self, movement: &str) -> Option<&Curve> {
        self.curves
            .iter()
            .find(|(name, _)| name == movement)
            .map(|(_, curve)| curve)
    }

    /// Evaluate every curve at `frame`, whether or not it lies in the range.
    pub fn sample(&self, frame: u64) -> TrajectoryFrame {
        let x = frame as f64;
        TrajectoryFrame {
            frame,
            values: self
                .curves
                .iter()
                .map(|(name, curve)| (name.clone(), curve.eval(x)))
                .collect(),
        }
    }
}

impl Iterator for Trajectory {
    type Item = TrajectoryFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let frame = self.sample(self.next_frame);
        self.remaining -= 1;
        self.next_frame += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trajectory {}

impl FusedIterator for Trajectory {}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Vec<(String, Curve)> {
        vec![(
            "pan".to_string(),
            Curve::fit(&[(0.0, 0.0), (10.0, 10.0)]).unwrap(),
        )]
    }

    #[test]
    fn yields_inclusive_range_then_stops() {
        let mut t = Trajectory::new(line(), 2, 5);
        assert_eq!(t.len(), 4);
        let frames: Vec<u64> = t.by_ref().map(|f| f.frame).collect();
        assert_eq!(frames, [2, 3, 4, 5]);
        assert!(t.next().is_none());
        assert_eq!(t.frame_count(), 4);
    }

    #[test]
    fn single_frame_range() {
        let t = Trajectory::new(line(), 7, 7);
        let frames: Vec<TrajectoryFrame> = t.collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].values["pan"], 7.0);
    }
}
