//! Keyframe entries held by a [`MotionStore`](crate::MotionStore).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::timecode::TimeAddress;

/// Movement name to value at one keyframe. Not every movement has to appear.
pub type MovementValues = BTreeMap<String, f64>;

/// A keyframe: a time address and the movement values set there.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub address: TimeAddress,
    pub values: MovementValues,
}

impl Keyframe {
    #[inline]
    pub fn frame(&self) -> u64 {
        self.address.to_frame_number()
    }

    #[inline]
    pub fn get(&self, movement: &str) -> Option<f64> {
        self.values.get(movement).copied()
    }
}

/// One `(frame, value)` sample of a single movement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub frame: u64,
    pub value: f64,
}

impl From<Sample> for (f64, f64) {
    fn from(s: Sample) -> Self {
        (s.frame as f64, s.value)
    }
}
