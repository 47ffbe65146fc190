//! Keyframe store: accumulates per-movement samples and turns them into
//! curves and a dense per-frame trajectory.

use std::collections::BTreeMap;

use log::debug;

use crate::config::Config;
use crate::data::{Keyframe, MovementValues, Sample};
use crate::diagnostics::CurveObserver;
use crate::error::{MotionError, Result};
use crate::interp::Curve;
use crate::sampling::Trajectory;
use crate::timecode::{FrameAddress, TimeAddress};

/// Curve built for one movement, with the samples it was fitted to.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementCurve {
    pub movement: String,
    pub samples: Vec<Sample>,
    pub curve: Curve,
}

/// Keyframes for a fixed set of movements at a fixed framerate.
///
/// Entries are keyed by absolute frame, so `"00:00:07:00"` and `168` (at 24
/// fps) address the same keyframe. Adding a keyframe at an occupied frame
/// replaces the whole entry. Curves and trajectories are derived on every
/// request and never cached.
#[derive(Clone, Debug)]
pub struct MotionStore {
    framerate: u32,
    movements: Vec<String>,
    keyframes: BTreeMap<u64, Keyframe>,
}

impl MotionStore {
    pub fn new<I, S>(framerate: u32, movements: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_config(&Config::new(framerate, movements))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            framerate: config.framerate,
            movements: config.movements.clone(),
            keyframes: BTreeMap::new(),
        })
    }

    #[inline]
    pub fn framerate(&self) -> u32 {
        self.framerate
    }

    /// Movement names in the order they were configured.
    #[inline]
    pub fn movements(&self) -> &[String] {
        &self.movements
    }

    pub fn config(&self) -> Config {
        Config {
            framerate: self.framerate,
            movements: self.movements.clone(),
        }
    }

    /// Add (or replace) the keyframe at `address`.
    ///
    /// Every movement must belong to the store and every value must be
    /// finite; a keyframe that sets nothing is rejected. Returns the resolved
    /// address.
    pub fn add_keyframe<A, I, K>(&mut self, address: A, values: I) -> Result<TimeAddress>
    where
        A: Into<FrameAddress>,
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let address = address.into().resolve(self.framerate)?;

        let mut entry = MovementValues::new();
        for (movement, value) in values {
            let movement = movement.into();
            if !self.movements.iter().any(|m| *m == movement) {
                return Err(MotionError::configuration(format!(
                    "keyframe {address} sets unknown movement '{movement}'"
                )));
            }
            if !value.is_finite() {
                return Err(MotionError::configuration(format!(
                    "keyframe {address} sets movement '{movement}' to non-finite value {value}"
                )));
            }
            entry.insert(movement, value);
        }
        if entry.is_empty() {
            return Err(MotionError::configuration(format!(
                "keyframe {address} sets no movement values"
            )));
        }

        let frame = address.to_frame_number();
        let previous = self.keyframes.insert(
            frame,
            Keyframe {
                address,
                values: entry,
            },
        );
        if previous.is_some() {
            debug!("keyframe {address} (frame {frame}) replaced an existing entry");
        }
        Ok(address)
    }

    /// Remove the keyframe at `address`, returning it if there was one.
    pub fn remove_keyframe(&mut self, address: impl Into<FrameAddress>) -> Result<Option<Keyframe>> {
        let address = address.into().resolve(self.framerate)?;
        Ok(self.keyframes.remove(&address.to_frame_number()))
    }

    pub fn clear(&mut self) {
        self.keyframes.clear();
    }

    /// Keyframes in ascending frame order.
    pub fn keyframes(&self) -> impl Iterator<Item = &Keyframe> + '_ {
        self.keyframes.values()
    }

    #[inline]
    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// First and last keyframe frame across all movements.
    pub fn span(&self) -> Option<(u64, u64)> {
        let first = self.keyframes.keys().next()?;
        let last = self.keyframes.keys().next_back()?;
        Some((*first, *last))
    }

    /// Samples of one movement in ascending frame order.
    pub fn samples(&self, movement: &str) -> Vec<Sample> {
        self.keyframes
            .values()
            .filter_map(|k| {
                k.get(movement).map(|value| Sample {
                    frame: k.frame(),
                    value,
                })
            })
            .collect()
    }

    /// Build one curve per movement, in lexical movement order.
    ///
    /// Fails with [`MotionError::EmptyState`] without keyframes and with
    /// [`MotionError::InsufficientData`] for the first movement that has
    /// fewer than two keyframes.
    pub fn curves(&self) -> Result<Vec<MovementCurve>> {
        if self.keyframes.is_empty() {
            return Err(MotionError::EmptyState);
        }

        let mut names: Vec<&String> = self.movements.iter().collect();
        names.sort();

        let mut curves = Vec::with_capacity(names.len());
        for movement in names {
            let samples = self.samples(movement);
            if samples.len() < 2 {
                return Err(MotionError::InsufficientData {
                    movement: movement.clone(),
                    found: samples.len(),
                });
            }
            let points: Vec<(f64, f64)> = samples.iter().copied().map(Into::into).collect();
            let curve = Curve::fit(&points).map_err(|source| MotionError::Curve {
                movement: movement.clone(),
                source,
            })?;
            debug!(
                "built curve for '{movement}' from {} keyframes over frames {:?}",
                samples.len(),
                curve.span()
            );
            curves.push(MovementCurve {
                movement: movement.clone(),
                samples,
                curve,
            });
        }
        Ok(curves)
    }

    /// Dense trajectory over the global keyframe span.
    ///
    /// Every movement is sampled on every frame of `[first, last]` across all
    /// keyframes, so a movement whose own keyframes cover a narrower range is
    /// extrapolated outside it. Curves are built before this returns; frames
    /// are produced one at a time as the trajectory is iterated.
    pub fn generate_trajectory(&self) -> Result<Trajectory> {
        let curves = self.curves()?;
        self.trajectory_from(curves)
    }

    /// [`MotionStore::generate_trajectory`], reporting each built curve to
    /// `observer` first.
    pub fn generate_trajectory_observed(
        &self,
        observer: &mut dyn CurveObserver,
    ) -> Result<Trajectory> {
        let curves = self.curves()?;
        for c in &curves {
            observer.on_curve(&c.movement, &c.samples, &c.curve);
        }
        self.trajectory_from(curves)
    }

    fn trajectory_from(&self, curves: Vec<MovementCurve>) -> Result<Trajectory> {
        let (start, end) = self.span().ok_or(MotionError::EmptyState)?;
        let curves = curves.into_iter().map(|c| (c.movement, c.curve)).collect();
        Ok(Trajectory::new(curves, start, end))
    }
}
