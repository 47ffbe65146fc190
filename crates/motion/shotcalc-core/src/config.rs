//! Store configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};

/// Framerate and movement list a [`MotionStore`](crate::MotionStore) is built with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Frames per second; must be > 0.
    pub framerate: u32,
    /// Movement (camera axis) names, unique and non-empty.
    pub movements: Vec<String>,
}

impl Config {
    pub fn new<I, S>(framerate: u32, movements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            framerate,
            movements: movements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.framerate == 0 {
            return Err(MotionError::configuration("framerate must be > 0"));
        }
        let mut seen = BTreeSet::new();
        for name in &self.movements {
            if name.trim().is_empty() {
                return Err(MotionError::configuration("movement names must not be empty"));
            }
            if !seen.insert(name.as_str()) {
                return Err(MotionError::configuration(format!(
                    "movement '{name}' is listed more than once"
                )));
            }
        }
        Ok(())
    }
}
