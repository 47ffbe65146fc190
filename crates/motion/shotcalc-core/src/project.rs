//! Project files: `{ "name", "framerate", "data": [[address, {movement: value}], ...] }`.
//!
//! Notes:
//! - An address is either a frame number (`32`) or a time code (`"00:00:07:00"`).
//! - Rows without an address or without values are what an editing table
//!   leaves behind; they are kept on load, skipped when building a store and
//!   dropped on save.
//! - Cell values may be numbers or numeric strings.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{MotionError, Result};
use crate::store::MotionStore;
use crate::timecode::FrameAddress;

/// A table cell as found in a project file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            CellValue::Number(n) => Ok(*n),
            CellValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| MotionError::format(s.as_str(), format!("not a number: {e}"))),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

/// One table row: an optional address and the cells set on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow(pub Option<FrameAddress>, pub BTreeMap<String, CellValue>);

impl ProjectRow {
    pub fn new(address: impl Into<FrameAddress>, cells: BTreeMap<String, CellValue>) -> Self {
        Self(Some(address.into()), cells)
    }

    /// Address and cells, if the row carries both.
    pub fn as_keyframe(&self) -> Option<(&FrameAddress, &BTreeMap<String, CellValue>)> {
        match &self.0 {
            Some(address) if !self.1.is_empty() => Some((address, &self.1)),
            _ => None,
        }
    }
}

/// A saved project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub framerate: u32,
    #[serde(default)]
    pub data: Vec<ProjectRow>,
}

#[derive(Serialize)]
struct SavedProject<'a> {
    name: &'a str,
    framerate: u32,
    data: Vec<&'a ProjectRow>,
}

impl Project {
    pub fn from_json(s: &str) -> Result<Project> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty JSON holding only [`valid_rows`](Self::valid_rows); blank
    /// editor rows are not saved.
    pub fn to_json(&self) -> Result<String> {
        let saved = SavedProject {
            name: &self.name,
            framerate: self.framerate,
            data: self
                .data
                .iter()
                .filter(|row| row.as_keyframe().is_some())
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&saved)?)
    }

    /// Rows that have both an address and at least one value.
    pub fn valid_rows(&self) -> impl Iterator<Item = (&FrameAddress, &BTreeMap<String, CellValue>)> {
        self.data.iter().filter_map(ProjectRow::as_keyframe)
    }

    /// Sorted union of every movement named in any row.
    pub fn movements(&self) -> Vec<String> {
        let names: BTreeSet<&String> = self.data.iter().flat_map(|row| row.1.keys()).collect();
        names.into_iter().cloned().collect()
    }

    pub fn config(&self) -> Config {
        Config {
            framerate: self.framerate,
            movements: self.movements(),
        }
    }

    /// Build a store holding every valid row as a keyframe. Later rows at the
    /// same frame replace earlier ones.
    pub fn to_store(&self) -> Result<MotionStore> {
        let mut store = MotionStore::from_config(&self.config())?;
        for (index, row) in self.data.iter().enumerate() {
            let Some((address, cells)) = row.as_keyframe() else {
                warn!("project '{}': skipping row {index} without address or values", self.name);
                continue;
            };
            let mut values = Vec::with_capacity(cells.len());
            for (movement, cell) in cells {
                values.push((movement.clone(), cell.to_f64()?));
            }
            store.add_keyframe(address.clone(), values)?;
        }
        Ok(store)
    }

    /// Snapshot a store's keyframes as rows addressed by frame number.
    pub fn from_store(name: impl Into<String>, store: &MotionStore) -> Project {
        let data = store
            .keyframes()
            .map(|k| {
                let cells = k
                    .values
                    .iter()
                    .map(|(m, v)| (m.clone(), CellValue::Number(*v)))
                    .collect();
                ProjectRow(Some(FrameAddress::FrameNumber(k.frame())), cells)
            })
            .collect();
        Project {
            name: name.into(),
            framerate: store.framerate(),
            data,
        }
    }
}
