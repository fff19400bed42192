//! Finished unit manifests.
//!
//! A manifest is a JSON array of finished work units, the shape the job
//! framework hands over when it enumerates completed units:
//!
//! ```json
//! [
//!   {
//!     "name": "ttr_r10_c2_0",
//!     "error_mask": 0,
//!     "output_files": ["upload/ttr_0.out", "upload/ttr_0.dms", "upload/ttr_0.rst"],
//!     "completed_at": "2016-03-01T12:00:00Z"
//!   },
//!   { "name": "ttr_r11_c2_0", "error_mask": 13 }
//! ]
//! ```
//!
//! A unit without `output_files` failed before producing a canonical
//! result.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One finished work unit reported by the framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsreFinishedUnit {
    /// Work unit name.
    pub name: String,
    /// Framework error bit flags.
    #[serde(default)]
    pub error_mask: i32,
    /// Artifacts of the canonical result, in order. Absent when the
    /// unit failed before producing one.
    #[serde(default)]
    pub output_files: Option<Vec<PathBuf>>,
    /// When the framework marked the unit complete.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Load a manifest from a JSON file.
pub fn from_file(path: &Path) -> Result<Vec<AsreFinishedUnit>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
