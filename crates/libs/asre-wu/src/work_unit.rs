//! Framework-side work unit records.
//!
//! The job framework owns scheduling, distribution, validation and retry
//! of work units; the assimilator only sees the slice modeled here: the
//! unit's name, its error mask and the ordered artifacts of the
//! framework-selected canonical result.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A finished work unit as reported by the job framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsreWorkUnit {
    /// Work unit name, e.g. `ttr_r10_c2_0`.
    pub name: String,
    /// Opaque error bit flags from the framework.
    pub error_mask: i32,
}

impl AsreWorkUnit {
    pub fn new(name: impl Into<String>, error_mask: i32) -> Self {
        Self {
            name: name.into(),
            error_mask,
        }
    }
}

/// One output file belonging to a canonical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsreOutputArtifact {
    /// Path of the file in the framework's upload area.
    pub source: PathBuf,
}

/// The framework-selected authoritative result for a work unit.
///
/// Artifact order is significant: the position of each file encodes its
/// semantic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsreCanonicalResult {
    /// Output artifacts, in order.
    pub artifacts: Vec<AsreOutputArtifact>,
}

impl AsreCanonicalResult {
    pub fn new(artifacts: Vec<AsreOutputArtifact>) -> Self {
        Self { artifacts }
    }

    /// Result whose artifacts are the given source paths, in order.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            artifacts: paths
                .into_iter()
                .map(|path| AsreOutputArtifact {
                    source: path.into(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for AsreWorkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (error mask 0x{:x})", self.name, self.error_mask)
    }
}
