//! Destination layout for assimilated results.
//!
//! Every path produced by the assimilator lives under
//! `<project>/async_re`:
//!
//! ```text
//! async_re/errors
//! async_re/<job>/r<replica>/<job>_<cycle>.out
//! async_re/<job>/r<replica>/<job>_<cycle>.dms          (3-artifact result)
//! async_re/<job>/r<replica>/<job>_rcpt_<cycle>.dms     (4-artifact result)
//! async_re/<job>/r<replica>/<job>_lig_<cycle>.dms      (4-artifact result)
//! async_re/<job>/r<replica>/<job>_<cycle>.rst
//! async_re/<job>/r<replica>/<job>_<cycle>.failed
//! async_re/<wu_name>[_<i>]                             (fallback naming)
//! async_re/<wu_name>_no_output_files
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use asre_wu::AsreReplicaWu;
use tracing::warn;

/// File role of an artifact position within a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArtifactSlot {
    /// Simulation output log.
    Out,
    /// Structure file.
    Dms,
    /// Receptor structure file.
    RcptDms,
    /// Ligand structure file.
    LigDms,
    /// Restart file.
    Rst,
}

/// Regular simulation result.
const REGULAR_RESULT: &[ArtifactSlot] = &[ArtifactSlot::Out, ArtifactSlot::Dms, ArtifactSlot::Rst];

/// Binding-energy (BEDAM) result with separate receptor and ligand files.
const BEDAM_RESULT: &[ArtifactSlot] = &[
    ArtifactSlot::Out,
    ArtifactSlot::RcptDms,
    ArtifactSlot::LigDms,
    ArtifactSlot::Rst,
];

/// Slot table for a result with `count` artifacts. Counts without a
/// table use the fallback naming.
fn slots_for(count: usize) -> Option<&'static [ArtifactSlot]> {
    match count {
        3 => Some(REGULAR_RESULT),
        4 => Some(BEDAM_RESULT),
        _ => None,
    }
}

impl ArtifactSlot {
    fn file_name(self, wu: &AsreReplicaWu) -> String {
        match self {
            ArtifactSlot::Out => format!("{}_{}.out", wu.job_name, wu.cycle),
            ArtifactSlot::Dms => format!("{}_{}.dms", wu.job_name, wu.cycle),
            ArtifactSlot::RcptDms => format!("{}_rcpt_{}.dms", wu.job_name, wu.cycle),
            ArtifactSlot::LigDms => format!("{}_lig_{}.dms", wu.job_name, wu.cycle),
            ArtifactSlot::Rst => format!("{}_{}.rst", wu.job_name, wu.cycle),
        }
    }
}

/// Destination layout rooted at a project directory.
#[derive(Debug, Clone)]
pub struct AsreLayout {
    root: PathBuf,
}

impl AsreLayout {
    /// Layout under `<project_dir>/async_re`.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: project_dir.into().join("async_re"),
        }
    }

    /// The `async_re` directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the shared error log.
    pub fn errors_path(&self) -> PathBuf {
        self.root.join("errors")
    }

    /// Create the `async_re` directory. Idempotent, best effort.
    pub fn ensure_root(&self) {
        if let Err(err) = fs::create_dir_all(&self.root) {
            warn!("failed to create {}: {err}", self.root.display());
        }
    }

    /// Replica directory for a parsed descriptor.
    pub fn replica_dir(&self, wu: &AsreReplicaWu) -> PathBuf {
        self.root
            .join(&wu.job_name)
            .join(format!("r{}", wu.replica))
    }

    /// Create the job and replica directories. Pre-existing directories
    /// are not an error; creation failures are logged and absorbed.
    pub fn ensure_replica_dir(&self, wu: &AsreReplicaWu) -> PathBuf {
        let dir = self.replica_dir(wu);
        if let Err(err) = fs::create_dir_all(&dir) {
            warn!("failed to create replica directory {}: {err}", dir.display());
        }
        dir
    }

    /// Destination for artifact `index` of a result with `count` artifacts.
    ///
    /// With a descriptor and a known count the artifact lands in the
    /// replica directory under its slot name. Everything else falls back
    /// to root-level naming keyed on the raw work unit name, including
    /// parsed descriptors with an unexpected artifact count.
    pub fn artifact_dest(
        &self,
        wu: Option<&AsreReplicaWu>,
        wu_name: &str,
        count: usize,
        index: usize,
    ) -> PathBuf {
        if let Some(wu) = wu {
            if let Some(slot) = slots_for(count).and_then(|slots| slots.get(index)) {
                return self.replica_dir(wu).join(slot.file_name(wu));
            }
        }
        if count == 1 {
            self.root.join(wu_name)
        } else {
            self.root.join(format!("{}_{}", wu_name, index))
        }
    }

    /// Marker recording that no artifact of a unit could be copied.
    pub fn no_output_marker(&self, wu_name: &str) -> PathBuf {
        self.root.join(format!("{}_no_output_files", wu_name))
    }

    /// Marker recording a failed cycle under the replica directory.
    pub fn failed_marker(&self, wu: &AsreReplicaWu) -> PathBuf {
        self.replica_dir(wu)
            .join(format!("{}_{}.failed", wu.job_name, wu.cycle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asre_wu::wu_name;

    fn ttr() -> AsreReplicaWu {
        wu_name::parse("ttr_r10_c2_0").unwrap()
    }

    #[test]
    fn test_replica_dir() {
        let layout = AsreLayout::new("/project");
        assert_eq!(
            layout.replica_dir(&ttr()),
            PathBuf::from("/project/async_re/ttr/r10")
        );
    }

    #[test]
    fn test_errors_path() {
        let layout = AsreLayout::new("/project");
        assert_eq!(
            layout.errors_path(),
            PathBuf::from("/project/async_re/errors")
        );
    }

    #[test]
    fn test_three_artifact_destinations() {
        let layout = AsreLayout::new("/project");
        let wu = ttr();
        let names: Vec<_> = (0..3)
            .map(|i| layout.artifact_dest(Some(&wu), "ttr_r10_c2_0", 3, i))
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("/project/async_re/ttr/r10/ttr_2.out"),
                PathBuf::from("/project/async_re/ttr/r10/ttr_2.dms"),
                PathBuf::from("/project/async_re/ttr/r10/ttr_2.rst"),
            ]
        );
    }

    #[test]
    fn test_four_artifact_destinations() {
        let layout = AsreLayout::new("/project");
        let wu = ttr();
        let names: Vec<_> = (0..4)
            .map(|i| layout.artifact_dest(Some(&wu), "ttr_r10_c2_0", 4, i))
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("/project/async_re/ttr/r10/ttr_2.out"),
                PathBuf::from("/project/async_re/ttr/r10/ttr_rcpt_2.dms"),
                PathBuf::from("/project/async_re/ttr/r10/ttr_lig_2.dms"),
                PathBuf::from("/project/async_re/ttr/r10/ttr_2.rst"),
            ]
        );
    }

    #[test]
    fn test_unknown_count_ignores_descriptor() {
        let layout = AsreLayout::new("/project");
        let wu = ttr();
        assert_eq!(
            layout.artifact_dest(Some(&wu), "ttr_r10_c2_0", 2, 1),
            PathBuf::from("/project/async_re/ttr_r10_c2_0_1")
        );
    }

    #[test]
    fn test_fallback_single_artifact() {
        let layout = AsreLayout::new("/project");
        assert_eq!(
            layout.artifact_dest(None, "weirdname", 1, 0),
            PathBuf::from("/project/async_re/weirdname")
        );
    }

    #[test]
    fn test_fallback_multiple_artifacts() {
        let layout = AsreLayout::new("/project");
        assert_eq!(
            layout.artifact_dest(None, "weirdname", 2, 0),
            PathBuf::from("/project/async_re/weirdname_0")
        );
        assert_eq!(
            layout.artifact_dest(None, "weirdname", 2, 1),
            PathBuf::from("/project/async_re/weirdname_1")
        );
    }

    #[test]
    fn test_markers() {
        let layout = AsreLayout::new("/project");
        assert_eq!(
            layout.no_output_marker("ttr_r10_c2_0"),
            PathBuf::from("/project/async_re/ttr_r10_c2_0_no_output_files")
        );
        assert_eq!(
            layout.failed_marker(&ttr()),
            PathBuf::from("/project/async_re/ttr/r10/ttr_2.failed")
        );
    }

    #[test]
    fn test_ensure_replica_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let layout = AsreLayout::new(dir.path());
        let wu = ttr();
        let first = layout.ensure_replica_dir(&wu);
        let second = layout.ensure_replica_dir(&wu);
        assert_eq!(first, second);
        assert!(first.is_dir());
    }
}
