//! Command handlers for the ASRE Assimilator Service.

use std::path::Path;

use asre_assim::{AsreLayout, ErrorSink, assimilate};
use asre_wu::{AsreCanonicalResult, AsreWorkUnit};
use tracing::{error, info};

use crate::manifest::{self, AsreFinishedUnit};
use crate::prelude::*;

/// Assimilate a single finished work unit.
pub fn handle_assimilate(
    layout: &AsreLayout,
    sink: &mut dyn ErrorSink,
    unit: &AsreFinishedUnit,
) -> Result<()> {
    route_unit(layout, sink, unit)
}

/// Assimilate every unit listed in a JSON manifest, in order.
///
/// A unit whose routing fails is counted and reported at the end; it
/// does not stop the remaining units from being processed.
pub fn handle_batch(
    layout: &AsreLayout,
    sink: &mut dyn ErrorSink,
    manifest_path: &Path,
) -> Result<()> {
    let units = manifest::from_file(manifest_path)?;
    info!(
        "assimilating {} unit(s) from {}",
        units.len(),
        manifest_path.display()
    );

    let mut failures = 0;
    for unit in &units {
        if let Err(err) = route_unit(layout, sink, unit) {
            error!("{} - {err}", unit.name);
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(Error::Batch {
            failures,
            total: units.len(),
        });
    }
    Ok(())
}

fn route_unit(
    layout: &AsreLayout,
    sink: &mut dyn ErrorSink,
    unit: &AsreFinishedUnit,
) -> Result<()> {
    match unit.completed_at {
        Some(at) => info!("assimilating {} (completed {at})", unit.name),
        None => info!("assimilating {}", unit.name),
    }

    let work_unit = AsreWorkUnit::new(unit.name.clone(), unit.error_mask);
    let canonical = unit
        .output_files
        .as_ref()
        .map(|files| AsreCanonicalResult::from_paths(files.clone()));

    assimilate(layout, sink, &work_unit, canonical.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use asre_assim::MemoryErrorLog;
    use tempfile::TempDir;

    fn project() -> (TempDir, AsreLayout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = AsreLayout::new(dir.path());
        layout.ensure_root();
        (dir, layout)
    }

    #[test]
    fn test_handle_assimilate_routes_artifacts() {
        let (dir, layout) = project();
        let mut sink = MemoryErrorLog::new();

        let out = dir.path().join("ttr_0.out");
        let dms = dir.path().join("ttr_0.dms");
        let rst = dir.path().join("ttr_0.rst");
        for path in [&out, &dms, &rst] {
            fs::write(path, "data").unwrap();
        }

        let unit = AsreFinishedUnit {
            name: "ttr_r10_c2_0".into(),
            error_mask: 0,
            output_files: Some(vec![out, dms, rst]),
            completed_at: None,
        };

        handle_assimilate(&layout, &mut sink, &unit).unwrap();

        assert!(layout.root().join("ttr").join("r10").join("ttr_2.out").is_file());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_handle_batch_processes_every_unit() {
        let (dir, layout) = project();
        let mut sink = MemoryErrorLog::new();

        let out = dir.path().join("abc.out");
        fs::write(&out, "data").unwrap();

        let manifest_path = dir.path().join("finished.json");
        let manifest = serde_json::json!([
            { "name": "abc_r0_c1_0", "output_files": [out] },
            { "name": "abc_r1_c1_0", "error_mask": 13 },
        ]);
        fs::write(&manifest_path, manifest.to_string()).unwrap();

        handle_batch(&layout, &mut sink, &manifest_path).unwrap();

        // A single artifact has no slot table, so it lands at the root
        // under the raw unit name.
        assert!(layout.root().join("abc_r0_c1_0").is_file());
        assert!(layout.root().join("abc").join("r1").join("abc_1.failed").is_file());
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_handle_batch_missing_manifest_is_an_error() {
        let (_dir, layout) = project();
        let mut sink = MemoryErrorLog::new();

        let result = handle_batch(&layout, &mut sink, Path::new("/nonexistent.json"));
        assert!(result.is_err());
    }
}
