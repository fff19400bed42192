//! Routing of finished work units into the result tree.
//!
//! One call per finished unit. A unit with a canonical result has its
//! artifacts copied to their destinations; a unit without one is
//! recorded as failed. Copy and marker failures never abort the call:
//! the only reported failure is an error log that cannot be opened.

use std::fs;
use std::path::Path;

use asre_wu::error::Error as WuError;
use asre_wu::{AsreCanonicalResult, AsreReplicaWu, AsreWorkUnit, wu_name};
use tracing::{debug, warn};

use crate::error_log::ErrorSink;
use crate::layout::AsreLayout;
use crate::prelude::*;

const PATTERN_ERROR_LINE: &str = "asyncre_repldir(): error in regcomp\n";
const NAME_FORMAT_LINE: &str = "asyncre_repldir(): warning wu name does not fit pattern\n";

/// Route one finished work unit.
///
/// `canonical` carries the artifacts of the framework-selected canonical
/// result, or `None` when the unit failed before producing one.
pub fn assimilate(
    layout: &AsreLayout,
    sink: &mut dyn ErrorSink,
    unit: &AsreWorkUnit,
    canonical: Option<&AsreCanonicalResult>,
) -> Result<()> {
    let replica = parse_and_prepare(layout, sink, unit);

    match canonical {
        Some(result) => route_artifacts(layout, sink, unit, replica.as_ref(), result),
        None => record_failure(layout, sink, unit, replica.as_ref()),
    }
}

/// Parse the unit name and prepare its replica directory.
///
/// A name that does not parse is reported to the sink (best effort) and
/// routes the rest of the call through the fallback naming.
fn parse_and_prepare(
    layout: &AsreLayout,
    sink: &mut dyn ErrorSink,
    unit: &AsreWorkUnit,
) -> Option<AsreReplicaWu> {
    match wu_name::parse(&unit.name) {
        Ok(replica) => {
            layout.ensure_replica_dir(&replica);
            Some(replica)
        }
        Err(err) => {
            let line = match err {
                WuError::Pattern => PATTERN_ERROR_LINE,
                WuError::NameFormat => NAME_FORMAT_LINE,
            };
            if sink.append(line).is_err() {
                warn!("error log unavailable for parse warning on {}", unit.name);
            }
            None
        }
    }
}

fn route_artifacts(
    layout: &AsreLayout,
    sink: &mut dyn ErrorSink,
    unit: &AsreWorkUnit,
    replica: Option<&AsreReplicaWu>,
    result: &AsreCanonicalResult,
) -> Result<()> {
    let count = result.artifacts.len();
    let mut any_copied = false;
    for (index, artifact) in result.artifacts.iter().enumerate() {
        let dest = layout.artifact_dest(replica, &unit.name, count, index);
        match fs::copy(&artifact.source, &dest) {
            Ok(_) => {
                debug!("copied {} to {}", artifact.source.display(), dest.display());
                any_copied = true;
            }
            Err(err) => {
                warn!(
                    "failed to copy {} to {}: {err}",
                    artifact.source.display(),
                    dest.display()
                );
            }
        }
    }

    if any_copied {
        // One landed artifact is enough to count the unit as assimilated.
        return Ok(());
    }

    touch(&layout.no_output_marker(&unit.name));
    if let Some(replica) = replica {
        touch(&layout.failed_marker(replica));
        sink.append(&job_failure_line(replica, unit))?;
    }
    sink.append(&unit_failure_line(unit))?;
    Ok(())
}

fn record_failure(
    layout: &AsreLayout,
    sink: &mut dyn ErrorSink,
    unit: &AsreWorkUnit,
    replica: Option<&AsreReplicaWu>,
) -> Result<()> {
    if let Some(replica) = replica {
        touch(&layout.failed_marker(replica));
        sink.append(&job_failure_line(replica, unit))?;
    }
    sink.append(&unit_failure_line(unit))?;
    Ok(())
}

fn job_failure_line(replica: &AsreReplicaWu, unit: &AsreWorkUnit) -> String {
    format!(
        "warning: cycle {} of replica {} of job {} (work unit = {}) failed with error: 0x{:x}\n",
        replica.cycle, replica.replica, replica.job_name, unit.name, unit.error_mask
    )
}

fn unit_failure_line(unit: &AsreWorkUnit) -> String {
    format!(
        "warning: work unit = {} failed with error: 0x{:x}\n",
        unit.name, unit.error_mask
    )
}

/// Create an empty marker file. Existence is the signal; failures are
/// logged and absorbed.
fn touch(path: &Path) {
    if let Err(err) = fs::File::create(path) {
        warn!("failed to create marker {}: {err}", path.display());
    }
}
