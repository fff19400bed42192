//! Replica work unit name parsing.
//!
//! ASyncRE work units are named `<job>_r<replica>_c<cycle>[...]`, where
//! the job prefix runs up to the last `_r<digits>_c<digits>` pair and the
//! replica and cycle fields are non-negative integers. The framework may
//! append further fields after the cycle number; they are ignored.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

static WU_NAME: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(.+)_r([0-9]+)_c([0-9]+)").ok());

/// Job descriptor parsed from a work unit name.
///
/// A descriptor only exists for names that matched the replica pattern,
/// so its fields are always safe to use for path construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsreReplicaWu {
    /// Job the unit belongs to.
    pub job_name: String,
    /// Replica index within the job.
    pub replica: u32,
    /// Simulation cycle the unit computed.
    pub cycle: u32,
}

/// Parse a work unit name into its job descriptor.
///
/// The job prefix capture is greedy: `a_r0_c1_r2_c3` parses as job
/// `a_r0_c1`, replica 2, cycle 3. Trailing content after the cycle
/// digits is permitted and ignored.
pub fn parse(name: &str) -> Result<AsreReplicaWu> {
    let pattern = WU_NAME.as_ref().ok_or(Error::Pattern)?;
    let captures = pattern.captures(name).ok_or(Error::NameFormat)?;
    // Digit captures that overflow the index type are treated as
    // non-matching names.
    let replica = captures[2].parse().map_err(|_| Error::NameFormat)?;
    let cycle = captures[3].parse().map_err(|_| Error::NameFormat)?;
    Ok(AsreReplicaWu {
        job_name: captures[1].to_string(),
        replica,
        cycle,
    })
}

impl fmt::Display for AsreReplicaWu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycle {} of replica {} of job {}",
            self.cycle, self.replica, self.job_name
        )
    }
}
