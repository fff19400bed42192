//! Work unit model and name parsing for the ASRE assimilator.
//!
//! Provides the slice of the job framework's work unit records the
//! assimilator needs, and the parser that turns a work unit name into a
//! structured replica descriptor.
//!
//! # Usage
//!
//! ```rust
//! use asre_wu::wu_name;
//!
//! let replica = wu_name::parse("ttr_r10_c2_0").unwrap();
//! assert_eq!(replica.job_name, "ttr");
//! assert_eq!(replica.replica, 10);
//! assert_eq!(replica.cycle, 2);
//! ```

pub mod error;
pub mod prelude;
pub mod work_unit;
pub mod wu_name;

pub use work_unit::{AsreCanonicalResult, AsreOutputArtifact, AsreWorkUnit};
pub use wu_name::AsreReplicaWu;
