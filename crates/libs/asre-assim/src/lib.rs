//! Result routing engine for the ASRE assimilator.
//!
//! Routes the output artifacts of finished replica-exchange work units
//! into the project's `async_re` directory tree and records failures in
//! the shared error log.
//!
//! # Usage
//!
//! ```rust,no_run
//! use asre_assim::{AsreErrorLog, AsreLayout, assimilate};
//! use asre_wu::{AsreCanonicalResult, AsreWorkUnit};
//!
//! # fn main() -> asre_assim::prelude::Result<()> {
//! let layout = AsreLayout::new("/var/boinc/projects/asyncre");
//! layout.ensure_root();
//! let mut log = AsreErrorLog::new(layout.errors_path());
//!
//! let unit = AsreWorkUnit::new("ttr_r10_c2_0", 0);
//! let result = AsreCanonicalResult::from_paths(vec![
//!     "upload/ttr_0.out",
//!     "upload/ttr_0.dms",
//!     "upload/ttr_0.rst",
//! ]);
//! assimilate(&layout, &mut log, &unit, Some(&result))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod error_log;
pub mod layout;
pub mod prelude;
pub mod router;

pub use error_log::{AsreErrorLog, ErrorSink, MemoryErrorLog};
pub use layout::AsreLayout;
pub use router::assimilate;
