//! Error types for the ASRE Assimilator Service.

/// Errors that can occur in the ASRE Assimilator Service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::error::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Assim(#[from] asre_assim::error::Error),

    #[error(
        "Project directory is missing. Set it in the configuration file or use the --project-dir cli argument"
    )]
    ProjectDirMissing,

    #[error("{failures} of {total} unit(s) failed to assimilate")]
    Batch { failures: usize, total: usize },
}
