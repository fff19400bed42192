//! ASRE Assimilator Service (asre-assimd)
//!
//! Routes the results of finished ASyncRE work units into the project's
//! `async_re` directory tree. The job framework owns scheduling,
//! distribution and validation of work units; this service stands in for
//! its daemon loop and invokes the routing engine once per finished
//! unit, either for a single unit passed on the command line or for a
//! batch of units listed in a JSON manifest.

mod cli;
mod commands;
mod config;
mod error;
mod manifest;
mod prelude;

use asre_assim::{AsreErrorLog, AsreLayout};
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{handle_assimilate, handle_batch};
use crate::config::AsreServiceConfig;
use crate::manifest::AsreFinishedUnit;
use crate::prelude::*;

/// Main entry point for the ASRE Assimilator Service.
///
/// Initializes logging, resolves the service configuration, and
/// dispatches to the appropriate command handler. The exit status is
/// non-zero only when the input is invalid or the error log cannot be
/// opened; routing failures of individual units are recorded in the
/// error log instead.
///
/// # Examples
///
/// ```bash
/// # Assimilate one successful unit
/// asre-assimd --project-dir /var/boinc/projects/asyncre assimilate \
///     --name ttr_r10_c2_0 upload/ttr_0.out upload/ttr_0.dms upload/ttr_0.rst
///
/// # Record a unit that produced no canonical result
/// asre-assimd --project-dir /var/boinc/projects/asyncre assimilate \
///     --name ttr_r11_c2_0 --error-mask 0xd --failed
///
/// # Assimilate every unit listed in a manifest
/// asre-assimd --config asre.toml batch --manifest finished.json
/// ```
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asre_assimd=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AsreServiceConfig::resolve(cli.config.as_deref(), cli.project_dir, cli.log_file)?;

    let layout = AsreLayout::new(&config.project_dir);
    layout.ensure_root();
    let log_path = config
        .error_log
        .unwrap_or_else(|| layout.errors_path());
    let mut log = AsreErrorLog::new(log_path);

    match cli.command {
        Commands::Assimilate {
            name,
            error_mask,
            failed,
            output_files,
        } => {
            let unit = AsreFinishedUnit {
                name,
                error_mask,
                output_files: if failed { None } else { Some(output_files) },
                completed_at: None,
            };
            handle_assimilate(&layout, &mut log, &unit)
        }
        Commands::Batch { manifest } => handle_batch(&layout, &mut log, &manifest),
    }
}
