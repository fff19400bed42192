//! Command-line interface for the ASRE Assimilator Service.
//!
//! Defines the CLI structure and commands for asre-assimd.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the ASRE Assimilator Service.
#[derive(Parser)]
#[command(name = "asre-assimd")]
#[command(about = "ASRE Assimilator - Route finished work unit results into the project tree")]
pub struct Cli {
    /// Path to the service configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project directory holding the async_re tree (overrides the configuration file)
    #[arg(short, long)]
    pub project_dir: Option<PathBuf>,

    /// Error log path (defaults to <project>/async_re/errors)
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the ASRE Assimilator Service.
#[derive(Subcommand)]
pub enum Commands {
    /// Assimilate a single finished work unit
    Assimilate {
        /// Work unit name
        #[arg(long)]
        name: String,

        /// Framework error mask (accepts 0x-prefixed hexadecimal)
        #[arg(long, default_value = "0", value_parser = parse_error_mask)]
        error_mask: i32,

        /// The unit failed before producing a canonical result
        #[arg(long, conflicts_with = "output_files")]
        failed: bool,

        /// Output artifacts of the canonical result, in order
        output_files: Vec<PathBuf>,
    },

    /// Assimilate every unit listed in a JSON manifest
    Batch {
        /// Path to the manifest file
        #[arg(short, long)]
        manifest: PathBuf,
    },
}

fn parse_error_mask(value: &str) -> Result<i32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).map(|mask| mask as i32),
        None => value.parse(),
    };
    parsed.map_err(|err| format!("invalid error mask {value}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mask_decimal() {
        assert_eq!(parse_error_mask("13"), Ok(13));
    }

    #[test]
    fn test_parse_error_mask_hexadecimal() {
        assert_eq!(parse_error_mask("0xd"), Ok(13));
        assert_eq!(parse_error_mask("0XFF"), Ok(255));
        assert_eq!(parse_error_mask("0xffffffff"), Ok(-1));
    }

    #[test]
    fn test_parse_error_mask_rejects_garbage() {
        assert!(parse_error_mask("mask").is_err());
        assert!(parse_error_mask("0xzz").is_err());
    }
}
