//! Service configuration for the ASRE Assimilator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Project settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsreProjectConfig {
    /// Project directory holding the `async_re` tree.
    pub dir: PathBuf,
    /// Error log override. Defaults to `<dir>/async_re/errors`.
    #[serde(default)]
    pub error_log: Option<PathBuf>,
}

/// User-provided configuration from TOML files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsreUserConfig {
    /// Project settings.
    pub project: AsreProjectConfig,
}

impl AsreUserConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(file_path)?;
        Ok(Self::from_toml(&contents)?)
    }
    /// Parse configuration from TOML string.
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }
}

/// Effective configuration after applying CLI overrides.
#[derive(Debug, Clone)]
pub struct AsreServiceConfig {
    /// Project directory holding the `async_re` tree.
    pub project_dir: PathBuf,
    /// Error log override.
    pub error_log: Option<PathBuf>,
}

impl AsreServiceConfig {
    /// Merge the optional configuration file with the CLI overrides.
    /// CLI arguments win field by field.
    pub fn resolve(
        config_file: Option<&Path>,
        project_dir: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        let user = config_file.map(AsreUserConfig::from_file).transpose()?;
        let project_dir = project_dir
            .or_else(|| user.as_ref().map(|user| user.project.dir.clone()))
            .ok_or(Error::ProjectDirMissing)?;
        let error_log = log_file.or_else(|| user.and_then(|user| user.project.error_log));
        Ok(Self {
            project_dir,
            error_log,
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    pub fn deserialize() -> Result<()> {
        let content = r#"
            # Assimilator Configuration File
            # This file points the service at the project holding the async_re tree

            [project]
            dir = "/var/boinc/projects/asyncre"
            error_log = "/var/log/asyncre/errors"
        "#;
        toml::from_str::<AsreUserConfig>(content)?;
        Ok(())
    }

    #[test]
    pub fn deserialize_without_error_log() -> Result<()> {
        let content = r#"
            [project]
            dir = "/var/boinc/projects/asyncre"
        "#;
        let config = toml::from_str::<AsreUserConfig>(content)?;
        assert_eq!(config.project.error_log, None);
        Ok(())
    }

    #[test]
    pub fn cli_overrides_win() {
        let resolved = AsreServiceConfig::resolve(
            None,
            Some(PathBuf::from("/cli/project")),
            Some(PathBuf::from("/cli/errors")),
        )
        .unwrap();
        assert_eq!(resolved.project_dir, PathBuf::from("/cli/project"));
        assert_eq!(resolved.error_log, Some(PathBuf::from("/cli/errors")));
    }

    #[test]
    pub fn missing_project_dir_is_an_error() {
        match AsreServiceConfig::resolve(None, None, None) {
            Err(Error::ProjectDirMissing) => {}
            other => panic!("Expected ProjectDirMissing, got {:?}", other),
        }
    }
}
