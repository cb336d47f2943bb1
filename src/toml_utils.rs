// -- imports
use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::manifest::GenerateArgs;
use crate::naming::NamingConfigs;

// -- config

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TomlConfig {
    generate: GenerateArgs,
    naming: NamingConfigs,
}

impl TomlConfig {
    /// Parse TOML config file with explicit project root for path resolution.
    ///
    /// # Arguments
    ///
    /// * `toml_path` - Path to the TOML config file
    /// * `project_root` - Base directory for resolving relative paths
    ///
    /// # Errors
    ///
    /// Returns `AppError` if:
    /// - The path is not a valid toml file
    /// - File read fails
    /// - TOML parsing fails
    pub fn from_toml(toml_path: &Path, project_root: &Path) -> Result<Self> {
        if !toml_path.is_file() || toml_path.extension().is_none_or(|ext| ext != "toml") {
            return Err(AppError::Config(format!(
                "TOML config path is not a valid .toml file: {:?}",
                toml_path
            )));
        }

        let content = std::fs::read_to_string(toml_path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.resolve_paths(project_root);

        // Transfer naming config to generate args
        config.generate.naming_cfg = config.naming.clone();

        Ok(config)
    }

    /// Resolve relative paths against project root
    fn resolve_paths(&mut self, project_root: &Path) {
        if !self.generate.root.as_os_str().is_empty() && !self.generate.root.is_absolute() {
            self.generate.root = project_root.join(&self.generate.root);
        }

        if let Some(ref mut out_file) = self.generate.out_file {
            if !out_file.is_absolute() {
                *out_file = project_root.join(out_file.as_path());
            }
        }
    }
}

impl From<TomlConfig> for GenerateArgs {
    fn from(config: TomlConfig) -> Self {
        config.generate
    }
}

// -- public API

/// Parse TOML config file and return GenerateArgs.
///
/// # Arguments
///
/// * `toml_path` - Path to the TOML config file
/// * `project_root` - Base directory for resolving relative paths
///
/// # Errors
///
/// Returns `AppError` if TOML parsing or path resolution fails.
pub fn parse_toml(toml_path: &Path, project_root: &Path) -> Result<GenerateArgs> {
    TomlConfig::from_toml(toml_path, project_root).map(Into::into)
}

// -- tests
