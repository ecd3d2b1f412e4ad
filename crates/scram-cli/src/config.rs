//! CLI configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default PBKDF2 iteration count.
    ///
    /// 4096 is the RFC 5802 historical default; operators raise it as
    /// hardware improves.
    #[serde(default = "default_iterations")]
    pub default_iterations: u32,

    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default PBKDF2 iteration count.
const fn default_iterations() -> u32 {
    4096
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_iterations: default_iterations(),
            output_format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file, falling back to defaults if none
    /// exists.
    pub fn load() -> crate::CliResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to file.
    pub fn save(&self) -> crate::CliResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CliError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".scramgen").join("scramgen.toml"))
    }

    /// Gets the effective iteration count (from args or config).
    #[must_use]
    pub const fn effective_iterations(&self, arg_iterations: Option<u32>) -> u32 {
        match arg_iterations {
            Some(i) => i,
            None => self.default_iterations,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON credential-file format (the persisted contract).
    #[default]
    Json,
    /// Human-readable table format.
    Table,
    /// Quiet (no credential output).
    Quiet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert_eq!(config.default_iterations, 4096);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn effective_iterations_prefers_argument() {
        let config = CliConfig::default();
        assert_eq!(config.effective_iterations(Some(8192)), 8192);
        assert_eq!(config.effective_iterations(None), 4096);
    }

    #[test]
    fn toml_round_trip() {
        let config = CliConfig {
            default_iterations: 10000,
            output_format: OutputFormat::Table,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.default_iterations, 10000);
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: CliConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.default_iterations, 4096);
    }
}
