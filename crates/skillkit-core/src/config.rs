//! skillkit configuration (`skillkit.toml`)

use crate::LogLevel;
use crate::error::ConfigError;
use crate::scaffold::ScriptLanguage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
///
/// Every section is optional; a missing file yields [`SkillkitConfig::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillkitConfig {
    pub logging: LoggingConfig,
    pub init: InitConfig,
    pub package: PackageConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Base log level; `SKILLKIT_LOG` overrides it
    pub level: LogLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitConfig {
    /// Language of the generated example script
    pub script: ScriptLanguage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    /// Glob patterns excluded in addition to the built-in set
    pub exclude: Vec<String>,

    /// Deflate level 1-9; 0 stores entries uncompressed
    pub compression_level: i64,
}

fn default_compression_level() -> i64 {
    9
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            compression_level: default_compression_level(),
        }
    }
}

impl SkillkitConfig {
    /// File looked up in the current directory when no path is given
    pub const FILE_NAME: &'static str = "skillkit.toml";

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load and validate configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from `explicit` if given, else from `./skillkit.toml` if present,
    /// else return the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = PathBuf::from(Self::FILE_NAME);
        if local.is_file() {
            return Self::from_file(local);
        }

        Ok(Self::default())
    }

    /// Check values serde cannot constrain
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=9).contains(&self.package.compression_level) {
            return Err(ConfigError::Invalid(format!(
                "package.compression_level must be between 0 and 9, got {}",
                self.package.compression_level
            )));
        }

        if let Some(pattern) = self.package.exclude.iter().find(|p| p.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "package.exclude contains an empty pattern: {pattern:?}"
            )));
        }

        Ok(())
    }
}
