//! skillkit-core - Skill bundle metadata, validation, and scaffolding
//!
//! A skill bundle is a directory holding a `SKILL.md` document (YAML
//! frontmatter followed by a Markdown body) and optional resource
//! directories:
//!
//! ```text
//! my-skill/
//! ├── SKILL.md
//! ├── scripts/
//! │   └── example.ts
//! ├── references/
//! │   └── api_reference.md
//! └── assets/
//!     └── example_asset.txt
//! ```
//!
//! This crate provides:
//! - [`parse_frontmatter`] to extract the frontmatter into [`Metadata`]
//! - [`validate_skill`] to run the ordered schema rules against a bundle
//! - [`init_skill`] to scaffold a new bundle from the embedded templates
//! - [`SkillkitConfig`] for the optional `skillkit.toml` configuration
//!
//! # Example
//!
//! ```no_run
//! use skillkit_core::{init_skill, validate_skill};
//!
//! let root = init_skill("my-cool-skill", "./skills")?;
//! let metadata = validate_skill(&root)?;
//! assert_eq!(metadata.name(), Some("my-cool-skill"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod metadata;
mod paths;
mod report;
mod scaffold;
mod validate;

pub use config::{InitConfig, LoggingConfig, PackageConfig, SkillkitConfig};
pub use error::{ConfigError, Field, MetadataError, ScaffoldError, SchemaError, ValidationError};
pub use metadata::{FRONTMATTER_DELIMITER, Metadata, parse_frontmatter, split_document, type_name};
pub use paths::resolve_path;
pub use report::{InitReport, ValidationReport};
pub use scaffold::{InitOptions, ScriptLanguage, init_skill, init_skill_with, title_case};
pub use validate::{
    ALLOWED_PROPERTIES, MAX_COMPATIBILITY_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    VALID_MESSAGE, validate_document, validate_metadata, validate_skill,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Metadata document file name within a bundle.
pub const SKILL_FILE: &str = "SKILL.md";

/// Directory for executable helper scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// Directory for reference documents.
pub const REFERENCES_DIR: &str = "references";

/// Directory for binary and template assets.
pub const ASSETS_DIR: &str = "assets";

/// Log levels understood by the configuration file and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[default]
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Make the level more verbose by `steps`, stopping at `Trace`.
    #[must_use]
    pub fn raised_by(self, steps: u8) -> Self {
        Self::from_u8((self as u8).saturating_sub(steps))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Off => write!(f, "off"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

#[cfg(test)]
mod lib_tests;
