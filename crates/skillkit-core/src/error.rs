//! Error types for skill bundle operations

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Frontmatter fields with value constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Compatibility,
}

impl Field {
    /// Key of the field in the frontmatter mapping
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Compatibility => "compatibility",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "Name"),
            Field::Description => write!(f, "Description"),
            Field::Compatibility => write!(f, "Compatibility"),
        }
    }
}

/// Failure to extract or parse the SKILL.md frontmatter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// Document does not start with the `---` delimiter
    #[error("No YAML frontmatter found")]
    MissingHeader,

    /// Opening delimiter is not followed by a closing one
    #[error("Invalid frontmatter format")]
    MalformedHeader,

    /// Header block is not valid YAML
    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidSyntax(String),

    /// Header parsed, but to something other than a mapping
    #[error("Frontmatter must be a YAML dictionary")]
    NotAMapping,
}

/// A frontmatter schema rule that did not hold
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error(
        "Unexpected key(s) in SKILL.md frontmatter: {}. Allowed properties are: {}",
        .keys.join(", "),
        .allowed.join(", ")
    )]
    UnexpectedKeys {
        keys: Vec<String>,
        allowed: Vec<&'static str>,
    },

    #[error("Missing '{}' in frontmatter", .0.key())]
    MissingField(Field),

    #[error("{field} must be a string, got {found}")]
    WrongType { field: Field, found: &'static str },

    // Pattern violations
    #[error("Name '{0}' should be kebab-case (lowercase letters, digits, and hyphens only)")]
    NotKebabCase(String),

    #[error("Name '{0}' cannot start/end with hyphen or contain consecutive hyphens")]
    MisplacedHyphen(String),

    #[error("Description cannot contain angle brackets (< or >)")]
    AngleBrackets,

    #[error("{field} is too long ({length} characters). Maximum is {max} characters.")]
    TooLong {
        field: Field,
        length: usize,
        max: usize,
    },
}

/// Why a bundle is not valid
///
/// Carries exactly one reason: the first precondition or rule that failed.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// SKILL.md is missing or unreadable
    #[error("SKILL.md not found")]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Failure to scaffold a new bundle
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Target directory is already present; it is never overwritten
    #[error("Skill directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Error creating directory: {0}")]
    DirectoryCreate(#[source] std::io::Error),

    #[error("Error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to load `skillkit.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
