//! Schema validation of skill bundles
//!
//! Validation runs an ordered list of independent rules over the parsed
//! frontmatter and stops at the first one that fails, so a bundle is always
//! rejected with exactly one reason.

use crate::error::{Field, SchemaError, ValidationError};
use crate::metadata::{Metadata, parse_frontmatter, type_name};
use crate::{SKILL_FILE, ValidationResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Message reported for a bundle that passes every rule.
pub const VALID_MESSAGE: &str = "Skill is valid!";

/// Frontmatter keys a SKILL.md may contain, sorted.
pub const ALLOWED_PROPERTIES: [&str; 6] = [
    "allowed-tools",
    "compatibility",
    "description",
    "license",
    "metadata",
    "name",
];

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;
pub const MAX_COMPATIBILITY_LENGTH: usize = 500;

type Rule = fn(&Metadata) -> Result<(), SchemaError>;

/// Rules in evaluation order.
const RULES: [(&str, Rule); 4] = [
    ("properties", check_properties),
    ("name", check_name),
    ("description", check_description),
    ("compatibility", check_compatibility),
];

/// Validate the bundle rooted at `skill_path`.
///
/// Reads `SKILL.md`, parses its frontmatter, and applies every schema rule.
/// Returns the parsed metadata when the bundle is valid.
pub fn validate_skill(skill_path: impl AsRef<Path>) -> ValidationResult<Metadata> {
    let skill_md = skill_path.as_ref().join(SKILL_FILE);

    let content = fs::read_to_string(&skill_md).map_err(|source| {
        info!(path = %skill_md.display(), error = %source, "cannot read skill document");
        ValidationError::DocumentUnreadable {
            path: skill_md.clone(),
            source,
        }
    })?;

    match validate_document(&content) {
        Ok(metadata) => {
            info!(path = %skill_md.display(), "skill is valid");
            Ok(metadata)
        }
        Err(err) => {
            info!(path = %skill_md.display(), reason = %err, "skill is invalid");
            Err(err)
        }
    }
}

/// Parse and validate the text of a SKILL.md document
pub fn validate_document(content: &str) -> ValidationResult<Metadata> {
    let metadata = parse_frontmatter(content)?;
    validate_metadata(&metadata)?;
    Ok(metadata)
}

/// Apply the schema rules in order, stopping at the first failure
pub fn validate_metadata(metadata: &Metadata) -> Result<(), SchemaError> {
    for (rule, check) in RULES {
        debug!(rule, "checking frontmatter");
        check(metadata)?;
    }
    Ok(())
}

fn check_properties(metadata: &Metadata) -> Result<(), SchemaError> {
    // keys() is already sorted
    let unexpected: Vec<String> = metadata
        .keys()
        .filter(|key| !ALLOWED_PROPERTIES.contains(key))
        .map(str::to_string)
        .collect();

    if unexpected.is_empty() {
        return Ok(());
    }

    Err(SchemaError::UnexpectedKeys {
        keys: unexpected,
        allowed: ALLOWED_PROPERTIES.to_vec(),
    })
}

fn check_name(metadata: &Metadata) -> Result<(), SchemaError> {
    let name = required_string(metadata, Field::Name)?.trim();
    if name.is_empty() {
        return Ok(());
    }

    let kebab_charset = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !kebab_charset {
        return Err(SchemaError::NotKebabCase(name.to_string()));
    }

    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return Err(SchemaError::MisplacedHyphen(name.to_string()));
    }

    check_length(Field::Name, name, MAX_NAME_LENGTH)
}

fn check_description(metadata: &Metadata) -> Result<(), SchemaError> {
    let description = required_string(metadata, Field::Description)?.trim();
    if description.is_empty() {
        return Ok(());
    }

    if description.contains(['<', '>']) {
        return Err(SchemaError::AngleBrackets);
    }

    check_length(Field::Description, description, MAX_DESCRIPTION_LENGTH)
}

fn check_compatibility(metadata: &Metadata) -> Result<(), SchemaError> {
    let field = Field::Compatibility;
    let value = match metadata.get(field.key()) {
        None | Some(serde_yaml::Value::Null) => return Ok(()),
        Some(value) => value,
    };

    let compatibility = plain_str(value).ok_or_else(|| SchemaError::WrongType {
        field,
        found: type_name(value),
    })?;

    check_length(field, compatibility, MAX_COMPATIBILITY_LENGTH)
}

fn required_string(metadata: &Metadata, field: Field) -> Result<&str, SchemaError> {
    let value = metadata
        .get(field.key())
        .ok_or(SchemaError::MissingField(field))?;

    plain_str(value).ok_or_else(|| SchemaError::WrongType {
        field,
        found: type_name(value),
    })
}

/// Untagged string scalars only; `Value::as_str` would look through `!tag`.
fn plain_str(value: &serde_yaml::Value) -> Option<&str> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        _ => None,
    }
}

fn check_length(field: Field, value: &str, max: usize) -> Result<(), SchemaError> {
    let length = value.chars().count();
    if length > max {
        return Err(SchemaError::TooLong { field, length, max });
    }
    Ok(())
}


#[cfg(test)]
#[path = "validate/validate_parameterized_tests.rs"]
mod validate_parameterized_tests;
