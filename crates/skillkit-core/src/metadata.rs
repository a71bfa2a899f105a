//! SKILL.md frontmatter extraction and parsing

use crate::error::MetadataError;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Line that opens and closes the frontmatter block.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Parsed frontmatter: field name to YAML value
///
/// Values keep the types the YAML parser produced. Keys are kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: BTreeMap<String, Value>,
}

impl Metadata {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw YAML header block
    pub fn from_yaml(raw: &str) -> Result<Self, MetadataError> {
        let value: Value = serde_yaml::from_str(raw)
            .map_err(|e| MetadataError::InvalidSyntax(e.to_string()))?;

        let Value::Mapping(mapping) = value else {
            return Err(MetadataError::NotAMapping);
        };

        Ok(mapping
            .into_iter()
            .map(|(key, value)| (key_to_string(key), value))
            .collect())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `name` field, if it is a string
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// The `description` field, if it is a string
    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }
}

impl FromIterator<(String, Value)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Split a document into its raw frontmatter block and the body after it.
///
/// The block is everything between an opening `---` line and the first
/// following line that starts with `---`.
pub fn split_document(content: &str) -> Result<(&str, &str), MetadataError> {
    if !content.starts_with(FRONTMATTER_DELIMITER) {
        return Err(MetadataError::MissingHeader);
    }

    let rest = content
        .strip_prefix("---\n")
        .ok_or(MetadataError::MalformedHeader)?;
    let end = rest
        .find("\n---")
        .ok_or(MetadataError::MalformedHeader)?;

    let header = &rest[..end];
    let body = &rest[end + 4..];
    let body = body.strip_prefix('\n').unwrap_or(body);

    Ok((header, body))
}

/// Extract and parse the frontmatter of a SKILL.md document
pub fn parse_frontmatter(content: &str) -> Result<Metadata, MetadataError> {
    let (header, _body) = split_document(content)?;
    Metadata::from_yaml(header)
}

/// Human-readable name of a YAML value's type, used in error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Keys are strings in practice; scalars like `1:` or `true:` are stringified.
fn key_to_string(key: Value) -> String {
    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
