//! Flat, serializable outcomes for command-line and JSON consumers

use crate::error::{ScaffoldError, ValidationError};
use crate::validate::VALID_MESSAGE;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of validating one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub message: String,
}

impl ValidationReport {
    pub fn from_result<T>(result: &Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                message: VALID_MESSAGE.to_string(),
            },
            Err(err) => Self {
                valid: false,
                message: err.to_string(),
            },
        }
    }
}

/// Outcome of scaffolding one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub success: bool,
    pub message: String,
    pub path: Option<PathBuf>,
}

impl InitReport {
    pub fn from_result(name: &str, result: &Result<PathBuf, ScaffoldError>) -> Self {
        match result {
            Ok(path) => Self {
                success: true,
                message: format!("Skill '{name}' initialized at {}", path.display()),
                path: Some(path.clone()),
            },
            Err(err) => Self {
                success: false,
                message: err.to_string(),
                path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::error::MetadataError;

    #[test]
    fn ValidationReport___ok___uses_fixed_message() {
        let report = ValidationReport::from_result(&Ok::<(), ValidationError>(()));

        assert!(report.valid);
        assert_eq!(report.message, "Skill is valid!");
    }

    #[test]
    fn ValidationReport___err___uses_error_message() {
        let result: Result<(), ValidationError> = Err(MetadataError::NotAMapping.into());

        let report = ValidationReport::from_result(&result);

        assert!(!report.valid);
        assert_eq!(report.message, "Frontmatter must be a YAML dictionary");
    }

    #[test]
    fn InitReport___ok___names_skill_and_path() {
        let report = InitReport::from_result("demo", &Ok(PathBuf::from("/skills/demo")));

        assert!(report.success);
        assert_eq!(report.message, "Skill 'demo' initialized at /skills/demo");
        assert_eq!(report.path, Some(PathBuf::from("/skills/demo")));
    }

    #[test]
    fn InitReport___err___has_no_path() {
        let result = Err(ScaffoldError::AlreadyExists(PathBuf::from("/skills/demo")));

        let report = InitReport::from_result("demo", &result);

        assert!(!report.success);
        assert!(report.path.is_none());
    }
}
