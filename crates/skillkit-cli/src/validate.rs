//! Validate command implementation

use anyhow::Result;
use skillkit_core::{ValidationReport, validate_skill};
use std::path::Path;

/// Validate the bundle at `skill_directory` and print the outcome.
pub fn run(skill_directory: &Path, json: bool) -> Result<bool> {
    let report = ValidationReport::from_result(&validate_skill(skill_directory));

    if json {
        crate::print_json(&report)?;
    } else {
        println!("{}", report.message);
    }

    Ok(report.valid)
}
