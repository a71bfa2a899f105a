//! Inspect command implementation

use anyhow::Result;
use serde::Serialize;
use skillkit_bundle::SkillArchive;
use std::path::Path;

/// Summary of a `.skill` archive
#[derive(Debug, Default, Serialize)]
struct InspectReport {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha256: Option<String>,
    files: Vec<String>,
}

impl InspectReport {
    fn from_archive(archive: &SkillArchive) -> Self {
        Self {
            success: true,
            message: format!("Skill archive is valid: {}", archive.name()),
            name: Some(archive.name().to_string()),
            description: archive.metadata().description().map(String::from),
            sha256: Some(archive.sha256().to_string()),
            files: archive.list_files(),
        }
    }
}

/// Open `path` as a `.skill` archive and print what it holds.
pub fn run(path: &Path, json: bool) -> Result<bool> {
    let report = match SkillArchive::open(path) {
        Ok(archive) => InspectReport::from_archive(&archive),
        Err(err) => InspectReport {
            message: err.to_string(),
            ..InspectReport::default()
        },
    };

    if json {
        crate::print_json(&report)?;
    } else if report.success {
        println!("Skill: {}", report.name.as_deref().unwrap_or_default());
        if let Some(description) = &report.description {
            println!("Description: {description}");
        }
        if let Some(sha256) = &report.sha256 {
            println!("SHA-256: {sha256}");
        }
        println!("Files:");
        for file in &report.files {
            println!("  {file}");
        }
    } else {
        println!("{}", report.message);
    }

    Ok(report.success)
}
