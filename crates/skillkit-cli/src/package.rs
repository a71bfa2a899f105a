//! Package command implementation

use anyhow::Result;
use skillkit_bundle::{PackageReport, SkillPackager};
use skillkit_core::PackageConfig;
use std::path::Path;

/// Package `skill_folder` with the configured exclusions and print the outcome.
pub fn run(
    skill_folder: &Path,
    output_dir: Option<&Path>,
    config: &PackageConfig,
    json: bool,
) -> Result<bool> {
    if !json {
        println!("Packaging skill: {}", skill_folder.display());
        println!();
    }

    let result = SkillPackager::from_config(config)
        .and_then(|packager| packager.package(skill_folder, output_dir));
    let report = PackageReport::from_result(&result);

    if json {
        crate::print_json(&report)?;
    } else {
        println!("{}", report.message);
    }

    Ok(report.success)
}
