//! Init command implementation

use anyhow::Result;
use skillkit_core::{InitOptions, InitReport, ScriptLanguage, init_skill_with};
use std::path::Path;

/// Scaffold `<base>/<name>` and print the outcome.
pub fn run(name: &str, base: &Path, script: ScriptLanguage, json: bool) -> Result<bool> {
    if !json {
        println!("Initializing skill: {name}");
        println!("Location: {}", base.display());
        println!();
    }

    let options = InitOptions { script };
    let report = InitReport::from_result(name, &init_skill_with(name, base, &options));

    if json {
        crate::print_json(&report)?;
    } else {
        println!("{}", report.message);
    }

    Ok(report.success)
}
