//! Skill bundle scaffolding
//!
//! Generates a new bundle from the embedded templates:
//!
//! ```text
//! <name>/
//! ├── SKILL.md
//! ├── scripts/example.<ext>      (executable)
//! ├── references/api_reference.md
//! └── assets/example_asset.txt
//! ```

use crate::error::ScaffoldError;
use crate::metadata::Metadata;
use crate::paths::resolve_path;
use crate::validate::validate_metadata;
use crate::{ASSETS_DIR, REFERENCES_DIR, SCRIPTS_DIR, SKILL_FILE, ScaffoldResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ============================================================================
// Embedded Templates
// ============================================================================

mod templates {
    pub const SKILL_MD: &str = include_str!("../templates/skill/SKILL.md.tmpl");

    pub const SCRIPT_TYPESCRIPT: &str = include_str!("../templates/skill/scripts/example.ts.tmpl");
    pub const SCRIPT_PYTHON: &str = include_str!("../templates/skill/scripts/example.py.tmpl");
    pub const SCRIPT_SHELL: &str = include_str!("../templates/skill/scripts/example.sh.tmpl");

    pub const API_REFERENCE: &str =
        include_str!("../templates/skill/references/api_reference.md.tmpl");
    pub const EXAMPLE_ASSET: &str = include_str!("../templates/skill/assets/example_asset.txt");
}

const REFERENCE_FILE: &str = "api_reference.md";
const ASSET_FILE: &str = "example_asset.txt";

// ============================================================================
// Template Context
// ============================================================================

/// Values substituted into the templates
struct TemplateContext {
    /// Skill name as given (e.g., "my-cool-skill")
    skill_name: String,
    /// Display title (e.g., "My Cool Skill")
    skill_title: String,
}

impl TemplateContext {
    fn new(name: &str) -> Self {
        Self {
            skill_name: name.to_string(),
            skill_title: title_case(name),
        }
    }

    fn apply(&self, template: &str) -> String {
        template
            .replace("{{skill-name}}", &self.skill_name)
            .replace("{{skill-title}}", &self.skill_title)
    }
}

// ============================================================================
// Options
// ============================================================================

/// Language of the generated example script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLanguage {
    #[default]
    TypeScript,
    Python,
    Shell,
}

impl ScriptLanguage {
    pub fn extension(self) -> &'static str {
        match self {
            ScriptLanguage::TypeScript => "ts",
            ScriptLanguage::Python => "py",
            ScriptLanguage::Shell => "sh",
        }
    }

    fn template(self) -> &'static str {
        match self {
            ScriptLanguage::TypeScript => templates::SCRIPT_TYPESCRIPT,
            ScriptLanguage::Python => templates::SCRIPT_PYTHON,
            ScriptLanguage::Shell => templates::SCRIPT_SHELL,
        }
    }
}

impl std::str::FromStr for ScriptLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Ok(ScriptLanguage::TypeScript),
            "python" | "py" => Ok(ScriptLanguage::Python),
            "shell" | "sh" | "bash" => Ok(ScriptLanguage::Shell),
            other => Err(format!("unknown script language: {other}")),
        }
    }
}

/// Options for [`init_skill_with`]
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub script: ScriptLanguage,
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Create a new bundle named `name` under `base` with default options.
pub fn init_skill(name: &str, base: impl AsRef<Path>) -> ScaffoldResult<PathBuf> {
    init_skill_with(name, base, &InitOptions::default())
}

/// Create a new bundle named `name` under `base`.
///
/// Fails without touching anything if `<base>/<name>` already exists.
/// Returns the absolute path of the new bundle.
pub fn init_skill_with(
    name: &str,
    base: impl AsRef<Path>,
    options: &InitOptions,
) -> ScaffoldResult<PathBuf> {
    let skill_dir = resolve_path(&base.as_ref().join(name));

    if skill_dir.exists() {
        info!(path = %skill_dir.display(), "skill directory already exists");
        return Err(ScaffoldError::AlreadyExists(skill_dir));
    }

    warn_if_invalid_name(name);

    fs::create_dir_all(&skill_dir).map_err(ScaffoldError::DirectoryCreate)?;

    let ctx = TemplateContext::new(name);

    write_file(&skill_dir.join(SKILL_FILE), &ctx.apply(templates::SKILL_MD))?;
    create_scripts(&skill_dir, &ctx, options.script)?;
    create_references(&skill_dir, &ctx)?;
    create_assets(&skill_dir)?;

    info!(name, path = %skill_dir.display(), "skill initialized");
    Ok(skill_dir)
}

// ============================================================================
// Resource Directories
// ============================================================================

fn create_scripts(
    skill_dir: &Path,
    ctx: &TemplateContext,
    language: ScriptLanguage,
) -> ScaffoldResult<()> {
    let scripts_dir = create_subdir(skill_dir, SCRIPTS_DIR)?;
    let script = scripts_dir.join(format!("example.{}", language.extension()));

    write_file(&script, &ctx.apply(language.template()))?;

    // Make the example script executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).map_err(|source| {
            ScaffoldError::Write {
                path: script.clone(),
                source,
            }
        })?;
    }

    Ok(())
}

fn create_references(skill_dir: &Path, ctx: &TemplateContext) -> ScaffoldResult<()> {
    let references_dir = create_subdir(skill_dir, REFERENCES_DIR)?;
    write_file(
        &references_dir.join(REFERENCE_FILE),
        &ctx.apply(templates::API_REFERENCE),
    )
}

fn create_assets(skill_dir: &Path) -> ScaffoldResult<()> {
    let assets_dir = create_subdir(skill_dir, ASSETS_DIR)?;
    write_file(&assets_dir.join(ASSET_FILE), templates::EXAMPLE_ASSET)
}

// ============================================================================
// Utilities
// ============================================================================

/// Split a kebab-case name on hyphens and capitalize each word.
///
/// `"my-cool-skill"` becomes `"My Cool Skill"`.
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn create_subdir(skill_dir: &Path, name: &str) -> ScaffoldResult<PathBuf> {
    let dir = skill_dir.join(name);
    fs::create_dir_all(&dir).map_err(ScaffoldError::DirectoryCreate)?;
    Ok(dir)
}

fn write_file(path: &Path, contents: &str) -> ScaffoldResult<()> {
    debug!(path = %path.display(), "writing template");
    fs::write(path, contents).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Logs a warning only; scaffolding proceeds either way.
fn warn_if_invalid_name(name: &str) {
    let mut metadata = Metadata::new();
    metadata.insert("name", name);
    metadata.insert("description", "");

    if let Err(err) = validate_metadata(&metadata) {
        warn!(name, reason = %err, "skill name will not pass validation");
    }
}
