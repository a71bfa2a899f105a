//! Archive inspection.
//!
//! The [`SkillArchive`] opens a `.skill` file and checks that it still holds
//! a valid bundle.

use crate::{InspectError, InspectResult};
use sha2::{Digest, Sha256};
use skillkit_core::{Metadata, SKILL_FILE, validate_document};
use std::collections::BTreeSet;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

/// A `.skill` archive opened for reading.
///
/// # Example
///
/// ```no_run
/// use skillkit_bundle::SkillArchive;
///
/// let archive = SkillArchive::open("dist/my-skill.skill")?;
/// println!("{}: {:?}", archive.name(), archive.metadata().description());
/// for file in archive.list_files() {
///     println!("  {file}");
/// }
/// # Ok::<(), skillkit_bundle::InspectError>(())
/// ```
#[derive(Debug)]
pub struct SkillArchive {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    name: String,
    metadata: Metadata,
    sha256: String,
}

impl SkillArchive {
    /// Open an archive and validate the `SKILL.md` it carries.
    pub fn open<P: AsRef<Path>>(path: P) -> InspectResult<Self> {
        let bytes = fs::read(path.as_ref())?;
        let sha256 = compute_sha256(&bytes);
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let name = single_root(&archive)?;
        let skill_path = format!("{name}/{SKILL_FILE}");

        let content = {
            let mut file = archive.by_name(&skill_path).map_err(|err| match err {
                ZipError::FileNotFound => InspectError::MissingFile(skill_path.clone()),
                other => InspectError::Zip(other),
            })?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            content
        };

        let metadata = validate_document(&content).map_err(InspectError::InvalidSkill)?;
        debug!(name = %name, entries = archive.len(), "archive opened");

        Ok(Self {
            archive,
            name,
            metadata,
            sha256,
        })
    }

    /// Name of the top-level folder, which is the bundle name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frontmatter of the archived `SKILL.md`.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Hex SHA-256 of the archive file.
    #[must_use]
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    /// Archived file paths in sorted order, directories omitted.
    #[must_use]
    pub fn list_files(&self) -> Vec<String> {
        let mut files: Vec<String> = self
            .archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(String::from)
            .collect();
        files.sort();
        files
    }

    /// Check if a file exists in the archive.
    #[must_use]
    pub fn has_file(&self, path: &str) -> bool {
        self.archive.index_for_name(path).is_some()
    }
}

/// Compute the hex-encoded SHA-256 digest of `data`.
pub fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

fn single_root<R>(archive: &ZipArchive<R>) -> InspectResult<String>
where
    R: std::io::Read + std::io::Seek,
{
    let roots: BTreeSet<&str> = archive
        .file_names()
        .filter_map(|name| name.split('/').next())
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut roots = roots.into_iter();
    match (roots.next(), roots.next()) {
        (None, _) => Err(InspectError::Empty),
        (Some(root), None) => Ok(root.to_string()),
        (Some(first), Some(second)) => {
            let mut all = vec![first.to_string(), second.to_string()];
            all.extend(roots.map(String::from));
            Err(InspectError::MultipleRoots(all))
        }
    }
}

#[cfg(test)]
#[path = "inspect/inspect_tests.rs"]
mod inspect_tests;
