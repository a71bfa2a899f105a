//! Bundle packaging.
//!
//! The [`SkillPackager`] validates a bundle and writes it to a `.skill`
//! archive. Validation is a hard gate: an invalid bundle never produces or
//! touches an archive.

use crate::{
    DEFAULT_EXCLUDES, MAX_COMPRESSION_LEVEL, PackageError, PackageResult, SKILL_EXTENSION,
};
use glob::{MatchOptions, Pattern};
use serde::Serialize;
use skillkit_core::{PackageConfig, resolve_path, validate_skill};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};
use zip::result::{ZipError, ZipResult};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Builder for packaging skill bundles.
///
/// # Example
///
/// ```no_run
/// use skillkit_bundle::SkillPackager;
///
/// let packager = SkillPackager::new()
///     .with_excludes(["dist/**", "*.log"])?
///     .with_compression_level(6);
///
/// let archive = packager.package("skills/my-skill", None)?;
/// println!("{}", archive.display());
/// # Ok::<(), skillkit_bundle::PackageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SkillPackager {
    excludes: Vec<Pattern>,
    compression_level: i64,
}

impl SkillPackager {
    /// Create a packager with the built-in exclusions and maximum compression.
    #[must_use]
    pub fn new() -> Self {
        Self {
            excludes: DEFAULT_EXCLUDES
                .iter()
                .filter_map(|pattern| Pattern::new(pattern).ok())
                .collect(),
            compression_level: MAX_COMPRESSION_LEVEL,
        }
    }

    /// Create a packager from the `[package]` configuration section.
    pub fn from_config(config: &PackageConfig) -> PackageResult<Self> {
        Ok(Self::new()
            .with_excludes(&config.exclude)?
            .with_compression_level(config.compression_level))
    }

    /// Exclude additional root-relative glob patterns.
    pub fn with_excludes<I, S>(mut self, patterns: I) -> PackageResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let compiled = Pattern::new(pattern).map_err(|source| PackageError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            self.excludes.push(compiled);
        }
        Ok(self)
    }

    /// Set the Deflate level (1-9); 0 stores entries uncompressed.
    #[must_use]
    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression_level = level;
        self
    }

    /// Validate the bundle at `skill_path` and archive it.
    ///
    /// The archive is named `<bundle>.skill` and written to `output_dir`, or
    /// to the current directory when `None`. An existing file is replaced.
    /// Returns the absolute path of the archive.
    pub fn package<P: AsRef<Path>>(
        &self,
        skill_path: P,
        output_dir: Option<&Path>,
    ) -> PackageResult<PathBuf> {
        let skill_dir = resolve_path(skill_path.as_ref());

        if !skill_dir.exists() {
            return Err(PackageError::NotFound(skill_dir));
        }
        if !skill_dir.is_dir() {
            return Err(PackageError::NotADirectory(skill_dir));
        }

        validate_skill(&skill_dir).map_err(PackageError::ValidationFailed)?;

        let skill_name = match skill_dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return Err(PackageError::NotADirectory(skill_dir)),
        };

        let output_dir = match output_dir {
            Some(dir) => resolve_path(dir),
            None => std::env::current_dir()?,
        };
        let output_path = output_dir.join(format!("{skill_name}.{SKILL_EXTENSION}"));

        // Staged next to the target and renamed into place after finish()
        let mut staging = tempfile::Builder::new()
            .prefix(".skillkit-")
            .suffix(".tmp")
            .tempfile_in(&output_dir)?;

        let entries = self.write_archive(
            &skill_dir,
            &skill_name,
            &output_path,
            staging.as_file_mut(),
        )?;
        staging.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(staging.path(), fs::Permissions::from_mode(0o644))?;
        }

        staging
            .persist(&output_path)
            .map_err(|err| PackageError::from(err.error))?;

        info!(
            path = %output_path.display(),
            entries,
            "skill packaged"
        );
        Ok(output_path)
    }

    /// Check a root-relative, `/`-separated path against the exclusion set.
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.excludes
            .iter()
            .any(|pattern| pattern.matches_with(relative, MATCH_OPTIONS))
    }

    fn write_archive(
        &self,
        skill_dir: &Path,
        skill_name: &str,
        output_path: &Path,
        file: &mut File,
    ) -> ZipResult<usize> {
        let mut zip = ZipWriter::new(file);
        // Deflate has no level 0; store entries uncompressed instead
        let options = if self.compression_level == 0 {
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
        } else {
            SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(self.compression_level))
        };

        zip.add_directory(format!("{skill_name}/"), options.unix_permissions(0o755))?;

        let walker = WalkDir::new(skill_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.skips(skill_dir, output_path, entry));

        let mut entries = 0;
        for entry in walker {
            let entry = entry.map_err(|err| ZipError::Io(io::Error::from(err)))?;
            let relative = relative_archive_path(skill_dir, entry.path());
            let archive_path = format!("{skill_name}/{relative}");
            let entry_options = options.unix_permissions(unix_mode(&entry)?);

            if entry.file_type().is_dir() {
                debug!(entry = %archive_path, "adding directory");
                zip.add_directory(format!("{archive_path}/"), entry_options)?;
            } else if entry.file_type().is_file() {
                debug!(entry = %archive_path, "adding file");
                zip.start_file(archive_path.as_str(), entry_options)?;
                let mut source = File::open(entry.path())?;
                io::copy(&mut source, &mut zip)?;
            } else {
                debug!(entry = %archive_path, "skipping special file");
                continue;
            }
            entries += 1;
        }

        zip.finish()?;
        Ok(entries)
    }

    /// Hidden entries, excluded patterns, and the archive being written.
    fn skips(&self, skill_dir: &Path, output_path: &Path, entry: &DirEntry) -> bool {
        if entry.file_name().to_string_lossy().starts_with('.') {
            return true;
        }
        if entry.path() == output_path {
            return true;
        }
        self.is_excluded(&relative_archive_path(skill_dir, entry.path()))
    }
}

impl Default for SkillPackager {
    fn default() -> Self {
        Self::new()
    }
}

/// Package `skill_path` with the default exclusions and maximum compression.
pub fn package_skill<P: AsRef<Path>>(
    skill_path: P,
    output_dir: Option<&Path>,
) -> PackageResult<PathBuf> {
    SkillPackager::new().package(skill_path, output_dir)
}

/// Outcome of packaging one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub success: bool,
    pub message: String,
    pub output_path: Option<PathBuf>,
}

impl PackageReport {
    pub fn from_result(result: &PackageResult<PathBuf>) -> Self {
        match result {
            Ok(path) => Self {
                success: true,
                message: format!("Successfully packaged skill to: {}", path.display()),
                output_path: Some(path.clone()),
            },
            Err(err) => Self {
                success: false,
                message: err.to_string(),
                output_path: None,
            },
        }
    }
}

/// Path of `path` below `root`, joined with `/` regardless of platform.
fn relative_archive_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn unix_mode(entry: &DirEntry) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = entry.metadata().map_err(io::Error::from)?;
    Ok(metadata.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn unix_mode(entry: &DirEntry) -> io::Result<u32> {
    Ok(if entry.file_type().is_dir() { 0o755 } else { 0o644 })
}
