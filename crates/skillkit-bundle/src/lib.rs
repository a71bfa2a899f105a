//! `.skill` archive format for skillkit
//!
//! This crate packages a validated skill bundle into a single zip archive and
//! reads such archives back.
//!
//! # Archive Structure
//!
//! ```text
//! my-skill.skill
//! └── my-skill/
//!     ├── SKILL.md
//!     ├── scripts/
//!     │   └── example.ts
//!     ├── references/
//!     │   └── api_reference.md
//!     └── assets/
//!         └── example_asset.txt
//! ```
//!
//! Hidden entries and development artifacts (`node_modules/`, `package.json`,
//! `tsconfig.json`, bun lockfiles) are never archived.
//!
//! # Example
//!
//! ```no_run
//! use skillkit_bundle::{SkillArchive, package_skill};
//!
//! let archive_path = package_skill("skills/my-skill", Some("dist".as_ref()))?;
//!
//! let archive = SkillArchive::open(&archive_path)?;
//! assert_eq!(archive.name(), "my-skill");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub mod inspect;
pub mod package;

pub use error::{InspectError, PackageError};
pub use inspect::{SkillArchive, compute_sha256};
pub use package::{PackageReport, SkillPackager, package_skill};

/// Result type for packaging operations.
pub type PackageResult<T> = Result<T, PackageError>;

/// Result type for archive inspection.
pub type InspectResult<T> = Result<T, InspectError>;

/// Archive file extension.
pub const SKILL_EXTENSION: &str = "skill";

/// Root-relative glob patterns that are never archived.
pub const DEFAULT_EXCLUDES: [&str; 6] = [
    "node_modules",
    "node_modules/**",
    "package.json",
    "tsconfig.json",
    "bun.lockb",
    "bun.lock",
];

/// Deflate level used unless configured otherwise.
pub const MAX_COMPRESSION_LEVEL: i64 = 9;
