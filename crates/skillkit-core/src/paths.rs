//! Path resolution shared by the scaffolder and the packager

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and fold away `.` and
/// `..` components without touching the filesystem.
///
/// Symlinks are not resolved, so the result names the path the user typed.
pub fn resolve_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn resolve_path___relative___is_made_absolute() {
        let resolved = resolve_path(Path::new("skills/demo"));

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("skills/demo"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_path___parent_components___are_folded() {
        let resolved = resolve_path(Path::new("/a/b/../c/./d"));

        assert_eq!(resolved, PathBuf::from("/a/c/d"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_path___parent_of_root___stays_at_root() {
        let resolved = resolve_path(Path::new("/../x"));

        assert_eq!(resolved, PathBuf::from("/x"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_path___trailing_parent___gives_usable_basename() {
        let resolved = resolve_path(Path::new("/skills/demo/scripts/.."));

        assert_eq!(resolved.file_name().unwrap(), "demo");
    }
}
