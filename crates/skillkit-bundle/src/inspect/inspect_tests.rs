#![allow(non_snake_case)]

use super::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const VALID_SKILL_MD: &str = "---\nname: demo\ndescription: A demo skill\n---\n\n# Demo\n";

/// Helper to write a zip archive containing the given entries.
fn write_archive(temp_dir: &TempDir, entries: &[(&str, &str)]) -> PathBuf {
    let path = temp_dir.path().join("test.skill");
    let mut zip = ZipWriter::new(fs::File::create(&path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, contents) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
    }
    zip.finish().unwrap();
    path
}

#[test]
fn SkillArchive___open___valid_archive() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_archive(
        &temp_dir,
        &[
            ("demo/", ""),
            ("demo/SKILL.md", VALID_SKILL_MD),
            ("demo/scripts/", ""),
            ("demo/scripts/run.sh", "#!/bin/sh\n"),
        ],
    );

    let archive = SkillArchive::open(&path).unwrap();

    assert_eq!(archive.name(), "demo");
    assert_eq!(archive.metadata().name(), Some("demo"));
    assert_eq!(archive.metadata().description(), Some("A demo skill"));
    assert!(archive.has_file("demo/scripts/run.sh"));
}

#[test]
fn SkillArchive___list_files___sorted_without_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_archive(
        &temp_dir,
        &[
            ("demo/", ""),
            ("demo/references/guide.md", "# Guide"),
            ("demo/SKILL.md", VALID_SKILL_MD),
            ("demo/assets/", ""),
        ],
    );

    let archive = SkillArchive::open(&path).unwrap();

    assert_eq!(
        archive.list_files(),
        vec!["demo/SKILL.md", "demo/references/guide.md"]
    );
}

#[test]
fn SkillArchive___sha256___matches_file_digest() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_archive(&temp_dir, &[("demo/SKILL.md", VALID_SKILL_MD)]);
    let expected = compute_sha256(&fs::read(&path).unwrap());

    let archive = SkillArchive::open(&path).unwrap();

    assert_eq!(archive.sha256(), expected);
    assert_eq!(archive.sha256().len(), 64);
}

#[test]
fn SkillArchive___open___empty_archive() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_archive(&temp_dir, &[]);

    let err = SkillArchive::open(&path).unwrap_err();

    assert!(matches!(err, InspectError::Empty));
}

#[test]
fn SkillArchive___open___multiple_roots() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_archive(
        &temp_dir,
        &[("demo/SKILL.md", VALID_SKILL_MD), ("other/SKILL.md", VALID_SKILL_MD)],
    );

    let err = SkillArchive::open(&path).unwrap_err();

    match err {
        InspectError::MultipleRoots(roots) => assert_eq!(roots, vec!["demo", "other"]),
        other => panic!("expected MultipleRoots, got {other:?}"),
    }
}

#[test]
fn SkillArchive___open___root_level_file_counts_as_root() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_archive(
        &temp_dir,
        &[("demo/SKILL.md", VALID_SKILL_MD), ("README.md", "stray")],
    );

    let err = SkillArchive::open(&path).unwrap_err();

    assert!(matches!(err, InspectError::MultipleRoots(_)));
}

#[test]
fn SkillArchive___open___missing_skill_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_archive(&temp_dir, &[("demo/README.md", "no skill here")]);

    let err = SkillArchive::open(&path).unwrap_err();

    assert_eq!(err.to_string(), "Missing required file: demo/SKILL.md");
}

#[test]
fn SkillArchive___open___invalid_frontmatter() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_archive(&temp_dir, &[("demo/SKILL.md", "# No frontmatter\n")]);

    let err = SkillArchive::open(&path).unwrap_err();

    assert!(matches!(err, InspectError::InvalidSkill(_)));
    assert_eq!(err.to_string(), "Invalid skill: No YAML frontmatter found");
}

#[test]
fn SkillArchive___open___not_a_zip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bogus.skill");
    fs::write(&path, "definitely not a zip").unwrap();

    let err = SkillArchive::open(&path).unwrap_err();

    assert!(matches!(err, InspectError::Zip(_)));
}

#[test]
fn SkillArchive___open___missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = SkillArchive::open(temp_dir.path().join("nope.skill")).unwrap_err();

    assert!(matches!(err, InspectError::Io(_)));
}

#[test]
fn compute_sha256___known_digest() {
    assert_eq!(
        compute_sha256(b"hello"),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}
