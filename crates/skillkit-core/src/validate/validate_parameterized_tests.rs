#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn metadata_with(name: &str, description: &str) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("name", name);
    metadata.insert("description", description);
    metadata
}

// ============================================================================
// Name rules
// ============================================================================

#[test_case("pdf"; "single word")]
#[test_case("pdf-tools"; "two words")]
#[test_case("web-app-testing-2"; "with digits")]
#[test_case("42"; "digits only")]
#[test_case("  padded-name  "; "surrounding whitespace is trimmed")]
fn check_name___valid_names___pass(name: &str) {
    assert_eq!(check_name(&metadata_with(name, "d")), Ok(()));
}

#[test_case("My Skill"; "uppercase and space")]
#[test_case("pdf_tools"; "underscore")]
#[test_case("pdf.tools"; "dot")]
#[test_case("Pdf"; "leading uppercase")]
#[test_case("café"; "non ascii")]
fn check_name___outside_charset___not_kebab_case(name: &str) {
    let err = check_name(&metadata_with(name, "d")).unwrap_err();

    assert_eq!(err, SchemaError::NotKebabCase(name.trim().to_string()));
}

#[test_case("-pdf"; "leading hyphen")]
#[test_case("pdf-"; "trailing hyphen")]
#[test_case("pdf--tools"; "consecutive hyphens")]
#[test_case("-"; "lone hyphen")]
fn check_name___bad_hyphens___misplaced_hyphen(name: &str) {
    let err = check_name(&metadata_with(name, "d")).unwrap_err();

    assert_eq!(err, SchemaError::MisplacedHyphen(name.to_string()));
}

#[test_case(64, true)]
#[test_case(65, false)]
#[test_case(200, false)]
fn check_name___length_boundary(length: usize, passes: bool) {
    let name = "a".repeat(length);

    let result = check_name(&metadata_with(&name, "d"));

    if passes {
        assert_eq!(result, Ok(()));
    } else {
        assert_eq!(
            result,
            Err(SchemaError::TooLong {
                field: Field::Name,
                length,
                max: MAX_NAME_LENGTH,
            })
        );
    }
}

#[test]
fn check_name___charset_rule_wins_over_length() {
    let name = "A".repeat(100);

    let err = check_name(&metadata_with(&name, "d")).unwrap_err();

    assert!(matches!(err, SchemaError::NotKebabCase(_)));
}

#[test]
fn check_name___hyphen_rule_wins_over_length() {
    let name = format!("-{}", "a".repeat(100));

    let err = check_name(&metadata_with(&name, "d")).unwrap_err();

    assert!(matches!(err, SchemaError::MisplacedHyphen(_)));
}

// ============================================================================
// Description rules
// ============================================================================

#[test_case("Use <b>bold</b>"; "html tag")]
#[test_case("a < b"; "less than")]
#[test_case("a > b"; "greater than")]
fn check_description___angle_brackets___rejected(description: &str) {
    let err = check_description(&metadata_with("demo", description)).unwrap_err();

    assert_eq!(err, SchemaError::AngleBrackets);
}

#[test_case(1024, true)]
#[test_case(1025, false)]
fn check_description___length_boundary(length: usize, passes: bool) {
    let description = "d".repeat(length);

    let result = check_description(&metadata_with("demo", &description));

    assert_eq!(result.is_ok(), passes);
}

#[test]
fn check_description___length_counts_characters_not_bytes() {
    let description = "é".repeat(MAX_DESCRIPTION_LENGTH);

    assert_eq!(check_description(&metadata_with("demo", &description)), Ok(()));
}

#[test]
fn check_description___angle_bracket_rule_wins_over_length() {
    let description = format!("<{}", "d".repeat(2000));

    let err = check_description(&metadata_with("demo", &description)).unwrap_err();

    assert_eq!(err, SchemaError::AngleBrackets);
}

// ============================================================================
// Compatibility rules
// ============================================================================

#[test_case(0, true)]
#[test_case(500, true)]
#[test_case(501, false)]
fn check_compatibility___length_boundary(length: usize, passes: bool) {
    let mut metadata = metadata_with("demo", "d");
    metadata.insert("compatibility", "c".repeat(length));

    assert_eq!(check_compatibility(&metadata).is_ok(), passes);
}

#[test]
fn check_compatibility___absent___passes() {
    assert_eq!(check_compatibility(&metadata_with("demo", "d")), Ok(()));
}

// ============================================================================
// Unexpected properties
// ============================================================================

#[test_case("license")]
#[test_case("allowed-tools")]
#[test_case("metadata")]
#[test_case("compatibility")]
fn check_properties___optional_fields___allowed(key: &str) {
    let mut metadata = metadata_with("demo", "d");
    metadata.insert(key, "value");

    assert_eq!(check_properties(&metadata), Ok(()));
}

#[test_case("version")]
#[test_case("Name"; "keys are case sensitive")]
#[test_case("allowed_tools"; "underscore variant")]
fn check_properties___foreign_key___rejected(key: &str) {
    let mut metadata = metadata_with("demo", "d");
    metadata.insert(key, "value");

    let err = check_properties(&metadata).unwrap_err();

    assert_eq!(
        err,
        SchemaError::UnexpectedKeys {
            keys: vec![key.to_string()],
            allowed: ALLOWED_PROPERTIES.to_vec(),
        }
    );
}
