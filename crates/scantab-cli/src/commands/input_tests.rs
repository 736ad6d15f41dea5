use std::io::Write;

use indoc::indoc;

use super::error::Error;
use super::input::{load_input, parse_input};

/// Identifiers (`a-z`, class 1) and numbers (`0-9`, class 2).
pub(super) const IDENT_OR_NUMBER: &str = indoc! {r#"
    {
      "max_char": 127,
      "classes": [[[97, 122]], [[48, 57]]],
      "matrix": [
        [null, 1, 2],
        [null, 1, null],
        [null, null, 2]
      ],
      "finals": [false, true, true],
      "actions": [null, 7, 3]
    }
"#};

#[test]
fn classes_are_refined_in_order() {
    let input = parse_input(IDENT_OR_NUMBER).unwrap();

    assert_eq!(input.classes.num_classes(), 3);
    assert_eq!(input.classes.class_of(u32::from('q')), Some(1));
    assert_eq!(input.classes.class_of(u32::from('5')), Some(2));
    assert_eq!(input.classes.class_of(u32::from(' ')), Some(0));
    assert_eq!(input.automaton.num_states(), 3);
    assert_eq!(input.automaton.action(1), Some(7));
}

#[test]
fn actions_and_classes_are_optional() {
    let input = parse_input(indoc! {r#"
        { "max_char": 255, "matrix": [[0]], "finals": [true] }
    "#})
    .unwrap();

    assert_eq!(input.classes.num_classes(), 1);
    assert_eq!(input.automaton.action(0), None);
    assert!(input.automaton.is_final(0));
}

#[test]
fn unknown_target_is_rejected() {
    let err = parse_input(indoc! {r#"
        { "max_char": 1, "matrix": [[5]], "finals": [false] }
    "#})
    .err()
    .unwrap();

    assert!(matches!(err, Error::Parse(_)));
    assert!(
        err.to_string()
            .contains("transition from state 0 on class 0 targets unknown state 5"),
        "{err}"
    );
}

#[test]
fn ragged_matrix_is_rejected() {
    let err = parse_input(indoc! {r#"
        { "max_char": 1, "matrix": [[null, null], [null]], "finals": [false, false] }
    "#})
    .err()
    .unwrap();

    assert!(err.to_string().contains("row 1 has 1 entries, expected 2"), "{err}");
}

#[test]
fn inverted_class_interval_is_rejected() {
    let err = parse_input(indoc! {r#"
        { "max_char": 10, "classes": [[[5, 4]]], "matrix": [[null, null]], "finals": [false] }
    "#})
    .err()
    .unwrap();

    assert!(err.to_string().contains("inverted interval [5-4]"), "{err}");
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(IDENT_OR_NUMBER.as_bytes()).unwrap();
    file.flush().unwrap();

    let input = load_input(file.path()).unwrap();
    assert_eq!(input.automaton.num_states(), 3);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_input(&path).err().unwrap();
    assert!(matches!(err, Error::Read { .. }));
    assert!(
        err.to_string()
            .starts_with(&format!("failed to read {}: ", path.display()))
    );
}

#[test]
fn directory_is_not_an_automaton() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_input(dir.path()).err().unwrap();
    assert!(matches!(err, Error::Read { .. }));
}
