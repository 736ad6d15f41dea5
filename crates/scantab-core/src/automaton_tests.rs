use crate::{Automaton, AutomatonError, NO_TARGET, TransitionMatrix};

fn matrix(rows: &[&[Option<u32>]]) -> TransitionMatrix {
    TransitionMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

#[test]
fn from_rows_keeps_row_major_order() {
    let m = matrix(&[&[Some(1), None], &[None, Some(0)]]);

    assert_eq!(m.num_states(), 2);
    assert_eq!(m.num_classes(), 2);
    assert_eq!(m.get(0, 0), Some(1));
    assert_eq!(m.get(1, 1), Some(0));
    assert_eq!(m.row(1), &[None, Some(0)]);
}

#[test]
fn ragged_rows_are_rejected() {
    let err = TransitionMatrix::from_rows(vec![vec![None, None], vec![None]]).unwrap_err();

    assert_eq!(
        err,
        AutomatonError::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn empty_matrix_has_no_cells() {
    let m = TransitionMatrix::from_rows(vec![]).unwrap();

    assert!(m.is_empty());
    assert_eq!(m.num_classes(), 0);

    let no_classes = TransitionMatrix::from_rows(vec![vec![], vec![]]).unwrap();
    assert!(no_classes.is_empty());
    assert_eq!(no_classes.num_states(), 2);
}

#[test]
fn get_flat_maps_missing_to_no_target() {
    let m = matrix(&[&[Some(0), None]]);

    assert_eq!(m.get_flat(0, 0), 0);
    assert_eq!(m.get_flat(0, 1), NO_TARGET);
}

#[test]
fn has_outgoing_looks_at_whole_row() {
    let m = matrix(&[&[None, Some(1)], &[None, None]]);

    assert!(m.has_outgoing(0));
    assert!(!m.has_outgoing(1));
}

#[test]
fn from_fn_fills_every_cell() {
    let m = TransitionMatrix::from_fn(3, 2, |s, c| (c == 1).then_some(s as u32));

    assert_eq!(m.row(2), &[None, Some(2)]);
}

#[test]
fn target_out_of_range_is_rejected() {
    let m = matrix(&[&[Some(0)], &[Some(2)]]);
    let err = Automaton::new(m, vec![false, true], vec![None, None]).unwrap_err();

    assert_eq!(
        err,
        AutomatonError::TargetOutOfRange {
            state: 1,
            class: 0,
            target: 2
        }
    );
}

#[test]
fn attribute_lengths_must_match_states() {
    let m = matrix(&[&[None], &[None]]);

    let err = Automaton::new(m.clone(), vec![true], vec![None, None]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"finals has 1 entries, expected one per state (2)");

    let err = Automaton::new(m, vec![true, false], vec![Some(1)]).unwrap_err();
    assert!(matches!(
        err,
        AutomatonError::LengthMismatch { what: "actions", .. }
    ));
}

#[test]
fn deserializes_with_default_actions() {
    let a: Automaton = serde_json::from_str(
        r#"{ "matrix": [[1, null], [null, 1]], "finals": [false, true] }"#,
    )
    .unwrap();

    assert_eq!(a.num_states(), 2);
    assert!(a.is_final(1));
    assert_eq!(a.action(0), None);
    assert_eq!(a.action(1), None);
    assert_eq!(a.matrix().get(0, 0), Some(1));
}

#[test]
fn deserialization_runs_validation() {
    let ragged = r#"{ "matrix": [[1, null], [null]], "finals": [false, true] }"#;
    let out_of_range = r#"{ "matrix": [[5]], "finals": [false], "actions": [null] }"#;

    assert!(serde_json::from_str::<Automaton>(ragged).is_err());
    assert!(serde_json::from_str::<Automaton>(out_of_range).is_err());
}
