use std::path::PathBuf;

use scantab_compiler::Visibility;

use super::emit::{EmitArgs, render};
use super::input::parse_input;
use super::input_tests::IDENT_OR_NUMBER;

fn args() -> EmitArgs {
    EmitArgs {
        automaton_path: PathBuf::from("-"),
        lang: "java".to_string(),
        switch: false,
        unpacked: false,
        visibility: Visibility::Private,
        max_chunk_size: None,
    }
}

fn render_with(args: EmitArgs) -> String {
    let input = parse_input(IDENT_OR_NUMBER).unwrap();
    render(&input, &args).unwrap()
}

#[test]
fn java_row_map_by_default() {
    let text = render_with(args());

    assert!(text.contains("  private static final int [] ZZ_TRANS = zzUnpackTrans();\n"));
    assert!(text.contains("  private static final int [] ZZ_ROWMAP = zzUnpackRowMap();\n"));
    assert!(text.contains("  private static final char [] ZZ_CMAP = {\n"));
}

#[test]
fn scala_by_name() {
    let text = render_with(EmitArgs {
        lang: "Scala".to_string(),
        ..args()
    });

    assert!(text.contains("  private val ZZ_TRANS:Array[Int] = zzUnpackTrans()\n"));
}

#[test]
fn switch_replaces_transition_table() {
    let text = render_with(EmitArgs {
        switch: true,
        ..args()
    });

    assert!(text.contains("zzForNext: {switch (zzState) {"));
    assert!(!text.contains("ZZ_TRANS"));
    assert!(!text.contains("ZZ_ROWMAP"));
}

#[test]
fn unpacked_transition_table() {
    let text = render_with(EmitArgs {
        unpacked: true,
        ..args()
    });

    assert!(text.contains("ZZ_TRANS = {\n    -1, 1, 2, -1, 1, -1, -1, -1, 2\n  };\n"));
    assert!(!text.contains("zzUnpackTrans"));
}

#[test]
fn public_constants() {
    let text = render_with(EmitArgs {
        visibility: Visibility::Public,
        ..args()
    });

    assert!(text.contains("  public static final int [] ZZ_ACTION = zzUnpackAction();\n"));
}

#[test]
fn chunk_size_reaches_the_packer() {
    let text = render_with(EmitArgs {
        max_chunk_size: Some(8),
        ..args()
    });

    assert!(text.contains("ZZ_TRANS_PACKED_1"));
}

#[test]
fn unknown_language_is_an_error() {
    let input = parse_input(IDENT_OR_NUMBER).unwrap();
    let err = render(
        &input,
        &EmitArgs {
            lang: "cobol".to_string(),
            ..args()
        },
    )
    .err()
    .unwrap();

    insta::assert_snapshot!(err.to_string(), @"unknown target syntax `cobol`");
}

#[test]
fn surplus_class_is_an_error() {
    let input = parse_input(&IDENT_OR_NUMBER.replace(
        "[[48, 57]]",
        "[[48, 57]], [[95, 95]]",
    ))
    .unwrap();
    let err = render(&input, &args()).err().unwrap();

    insta::assert_snapshot!(err.to_string(), @"character class 3 has no column in a matrix of 3 classes");
}
