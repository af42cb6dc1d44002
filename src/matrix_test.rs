//! Tests for the adjacency-matrix parser.

use super::*;

// =============================================================================
// BARE NUMERIC FORM
// =============================================================================

#[test]
fn bare_numeric_defaults_labels_to_indices() {
    let graph = parse("0 4\n4 0\n").unwrap();
    assert_eq!(graph.size(), 2);
    assert_eq!(graph.labels(), ["0", "1"]);
    assert_eq!(graph.weights(), vec![vec![0.0, 4.0], vec![4.0, 0.0]]);
}

#[test]
fn single_cell_matrix() {
    let graph = parse("7").unwrap();
    assert_eq!(graph.size(), 1);
    assert_eq!(graph.labels(), ["0"]);
    assert_eq!(graph.weights(), vec![vec![7.0]]);
}

#[test]
fn bare_form_accepts_float_weights() {
    let graph = parse("0 1.5\n2.25 0\n").unwrap();
    assert_eq!(graph.weights(), vec![vec![0.0, 1.5], vec![2.25, 0.0]]);
}

#[test]
fn bare_form_skips_blank_lines_and_padding() {
    let graph = parse("\n  0 1 \n\n 1 0\t\n\n").unwrap();
    assert_eq!(graph.size(), 2);
}

#[test]
fn asymmetric_matrix_is_allowed() {
    // Directedness is permitted; symmetry is not validated.
    let graph = parse("0 3 0\n0 0 1\n2 0 0\n").unwrap();
    assert_eq!(graph.weights()[0][1], 3.0);
    assert_eq!(graph.weights()[1][0], 0.0);
}

// =============================================================================
// LABELED FORM
// =============================================================================

#[test]
fn labeled_form_reads_header_and_rows() {
    let graph = parse("A B\nA 0 4\nB 4 0\n").unwrap();
    assert_eq!(graph.labels(), ["A", "B"]);
    assert_eq!(graph.weights(), vec![vec![0.0, 4.0], vec![4.0, 0.0]]);
}

#[test]
fn labeled_form_three_nodes() {
    let graph = parse("A B C\nA 0 1 0\nB 1 0 2\nC 0 2 0\n").unwrap();
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.weights()[1][2], 2.0);
}

#[test]
fn header_mismatch_reports_expected_and_actual() {
    let err = parse("A B\nA 0 4\nC 4 0\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::HeaderMismatch { row: 2, expected: "B".into(), actual: "C".into() }
    );
}

#[test]
fn header_mismatch_never_yields_partial_graph() {
    // Rows after the mismatch are valid; the parse must still fail whole.
    assert!(matches!(
        parse("A B\nB 0 4\nB 4 0\n"),
        Err(ParseError::HeaderMismatch { row: 1, .. })
    ));
}

#[test]
fn duplicate_labels_rejected() {
    let err = parse("A A\nA 0 1\nA 1 0\n").unwrap_err();
    assert_eq!(err, ParseError::DuplicateLabel("A".into()));
}

#[test]
fn labeled_missing_row_is_not_square() {
    let err = parse("A B C\nA 0 1 0\nB 1 0 2\n").unwrap_err();
    assert!(matches!(err, ParseError::NotSquare { expected: 3, .. }));
}

#[test]
fn labeled_extra_row_is_not_square() {
    let err = parse("A B\nA 0 1\nB 1 0\nB 0 0\n").unwrap_err();
    assert!(matches!(err, ParseError::NotSquare { row: 3, expected: 2, .. }));
}

// =============================================================================
// VALUE VALIDATION
// =============================================================================

#[test]
fn non_numeric_value_names_the_token() {
    let err = parse("0 1\nx 0\n").unwrap_err();
    assert_eq!(err, ParseError::NonNumericValue { row: 2, value: "x".into() });
}

#[test]
fn labeled_non_numeric_value() {
    let err = parse("A B\nA 0 y\nB 1 0\n").unwrap_err();
    assert_eq!(err, ParseError::NonNumericValue { row: 1, value: "y".into() });
}

#[test]
fn negative_weight_rejected() {
    let err = parse("0 -3\n3 0\n").unwrap_err();
    assert_eq!(err, ParseError::NegativeWeight { row: 1, value: "-3".into() });
}

#[test]
fn not_square_when_one_row_is_short() {
    let err = parse("0 1 1\n1 0\n1 1 0\n").unwrap_err();
    assert_eq!(err, ParseError::NotSquare { row: 2, len: 2, expected: 3 });
}

#[test]
fn empty_input_rejected() {
    assert_eq!(parse("").unwrap_err(), ParseError::EmptyInput);
    assert_eq!(parse("  \n \t \n").unwrap_err(), ParseError::EmptyInput);
}

// =============================================================================
// GRAPH QUERIES
// =============================================================================

#[test]
fn label_falls_back_to_raw_index_out_of_range() {
    let graph = parse("A B\nA 0 1\nB 1 0\n").unwrap();
    assert_eq!(graph.label(0), "A");
    assert_eq!(graph.label(5), "5");
}
