//! Occurrence positions, trimming and identity

use super::*;
use crate::position::Span;

#[test]
fn test_occurrence_positions() {
    let result = scan("fn @[name]@() {}");
    assert_eq!(result.occurrences.len(), 1);

    let occ = &result.occurrences[0];
    assert_eq!(occ.name, "name");
    assert_eq!(occ.raw_name, "name");
    assert_eq!(occ.line, 1);
    assert_eq!(occ.column, 6);
    assert_eq!(occ.token, Span::on_line(0, 3, 11));
    assert_eq!(occ.name_span, Span::on_line(0, 5, 9));
    assert_eq!(occ.byte_range, 3..11);
    assert!(occ.well_formed);
}

#[test]
fn test_padded_name_is_trimmed_but_raw_is_kept() {
    let result = scan("@[  body ]@");
    let occ = &result.occurrences[0];
    assert_eq!(occ.name, "body");
    assert_eq!(occ.raw_name, "  body ");
    assert_eq!(occ.name_span, Span::on_line(0, 4, 8));
    assert_eq!(occ.column, 5);
    assert_eq!(occ.token, Span::on_line(0, 0, 11));
}

#[test]
fn test_byte_range_is_absolute() {
    let text = "line one\n  @[second]@";
    let result = scan(text);
    let occ = &result.occurrences[0];
    assert_eq!(occ.line, 2);
    assert_eq!(&text[occ.byte_range.clone()], "@[second]@");
}

#[test]
fn test_unbalanced_line_marks_occurrence_malformed() {
    let result = scan("@[ok]@\n@[x]@ @[");
    assert!(result.occurrences[0].well_formed);
    assert!(!result.occurrences[1].well_formed);
    assert_eq!(result.well_formed().count(), 1);
}

#[test]
fn test_unique_names_keep_first_appearance_order() {
    let result = scan("@[b]@ @[a]@\n@[ b ]@ @[c]@ @[a]@");
    assert_eq!(result.occurrences.len(), 5);
    assert_eq!(result.unique_names(), vec!["b", "a", "c"]);
}

#[test]
fn test_line_count() {
    assert_eq!(scan("").line_count, 1);
    assert_eq!(scan("a\nb").line_count, 2);
    assert_eq!(scan("a\nb\n").line_count, 3);
}

#[test]
fn test_well_formed_token_yields_one_trimmed_occurrence() {
    for input in ["name", " name", "name ", "  return_type  ", "x.y", "Weird*Chars"] {
        let text = format!("@[{}]@", input);
        let result = scan(&text);
        assert_eq!(result.occurrences.len(), 1, "input {:?}", input);
        assert_eq!(result.occurrences[0].name, input.trim());
    }
}
