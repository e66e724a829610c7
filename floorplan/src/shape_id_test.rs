use std::collections::HashSet;

use super::*;

struct Ids(HashSet<&'static str>);

impl ShapeLookup for Ids {
    type Element = &'static str;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.0.get(id).copied()
    }
}

fn ids(list: &[&'static str]) -> Ids {
    Ids(list.iter().copied().collect())
}

// =============================================================
// variants_of
// =============================================================

#[test]
fn lowercase_input_includes_uppercase() {
    let variants = variants_of("t12");
    assert_eq!(variants[0], "t12");
    assert!(variants.contains(&"T12".to_owned()));
}

#[test]
fn padded_variants_for_prefixed_number() {
    assert_eq!(variants_of("T12"), vec!["T12", "T012"]);
    assert_eq!(variants_of("t5"), vec!["t5", "T5", "T05", "T005"]);
}

#[test]
fn zero_padded_input_normalizes_to_same_padded_forms() {
    let from_padded = variants_of("T012");
    let from_plain = variants_of("T12");
    for expected in ["T12", "T012"] {
        assert!(from_padded.contains(&expected.to_owned()), "{expected}");
        assert!(from_plain.contains(&expected.to_owned()), "{expected}");
    }
}

#[test]
fn whitespace_between_prefix_and_digits() {
    let variants = variants_of("  box 007 ");
    assert_eq!(variants[0], "box 007");
    assert!(variants.contains(&"BOX7".to_owned()));
    assert!(variants.contains(&"BOX07".to_owned()));
    assert!(variants.contains(&"BOX007".to_owned()));
}

#[test]
fn all_zero_digits_keep_one_zero() {
    assert_eq!(variants_of("A000"), vec!["A000", "A0", "A00"]);
}

#[test]
fn non_prefixed_ids_get_only_literal_and_uppercase() {
    assert_eq!(variants_of("unit-a"), vec!["unit-a", "UNIT-A"]);
    assert_eq!(variants_of("42"), vec!["42"]);
}

#[test]
fn empty_input_has_no_variants() {
    assert!(variants_of("").is_empty());
    assert!(variants_of("   ").is_empty());
}

// =============================================================
// resolve_element
// =============================================================

#[test]
fn resolves_case_mismatch() {
    let doc = ids(&["T12", "T13"]);
    assert_eq!(resolve_element(&doc, "t12"), Some(("T12".to_owned(), "T12")));
}

#[test]
fn resolves_padding_mismatch() {
    let doc = ids(&["T012"]);
    assert_eq!(resolve_element(&doc, "T12").map(|(id, _)| id), Some("T012".to_owned()));
}

#[test]
fn literal_match_wins_over_later_variants() {
    let doc = ids(&["t12", "T12"]);
    assert_eq!(resolve_element(&doc, "t12").map(|(id, _)| id), Some("t12".to_owned()));
}

#[test]
fn no_match_is_none() {
    let doc = ids(&["X1"]);
    assert!(resolve_element(&doc, "T12").is_none());
}
