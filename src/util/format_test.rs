#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn tooltip_style_rounds_to_pixels() {
    assert_eq!(tooltip_style(Point::new(112.4, 61.6)), "left: 112px; top: 62px;");
}

#[test]
fn bucket_values_round_trip() {
    for area in [2.0, 3.5, 0.3, 12.25] {
        assert_eq!(parse_bucket(&bucket_value(area)), Some(area));
    }
}

#[test]
fn blank_or_invalid_bucket_is_no_filter() {
    assert_eq!(parse_bucket(""), None);
    assert_eq!(parse_bucket("abc"), None);
    assert_eq!(parse_bucket("0"), None);
}

#[test]
fn price_input_accepts_comma_decimal() {
    assert_eq!(parse_price_input("79,90"), Some(79.9));
    assert_eq!(parse_price_input(" 80 "), Some(80.0));
}

#[test]
fn price_input_rejects_negative_and_blank() {
    assert_eq!(parse_price_input("-5"), None);
    assert_eq!(parse_price_input(""), None);
    assert_eq!(parse_price_input("cheap"), None);
}

#[test]
fn selection_count_pluralizes() {
    assert_eq!(selection_count_label(0), "0 units selected");
    assert_eq!(selection_count_label(1), "1 unit selected");
    assert_eq!(selection_count_label(4), "4 units selected");
}
