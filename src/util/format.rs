//! Display formatting and form-input parsing for the plan page.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use floorplan::viewport::Point;

/// Absolute-position style for the tooltip, in container-local pixels.
#[must_use]
pub fn tooltip_style(position: Point) -> String {
    format!("left: {:.0}px; top: {:.0}px;", position.x, position.y)
}

/// `<option>` value for a dimension bucket. `f64` display round-trips exactly.
#[must_use]
pub fn bucket_value(area: f64) -> String {
    area.to_string()
}

/// Inverse of [`bucket_value`]; the empty option means "any size".
#[must_use]
pub fn parse_bucket(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<f64>() {
        Ok(area) if area.is_finite() && area > 0.0 => Some(area),
        _ => None,
    }
}

/// Parse the max-price input. Accepts a comma decimal mark; blank clears the filter.
#[must_use]
pub fn parse_price_input(value: &str) -> Option<f64> {
    let value = value.trim().replace(',', ".");
    if value.is_empty() {
        return None;
    }
    match value.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Some(price),
        _ => None,
    }
}

/// `"1 unit selected"` / `"3 units selected"`.
#[must_use]
pub fn selection_count_label(count: usize) -> String {
    if count == 1 {
        "1 unit selected".to_owned()
    } else {
        format!("{count} units selected")
    }
}
