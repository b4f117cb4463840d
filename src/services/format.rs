/// Rounds a value to two decimal places unless it is already whole.
///
/// Conversion results go through this before they are formatted or handed to
/// the inflector, so a product like `10 × 1.1` collapses back to a whole `11`.
pub fn round_amount(value: f64) -> f64 {
    if value.fract() == 0.0 {
        value
    } else {
        (value * 100.0).round() / 100.0
    }
}

/// Renders a whole amount without a decimal point, anything else with
/// exactly two decimals.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
