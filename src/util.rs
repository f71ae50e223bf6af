/// `part / whole * 100`, or `None` when there is nothing to divide by
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    match whole {
        positive if positive > 0 => Some(part as f64 / whole as f64 * 100.0),
        _ => None,
    }
}

/// Rounds half away from zero to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
