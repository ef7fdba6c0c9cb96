/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimal places, exact halves to even.
///
/// Goes through `{:.2}`, which rounds the exact binary value, so `3.125`
/// becomes `3.12` and a value stored just below `2.675` becomes `2.67`. The
/// summary text is formatted the same way.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Renders an aspect identifier for display, e.g. `work_life_balance` → `work life balance`.
pub fn display_aspect(aspect: &str) -> String {
    aspect.replace('_', " ")
}
