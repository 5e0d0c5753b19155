//! Small shared numeric helpers.

/// `part / whole * 100`, or 0 when the denominator is not positive.
///
/// Every percentage metric in this crate defines the zero-denominator case
/// as 0 rather than NaN; this helper is the single place that rule lives.
pub(crate) fn pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// `num / den`, or 0 when the denominator is not positive.
pub(crate) fn safe_div(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}
