//! Display formatting for point values.
//!
//! Point totals are doubles, but the UI contract renders whole values without
//! a decimal point and fractional values with exactly one decimal place.

/// Format a point value for display: `10` stays `"10"`, `7.5` stays `"7.5"`.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{}", points as i64)
    } else {
        format!("{points:.1}")
    }
}
