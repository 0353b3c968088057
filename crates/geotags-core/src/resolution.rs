// crates/geotags-core/src/resolution.rs

//! Decimal-degree resolution helpers.
//!
//! Coordinates are emitted as a ladder of truncated values, one per number of
//! fractional digits. Truncation goes toward zero and never rounds, so the
//! result follows the binary representation of the input: `47.1234` kept at
//! four digits is `47.1233`.

/// Hard ceiling on fractional digits, whatever `max` a caller asks for.
///
/// An f64 carries at most 17 significant digits, and `10^r` overflows to
/// infinity past `r = 308`, which would turn truncation into `NaN`.
pub const MAX_SUPPORTED_RESOLUTION: u32 = 17;

/// Number of fractional digits to keep for `value`, capped at `max` and at
/// [`MAX_SUPPORTED_RESOLUTION`].
///
/// Whole numbers report `1`. Digits are counted in the shortest decimal form
/// that round-trips to `value`.
pub fn calculate_resolution(value: f64, max: u32) -> u32 {
    if value.fract() == 0.0 {
        return 1;
    }
    let digits = format_coordinate(value)
        .split_once('.')
        .map(|(_, frac)| frac.len() as u32)
        .unwrap_or(1);
    digits.min(max).min(MAX_SUPPORTED_RESOLUTION)
}

/// Cut `value` down to `resolution` fractional digits, toward zero.
pub fn truncate_to_resolution(value: f64, resolution: u32) -> f64 {
    let factor = 10f64.powi(resolution.min(MAX_SUPPORTED_RESOLUTION) as i32);
    (value * factor).trunc() / factor
}

/// Shortest decimal form of a coordinate (`47.0` prints as `47`).
pub fn format_coordinate(value: f64) -> String {
    // `Display` for f64 is the shortest round-trip form and never uses
    // exponent notation.
    let s = value.to_string();
    if s == "-0" {
        "0".to_owned()
    } else {
        s
    }
}

/// Formatted truncations of `value` from full resolution down to one digit.
///
/// ```rust
/// use geotags_core::resolution::resolution_ladder;
///
/// assert_eq!(resolution_ladder(47.5636, 10), vec!["47.5636", "47.563", "47.56", "47.5"]);
/// assert_eq!(resolution_ladder(47.0, 10), vec!["47"]);
/// ```
pub fn resolution_ladder(value: f64, max: u32) -> Vec<String> {
    let full = calculate_resolution(value, max).max(1);
    (1..=full)
        .rev()
        .map(|r| format_coordinate(truncate_to_resolution(value, r)))
        .collect()
}
