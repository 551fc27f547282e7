//! Result display formatting
//!
//! A result is rendered with `f64`'s default decimal formatting; once that
//! string would no longer fit a 10-character display it switches to
//! exponential notation with 5 fractional digits. This is an overflow
//! *display* policy only: precision beyond a double is neither guaranteed
//! nor preserved.

/// Width of the display before exponential notation kicks in
pub const MAX_PLAIN_WIDTH: usize = 10;

/// Formats a computed value as the string shown in the entry line.
///
/// Infinities and NaN format as `f64`'s own representations (`inf`,
/// `-inf`, `NaN`); they are short enough to never hit the exponential
/// branch.
#[must_use]
pub fn format_value(value: f64) -> String {
    let plain = value.to_string();
    if plain.len() > MAX_PLAIN_WIDTH {
        format!("{value:.5e}")
    } else {
        plain
    }
}
