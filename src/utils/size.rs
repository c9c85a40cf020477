//! Byte-count formatting.
//!
//! This module renders raw byte counts as the human-readable strings used in
//! the summary line and every listed entry (e.g. `"1.5 Kbytes"`, `"3.27
//! Gbytes"`, `"512 Bytes"`).

/// One kilobyte, binary.
const KB: u64 = 1024;

/// Scaled units, largest threshold first. A byte count is rendered with the
/// first unit whose divisor it reaches; below 1 Kbyte it stays an integer
/// number of `Bytes`.
const UNITS: &[(u64, &str)] = &[
    (KB.pow(4), "Tbytes"),
    (KB.pow(3), "Gbytes"),
    (KB.pow(2), "Mbytes"),
    (KB, "Kbytes"),
];

/// Format a byte count as a human-readable size string.
///
/// Scaled values are the byte count divided by the unit's divisor, rounded to
/// two decimal places by Rust's `{:.2}` float formatting (deterministic, ties
/// to even), with one trailing zero trimmed so whole and half values read
/// naturally.
///
/// # Examples
///
/// ```
/// # use sizescan::utils::format_size;
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1024), "1.0 Kbytes");
/// assert_eq!(format_size(1536), "1.5 Kbytes");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    for (divisor, unit) in UNITS {
        if bytes >= *divisor {
            let scaled = bytes as f64 / *divisor as f64;
            return format!("{} {unit}", render_scaled(scaled));
        }
    }

    format!("{bytes} Bytes")
}

/// Render a scaled value with two decimal places, trimming one trailing zero.
///
/// `1.0` renders as `"1.0"` (never `"1"`), `1.5` as `"1.5"`, `1.23` as
/// `"1.23"`.
fn render_scaled(value: f64) -> String {
    let mut rendered = format!("{value:.2}");
    if rendered.ends_with('0') {
        rendered.pop();
    }
    rendered
}
