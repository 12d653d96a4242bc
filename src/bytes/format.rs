use crate::bytes::*;

const UNITS: [&str; 6] = [B, KB, MB, GB, TB, PB];
const BASE: f64 = 1024.0;

/// Formats a byte count with one decimal digit and a binary-scaled unit,
/// e.g. `1536` becomes `"1.5 KB"`.
///
/// The scale stops at PB, so very large values may print as `>= 1024 PB`.
pub fn format_size(bytes: u128) -> String {
    let mut value = bytes as f64;
    let mut unit = UNITS[0];

    for &next_unit in &UNITS[1..] {
        if value < BASE {
            break;
        }
        value /= BASE;
        unit = next_unit;
    }

    format!("{:.1} {}", value, unit)
}
