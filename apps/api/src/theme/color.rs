//! Hex color arithmetic for deriving theme color variants.
//!
//! The darken/lighten semantics are load-bearing for interoperability with
//! previously generated stylesheets and must stay exactly as written:
//! `amt = round(2.55 * percent)`, per-channel add/subtract, clamp high at
//! >= 255 and low at < 1, lowercase zero-padded output.

/// True when `value` is a `#` followed by exactly six hex digits.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Darkens `hex` by `percent` (0..=100). Returns `None` on malformed input.
pub fn darken(hex: &str, percent: f32) -> Option<String> {
    shade(hex, -amount(percent))
}

/// Lightens `hex` by `percent` (0..=100). Returns `None` on malformed input.
pub fn lighten(hex: &str, percent: f32) -> Option<String> {
    shade(hex, amount(percent))
}

fn amount(percent: f32) -> i32 {
    (2.55 * percent).round() as i32
}

fn shade(hex: &str, amount: i32) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;

    let adjust = |channel: u32| -> u32 {
        let shifted = channel as i32 + amount;
        if shifted >= 255 {
            255
        } else if shifted < 1 {
            0
        } else {
            shifted as u32
        }
    };

    let r = adjust((value >> 16) & 0xff);
    let g = adjust((value >> 8) & 0xff);
    let b = adjust(value & 0xff);
    Some(format!("#{:06x}", (r << 16) | (g << 8) | b))
}
