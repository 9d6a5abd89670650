use image::Rgba;

/// Returned by [`parse_hex_color`] for anything it cannot read.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parse `RGB`, `RRGGBB` or `RRGGBBAA` hex, with an optional leading `#`.
///
/// Malformed input yields [`TRANSPARENT`] instead of an error, so a typo
/// renders invisible text. Use [`try_parse_hex_color`] to detect that.
pub fn parse_hex_color(hex: &str) -> Rgba<u8> {
    try_parse_hex_color(hex).unwrap_or(TRANSPARENT)
}

/// Strict form of [`parse_hex_color`]: `None` where it would fall back.
///
/// Three digits expand to six (`f0a` is `ff00aa`). Eight digits carry
/// alpha; any other length of six or more reads the first six digits as
/// opaque RGB.
pub fn try_parse_hex_color(hex: &str) -> Option<Rgba<u8>> {
    let hex = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    let expanded;
    let digits = match *hex {
        [r, g, b] => {
            expanded = [r, r, g, g, b, b];
            &expanded[..]
        }
        _ => hex,
    };
    if digits.len() < 6 {
        return None;
    }

    let r = hex_pair(digits[0], digits[1])?;
    let g = hex_pair(digits[2], digits[3])?;
    let b = hex_pair(digits[4], digits[5])?;
    let a = if digits.len() == 8 {
        hex_pair(digits[6], digits[7])?
    } else {
        u8::MAX
    };
    Some(Rgba([r, g, b, a]))
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = char::from(hi).to_digit(16)?;
    let lo = char::from(lo).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}
