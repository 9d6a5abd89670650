/// Pen position for the next word, in canvas pixels.
///
/// `y` is a baseline coordinate, matching where the font engine anchors
/// glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cursor {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Cursor> for (i32, i32) {
    fn from(cursor: Cursor) -> Self {
        (cursor.x, cursor.y)
    }
}

/// Where a single draw (or probe) of a string ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DrawnExtent {
    /// Horizontal pen position after the last glyph advance.
    pub x: i32,
    /// Baseline the string was drawn on.
    pub y: i32,
}

impl DrawnExtent {
    /// Build an extent from fractional font-engine coordinates.
    pub fn from_fractional(x: f32, y: f32) -> Self {
        Self {
            x: round_px(x),
            y: round_px(y),
        }
    }
}

/// Round a fractional pixel coordinate half away from zero.
///
/// Wrap decisions compare rounded pen positions, so every context that
/// reports a [`DrawnExtent`] must go through this one rule.
pub fn round_px(value: f32) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let rounded = value.round();
    if rounded >= i32::MAX as f32 {
        i32::MAX
    } else if rounded <= i32::MIN as f32 {
        i32::MIN
    } else {
        rounded as i32
    }
}
