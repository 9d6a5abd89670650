use image::Rgba;
use img_caption_glyph::{GlyphStyle, DEFAULT_DPI, DEFAULT_FONT_SIZE_PT};
use img_caption_layout::WrapConfig;

/// Everything one overlay call needs.
///
/// Wrap fields follow the zero-means-default convention of [`WrapConfig`]:
/// `line_wrap_x` and `line_wrap_y` fall back to the canvas size and
/// `line_height` to 30px.
#[derive(Clone, PartialEq)]
pub struct LayoutRequest {
    /// Font size in points, rendered at 150 DPI.
    pub font_size_pt: f32,
    /// TrueType/OpenType font blob.
    pub font_data: Vec<u8>,
    pub font_color: Rgba<u8>,
    /// Pen x of the first word and of every wrapped line.
    pub start_x: i32,
    /// Baseline y of the first line.
    pub start_y: i32,
    pub line_wrap_x: i32,
    pub line_wrap_y: i32,
    pub line_height: i32,
    /// UTF-8 text; must not be empty.
    pub text: String,
}

impl core::fmt::Debug for LayoutRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutRequest")
            .field("font_size_pt", &self.font_size_pt)
            .field("font_data_len", &self.font_data.len())
            .field("font_color", &self.font_color)
            .field("start_x", &self.start_x)
            .field("start_y", &self.start_y)
            .field("line_wrap_x", &self.line_wrap_x)
            .field("line_wrap_y", &self.line_wrap_y)
            .field("line_height", &self.line_height)
            .field("text", &self.text)
            .finish()
    }
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            font_data: Vec::new(),
            font_color: Rgba([0, 0, 0, 255]),
            start_x: 0,
            start_y: 0,
            line_wrap_x: 0,
            line_wrap_y: 0,
            line_height: 0,
            text: String::new(),
        }
    }
}

impl LayoutRequest {
    /// Request drawing `text` in `font_data` with every other field defaulted.
    pub fn new(font_data: impl Into<Vec<u8>>, text: impl Into<String>) -> Self {
        Self {
            font_data: font_data.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn wrap_config(&self) -> WrapConfig {
        WrapConfig {
            start_x: self.start_x,
            start_y: self.start_y,
            line_wrap_x: self.line_wrap_x,
            line_wrap_y: self.line_wrap_y,
            line_height: self.line_height,
        }
    }

    pub fn glyph_style(&self) -> GlyphStyle {
        GlyphStyle {
            size_pt: self.font_size_pt,
            color: self.font_color,
            dpi: DEFAULT_DPI,
        }
    }
}
