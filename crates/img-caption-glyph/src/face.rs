use ab_glyph::{point, Font, FontArc, Glyph, GlyphId, PxScale, ScaleFont};
use image::Rgba;

/// Resolution used to turn point sizes into pixels.
pub const DEFAULT_DPI: f32 = 150.0;

/// Point size used when a style is built with `Default`.
pub const DEFAULT_FONT_SIZE_PT: f32 = 12.0;

const POINTS_PER_INCH: f32 = 72.0;

/// Size, color and resolution shared by every word a context draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    /// Font size in points.
    pub size_pt: f32,
    /// Uniform fill color for glyph coverage.
    pub color: Rgba<u8>,
    /// Dots per inch for the point-to-pixel conversion.
    pub dpi: f32,
}

impl GlyphStyle {
    /// Style at `size_pt` in `color`, at [`DEFAULT_DPI`].
    pub fn new(size_pt: f32, color: Rgba<u8>) -> Self {
        Self {
            size_pt,
            color,
            dpi: DEFAULT_DPI,
        }
    }

    /// Pixels per em for this style.
    pub fn px_per_em(&self) -> f32 {
        self.size_pt * self.dpi / POINTS_PER_INCH
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE_PT, Rgba([0, 0, 0, 255]))
    }
}

/// Font data could not be parsed as a TrueType/OpenType face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontParseError {
    /// Length of the rejected blob.
    pub data_len: usize,
}

impl core::fmt::Display for FontParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "malformed font data ({} bytes)", self.data_len)
    }
}

impl std::error::Error for FontParseError {}

/// A parsed font, cheap to clone and share between contexts.
#[derive(Clone)]
pub struct FontFace {
    font: FontArc,
}

impl core::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontFace")
            .field("glyph_count", &self.font.glyph_count())
            .field("units_per_em", &self.font.units_per_em())
            .finish()
    }
}

impl FontFace {
    /// Parse a TrueType/OpenType blob.
    pub fn parse(data: &[u8]) -> Result<Self, FontParseError> {
        let font = FontArc::try_from_vec(data.to_vec()).map_err(|_| FontParseError {
            data_len: data.len(),
        })?;
        log::debug!(
            "parsed font face: {} bytes, {} glyphs",
            data.len(),
            font.glyph_count()
        );
        Ok(Self { font })
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    /// `ab_glyph` scale for `style`.
    ///
    /// `PxScale` is the ascent-to-descent height, so the em size derived
    /// from the point size is stretched by the face's height/em ratio.
    pub fn px_scale(&self, style: &GlyphStyle) -> PxScale {
        let px_per_em = style.px_per_em();
        let height = self.font.height_unscaled();
        match self.font.units_per_em() {
            Some(units_per_em) if units_per_em > 0.0 && height > 0.0 => {
                PxScale::from(px_per_em * height / units_per_em)
            }
            _ => PxScale::from(px_per_em),
        }
    }

    /// Position every glyph of `text` starting at `(x, baseline)` and hand
    /// each one to `visit`. Returns the pen x after the last advance.
    pub(crate) fn walk_glyphs<F>(
        &self,
        scale: PxScale,
        text: &str,
        x: f32,
        baseline: f32,
        mut visit: F,
    ) -> f32
    where
        F: FnMut(Glyph),
    {
        let scaled = self.font.as_scaled(scale);
        let mut caret = x;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            visit(id.with_scale_and_position(scale, point(caret, baseline)));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }
        caret
    }
}
