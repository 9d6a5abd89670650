use ab_glyph::{Font, OutlinedGlyph, PxScale};
use embedded_graphics::{geometry::Point, primitives::Rectangle};
use img_caption_layout::{Cursor, DrawContext, DrawnExtent};

use crate::face::{FontFace, FontParseError, GlyphStyle};
use crate::target::GlyphTarget;

/// A font bound to a drawing target.
///
/// The context keeps no layout state: every `draw_word` call starts at the
/// position it is given, and repeated calls accumulate on the target.
pub struct GlyphContext<T> {
    target: T,
    face: FontFace,
    style: GlyphStyle,
    scale: PxScale,
    clip: Rectangle,
}

impl<T> core::fmt::Debug for GlyphContext<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphContext")
            .field("face", &self.face)
            .field("style", &self.style)
            .field("clip", &self.clip)
            .finish()
    }
}

impl<T> GlyphContext<T>
where
    T: GlyphTarget,
{
    /// Bind an already parsed face to `target`.
    pub fn new(target: T, face: FontFace, style: GlyphStyle) -> Self {
        let scale = face.px_scale(&style);
        let clip = target.bounds();
        Self {
            target,
            face,
            style,
            scale,
            clip,
        }
    }

    /// Parse `font_data` and bind it to `target`.
    pub fn from_font_data(
        target: T,
        font_data: &[u8],
        style: GlyphStyle,
    ) -> Result<Self, FontParseError> {
        let face = FontFace::parse(font_data)?;
        Ok(Self::new(target, face, style))
    }

    pub fn style(&self) -> &GlyphStyle {
        &self.style
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Region outside of which nothing is drawn.
    pub fn clip(&self) -> Rectangle {
        self.clip
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Release the target, keeping everything drawn on it.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Draw `text` with its first glyph's origin on the baseline at `at`.
    pub fn draw_text(&mut self, text: &str, at: Cursor) -> DrawnExtent {
        let baseline = at.y as f32;
        let end_x = if self.target.rasterizes() {
            let face = &self.face;
            let mut outlines = Vec::with_capacity(text.len());
            let end_x = face.walk_glyphs(self.scale, text, at.x as f32, baseline, |glyph| {
                if let Some(outlined) = face.font().outline_glyph(glyph) {
                    outlines.push(outlined);
                }
            });
            for outlined in &outlines {
                self.paint(outlined);
            }
            end_x
        } else {
            self.face
                .walk_glyphs(self.scale, text, at.x as f32, baseline, |_| {})
        };
        DrawnExtent::from_fractional(end_x, baseline)
    }

    fn paint(&mut self, outlined: &OutlinedGlyph) {
        let bounds = outlined.px_bounds();
        let origin_x = bounds.min.x as i32;
        let origin_y = bounds.min.y as i32;
        let clip = self.clip;
        let color = self.style.color;
        let target = &mut self.target;
        outlined.draw(|gx, gy, coverage| {
            let at = Point::new(origin_x + gx as i32, origin_y + gy as i32);
            if clip.contains(at) {
                target.blend(at, color, coverage);
            }
        });
    }
}

impl<T> DrawContext for GlyphContext<T>
where
    T: GlyphTarget,
{
    fn draw_word(&mut self, text: &str, at: Cursor) -> DrawnExtent {
        self.draw_text(text, at)
    }
}
