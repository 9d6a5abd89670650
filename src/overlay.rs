use image::RgbaImage;
use img_caption_glyph::{FontFace, GlyphContext, MeasureTarget};
use img_caption_layout::{Cursor, LayoutEngine, LayoutOutcome};

use crate::error::OverlayError;
use crate::request::LayoutRequest;

/// A freshly drawn canvas and how its text was laid out.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub canvas: RgbaImage,
    pub outcome: LayoutOutcome,
}

impl Overlay {
    /// Pen position after the last committed word.
    pub fn cursor(&self) -> Cursor {
        self.outcome.cursor
    }
}

/// Draw `request` over a copy of `base`. `base` itself is not modified.
pub fn overlay_text(base: &RgbaImage, request: &LayoutRequest) -> Result<Overlay, OverlayError> {
    if request.text.is_empty() {
        return Err(OverlayError::EmptyText);
    }
    overlay_onto(base.clone(), request)
}

/// Draw `request` onto `canvas`, consuming it.
///
/// Words are probed against a measure-only shadow of the canvas bounds and
/// only the ones that survive wrapping and vertical truncation are drawn.
/// On error the canvas is dropped and nothing is returned.
pub fn overlay_onto(canvas: RgbaImage, request: &LayoutRequest) -> Result<Overlay, OverlayError> {
    if request.text.is_empty() {
        return Err(OverlayError::EmptyText);
    }

    let face = FontFace::parse(&request.font_data)?;
    let style = request.glyph_style();
    let (width, height) = canvas.dimensions();
    let engine = LayoutEngine::for_canvas(request.wrap_config(), width, height);
    log::debug!(
        "overlay {}x{} canvas: {:.1}pt, bounds {:?}",
        width,
        height,
        style.size_pt,
        engine.bounds()
    );

    let mut probe = GlyphContext::new(MeasureTarget::matching(&canvas), face.clone(), style);
    let mut commit = GlyphContext::new(canvas, face, style);
    let outcome = engine.run(&request.text, &mut probe, &mut commit)?;
    if outcome.dropped_words > 0 {
        log::debug!(
            "{} word(s) fell below y={} and were not drawn",
            outcome.dropped_words,
            engine.bounds().wrap_y
        );
    }

    Ok(Overlay {
        canvas: commit.into_target(),
        outcome,
    })
}
