use image::RgbaImage;
use img_caption_layout::{Cursor, LayoutOutcome};

use crate::error::OverlayError;
use crate::overlay::{overlay_onto, Overlay};
use crate::pipeline::{self, OutputFormat};
use crate::request::LayoutRequest;

/// Source image plus the canvas built up by successive overlays.
///
/// The first successful [`generate_text`](Self::generate_text) decodes the
/// source; later calls draw over the previous result. Sessions are not
/// synchronized: share one across threads only behind a lock.
#[derive(Clone, Default)]
pub struct EditorSession {
    source: Vec<u8>,
    output: Option<RgbaImage>,
}

impl core::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EditorSession")
            .field("source_len", &self.source.len())
            .field("output", &self.output.as_ref().map(RgbaImage::dimensions))
            .finish()
    }
}

impl EditorSession {
    /// Session over encoded PNG/JPEG bytes. Nothing is decoded yet.
    pub fn new(source_image: impl Into<Vec<u8>>) -> Self {
        Self {
            source: source_image.into(),
            output: None,
        }
    }

    /// Session whose first overlay draws on `canvas` instead of decoding.
    pub fn from_canvas(canvas: RgbaImage) -> Self {
        Self {
            source: Vec::new(),
            output: Some(canvas),
        }
    }

    pub fn source_image(&self) -> &[u8] {
        &self.source
    }

    /// Canvas from the last successful overlay, if any.
    pub fn output(&self) -> Option<&RgbaImage> {
        self.output.as_ref()
    }

    pub fn into_output(self) -> Option<RgbaImage> {
        self.output
    }

    /// Lay `request` out over the current canvas and return the final cursor.
    pub fn generate_text(&mut self, request: &LayoutRequest) -> Result<Cursor, OverlayError> {
        self.overlay(request).map(|outcome| outcome.cursor)
    }

    /// [`generate_text`](Self::generate_text) with full layout statistics.
    pub fn overlay(&mut self, request: &LayoutRequest) -> Result<LayoutOutcome, OverlayError> {
        if request.text.is_empty() {
            return Err(OverlayError::EmptyText);
        }

        let base = match &self.output {
            Some(previous) => previous.clone(),
            None => pipeline::decode(&self.source)?,
        };
        let Overlay { canvas, outcome } = overlay_onto(base, request)?;
        self.output = Some(canvas);
        Ok(outcome)
    }

    /// Encode the current canvas.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>, OverlayError> {
        let canvas = self.output.as_ref().ok_or(OverlayError::NoOutput)?;
        pipeline::encode(canvas, format)
    }

    /// Encode the current canvas as `"png"` or `"jpeg"`.
    ///
    /// A missing canvas is reported before an unknown format.
    pub fn write_to_bytes(&self, format: &str) -> Result<Vec<u8>, OverlayError> {
        if self.output.is_none() {
            return Err(OverlayError::NoOutput);
        }
        self.encode(format.parse()?)
    }
}
