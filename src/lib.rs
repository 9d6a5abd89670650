//! Overlay word-wrapped text onto raster images.
//!
//! An [`EditorSession`] owns the source image bytes and the canvas produced
//! by its last successful overlay. Each [`EditorSession::generate_text`]
//! call lays a [`LayoutRequest`] out on top of that canvas, so repeated
//! calls stack captions. [`overlay_text`] is the same operation on an
//! explicitly passed canvas.
//!
//! ```no_run
//! use img_caption::{parse_hex_color, EditorSession, LayoutRequest};
//!
//! # fn main() -> Result<(), img_caption::OverlayError> {
//! let mut session = EditorSession::new(std::fs::read("photo.png").unwrap_or_default());
//! let mut request = LayoutRequest::new(
//!     std::fs::read("font.ttf").unwrap_or_default(),
//!     "Caption text that wraps at the canvas edge",
//! );
//! request.font_color = parse_hex_color("#fff");
//! request.start_y = 40;
//! let cursor = session.generate_text(&request)?;
//! let png = session.write_to_bytes("png")?;
//! # let _ = (cursor, png);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod color;
mod error;
mod job;
mod overlay;
mod pipeline;
mod request;
mod session;

pub use color::{parse_hex_color, try_parse_hex_color, TRANSPARENT};
pub use error::OverlayError;
pub use job::{CaptionSpec, JobError, JobReport, OverlayJob};
pub use overlay::{overlay_onto, overlay_text, Overlay};
pub use pipeline::{decode, encode, OutputFormat, DEFAULT_JPEG_QUALITY};
pub use request::LayoutRequest;
pub use session::EditorSession;

pub use image::{Rgba, RgbaImage};
pub use img_caption_glyph::{FontFace, FontParseError, GlyphStyle, DEFAULT_DPI};
pub use img_caption_layout::{Cursor, LayoutOutcome, WrapConfig, DEFAULT_LINE_HEIGHT_PX};
