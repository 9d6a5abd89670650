//! Font contexts that draw `img-caption` layout words with `ab_glyph`.
//!
//! A [`GlyphContext`] binds a parsed [`FontFace`], a [`GlyphStyle`] and a
//! [`GlyphTarget`]. Bound to an `RgbaImage` it rasterizes; bound to a
//! [`MeasureTarget`] it only walks glyph advances, which is what the layout
//! engine's probe side needs.

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

mod context;
mod face;
mod target;

pub use context::GlyphContext;
pub use face::{FontFace, FontParseError, GlyphStyle, DEFAULT_DPI, DEFAULT_FONT_SIZE_PT};
pub use target::{blend_over, GlyphTarget, MeasureTarget};
