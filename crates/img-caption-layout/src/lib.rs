//! Word-wrap layout engine for `img-caption`.
//!
//! The engine never touches pixels itself. It asks two [`DrawContext`]s to
//! draw each word: a probe context whose output is thrown away, used only to
//! learn where the word would end, and a commit context that receives the
//! words that survive the wrap and truncation decisions.

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

mod geometry;
mod wrap_layout;

pub use geometry::{round_px, Cursor, DrawnExtent};
pub use wrap_layout::{
    words, DrawContext, LayoutEngine, LayoutError, LayoutOutcome, WrapBounds, WrapConfig,
    DEFAULT_LINE_HEIGHT_PX, WORD_SEPARATOR,
};
