use crate::geometry::{Cursor, DrawnExtent};

/// Line advance used when a request leaves `line_height` at zero.
pub const DEFAULT_LINE_HEIGHT_PX: i32 = 30;

/// Appended to every word before it is probed or drawn.
pub const WORD_SEPARATOR: char = ' ';

/// Something that can draw a string at a pen position and report where the
/// pen ended up.
///
/// The layout engine holds two of these per run. Implementations must give
/// the probe and commit sides identical metrics for identical input, or wrap
/// decisions stop matching what gets drawn.
pub trait DrawContext {
    /// Draw `text` with its baseline-origin at `at`.
    fn draw_word(&mut self, text: &str, at: Cursor) -> DrawnExtent;
}

impl<T> DrawContext for &mut T
where
    T: DrawContext + ?Sized,
{
    fn draw_word(&mut self, text: &str, at: Cursor) -> DrawnExtent {
        (**self).draw_word(text, at)
    }
}

/// Wrap parameters as supplied by a caller. Zero means "use the default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrapConfig {
    /// Pen x for the first word and for every wrapped line.
    pub start_x: i32,
    /// Baseline y of the first line.
    pub start_y: i32,
    /// A probe ending at or past this x wraps. Zero: canvas width.
    pub line_wrap_x: i32,
    /// Lines whose baseline falls below this y are dropped. Zero: canvas height.
    pub line_wrap_y: i32,
    /// Vertical advance per wrap. Zero: [`DEFAULT_LINE_HEIGHT_PX`].
    pub line_height: i32,
}

impl WrapConfig {
    /// Start at `(x, y)` with every boundary left at its default.
    pub fn starting_at(x: i32, y: i32) -> Self {
        Self {
            start_x: x,
            start_y: y,
            ..Self::default()
        }
    }

    /// Apply the zero-means-default rules against a canvas size.
    pub fn resolve(self, canvas_width: u32, canvas_height: u32) -> WrapBounds {
        WrapBounds {
            start: Cursor::new(self.start_x, self.start_y),
            wrap_x: non_zero_or(self.line_wrap_x, clamp_dimension(canvas_width)),
            wrap_y: non_zero_or(self.line_wrap_y, clamp_dimension(canvas_height)),
            line_height: non_zero_or(self.line_height, DEFAULT_LINE_HEIGHT_PX),
        }
    }
}

fn non_zero_or(value: i32, fallback: i32) -> i32 {
    if value != 0 {
        value
    } else {
        fallback
    }
}

fn clamp_dimension(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Effective boundaries for one layout run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapBounds {
    pub start: Cursor,
    pub wrap_x: i32,
    pub wrap_y: i32,
    pub line_height: i32,
}

/// Layout failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The text to lay out was empty.
    EmptyText,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "text can't be empty"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Result of a completed layout run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutOutcome {
    /// Pen position after the last committed word.
    pub cursor: Cursor,
    /// Words drawn on the commit context.
    pub committed_words: usize,
    /// Words skipped because they fell below the vertical boundary.
    pub dropped_words: usize,
    /// Number of times the pen moved to a new line.
    pub line_breaks: usize,
}

/// Split text into words on runs of Unicode whitespace.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Greedy measure-then-commit word wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutEngine {
    bounds: WrapBounds,
}

impl LayoutEngine {
    /// Create an engine for already-resolved bounds.
    pub fn new(bounds: WrapBounds) -> Self {
        Self { bounds }
    }

    /// Resolve `cfg` against a canvas size and create an engine for it.
    pub fn for_canvas(cfg: WrapConfig, canvas_width: u32, canvas_height: u32) -> Self {
        Self::new(cfg.resolve(canvas_width, canvas_height))
    }

    /// Bounds this engine lays out against.
    pub fn bounds(&self) -> WrapBounds {
        self.bounds
    }

    /// Lay out `text`, probing every word on `probe` and drawing the ones
    /// that stay above the vertical boundary on `commit`.
    ///
    /// The wrap check compares the probe's rounded pen end against
    /// `wrap_x`. A word that wraps is then drawn at the start of the new
    /// line even if it is wider than the line itself. Once the pen's
    /// baseline passes `wrap_y` the run stops and every remaining word is
    /// dropped; the returned cursor is the last committed position.
    pub fn run<P, C>(
        &self,
        text: &str,
        probe: &mut P,
        commit: &mut C,
    ) -> Result<LayoutOutcome, LayoutError>
    where
        P: DrawContext + ?Sized,
        C: DrawContext + ?Sized,
    {
        if text.is_empty() {
            return Err(LayoutError::EmptyText);
        }

        let bounds = self.bounds;
        let mut outcome = LayoutOutcome {
            cursor: bounds.start,
            ..LayoutOutcome::default()
        };
        let mut run = String::with_capacity(32);
        let mut tokens = words(text);

        while let Some(word) = tokens.next() {
            run.clear();
            run.push_str(word);
            run.push(WORD_SEPARATOR);

            let mut cursor = outcome.cursor;
            let probed = probe.draw_word(&run, cursor);
            if probed.x >= bounds.wrap_x {
                log::trace!(
                    "wrap before {:?}: probe ended at x={} (wrap_x={})",
                    word,
                    probed.x,
                    bounds.wrap_x
                );
                cursor = Cursor::new(bounds.start.x, cursor.y.saturating_add(bounds.line_height));
                outcome.line_breaks += 1;
            }

            if cursor.y > bounds.wrap_y {
                outcome.dropped_words = 1 + tokens.by_ref().count();
                log::debug!(
                    "baseline y={} passed wrap_y={}, dropping {} word(s)",
                    cursor.y,
                    bounds.wrap_y,
                    outcome.dropped_words
                );
                break;
            }

            let drawn = commit.draw_word(&run, cursor);
            outcome.cursor = Cursor::new(drawn.x, cursor.y);
            outcome.committed_words += 1;
        }

        log::debug!(
            "layout done: committed={} dropped={} breaks={} cursor=({}, {})",
            outcome.committed_words,
            outcome.dropped_words,
            outcome.line_breaks,
            outcome.cursor.x,
            outcome.cursor.y
        );
        Ok(outcome)
    }
}
