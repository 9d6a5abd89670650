use std::collections::HashMap;

use img_caption_layout::{
    Cursor, DrawContext, DrawnExtent, LayoutEngine, LayoutError, WrapConfig,
    DEFAULT_LINE_HEIGHT_PX,
};

/// Proportional fake font: per-char advances in tenths of a pixel, so pen
/// positions go through the same rounding real contexts use.
struct TableContext {
    advances_tenths: HashMap<char, i32>,
    default_tenths: i32,
    calls: Vec<(String, Cursor)>,
}

impl TableContext {
    fn new(default_tenths: i32) -> Self {
        Self {
            advances_tenths: HashMap::new(),
            default_tenths,
            calls: Vec::new(),
        }
    }

    fn with(mut self, ch: char, tenths: i32) -> Self {
        self.advances_tenths.insert(ch, tenths);
        self
    }

    fn drawn_words(&self) -> Vec<&str> {
        self.calls.iter().map(|(text, _)| text.as_str()).collect()
    }
}

impl DrawContext for TableContext {
    fn draw_word(&mut self, text: &str, at: Cursor) -> DrawnExtent {
        self.calls.push((text.to_string(), at));
        let width_tenths: i32 = text
            .chars()
            .map(|ch| {
                self.advances_tenths
                    .get(&ch)
                    .copied()
                    .unwrap_or(self.default_tenths)
            })
            .sum();
        DrawnExtent::from_fractional(at.x as f32 + width_tenths as f32 / 10.0, at.y as f32)
    }
}

fn contexts() -> (TableContext, TableContext) {
    (
        TableContext::new(80).with(' ', 40),
        TableContext::new(80).with(' ', 40),
    )
}

#[test]
fn wide_boundary_keeps_everything_on_the_start_line() {
    let (mut probe, mut commit) = contexts();
    let engine = LayoutEngine::for_canvas(WrapConfig::starting_at(12, 40), 10_000, 200);

    let outcome = engine
        .run("the quick brown fox jumps over the lazy dog", &mut probe, &mut commit)
        .expect("layout");

    assert_eq!(outcome.cursor.y, 40);
    assert_eq!(outcome.line_breaks, 0);
    assert_eq!(outcome.committed_words, 9);
    // 35 letters * 8px + 9 spaces * 4px.
    assert_eq!(outcome.cursor.x, 12 + 35 * 8 + 9 * 4);
}

#[test]
fn overlong_first_word_wraps_then_commits_on_the_new_line() {
    let (mut probe, mut commit) = contexts();
    let cfg = WrapConfig {
        start_x: 10,
        start_y: 30,
        line_wrap_x: 50,
        ..WrapConfig::default()
    };
    let engine = LayoutEngine::for_canvas(cfg, 400, 400);

    let outcome = engine
        .run("extraordinarily wide", &mut probe, &mut commit)
        .expect("layout");

    assert_eq!(commit.calls[0].1, Cursor::new(10, 30 + DEFAULT_LINE_HEIGHT_PX));
    // The overlong word pushes the pen past wrap_x, so the next word wraps too.
    assert_eq!(commit.calls[1].1, Cursor::new(10, 30 + 2 * DEFAULT_LINE_HEIGHT_PX));
    assert_eq!(outcome.committed_words, 2);
    assert_eq!(outcome.line_breaks, 2);
}

#[test]
fn word_fitting_after_wide_word_shares_no_line_with_it() {
    let (mut probe, mut commit) = contexts();
    let cfg = WrapConfig {
        start_y: 20,
        line_wrap_x: 100,
        line_height: 24,
        ..WrapConfig::default()
    };
    let engine = LayoutEngine::for_canvas(cfg, 400, 400);

    // "aaaaaaaaaa " = 84px, fits. "bb " from 84 ends at 104 >= 100 and wraps.
    engine
        .run("aaaaaaaaaa bb cc", &mut probe, &mut commit)
        .expect("layout");

    let positions: Vec<Cursor> = commit.calls.iter().map(|(_, at)| *at).collect();
    assert_eq!(
        positions,
        [Cursor::new(0, 20), Cursor::new(0, 44), Cursor::new(20, 44)]
    );
}

#[test]
fn truncated_run_returns_last_committed_cursor() {
    let (mut probe, mut commit) = contexts();
    let cfg = WrapConfig {
        start_y: 20,
        line_wrap_x: 60,
        line_wrap_y: 50,
        line_height: 20,
        ..WrapConfig::default()
    };
    let engine = LayoutEngine::for_canvas(cfg, 400, 400);

    // "one two " ends at 56 < 60. "three " wraps to y=40 and ends at 44;
    // "four " would wrap again to y=60, past the 50px boundary.
    let outcome = engine
        .run("one two three four five", &mut probe, &mut commit)
        .expect("layout");

    assert_eq!(commit.drawn_words(), ["one ", "two ", "three "]);
    assert_eq!(outcome.cursor, Cursor::new(44, 40));
    assert_eq!(outcome.committed_words, 3);
    assert_eq!(outcome.dropped_words, 2);
    assert_eq!(outcome.line_breaks, 2);
}

#[test]
fn baseline_exactly_on_vertical_boundary_is_still_drawn() {
    let (mut probe, mut commit) = contexts();
    let cfg = WrapConfig {
        start_y: 10,
        line_wrap_x: 20,
        line_wrap_y: 40,
        line_height: 30,
        ..WrapConfig::default()
    };
    let engine = LayoutEngine::for_canvas(cfg, 400, 400);

    let outcome = engine.run("abc def", &mut probe, &mut commit).expect("layout");

    assert_eq!(outcome.committed_words, 1);
    assert_eq!(commit.calls[0].1.y, 40);
    assert_eq!(outcome.dropped_words, 1);
}

#[test]
fn start_below_boundary_draws_nothing_and_keeps_start_cursor() {
    let (mut probe, mut commit) = contexts();
    let engine = LayoutEngine::for_canvas(WrapConfig::starting_at(5, 500), 400, 400);

    let outcome = engine.run("hello world", &mut probe, &mut commit).expect("layout");

    assert!(commit.calls.is_empty());
    assert_eq!(probe.calls.len(), 1);
    assert_eq!(outcome.cursor, Cursor::new(5, 500));
    assert_eq!(outcome.dropped_words, 2);
}

#[test]
fn probe_and_commit_see_identical_input_for_kept_words() {
    let (mut probe, mut commit) = contexts();
    let engine = LayoutEngine::for_canvas(WrapConfig::starting_at(0, 30), 1000, 100);

    engine
        .run("  spaced\tout\n words ", &mut probe, &mut commit)
        .expect("layout");

    assert_eq!(probe.calls, commit.calls);
    assert_eq!(commit.drawn_words(), ["spaced ", "out ", "words "]);
}

#[test]
fn empty_text_errors() {
    let (mut probe, mut commit) = contexts();
    let engine = LayoutEngine::for_canvas(WrapConfig::default(), 10, 10);
    assert_eq!(
        engine.run("", &mut probe, &mut commit),
        Err(LayoutError::EmptyText)
    );
}

#[test]
fn trait_objects_work_as_contexts() {
    let (mut probe, mut commit) = contexts();
    let engine = LayoutEngine::for_canvas(WrapConfig::starting_at(0, 30), 1000, 100);
    let probe_dyn: &mut dyn DrawContext = &mut probe;
    let commit_dyn: &mut dyn DrawContext = &mut commit;

    let outcome = engine.run("dyn ok", probe_dyn, commit_dyn).expect("layout");
    assert_eq!(outcome.committed_words, 2);
}
