// Screen composition and diffed terminal output.

use crossterm::style::Color;
use garden_core::{Action, Garden, GardenSettings};
use harmonic_garden::constants::{HELP_BOX_BG, RULE_GLYPH, WAITING_TEXT};
use harmonic_garden::overlay::{compose_frame, help_box_lines, status_spans};
use harmonic_garden::render::{ScreenBuffer, ScreenCell, Span, TerminalRenderer};

fn garden() -> Garden {
    Garden::new(GardenSettings {
        seed: 3,
        ..GardenSettings::default()
    })
    .expect("catalog is valid")
}

fn cell(glyph: char) -> ScreenCell {
    ScreenCell {
        glyph,
        ..ScreenCell::BLANK
    }
}

#[test]
fn second_identical_draw_writes_nothing() {
    let mut frame = ScreenBuffer::new(12, 4);
    frame.put(3, 1, cell('x'));
    let mut renderer = TerminalRenderer::new();
    let mut out = Vec::new();

    assert_eq!(renderer.draw(&mut out, &frame).expect("vec write"), 48);
    assert_eq!(renderer.draw(&mut out, &frame).expect("vec write"), 0);

    frame.put(4, 1, cell('y'));
    frame.put(0, 3, cell('z'));
    assert_eq!(renderer.draw(&mut out, &frame).expect("vec write"), 2);

    renderer.invalidate();
    assert_eq!(renderer.draw(&mut out, &frame).expect("vec write"), 48);
}

#[test]
fn size_change_forces_full_redraw() {
    let mut renderer = TerminalRenderer::new();
    let mut out = Vec::new();
    let _ = renderer.draw(&mut out, &ScreenBuffer::new(5, 5));
    let bigger = ScreenBuffer::new(6, 5);
    assert_eq!(renderer.draw(&mut out, &bigger).expect("vec write"), 30);
}

#[test]
fn styles_are_memoized() {
    let mut renderer = TerminalRenderer::new();
    let bold = ScreenCell {
        bold: true,
        fg: Color::AnsiValue(9),
        ..ScreenCell::BLANK
    };
    let a = renderer.style_for(&bold);
    let b = renderer.style_for(&bold);
    assert_eq!(a, b);
    let _ = renderer.style_for(&ScreenCell::BLANK);
    assert_eq!(renderer.cached_styles(), 2);
}

#[test]
fn spans_clip_at_row_end() {
    let mut screen = ScreenBuffer::new(6, 1);
    let end = screen.write_spans(
        2,
        0,
        &[
            Span::new("ab", Color::Reset, Color::Reset),
            Span::new("cdef", Color::Reset, Color::Reset),
        ],
    );
    assert_eq!(end, 6);
    assert_eq!(screen.row_text(0), "  abcd");
}

#[test]
fn waiting_text_before_the_stage_exists() {
    let g = garden();
    let screen = compose_frame(&g, 60, 20);
    assert!(screen.row_text(0).starts_with(WAITING_TEXT));
}

#[test]
fn footer_sits_under_the_stage() {
    let mut g = garden();
    g.resize(90, 30);
    let screen = compose_frame(&g, 90, 30);
    let stage_h = g.stage().height;
    assert_eq!(stage_h, 24);
    assert!(screen.row_text(stage_h).starts_with(RULE_GLYPH));
    assert!(screen.row_text(stage_h + 1).starts_with("harmonic garden"));
    let status = screen.row_text(stage_h + 2);
    assert!(status.contains("scene Ellipse Drift"), "{status}");
    assert!(status.contains("muses 9"), "{status}");
    assert!(screen.row_text(stage_h + 3).contains("space auto/manual"));
}

#[test]
fn status_bar_is_padded() {
    let mut g = garden();
    g.resize(90, 30);
    let spans = status_spans(&g);
    let text: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert!(text.starts_with(' ') && text.ends_with(' '));
    assert_eq!(text.trim(), g.status_line());
}

#[test]
fn help_box_overlays_the_stage() {
    let mut g = garden();
    g.resize(100, 40);
    g.apply(Action::ToggleHelp);
    let screen = compose_frame(&g, 100, 40);
    let lines = help_box_lines();
    assert_eq!(lines.len(), 4);
    let boxed = (0..screen.height())
        .flat_map(|y| (0..screen.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| screen.get(x, y).map(|c| c.bg) == Some(HELP_BOX_BG))
        .count();
    assert!(boxed > 0);
    let joined: String = (0..screen.height()).map(|y| screen.row_text(y)).collect();
    assert!(joined.contains("q quit"));
}
