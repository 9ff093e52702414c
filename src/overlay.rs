//! Footer and help overlay composed around the garden canvas.

use crossterm::style::Color;
use garden_core::Garden;

use crate::constants::{
    BANNER_FG, BANNER_TEXT, FIELD_SEPARATOR, HELP_BOX_BG, HELP_BOX_FG, HELP_DESC_FG, HELP_KEY_FG,
    HELP_PAD_X, HELP_PAD_Y, RULE_FG, RULE_GLYPH, STATUS_BG, STATUS_FG, TITLE_FG, VALUE_FG,
    WAITING_TEXT,
};
use crate::events::keyboard::{FULL_HELP, SHORT_HELP};
use crate::events::KeyHelp;
use crate::render::{ScreenBuffer, ScreenCell, Span};

/// Status bar: labelled fields on a colored strip, one column of padding on
/// each side.
pub fn status_spans(garden: &Garden) -> Vec<Span> {
    let mut spans = vec![Span::new(" ", STATUS_FG, STATUS_BG)];
    for (i, (label, value)) in garden.status_fields().iter().enumerate() {
        if i > 0 {
            spans.push(Span::new(FIELD_SEPARATOR, STATUS_FG, STATUS_BG));
        }
        spans.push(Span::new(*label, TITLE_FG, STATUS_BG).bold());
        spans.push(Span::new(" ", STATUS_FG, STATUS_BG));
        spans.push(Span::new(value.as_str(), VALUE_FG, STATUS_BG));
    }
    spans.push(Span::new(" ", STATUS_FG, STATUS_BG));
    spans
}

fn help_spans(entries: &[KeyHelp], bg: Color) -> Vec<Span> {
    let mut spans = Vec::with_capacity(entries.len() * 3);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::new(" • ", HELP_DESC_FG, bg));
        }
        spans.push(Span::new(entry.keys, HELP_KEY_FG, bg));
        spans.push(Span::new(format!(" {}", entry.desc), HELP_DESC_FG, bg));
    }
    spans
}

/// The four footer lines: rule, banner, status bar, short help.
pub fn footer_lines(garden: &Garden, width: u16) -> Vec<Vec<Span>> {
    let status = status_spans(garden);
    let status_width: usize = status.iter().map(Span::width).sum();
    let rule_len = (garden.stage().width as usize).max(status_width).min(width as usize);
    let rule: String = std::iter::repeat(RULE_GLYPH).take(rule_len).collect();

    vec![
        vec![Span::new(rule, RULE_FG, Color::Reset)],
        vec![
            Span::new(BANNER_TEXT, BANNER_FG, Color::Reset).bold(),
            Span::new(FIELD_SEPARATOR, Color::Reset, Color::Reset),
            Span::new(garden.scene_meta().description, Color::Reset, Color::Reset),
        ],
        status,
        help_spans(&SHORT_HELP, Color::Reset),
    ]
}

/// Rows of the full help box, one per binding, grouped in columns.
pub fn help_box_lines() -> Vec<String> {
    let col_widths: Vec<usize> = FULL_HELP
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|e| e.keys.chars().count() + 1 + e.desc.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();
    let rows = FULL_HELP.iter().map(|g| g.len()).max().unwrap_or(0);

    (0..rows)
        .map(|row| {
            let mut line = String::new();
            for (col, group) in FULL_HELP.iter().enumerate() {
                if col > 0 {
                    line.push_str("    ");
                }
                let text = group
                    .get(row)
                    .map(|e| format!("{} {}", e.keys, e.desc))
                    .unwrap_or_default();
                let pad = col_widths[col].saturating_sub(text.chars().count());
                line.push_str(&text);
                line.extend(std::iter::repeat(' ').take(pad));
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Draw the help box centered over the stage.
pub fn draw_help_box(screen: &mut ScreenBuffer, stage_height: u16) {
    let lines = help_box_lines();
    let inner_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let box_w = (inner_w + HELP_PAD_X * 2).min(screen.width());
    let box_h = (lines.len() as u16 + HELP_PAD_Y * 2).min(screen.height());
    let area_h = stage_height.max(box_h).min(screen.height());
    let x0 = (screen.width() - box_w) / 2;
    let y0 = (area_h - box_h) / 2;

    let fill = ScreenCell {
        glyph: ' ',
        fg: HELP_BOX_FG,
        bg: HELP_BOX_BG,
        bold: false,
    };
    screen.fill_rect(x0, y0, box_w, box_h, fill);
    for (i, line) in lines.iter().enumerate() {
        let y = y0 + HELP_PAD_Y + i as u16;
        if y >= y0 + box_h {
            break;
        }
        let spans = [Span::new(line.as_str(), HELP_BOX_FG, HELP_BOX_BG)];
        screen.write_spans(x0 + HELP_PAD_X, y, &spans);
    }
}

/// Compose the whole screen for a `columns x rows` terminal.
pub fn compose_frame(garden: &Garden, columns: u16, rows: u16) -> ScreenBuffer {
    let mut screen = ScreenBuffer::new(columns, rows);
    if !garden.is_ready() || garden.stage().is_empty() {
        screen.write_spans(0, 0, &[Span::new(WAITING_TEXT, Color::Reset, Color::Reset)]);
        return screen;
    }

    let canvas = garden.render();
    screen.blit_canvas(&canvas);

    let stage_height = garden.stage().height;
    for (i, line) in footer_lines(garden, columns).iter().enumerate() {
        screen.write_spans(0, stage_height.saturating_add(i as u16), line);
    }

    if garden.controls().show_help {
        draw_help_box(&mut screen, stage_height);
    }
    screen
}
