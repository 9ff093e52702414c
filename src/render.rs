//! Terminal output: a screen-sized cell buffer and a diffing renderer.
//!
//! Each frame is composed into a [`ScreenBuffer`] and handed to
//! [`TerminalRenderer::draw`], which only emits cells that changed since the
//! previous frame, inside a synchronized update. Styles are pure functions of
//! `(fg, bg, bold)` and are memoized for the life of the renderer.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, ContentStyle, PrintStyledContent, ResetColor};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, ClearType, DisableLineWrap, EnableLineWrap,
    EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use fnv::FnvHashMap;
use garden_core::{Canvas, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScreenCell {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl ScreenCell {
    pub const BLANK: ScreenCell = ScreenCell {
        glyph: ' ',
        fg: Color::Reset,
        bg: Color::Reset,
        bold: false,
    };

    #[inline]
    fn style_key(&self) -> StyleKey {
        (self.fg, self.bg, self.bold)
    }
}

/// A run of text sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>, fg: Color, bg: Color) -> Self {
        Self {
            text: text.into(),
            fg,
            bg,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Width in terminal columns (one per char; every glyph we print is narrow).
    #[inline]
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

#[inline]
pub fn rgb_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<ScreenCell>,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![ScreenCell::BLANK; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&ScreenCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn put(&mut self, x: u16, y: u16, cell: ScreenCell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Text of row `y`, mostly for tests and logging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.glyph))
            .collect()
    }

    /// Copy a composed canvas into the top-left corner.
    pub fn blit_canvas(&mut self, canvas: &Canvas) {
        for (y, row) in canvas.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                    continue;
                };
                self.put(
                    x,
                    y,
                    ScreenCell {
                        glyph: cell.glyph,
                        fg: rgb_color(cell.fg),
                        bg: rgb_color(cell.bg),
                        bold: cell.bold,
                    },
                );
            }
        }
    }

    /// Write spans left to right starting at `(x, y)`, clipped to the row.
    /// Returns the column after the last written char.
    pub fn write_spans(&mut self, x: u16, y: u16, spans: &[Span]) -> u16 {
        let mut col = x;
        for span in spans {
            for glyph in span.text.chars() {
                if col >= self.width {
                    return col;
                }
                self.put(
                    col,
                    y,
                    ScreenCell {
                        glyph,
                        fg: span.fg,
                        bg: span.bg,
                        bold: span.bold,
                    },
                );
                col += 1;
            }
        }
        col
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, cell: ScreenCell) {
        for row in y..y.saturating_add(h).min(self.height) {
            for col in x..x.saturating_add(w).min(self.width) {
                self.put(col, row, cell);
            }
        }
    }
}

type StyleKey = (Color, Color, bool);

#[derive(Default)]
pub struct TerminalRenderer {
    prev: Option<ScreenBuffer>,
    styles: FnvHashMap<StyleKey, ContentStyle>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    #[inline]
    pub fn cached_styles(&self) -> usize {
        self.styles.len()
    }

    pub fn style_for(&mut self, cell: &ScreenCell) -> ContentStyle {
        *self.styles.entry(cell.style_key()).or_insert_with(|| {
            let mut style = ContentStyle::new();
            if cell.fg != Color::Reset {
                style.foreground_color = Some(cell.fg);
            }
            if cell.bg != Color::Reset {
                style.background_color = Some(cell.bg);
            }
            if cell.bold {
                style.attributes.set(Attribute::Bold);
            }
            style
        })
    }

    /// Emit the cells of `frame` that differ from the last drawn frame.
    /// Returns how many cells were written.
    pub fn draw<W: Write>(&mut self, out: &mut W, frame: &ScreenBuffer) -> io::Result<usize> {
        let full = match &self.prev {
            Some(prev) => prev.width != frame.width || prev.height != frame.height,
            None => true,
        };

        queue!(out, BeginSynchronizedUpdate)?;
        if full {
            queue!(out, ResetColor, terminal::Clear(ClearType::All))?;
        }

        let mut written = 0;
        let mut cursor_at: Option<(u16, u16)> = None;
        for y in 0..frame.height {
            for x in 0..frame.width {
                let Some(cell) = frame.get(x, y).copied() else {
                    continue;
                };
                if !full {
                    if let Some(prev) = self.prev.as_ref().and_then(|p| p.get(x, y)) {
                        if *prev == cell {
                            continue;
                        }
                    }
                }
                if cursor_at != Some((x, y)) {
                    queue!(out, cursor::MoveTo(x, y))?;
                }
                let style = self.style_for(&cell);
                queue!(out, PrintStyledContent(style.apply(cell.glyph)))?;
                cursor_at = Some((x + 1, y));
                written += 1;
            }
        }

        queue!(out, EndSynchronizedUpdate)?;
        out.flush()?;
        self.prev = Some(frame.clone());
        Ok(written)
    }
}

/// Switch to raw mode on the alternate screen with the cursor hidden.
pub fn enter_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, cursor::Hide, DisableLineWrap)
}

/// Undo [`enter_terminal`]. Safe to call after a failed or partial enter.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let shown = execute!(
        out,
        EndSynchronizedUpdate,
        ResetColor,
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen
    );
    let raw = terminal::disable_raw_mode();
    shown.and(raw)
}
