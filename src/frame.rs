use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use garden_core::Garden;

use crate::constants::FRAME_INTERVAL;
use crate::events::{command_for_key, KeyCommand};
use crate::overlay;
use crate::render::TerminalRenderer;

/// Fixed-rate deadline tracker.
///
/// Each deadline yields exactly one tick. After a stall longer than one
/// interval the schedule restarts from the current instant instead of
/// replaying the missed ticks.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    interval: Duration,
    next_due: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the next tick; zero once it is due.
    #[inline]
    pub fn until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// True when a tick is due at `now`; consumes that deadline.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            log::debug!("[frame] fell behind, rescheduling");
            self.next_due = now + self.interval;
        }
        true
    }
}

/// What the loop should do after one input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct FrameLoop {
    garden: Garden,
    renderer: TerminalRenderer,
    clock: FrameClock,
    columns: u16,
    rows: u16,
}

impl FrameLoop {
    pub fn new(garden: Garden, columns: u16, rows: u16, now: Instant) -> Self {
        let mut garden = garden;
        garden.resize(columns, rows);
        Self {
            garden,
            renderer: TerminalRenderer::new(),
            clock: FrameClock::new(FRAME_INTERVAL, now),
            columns,
            rows,
        }
    }

    #[inline]
    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    /// Route one terminal event into the garden.
    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match command_for_key(key.code, key.modifiers) {
                    Some(KeyCommand::Quit) => {
                        log::info!("[keys] quit");
                        return Flow::Quit;
                    }
                    Some(KeyCommand::Act(action)) => {
                        log::debug!("[keys] {:?}", action);
                        self.garden.apply(action);
                    }
                    None => {}
                }
            }
            Event::Resize(columns, rows) => {
                log::info!("[frame] resize {}x{}", columns, rows);
                self.columns = columns;
                self.rows = rows;
                self.garden.resize(columns, rows);
                self.renderer.invalidate();
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Simulate one step and draw the result.
    pub fn tick<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        self.garden.tick();
        let frame = overlay::compose_frame(&self.garden, self.columns, self.rows);
        self.renderer.draw(out, &frame).context("drawing frame")?;
        Ok(())
    }

    /// Interleave input and ticks until quit. Input is drained between
    /// ticks; a tick always runs to completion before more input is read.
    pub fn run<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        loop {
            let wait = self.clock.until_due(Instant::now());
            if event::poll(wait).context("polling terminal events")? {
                let ev = event::read().context("reading terminal event")?;
                if self.handle_event(ev) == Flow::Quit {
                    return Ok(());
                }
            }
            if self.clock.due(Instant::now()) {
                self.tick(out)?;
            }
        }
    }
}

/// Run the garden on the current terminal until the user quits.
pub fn run<W: Write>(out: &mut W, garden: Garden) -> anyhow::Result<()> {
    let (columns, rows) = terminal::size().context("reading terminal size")?;
    log::info!("[frame] starting on {}x{} terminal", columns, rows);
    let mut frame_loop = FrameLoop::new(garden, columns, rows, Instant::now());
    frame_loop.run(out)
}
