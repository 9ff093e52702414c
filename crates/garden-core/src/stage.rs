use glam::DVec2;

use crate::constants::{FLOOR_STAGE_HEIGHT, MIN_STAGE_HEIGHT, STATUS_LINES};

/// Drawable area measured in character cells.
///
/// Every position produced by the simulation (target, followers, trails) is
/// clamped into `[0, width-1] x [0, height-1]` through [`Stage::clamp`]. An
/// empty stage (either dimension zero) leaves positions untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Stage {
    pub width: u16,
    pub height: u16,
}

impl Stage {
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Stage left over once the footer allowance is taken out of a terminal of
    /// `columns x rows` cells.
    pub fn for_terminal(columns: u16, rows: u16) -> Self {
        if columns == 0 || rows == 0 {
            return Self::default();
        }
        let mut height = rows.saturating_sub(STATUS_LINES);
        if height < MIN_STAGE_HEIGHT {
            height = rows.saturating_sub(2).max(FLOOR_STAGE_HEIGHT);
        }
        Self {
            width: columns,
            height,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn width_f(&self) -> f64 {
        self.width as f64
    }

    #[inline]
    pub fn height_f(&self) -> f64 {
        self.height as f64
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width_f() / 2.0, self.height_f() / 2.0)
    }

    pub fn clamp(&self, p: DVec2) -> DVec2 {
        if self.is_empty() {
            return p;
        }
        DVec2::new(
            p.x.clamp(0.0, self.width_f() - 1.0),
            p.y.clamp(0.0, self.height_f() - 1.0),
        )
    }

    /// True while `p` lies within the stage grown by `margin` cells on every
    /// side.
    pub fn contains_with_margin(&self, p: DVec2, margin: f64) -> bool {
        p.x >= -margin
            && p.y >= -margin
            && p.x <= self.width_f() + margin
            && p.y <= self.height_f() + margin
    }

    /// Map a floating position to its nearest cell, if that cell is on stage.
    pub fn cell_of(&self, p: DVec2) -> Option<(usize, usize)> {
        let x = p.x.round();
        let y = p.y.round();
        if !(x >= 0.0 && y >= 0.0 && x < self.width_f() && y < self.height_f()) {
            return None;
        }
        Some((x as usize, y as usize))
    }
}
