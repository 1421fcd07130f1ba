use crate::board::{Dot, GRID_SIZE};

pub const DOT_DIAMETER: f64 = 6.0;
pub const CANVAS_PADDING: f64 = DOT_DIAMETER * 2.0;
pub const BOARD_MARGIN: f64 = 32.0;
pub const BOARD_MAX_WIDTH: f64 = 500.0;
pub const CELL_SIZE_MIN: f64 = 14.0;

/// Pixel geometry of the board, derived from the hosting container width.
/// Pure value type: the same width always produces the same layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub cell_size: f64,
    pub canvas_size: f64,
}

impl BoardLayout {
    pub fn from_container_width(container_width: f64) -> Self {
        let usable = (container_width - BOARD_MARGIN).min(BOARD_MAX_WIDTH);
        let cell_size = (usable / (GRID_SIZE - 1) as f64)
            .floor()
            .max(CELL_SIZE_MIN);
        let canvas_size =
            (GRID_SIZE - 1) as f64 * cell_size + DOT_DIAMETER + CANVAS_PADDING * 2.0;
        Self {
            cell_size,
            canvas_size,
        }
    }

    /// Canvas pixel center of a dot.
    pub fn dot_px(&self, dot: Dot) -> (f64, f64) {
        (
            dot.col as f64 * self.cell_size + CANVAS_PADDING,
            dot.row as f64 * self.cell_size + CANVAS_PADDING,
        )
    }

    /// Snap a canvas-local pixel position to the nearest grid dot. Each axis
    /// rounds to the nearest cell multiple and clamps to the grid, so any
    /// position on the canvas maps to a real dot.
    pub fn nearest_dot(&self, x: f64, y: f64) -> Dot {
        let max_index = (GRID_SIZE - 1) as f64;
        let snap = |v: f64| {
            ((v - CANVAS_PADDING) / self.cell_size)
                .round()
                .clamp(0.0, max_index) as u32
        };
        Dot::new(snap(x), snap(y))
    }
}
