//! ASCII room frames
//!
//! The room is drawn top row first: each row opens with a wall glyph,
//! followed by columns `0..=x_wall` where the last column is the far wall.
//! A floor line closes the frame. Positions are truncated to cells.

use glam::DVec2;

use crate::consts::GRID_ROWS;
use crate::to_cell;

pub const EMPTY: char = ' ';
pub const MASS: char = '*';
pub const WALL: char = '|';
pub const FLOOR: char = '^';

/// Blank lines appended after the floor so consecutive frames stay apart
const FRAME_GAP: &str = "\n\n\n";

/// Grid dimensions for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Rows drawn above the floor line
    pub rows: usize,
    /// Column holding the far wall
    pub x_wall: usize,
}

impl GridLayout {
    pub fn new(rows: usize, room_width: f64) -> Self {
        Self {
            rows,
            x_wall: room_width as usize,
        }
    }

    /// Characters per row, including both walls
    pub fn width(&self) -> usize {
        self.x_wall + 2
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(GRID_ROWS, crate::consts::X_WALL)
    }
}

/// Draw one frame with the mass at `position`.
///
/// The mass glyph wins over the far wall when both share a cell. Anything
/// above the top row is simply not drawn.
pub fn render_frame(position: DVec2, layout: &GridLayout) -> String {
    let (pos_x, pos_y) = to_cell(position);
    let mut out = String::with_capacity((layout.width() + 1) * (layout.rows + 1) + FRAME_GAP.len());

    for row in (0..layout.rows).rev() {
        out.push(WALL);
        for col in 0..=layout.x_wall {
            let glyph = if row == pos_y && col == pos_x {
                MASS
            } else if col == layout.x_wall {
                WALL
            } else {
                EMPTY
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    for _ in 0..layout.width() {
        out.push(FLOOR);
    }
    out.push_str(FRAME_GAP);
    out
}
