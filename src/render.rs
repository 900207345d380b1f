//! Deterministic text rendering of the board.
//!
//! The whole-board string and the single-cell primitive share one width
//! policy so the interactive driver can redraw cell by cell (and colour
//! them) while matching the batch driver's `p` output exactly.

// format! with push_str reads better here; the allocations are negligible.
#![allow(clippy::format_push_string)]

use crate::game::{Cell, Game, PlayerId};

/// Decimal width of a player id.
fn decimal_width(mut id: PlayerId) -> usize {
    let mut width = 1;
    while id >= 10 {
        id /= 10;
        width += 1;
    }
    width
}

impl Game {
    /// Column widths used by [`Game::board`]: (column 0, every other
    /// column).
    ///
    /// Driven by the maximum player id actually on the board: single-char
    /// cells while every on-board id is one digit. Otherwise every column
    /// except the first is one space wider than the widest id, so adjacent
    /// multi-digit ids cannot run together, and the first column is exactly
    /// as wide as the widest id it contains (1 if it holds none).
    #[must_use]
    pub fn column_widths(&self) -> (usize, usize) {
        let max_id = self.board.cells().iter().filter_map(Cell::owner).max();
        let id_width = max_id.map_or(1, decimal_width);
        if id_width == 1 {
            return (1, 1);
        }

        let first_width = (0..self.height())
            .filter_map(|y| self.owner(0, y))
            .max()
            .map_or(1, decimal_width);
        (first_width, id_width + 1)
    }

    /// Append one cell to `out`, right-aligned to `field_width`.
    ///
    /// An empty cell renders as `.`, an owned cell as the owner's decimal
    /// id; content wider than `field_width` is never truncated. Returns the
    /// number of characters written and the cell's owner (`None` for an
    /// empty cell), or `None` for out-of-range coordinates.
    pub fn render_cell(
        &self,
        out: &mut String,
        x: u32,
        y: u32,
        field_width: usize,
    ) -> Option<(usize, Option<PlayerId>)> {
        if !self.board.in_bounds(i64::from(x), i64::from(y)) {
            return None;
        }

        let owner = self.owner(x, y);
        let rendered = match owner {
            Some(id) => format!("{id:>field_width$}"),
            None => format!("{:>field_width$}", '.'),
        };
        let written = rendered.len();
        out.push_str(&rendered);
        Some((written, owner))
    }

    /// Render the whole board.
    ///
    /// Exactly `height` lines, each terminated by `\n`; rows are emitted
    /// highest y first and columns ascend from x = 0.
    #[must_use]
    pub fn board(&self) -> String {
        let (first_width, other_width) = self.column_widths();
        let width = self.width() as usize;
        let height = self.height() as usize;

        let row_len = first_width + other_width * (width - 1) + 1;
        let mut out = String::with_capacity(row_len.saturating_mul(height));

        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let field_width = if x == 0 { first_width } else { other_width };
                let _ = self.render_cell(&mut out, x, y, field_width);
            }
            out.push('\n');
        }

        out
    }
}
