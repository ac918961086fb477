use ratatui::{
    prelude::{Buffer, Rect},
    widgets::{Block, Widget},
};
use taskfall_engine::{Board, Piece, ShapeKind};

use crate::ui::widgets::style;

/// Terminal columns per board cell (cells are two characters wide so the
/// grid looks roughly square).
pub const CELL_WIDTH: u16 = 2;

/// Renders the board: fixed shapes first, then the falling piece on top.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    falling: Option<&'a Piece>,
    block: Option<Block<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling: None,
            block: None,
        }
    }

    #[must_use]
    pub fn falling_piece(self, falling: Option<&'a Piece>) -> Self {
        Self { falling, ..self }
    }

    #[must_use]
    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn width() -> u16 {
        Board::WIDTH as u16 * CELL_WIDTH + 2
    }

    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn height() -> u16 {
        Board::HEIGHT as u16 + 2
    }

    #[expect(clippy::cast_sign_loss)]
    fn cell_grid(&self) -> Vec<Vec<Option<ShapeKind>>> {
        let width = Board::WIDTH as usize;
        let height = Board::HEIGHT as usize;
        let mut grid = vec![vec![None; width]; height];

        let mut mark = |col: i32, row: i32, kind: ShapeKind| {
            if (0..Board::WIDTH).contains(&col) && (0..Board::HEIGHT).contains(&row) {
                grid[row as usize][col as usize] = Some(kind);
            }
        };
        for shape in self.board.shapes() {
            for (col, row) in shape.occupied_cells() {
                mark(col, row, shape.kind());
            }
        }
        if let Some(piece) = self.falling {
            for (col, row) in piece.occupied_cells() {
                mark(col, row, piece.kind());
            }
        }
        grid
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let inner = match &self.block {
            Some(block) => {
                block.render(area, buf);
                block.inner(area)
            }
            None => area,
        };

        #[expect(clippy::cast_possible_truncation)]
        for (row, cells) in self.cell_grid().iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                break;
            }
            for (col, kind) in cells.iter().enumerate() {
                let x = inner.x + col as u16 * CELL_WIDTH;
                if x + CELL_WIDTH > inner.right() {
                    break;
                }
                match kind {
                    Some(kind) => buf.set_string(x, y, "  ", style::shape_style(*kind)),
                    None => buf.set_string(x, y, "· ", style::EMPTY_DOT),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use taskfall_engine::{CellPattern, FixedShape, ShapeId};

    use super::*;

    #[test]
    fn test_cell_grid_overlays_falling_piece_on_fixed_shapes() {
        let mut board = Board::new();
        board.add_shape(FixedShape::new(
            ShapeId::new(1),
            ShapeKind::L,
            CellPattern::from_ascii("#"),
            0,
            17,
        ));

        let display = BoardDisplay::new(&board);
        let grid = display.cell_grid();
        assert_eq!(grid[17][0], Some(ShapeKind::L));
        assert_eq!(grid[0][0], None);
    }

    #[test]
    fn test_widget_dimensions_cover_the_grid_plus_borders() {
        assert_eq!(BoardDisplay::width(), 22);
        assert_eq!(BoardDisplay::height(), 20);
    }
}
