use super::{
    BOARD_WIDTH,
    board::{FixedShape, ShapeId},
    pattern::CellPattern,
    shape::ShapeKind,
};

/// The currently falling, player-controlled shape.
///
/// A piece exists from spawn until it lands. Movement and rotation return new
/// `Piece` values; the lifecycle driver validates a candidate against the
/// board before installing it, so a rejected command leaves the old piece
/// untouched.
///
/// The attached task string travels with the piece and is only persisted
/// when the piece is fixed onto the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    pattern: CellPattern,
    col: i32,
    row: i32,
    task: String,
}

impl Piece {
    /// Creates a piece at the spawn anchor: horizontally centered, row 0.
    pub(crate) fn spawn(kind: ShapeKind, task: String) -> Self {
        let pattern = kind.template();
        let col = BOARD_WIDTH / 2 - pattern.width() / 2;
        Self {
            kind,
            pattern,
            col,
            row: 0,
            task,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn pattern(&self) -> &CellPattern {
        &self.pattern
    }

    /// Anchor column of the pattern's top-left corner.
    #[must_use]
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Anchor row of the pattern's top-left corner.
    #[must_use]
    pub fn row(&self) -> i32 {
        self.row
    }

    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Returns an iterator of the board coordinates `(col, row)` covered by
    /// the piece's filled cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.pattern
            .filled_offsets()
            .map(|(dr, dc)| (self.col + dc, self.row + dr))
    }

    #[must_use]
    pub(crate) fn shifted(&self, dx: i32) -> Self {
        Self {
            col: self.col + dx,
            ..self.clone()
        }
    }

    #[must_use]
    pub(crate) fn descended(&self) -> Self {
        Self {
            row: self.row + 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub(crate) fn rotated(&self) -> Self {
        Self {
            pattern: self.pattern.rotated(),
            ..self.clone()
        }
    }

    /// Converts the piece into its landed snapshot plus the task text to
    /// persist under the snapshot's identifier.
    pub(crate) fn into_fixed(self, id: ShapeId) -> (FixedShape, String) {
        let Self {
            kind,
            pattern,
            col,
            row,
            task,
        } = self;
        (FixedShape::new(id, kind, pattern, col, row), task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_centered_on_row_zero() {
        let piece = Piece::spawn(ShapeKind::O, "task".into());
        // width 10, pattern width 2: 10/2 - 2/2 = 4
        assert_eq!(piece.col(), 4);
        assert_eq!(piece.row(), 0);

        let piece = Piece::spawn(ShapeKind::I, "task".into());
        // pattern width 4: 10/2 - 4/2 = 3
        assert_eq!(piece.col(), 3);
        assert_eq!(piece.row(), 0);

        let piece = Piece::spawn(ShapeKind::T, "task".into());
        // pattern width 3: 10/2 - 3/2 = 4
        assert_eq!(piece.col(), 4);
    }

    #[test]
    fn test_occupied_cells_translate_anchor() {
        let piece = Piece::spawn(ShapeKind::O, "task".into());
        let cells: Vec<_> = piece.occupied_cells().collect();
        assert_eq!(cells, vec![(4, 0), (5, 0), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_shift_and_descend_move_anchor_only() {
        let piece = Piece::spawn(ShapeKind::T, "task".into());
        let moved = piece.shifted(-1).descended();
        assert_eq!(moved.col(), piece.col() - 1);
        assert_eq!(moved.row(), piece.row() + 1);
        assert_eq!(moved.pattern(), piece.pattern());
        assert_eq!(moved.task(), piece.task());
    }

    #[test]
    fn test_into_fixed_keeps_geometry_and_splits_task() {
        let piece = Piece::spawn(ShapeKind::S, "water the plants".into());
        let pattern = piece.pattern().clone();
        let (col, row) = (piece.col(), piece.row());

        let (shape, task) = piece.into_fixed(ShapeId::new(7));
        assert_eq!(task, "water the plants");
        assert_eq!(shape.id(), ShapeId::new(7));
        assert_eq!(shape.kind(), ShapeKind::S);
        assert_eq!(shape.pattern(), &pattern);
        assert_eq!((shape.col(), shape.row()), (col, row));
    }
}
