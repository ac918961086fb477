use crate::{
    PieceCollisionError, SpawnError,
    core::{
        board::{Board, FixedShape, ShapeId},
        piece::Piece,
        shape::ShapeKind,
    },
};

use super::{shape_picker::ShapePicker, task_store::TaskStore};

/// Task text shown when the store has no entry for an identifier.
pub const DEFAULT_TASK_TEXT: &str = "No description";

/// Outcome of a single gravity tick.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GravityTick {
    /// No piece is falling; nothing was advanced.
    Idle,
    /// The piece moved down one row and keeps falling.
    StillFalling,
    /// The piece landed and was fixed onto the board.
    Landed {
        id: ShapeId,
        cleared_rows: usize,
        cleared_shapes: usize,
    },
}

#[derive(Debug)]
pub struct GameField {
    board: Board,
    falling: Option<Piece>,
    picker: ShapePicker,
    next_id: u64,
    store: Box<dyn TaskStore>,
}

impl GameField {
    #[must_use]
    pub fn new(store: Box<dyn TaskStore>) -> Self {
        Self::with_picker(ShapePicker::new(), store)
    }

    #[must_use]
    pub fn with_picker(picker: ShapePicker, store: Box<dyn TaskStore>) -> Self {
        Self {
            board: Board::new(),
            falling: None,
            picker,
            next_id: 0,
            store,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling.as_ref()
    }

    /// Spawns a new piece with a random shape and the given task attached,
    /// horizontally centered on row 0.
    ///
    /// Fails with [`SpawnError::BoardFull`] when the spawn position is
    /// blocked (no piece is created — the board-full condition the caller
    /// should surface) and with [`SpawnError::PieceActive`] when a piece is
    /// still falling.
    pub fn spawn(&mut self, task: impl Into<String>) -> Result<(), SpawnError> {
        if self.falling.is_some() {
            return Err(SpawnError::PieceActive);
        }
        let kind = self.picker.next_kind();
        self.spawn_piece(kind, task)
    }

    pub(crate) fn spawn_piece(
        &mut self,
        kind: ShapeKind,
        task: impl Into<String>,
    ) -> Result<(), SpawnError> {
        if self.falling.is_some() {
            return Err(SpawnError::PieceActive);
        }
        let piece = Piece::spawn(kind, task.into());
        if !self.board.can_place(piece.pattern(), piece.col(), piece.row()) {
            return Err(SpawnError::BoardFull);
        }
        self.falling = Some(piece);
        Ok(())
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        let piece = self
            .falling
            .as_ref()
            .ok_or(PieceCollisionError)?
            .shifted(-1);
        self.set_falling_piece(piece)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        let piece = self
            .falling
            .as_ref()
            .ok_or(PieceCollisionError)?
            .shifted(1);
        self.set_falling_piece(piece)
    }

    /// Rotates the falling piece 90° clockwise at its unchanged anchor.
    /// No kick positions are attempted.
    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        let piece = self.falling.as_ref().ok_or(PieceCollisionError)?.rotated();
        self.set_falling_piece(piece)
    }

    fn set_falling_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if !self.board.can_place(piece.pattern(), piece.col(), piece.row()) {
            return Err(PieceCollisionError);
        }
        self.falling = Some(piece);
        Ok(())
    }

    /// Attempts to move the falling piece down by one row.
    ///
    /// The piece lands when its bottom edge would pass the board floor or
    /// the shifted position collides with a fixed shape: it is snapshotted
    /// with a fresh identifier, its task is persisted, and full rows are
    /// cleared.
    pub fn gravity_tick(&mut self) -> GravityTick {
        let Some(piece) = self.falling.take() else {
            return GravityTick::Idle;
        };

        let hits_floor = piece.row() + piece.pattern().height() >= Board::HEIGHT;
        if !hits_floor
            && self
                .board
                .can_place(piece.pattern(), piece.col(), piece.row() + 1)
        {
            self.falling = Some(piece.descended());
            return GravityTick::StillFalling;
        }

        let id = self.allocate_id();
        let (shape, task) = piece.into_fixed(id);
        // persist the task before the shape becomes visible for selection
        self.store.put(id, &task);
        self.board.add_shape(shape);
        let (cleared_rows, cleared_shapes) = self.run_row_clear();
        GravityTick::Landed {
            id,
            cleared_rows,
            cleared_shapes,
        }
    }

    /// Returns the identifier of the first fixed shape (in landing order)
    /// covering the coordinate.
    #[must_use]
    pub fn select_at(&self, col: i32, row: i32) -> Option<ShapeId> {
        self.board.shape_at(col, row).map(FixedShape::id)
    }

    /// Returns the persisted task text for a fixed shape.
    #[must_use]
    pub fn task_text(&self, id: ShapeId) -> String {
        self.store.get(id, DEFAULT_TASK_TEXT)
    }

    /// Removes the fixed shape with the given identifier along with its
    /// persisted task. Unknown identifiers are a no-op. Returns whether a
    /// shape was removed.
    pub fn delete_shape(&mut self, id: ShapeId) -> bool {
        let Some(shape) = self.board.remove_shape(id) else {
            return false;
        };
        self.store.remove(shape.id());
        // a deletion never fills a row; rescan anyway, mirroring landing
        self.run_row_clear();
        true
    }

    fn run_row_clear(&mut self) -> (usize, usize) {
        let (cleared_rows, removed) = self.board.clear_full_rows();
        for shape in &removed {
            self.store.remove(shape.id());
        }
        (cleared_rows, removed.len())
    }

    fn allocate_id(&mut self) -> ShapeId {
        self.next_id += 1;
        ShapeId::new(self.next_id)
    }
}
