use crate::{
    PieceCollisionError, SpawnError,
    core::{
        board::{Board, ShapeId},
        piece::Piece,
    },
};

use super::{
    game_field::{GameField, GravityTick},
    game_stats::GameStats,
};

/// A game field plus session counters.
///
/// Thin façade for UIs: forwards every command to the field and keeps
/// [`GameStats`] in step with the outcomes.
#[derive(Debug)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
}

impl GameSession {
    #[must_use]
    pub fn new(field: GameField) -> Self {
        Self {
            field,
            stats: GameStats::new(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.field.board()
    }

    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.field.falling_piece()
    }

    /// Number of tasks currently pinned to the board.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.field.board().shape_count()
    }

    pub fn spawn(&mut self, task: impl Into<String>) -> Result<(), SpawnError> {
        self.field.spawn(task)
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.field.try_move_left()
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.field.try_move_right()
    }

    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        self.field.try_rotate()
    }

    pub fn gravity_tick(&mut self) -> GravityTick {
        let outcome = self.field.gravity_tick();
        if let GravityTick::Landed {
            cleared_rows,
            cleared_shapes,
            ..
        } = outcome
        {
            self.stats.record_landing(cleared_rows, cleared_shapes);
        }
        outcome
    }

    #[must_use]
    pub fn select_at(&self, col: i32, row: i32) -> Option<ShapeId> {
        self.field.select_at(col, row)
    }

    #[must_use]
    pub fn task_text(&self, id: ShapeId) -> String {
        self.field.task_text(id)
    }

    pub fn delete_shape(&mut self, id: ShapeId) -> bool {
        let removed = self.field.delete_shape(id);
        if removed {
            self.stats.record_deletion();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::shape::ShapeKind,
        engine::{shape_picker::ShapePicker, task_store::MemoryTaskStore},
    };

    fn session() -> GameSession {
        let store = MemoryTaskStore::new();
        GameSession::new(GameField::with_picker(ShapePicker::new(), Box::new(store)))
    }

    fn land_one(session: &mut GameSession, kind: ShapeKind, task: &str) -> ShapeId {
        session.field.spawn_piece(kind, task).unwrap();
        loop {
            match session.gravity_tick() {
                GravityTick::StillFalling => {}
                GravityTick::Landed { id, .. } => return id,
                GravityTick::Idle => panic!("no piece"),
            }
        }
    }

    #[test]
    fn test_stats_track_landings_and_deletions() {
        let mut session = session();
        let id = land_one(&mut session, ShapeKind::O, "one");
        land_one(&mut session, ShapeKind::I, "two");

        assert_eq!(session.stats().landed_pieces(), 2);
        assert_eq!(session.pending_tasks(), 2);

        assert!(session.delete_shape(id));
        assert_eq!(session.stats().deleted_shapes(), 1);
        assert_eq!(session.pending_tasks(), 1);

        // deleting an unknown id changes nothing
        assert!(!session.delete_shape(ShapeId::new(999)));
        assert_eq!(session.stats().deleted_shapes(), 1);
    }

    #[test]
    fn test_stats_track_cleared_shapes() {
        let mut session = session();
        // five O-shapes side by side fill rows 16 and 17 completely
        for i in 0..5 {
            session.field.spawn_piece(ShapeKind::O, format!("task {i}")).unwrap();
            let target = i32::try_from(i).unwrap() * 2;
            while session.falling_piece().unwrap().col() > target {
                session.try_move_left().unwrap();
            }
            while session.falling_piece().unwrap().col() < target {
                session.try_move_right().unwrap();
            }
            loop {
                if !session.gravity_tick().is_still_falling() {
                    break;
                }
            }
        }

        assert_eq!(session.stats().landed_pieces(), 5);
        // clearing row 17 removes every O whole, emptying row 16 before it
        // is ever counted as full
        assert_eq!(session.stats().cleared_rows(), 1);
        assert_eq!(session.stats().cleared_shapes(), 5);
        assert_eq!(session.pending_tasks(), 0);
    }
}
