//! Piece lifecycle and session management.
//!
//! This module provides the high-level logic that orchestrates the core data
//! structures:
//!
//! - [`GameField`] - Piece lifecycle driver (spawn, move, rotate, gravity,
//!   landing, selection, deletion)
//! - [`GameSession`] - Field plus session counters
//! - [`GameStats`] - Simple counters (landed pieces, cleared rows/shapes)
//! - [`ShapePicker`] - Seeded uniform random shape selection
//! - [`TaskStore`] - External key-value store for task text
//!
//! # Game Flow
//!
//! 1. The caller spawns a piece with a task string attached
//! 2. Move/rotate commands manipulate the falling piece, each gated by the
//!    placement validator
//! 3. An external timer invokes [`GameField::gravity_tick`] at a fixed delay
//!    while the result is "still falling"
//! 4. On landing the piece becomes a fixed shape, its task is persisted, and
//!    full rows are cleared (cascading), deleting the cleared shapes' tasks
//! 5. A fixed shape can be selected by cell and deleted by identifier, which
//!    also removes its task
//!
//! # Example
//!
//! ```
//! use taskfall_engine::{GameField, GravityTick, MemoryTaskStore};
//!
//! let store = MemoryTaskStore::new();
//! let mut field = GameField::new(Box::new(store));
//!
//! field.spawn("water the plants").unwrap();
//! let _ = field.try_move_left();
//!
//! match field.gravity_tick() {
//!     GravityTick::StillFalling => { /* re-arm the timer */ }
//!     GravityTick::Landed { id, .. } => {
//!         assert_eq!(field.task_text(id), "water the plants");
//!     }
//!     GravityTick::Idle => {}
//! }
//! ```

pub use self::{game_field::*, game_session::*, game_stats::*, shape_picker::*, task_store::*};

mod game_field;
mod game_session;
mod game_stats;
mod shape_picker;
mod task_store;
