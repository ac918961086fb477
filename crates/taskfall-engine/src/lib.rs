pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding with walls or fixed shapes")]
pub struct PieceCollisionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SpawnError {
    #[display("no room at the spawn position")]
    BoardFull,
    #[display("a piece is already falling")]
    PieceActive,
}
