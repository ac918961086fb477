pub use self::{board::*, pattern::*, piece::*, shape::*};

pub(crate) mod board;
pub(crate) mod pattern;
pub(crate) mod piece;
pub(crate) mod shape;

/// Board width in cells.
pub const BOARD_WIDTH: i32 = 10;
/// Board height in cells. Row 0 is the topmost visible row; rows grow downward.
pub const BOARD_HEIGHT: i32 = 18;
