use serde::{Deserialize, Serialize};

use super::{BOARD_HEIGHT, BOARD_WIDTH, pattern::CellPattern, shape::ShapeKind};

/// Process-unique identifier of a fixed shape.
///
/// Identifiers are allocated by the lifecycle driver from a monotonically
/// increasing counter and are never reused. The identifier is the sole key
/// linking a fixed shape to its persisted task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub struct ShapeId(u64);

impl ShapeId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl Serialize for ShapeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Decimal string, so identifiers can key a flat JSON object.
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for ShapeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s
            .parse::<u64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid shape id: {s} ({e})")))?;
        Ok(Self(raw))
    }
}

/// A landed piece's snapshot: pattern, anchor, and kind, plus its identifier.
///
/// The task text is not stored here; it lives in the task store keyed by
/// [`ShapeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedShape {
    id: ShapeId,
    kind: ShapeKind,
    pattern: CellPattern,
    col: i32,
    row: i32,
}

impl FixedShape {
    #[must_use]
    pub fn new(id: ShapeId, kind: ShapeKind, pattern: CellPattern, col: i32, row: i32) -> Self {
        Self {
            id,
            kind,
            pattern,
            col,
            row,
        }
    }

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn pattern(&self) -> &CellPattern {
        &self.pattern
    }

    #[must_use]
    pub fn col(&self) -> i32 {
        self.col
    }

    #[must_use]
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Returns an iterator of the board coordinates `(col, row)` covered by
    /// the shape's filled cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.pattern
            .filled_offsets()
            .map(|(dr, dc)| (self.col + dc, self.row + dr))
    }

    /// Returns true if the shape has a filled cell at the given board
    /// coordinate.
    #[must_use]
    pub fn covers(&self, col: i32, row: i32) -> bool {
        self.occupied_cells().any(|cell| cell == (col, row))
    }

    /// Returns true if any filled cell of the shape lies in the given row.
    #[must_use]
    pub fn intersects_row(&self, row: i32) -> bool {
        self.occupied_cells().any(|(_, r)| r == row)
    }
}

/// Collection of fixed shapes plus the occupancy, validation, and row-clear
/// operations over them.
///
/// Shapes are kept in landing order; `shape_at` resolves ties by first match
/// in that order. The board does not own the currently falling piece.
#[derive(Debug, Clone, Default)]
pub struct Board {
    shapes: Vec<FixedShape>,
}

impl Board {
    pub const WIDTH: i32 = BOARD_WIDTH;
    pub const HEIGHT: i32 = BOARD_HEIGHT;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from ASCII art for testing: every `#` becomes its own
    /// single-cell fixed shape, with identifiers counting up from 1 in
    /// reading order. `.` is an empty cell.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::new();
        let mut next_id = 1;
        for (row, line) in art
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
        {
            for (col, c) in line.chars().filter(|c| *c == '#' || *c == '.').enumerate() {
                if c == '#' {
                    board.add_shape(FixedShape::new(
                        ShapeId::new(next_id),
                        ShapeKind::O,
                        CellPattern::from_ascii("#"),
                        col as i32,
                        row as i32,
                    ));
                    next_id += 1;
                }
            }
        }
        board
    }

    /// Returns an iterator over the fixed shapes in landing order.
    pub fn shapes(&self) -> impl Iterator<Item = &FixedShape> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Appends a landed shape. Callers are responsible for validating the
    /// position first; the board itself never rejects a shape.
    pub fn add_shape(&mut self, shape: FixedShape) {
        self.shapes.push(shape);
    }

    /// Returns true if any fixed shape has a filled cell at the coordinate.
    #[must_use]
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        self.shapes.iter().any(|shape| shape.covers(col, row))
    }

    /// Returns true if every column of the row is occupied.
    #[must_use]
    pub fn is_row_full(&self, row: i32) -> bool {
        (0..Self::WIDTH).all(|col| self.is_occupied(col, row))
    }

    /// Checks whether the pattern can be placed with its top-left corner at
    /// the given anchor.
    ///
    /// Every filled cell must map to a column within `[0, WIDTH)` and a row
    /// below `HEIGHT`; cells at `row >= 0` must not overlap a fixed shape.
    /// Cells above the visible board (`row < 0`) are exempt from the
    /// occupancy check, so a freshly spawned piece may straddle the top
    /// boundary. A pattern with no filled cell never validates.
    #[must_use]
    pub fn can_place(&self, pattern: &CellPattern, anchor_col: i32, anchor_row: i32) -> bool {
        if pattern.is_blank() {
            return false;
        }
        for (dr, dc) in pattern.filled_offsets() {
            let col = anchor_col + dc;
            let row = anchor_row + dr;
            if col < 0 || col >= Self::WIDTH || row >= Self::HEIGHT {
                return false;
            }
            if row >= 0 && self.is_occupied(col, row) {
                return false;
            }
        }
        true
    }

    /// Returns the first fixed shape (in landing order) covering the
    /// coordinate.
    #[must_use]
    pub fn shape_at(&self, col: i32, row: i32) -> Option<&FixedShape> {
        self.shapes.iter().find(|shape| shape.covers(col, row))
    }

    /// Removes the shape with the given identifier, returning it.
    /// Unknown identifiers return `None` and leave the board unchanged.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<FixedShape> {
        let index = self.shapes.iter().position(|shape| shape.id == id)?;
        Some(self.shapes.remove(index))
    }

    /// Clears every full row, cascading until no row is full.
    ///
    /// Rows are scanned bottom-up. A full row removes every shape with at
    /// least one filled cell in it (whole-shape removal: cells outside the
    /// cleared row vanish with their shape), then every remaining shape whose
    /// anchor row is strictly above the cleared row shifts down one row. The
    /// same row index is re-examined afterwards, since rows above have
    /// shifted into it.
    ///
    /// Returns the number of cleared rows and the removed shapes, so the
    /// caller can drop their persisted tasks.
    pub fn clear_full_rows(&mut self) -> (usize, Vec<FixedShape>) {
        let mut cleared_rows = 0;
        let mut removed = Vec::new();

        let mut row = Self::HEIGHT - 1;
        while row >= 0 {
            if !self.is_row_full(row) {
                row -= 1;
                continue;
            }
            cleared_rows += 1;

            // Two-phase: collect the shapes touching this row, then mutate.
            let (hit, kept): (Vec<_>, Vec<_>) = self
                .shapes
                .drain(..)
                .partition(|shape| shape.intersects_row(row));
            self.shapes = kept;
            removed.extend(hit);

            for shape in &mut self.shapes {
                if shape.row < row {
                    shape.row += 1;
                }
            }
            // Check same row again
        }

        (cleared_rows, removed)
    }
}
