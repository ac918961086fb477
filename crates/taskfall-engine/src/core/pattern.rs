/// 2-D boolean cell matrix describing which cells of a shape are filled.
///
/// Patterns are row-major and rectangular. Dimensions vary per shape (the
/// I-template is 1×4, the O-template 2×2, the rest 2×3) and transpose under
/// rotation, so rows are heap-allocated rather than fixed-size arrays.
///
/// # Coordinate System
///
/// Offsets are `(row, col)` relative to the pattern's top-left corner. A
/// pattern is placed on the board by adding its anchor position to every
/// filled offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPattern {
    rows: Vec<Vec<bool>>,
}

impl CellPattern {
    pub(crate) fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        assert!(!rows.is_empty(), "pattern must have at least one row");
        let width = rows[0].len();
        assert!(width > 0, "pattern rows must not be empty");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "pattern rows must all have the same length"
        );
        Self { rows }
    }

    /// Creates a pattern from ASCII art.
    /// '#' represents a filled cell, '.' an empty cell.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let rows: Vec<Vec<bool>> = art
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| *c == '#' || *c == '.')
                    .map(|c| c == '#')
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Pattern width in cells (number of columns).
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> i32 {
        self.rows[0].len() as i32
    }

    /// Pattern height in cells (number of rows).
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|r| r.get(col).copied().unwrap_or(false))
    }

    /// Returns true if the pattern has no filled cell at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|cell| !cell))
    }

    /// Returns an iterator of `(row, col)` offsets of the filled cells.
    #[expect(clippy::cast_possible_truncation)]
    pub fn filled_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dr, row)| {
            row.iter().enumerate().filter_map(move |(dc, &cell)| {
                if cell { Some((dr as i32, dc as i32)) } else { None }
            })
        })
    }

    /// Returns the pattern rotated 90° clockwise.
    ///
    /// The cell at `(row, col)` moves to `(col, num_rows - 1 - row)` in the
    /// output, so the dimensions transpose. No offset correction is applied;
    /// validating the rotated pattern at its anchor is the caller's job.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let num_rows = self.rows.len();
        let num_cols = self.rows[0].len();
        let mut out = vec![vec![false; num_rows]; num_cols];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell {
                    out[c][num_rows - 1 - r] = true;
                }
            }
        }
        Self { rows: out }
    }
}
