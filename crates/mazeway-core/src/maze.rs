//! The [`Maze`] type — an immutable rectangular grid of wall bitmasks.
//!
//! Constructed once per solve from upstream cell codes, validated eagerly,
//! then only read. Storage is a flat row-major vector.

use thiserror::Error;

use crate::moves::Move;
use crate::pos::Pos;
use crate::walls::Walls;

/// Validation failure for maze input.
///
/// Malformed input is a contract violation by the producer of the grid, so
/// construction fails fast with a descriptive error instead of letting a
/// broken grid reach the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze grid is empty")]
    Empty,
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },
    #[error("cell ({row}, {col}) has wall code {value}, expected 0-15")]
    CellOutOfRange { row: usize, col: usize, value: u8 },
    #[error("goal ({row}, {col}) outside {rows}x{cols} grid")]
    GoalOutOfBounds { row: i32, col: i32, rows: usize, cols: usize },
}

/// An immutable rectangular maze of [`Walls`] cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Walls>,
    rows: usize,
    cols: usize,
}

impl Maze {
    /// Build a maze from per-row cell codes.
    ///
    /// Validates that the grid is non-empty, rectangular, and that every
    /// cell code fits in 4 bits.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedRow {
                    row: r,
                    expected: width,
                    got: row.len(),
                });
            }
            for (c, &code) in row.iter().enumerate() {
                let walls = Walls::from_code(code).ok_or(MazeError::CellOutOfRange {
                    row: r,
                    col: c,
                    value: code,
                })?;
                cells.push(walls);
            }
        }

        Ok(Self {
            cells,
            rows: height,
            cols: width,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the maze has no cells. Always false for a validated maze.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// The wall mask at `p`. Out-of-bounds positions read as fully walled,
    /// which makes them impassable under [`open`](Maze::open).
    #[inline]
    pub fn at(&self, p: Pos) -> Walls {
        match self.idx(p) {
            Some(i) => self.cells[i],
            None => Walls::ALL,
        }
    }

    /// Convert a position to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        Pos::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Edge traversal predicate: whether the step `mv` from `from` is open.
    ///
    /// The step is permitted only if the destination is in bounds and
    /// *neither* side claims a wall: not the departing side of the source
    /// cell, and not the arriving side of the destination cell. Wall data is
    /// not assumed symmetric between neighbours, so both unilateral checks
    /// run and either one blocks.
    #[inline]
    pub fn open(&self, from: Pos, mv: Move) -> bool {
        let to = mv.apply(from);
        if !self.contains(to) {
            return false;
        }
        let (near, far) = mv.blocking_bits();
        !self.at(from).contains(near) && !self.at(to).contains(far)
    }

    /// The raw cell codes, row by row. Inverse of [`from_rows`](Maze::from_rows).
    pub fn wall_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|w| w.bits()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(rows: &[Vec<u8>]) -> Maze {
        Maze::from_rows(rows).unwrap()
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(Maze::from_rows(&[]), Err(MazeError::Empty));
        assert_eq!(Maze::from_rows(&[vec![]]), Err(MazeError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Maze::from_rows(&[vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            MazeError::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn rejects_oversized_cell_code() {
        let err = Maze::from_rows(&[vec![0, 16]]).unwrap_err();
        assert_eq!(
            err,
            MazeError::CellOutOfRange {
                row: 0,
                col: 1,
                value: 16
            }
        );
    }

    #[test]
    fn flat_index_round_trip() {
        let m = maze(&[vec![0, 0, 0], vec![0, 0, 0]]);
        for i in 0..m.len() {
            assert_eq!(m.idx(m.pos(i)), Some(i));
        }
        assert_eq!(m.idx(Pos::new(-1, 0)), None);
        assert_eq!(m.idx(Pos::new(0, 3)), None);
        assert_eq!(m.idx(Pos::new(2, 0)), None);
    }

    #[test]
    fn out_of_bounds_reads_fully_walled() {
        let m = maze(&[vec![0]]);
        assert_eq!(m.at(Pos::new(5, 5)), Walls::ALL);
    }

    #[test]
    fn open_requires_both_sides_clear() {
        // (0,0) has no walls, (0,1) has a left wall: blocked both ways.
        let m = maze(&[vec![0, 8]]);
        assert!(!m.open(Pos::new(0, 0), Move::Right));
        assert!(!m.open(Pos::new(0, 1), Move::Left));
    }

    #[test]
    fn asymmetric_encoding_still_blocks() {
        // (0,0) claims a right wall, (0,1) claims nothing toward it.
        let m = maze(&[vec![2, 0]]);
        assert!(!m.open(Pos::new(0, 0), Move::Right));
        assert!(!m.open(Pos::new(0, 1), Move::Left));
    }

    #[test]
    fn open_edge_both_clear() {
        let m = maze(&[vec![0, 0]]);
        assert!(m.open(Pos::new(0, 0), Move::Right));
        assert!(m.open(Pos::new(0, 1), Move::Left));
    }

    #[test]
    fn grid_boundary_is_closed() {
        let m = maze(&[vec![0]]);
        for mv in Move::ALL {
            assert!(!m.open(Pos::new(0, 0), mv));
        }
    }

    #[test]
    fn wall_codes_round_trip() {
        let rows = vec![vec![6, 12], vec![3, 9]];
        assert_eq!(maze(&rows).wall_codes(), rows);
    }
}
