//! DP table storage and the (row, col) coordinate type.
//!
//! The table is the one piece of state the rest of the crate threads
//! around: the sequencer mutates a private copy in place and stamps
//! deep-copy snapshots into every emitted step, so `Clone` here *is* the
//! snapshot operation.

use std::fmt;

/// A (row, col) pair indexing into the DP table.
///
/// Rows index prefixes of the first string, columns of the second:
/// row ∈ [0, m], col ∈ [0, n].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The (m+1) × (n+1) LCS dynamic-programming table.
///
/// Row 0 and column 0 encode the empty-prefix base case and stay zero for
/// the table's whole lifetime. Interior cells are written exactly once, in
/// row-major dependency order, by [`crate::generate_steps`] or
/// [`crate::compute_full`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    cells: Vec<Vec<u32>>,
}

impl DpTable {
    /// Allocate an all-zero table for inputs of length `m` and `n`.
    ///
    /// `m = 0` or `n = 0` is fine: the result is just the zero border,
    /// which is already correct (the LCS against an empty string is empty).
    pub fn new(m: usize, n: usize) -> Self {
        Self {
            cells: vec![vec![0; n + 1]; m + 1],
        }
    }

    /// Number of rows, `m + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, `n + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Write an interior cell.
    ///
    /// # Panics
    /// Panics if the position is out of bounds; writing into row 0 or
    /// column 0 is a caller bug (the zero border is fixed) and trips a
    /// debug assertion.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(
            row >= 1 && col >= 1,
            "cell ({row}, {col}) is on the fixed zero border"
        );
        self.cells[row][col] = value;
    }

    /// Value in the bottom-right corner: the LCS length once the table is
    /// fully computed.
    #[inline]
    pub fn corner(&self) -> u32 {
        self.cells[self.rows() - 1][self.cols() - 1]
    }

    /// Rows as slices, top to bottom. What a renderer walks.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_shape_and_zeroes() {
        for m in 0..6 {
            for n in 0..6 {
                let t = DpTable::new(m, n);
                assert_eq!(t.rows(), m + 1);
                assert_eq!(t.cols(), n + 1);
                for row in t.iter_rows() {
                    assert!(row.iter().all(|&v| v == 0));
                }
            }
        }
    }

    #[test]
    fn empty_inputs_still_have_the_border() {
        let t = DpTable::new(0, 0);
        assert_eq!(t.rows(), 1);
        assert_eq!(t.cols(), 1);
        assert_eq!(t.corner(), 0);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let mut t = DpTable::new(3, 4);
        t.set(2, 3, 7);
        assert_eq!(t.get(2, 3), 7);
        assert_eq!(t.get(2, 2), 0);
    }

    #[test]
    fn clone_is_a_deep_snapshot() {
        let mut t = DpTable::new(2, 2);
        t.set(1, 1, 1);
        let snap = t.clone();
        t.set(2, 2, 9);
        assert_eq!(snap.get(1, 1), 1);
        assert_eq!(snap.get(2, 2), 0);
        assert_eq!(t.get(2, 2), 9);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let t = DpTable::new(1, 1);
        let _ = t.get(2, 0);
    }
}
