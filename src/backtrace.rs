//! Full-table computation, the global backtrace, and cell-local lookup.
//!
//! The backtrace walks from the bottom-right corner toward the origin.
//! On a mismatch it moves up when `table[i-1][j] >= table[i][j-1]`, the
//! same tie-break the evaluator uses for `FromTop`, so the walked path is
//! always compatible with the transition kinds recorded in the steps.

use crate::cell::evaluate;
use crate::table::{DpTable, Position};

/// Result of the global backtrace walk. Produced once per completed
/// table; immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktraceResult {
    /// Cells visited, from (m, n) down to (0, 0) inclusive. Once the walk
    /// hits a border it runs straight along it to the origin.
    pub path: Vec<Position>,
    /// Path cells where a diagonal/match move occurred.
    pub match_cells: Vec<Position>,
    /// The reconstructed longest common subsequence.
    pub lcs: String,
    /// Char index of each LCS char within `s1`, strictly ascending.
    pub s1_indices: Vec<usize>,
    /// Char index of each LCS char within `s2`, strictly ascending.
    pub s2_indices: Vec<usize>,
}

/// LCS reaching an arbitrary cell, from [`lcs_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLcs {
    pub lcs: String,
    pub s1_indices: Vec<usize>,
    pub s2_indices: Vec<usize>,
}

/// Fill the whole table in row-major order without emitting steps.
///
/// The non-animated fast path: row-major order is what satisfies the
/// evaluator's neighbor preconditions.
pub fn compute_full(s1: &str, s2: &str) -> DpTable {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("compute_full", m = s1.len(), n = s2.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut table = DpTable::new(s1.len(), s2.len());
    for i in 1..=s1.len() {
        for j in 1..=s2.len() {
            let value = evaluate(&s1, &s2, &table, i, j).value;
            table.set(i, j, value);
        }
    }
    table
}

/// Walk a fully computed table from (m, n) back to the origin,
/// reconstructing the LCS, the path, and the matched index lists.
///
/// `table` must be the fully computed DP table for `s1`/`s2` (e.g. from
/// [`compute_full`]); a table of the wrong shape panics.
pub fn backtrace(s1: &str, s2: &str, table: &DpTable) -> BacktraceResult {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    assert_eq!(
        table.rows(),
        s1.len() + 1,
        "table rows do not match s1 length"
    );
    assert_eq!(
        table.cols(),
        s2.len() + 1,
        "table cols do not match s2 length"
    );

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("backtrace", m = s1.len(), n = s2.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut path = Vec::new();
    let mut match_cells = Vec::new();
    let mut walk = Walk::new(&s1, &s2, table, s1.len(), s2.len());

    while walk.i > 0 && walk.j > 0 {
        path.push(Position::new(walk.i, walk.j));
        if walk.step_matched() {
            match_cells.push(*path.last().unwrap());
        }
    }

    // Pad along whichever border the walk landed on, down to the origin.
    while walk.i > 0 {
        path.push(Position::new(walk.i, 0));
        walk.i -= 1;
    }
    while walk.j > 0 {
        path.push(Position::new(0, walk.j));
        walk.j -= 1;
    }
    path.push(Position::new(0, 0));

    let (lcs, s1_indices, s2_indices) = walk.finish();
    BacktraceResult {
        path,
        match_cells,
        lcs,
        s1_indices,
        s2_indices,
    }
}

/// The LCS of the prefixes ending at `(row, col)`: the same walk as
/// [`backtrace`] started from an arbitrary cell, without path collection.
///
/// Useful for ad-hoc inspection of any already-computed cell, whether or
/// not the global backtrace has run. Panics if `(row, col)` is outside
/// the table.
pub fn lcs_at(s1: &str, s2: &str, table: &DpTable, row: usize, col: usize) -> CellLcs {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    assert!(
        row < table.rows() && col < table.cols(),
        "cell ({row}, {col}) outside a {}x{} table",
        table.rows(),
        table.cols()
    );

    let mut walk = Walk::new(&s1, &s2, table, row, col);
    while walk.i > 0 && walk.j > 0 {
        walk.step_matched();
    }
    let (lcs, s1_indices, s2_indices) = walk.finish();
    CellLcs {
        lcs,
        s1_indices,
        s2_indices,
    }
}

/// Shared walk state for the two backtrace entry points.
///
/// Characters and indices are collected in walk order (reverse) and
/// flipped once in [`Walk::finish`].
struct Walk<'a> {
    s1: &'a [char],
    s2: &'a [char],
    table: &'a DpTable,
    i: usize,
    j: usize,
    lcs_rev: Vec<char>,
    s1_indices: Vec<usize>,
    s2_indices: Vec<usize>,
}

impl<'a> Walk<'a> {
    fn new(s1: &'a [char], s2: &'a [char], table: &'a DpTable, i: usize, j: usize) -> Self {
        Self {
            s1,
            s2,
            table,
            i,
            j,
            lcs_rev: Vec::new(),
            s1_indices: Vec::new(),
            s2_indices: Vec::new(),
        }
    }

    /// Take one step toward the origin; returns whether it was a
    /// diagonal/match move. Requires `i > 0 && j > 0`.
    fn step_matched(&mut self) -> bool {
        if self.s1[self.i - 1] == self.s2[self.j - 1] {
            self.lcs_rev.push(self.s1[self.i - 1]);
            self.s1_indices.push(self.i - 1);
            self.s2_indices.push(self.j - 1);
            self.i -= 1;
            self.j -= 1;
            true
        } else if self.table.get(self.i - 1, self.j) >= self.table.get(self.i, self.j - 1) {
            // Ties move up, mirroring the evaluator's FromTop preference.
            self.i -= 1;
            false
        } else {
            self.j -= 1;
            false
        }
    }

    fn finish(mut self) -> (String, Vec<usize>, Vec<usize>) {
        self.lcs_rev.reverse();
        self.s1_indices.reverse();
        self.s2_indices.reverse();
        (
            self.lcs_rev.into_iter().collect(),
            self.s1_indices,
            self.s2_indices,
        )
    }
}
