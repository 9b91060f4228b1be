//! Per-cell evaluation of the LCS recurrence.
//!
//! [`evaluate`] is the single place the recurrence lives. It is free of
//! side effects: it reads the three already-final neighbors of a cell and
//! reports the value, the rule that fired, and the cells it consulted.
//! Writing the value back is the caller's job (the sequencer's, or
//! [`crate::compute_full`]'s).

use crate::table::{DpTable, Position};

/// Which transition rule produced a cell's value.
///
/// The mismatch variants carry the neighbor comparison so the losing
/// candidate stays displayable; a `Match` has nothing to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Characters matched; the value is the diagonal neighbor plus one.
    Match,
    /// Characters differed and the top neighbor won. Ties go to the top.
    FromTop(ComparisonInfo),
    /// Characters differed and the left neighbor was strictly larger.
    FromLeft(ComparisonInfo),
}

impl Transition {
    /// The neighbor comparison, present exactly on mismatch transitions.
    pub fn comparison(&self) -> Option<&ComparisonInfo> {
        match self {
            Transition::Match => None,
            Transition::FromTop(info) | Transition::FromLeft(info) => Some(info),
        }
    }

    /// True for the diagonal/match rule.
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Transition::Match)
    }
}

/// Both candidates of a mismatch comparison, winner and loser alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonInfo {
    /// `table[i-1][j]`.
    pub top_value: u32,
    /// `table[i][j-1]`.
    pub left_value: u32,
    pub top_cell: Position,
    pub left_cell: Position,
}

/// Result of evaluating one interior cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellComputation {
    pub value: u32,
    pub transition: Transition,
    /// Cells consulted, in display order. A mismatch records both
    /// candidates (top first) even though only one wins.
    pub source_cells: Vec<Position>,
}

/// Evaluate cell `(i, j)` of the LCS recurrence without writing it.
///
/// `s1` and `s2` are the inputs as char slices; `i` and `j` are 1-based,
/// so the compared characters are `s1[i-1]` and `s2[j-1]`.
///
/// Preconditions (caller bugs, not runtime conditions): `1 <= i <=
/// s1.len()`, `1 <= j <= s2.len()`, and the top, left, and diagonal
/// neighbors of `(i, j)` must already hold final values. Row-major fill
/// order guarantees the latter.
pub fn evaluate(s1: &[char], s2: &[char], table: &DpTable, i: usize, j: usize) -> CellComputation {
    debug_assert!(
        (1..=s1.len()).contains(&i),
        "row {i} outside 1..={}",
        s1.len()
    );
    debug_assert!(
        (1..=s2.len()).contains(&j),
        "col {j} outside 1..={}",
        s2.len()
    );
    debug_assert!(table.rows() > i && table.cols() > j, "table too small");

    if s1[i - 1] == s2[j - 1] {
        return CellComputation {
            value: table.get(i - 1, j - 1) + 1,
            transition: Transition::Match,
            source_cells: vec![Position::new(i - 1, j - 1)],
        };
    }

    let top_cell = Position::new(i - 1, j);
    let left_cell = Position::new(i, j - 1);
    let top = table.get(i - 1, j);
    let left = table.get(i, j - 1);
    let info = ComparisonInfo {
        top_value: top,
        left_value: left,
        top_cell,
        left_cell,
    };
    let transition = if top >= left {
        Transition::FromTop(info)
    } else {
        Transition::FromLeft(info)
    };

    CellComputation {
        value: top.max(left),
        transition,
        source_cells: vec![top_cell, left_cell],
    }
}
