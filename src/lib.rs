//! Replayable step-trace engine for the Longest Common Subsequence DP.
//!
//! This crate computes the classic LCS dynamic program and, separately,
//! decomposes that computation into a deterministic timeline of discrete
//! steps suitable for forward/backward scrubbing in a visualizer:
//! 1. [`DpTable::new`] allocates the zero-bordered (m+1)×(n+1) table.
//! 2. [`evaluate`] computes one interior cell and reports which transition
//!    rule fired and which neighbors it consulted.
//! 3. [`generate_steps`] replays the whole fill as an ordered sequence of
//!    immutable [`AnimationStep`]s, each carrying a full table snapshot.
//! 4. [`backtrace`] recovers the LCS string and its path from a finished
//!    table; [`lcs_at`] does the same walk from any interior cell.
//!
//! The step sequence is the sole interface the animation controller and
//! rendering layers consume; they own navigation over it, never mutation.
//!
//! ## Quick start
//! ```
//! use lcs_trace::{backtrace, compute_full, generate_steps, utils};
//!
//! let steps = generate_steps("abcde", "ace");
//! assert_eq!(steps.len(), utils::step_count(5, 3));
//!
//! let table = compute_full("abcde", "ace");
//! let result = backtrace("abcde", "ace", &table);
//! assert_eq!(result.lcs, "ace");
//! assert_eq!(result.s1_indices, vec![0, 2, 4]);
//! ```
//!
//! ## Complexity
//! Every operation is a bounded, synchronous pure computation: O(m·n) time
//! and space for a table, plus O(m·n) snapshots of O(m·n) cells each for
//! the full step sequence. The crate is aimed at the short inputs a
//! visualizer shows; there is no rolling-array variant because the whole
//! table is the thing being displayed.

pub mod backtrace;
pub mod cell;
pub mod sequencer;
pub mod table;
pub mod utils;

pub use crate::backtrace::{backtrace, compute_full, lcs_at, BacktraceResult, CellLcs};
pub use crate::cell::{evaluate, CellComputation, ComparisonInfo, Transition};
pub use crate::sequencer::{generate_steps, AnimationStep, Phase, VarState};
pub use crate::table::{DpTable, Position};
