//! Assorted helpers.

/// Total number of steps [`crate::generate_steps`] emits for inputs of
/// length `m` and `n`.
///
/// The timeline is 3 parameter/allocation steps, one loop-entry step per
/// row, three steps per cell (inner loop entry, compare, assign), and one
/// terminal return step: `3 + m + 3*m*n + 1`.
///
/// Exposed so callers can pre-size buffers and tests can pin the
/// sequencer's emission contract.
#[inline]
pub fn step_count(m: usize, n: usize) -> usize {
    3 + m + 3 * m * n + 1
}
