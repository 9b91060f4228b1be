use lcs_trace::{backtrace, compute_full, generate_steps, lcs_at, utils, Position, Transition};
use proptest::prelude::*;

/// True if `needle` is a subsequence of `haystack`.
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|c| chars.any(|h| h == c))
}

fn strictly_ascending(indices: &[usize]) -> bool {
    indices.windows(2).all(|w| w[0] < w[1])
}

fn path_contiguous(path: &[Position]) -> bool {
    path.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        let di = a.row as isize - b.row as isize;
        let dj = a.col as isize - b.col as isize;
        matches!((di, dj), (1, 0) | (0, 1) | (1, 1))
    })
}

proptest! {
    #[test]
    fn lcs_is_a_common_subsequence_of_expected_length(
        s1 in "[a-j]{0,10}",
        s2 in "[a-j]{0,10}",
    ) {
        let table = compute_full(&s1, &s2);
        let result = backtrace(&s1, &s2, &table);
        prop_assert!(is_subsequence(&result.lcs, &s1));
        prop_assert!(is_subsequence(&result.lcs, &s2));
        prop_assert_eq!(result.lcs.chars().count() as u32, table.corner());
    }

    #[test]
    fn index_lists_locate_the_lcs(
        s1 in "[a-j]{0,10}",
        s2 in "[a-j]{0,10}",
    ) {
        let table = compute_full(&s1, &s2);
        let result = backtrace(&s1, &s2, &table);
        let c1: Vec<char> = s1.chars().collect();
        let c2: Vec<char> = s2.chars().collect();
        let lcs: Vec<char> = result.lcs.chars().collect();

        prop_assert_eq!(result.s1_indices.len(), lcs.len());
        prop_assert_eq!(result.s2_indices.len(), lcs.len());
        prop_assert!(strictly_ascending(&result.s1_indices));
        prop_assert!(strictly_ascending(&result.s2_indices));
        for (k, &ch) in lcs.iter().enumerate() {
            prop_assert_eq!(c1[result.s1_indices[k]], ch);
            prop_assert_eq!(c2[result.s2_indices[k]], ch);
        }
    }

    #[test]
    fn path_runs_from_corner_to_origin(
        s1 in "[a-j]{0,10}",
        s2 in "[a-j]{0,10}",
    ) {
        let m = s1.chars().count();
        let n = s2.chars().count();
        let table = compute_full(&s1, &s2);
        let result = backtrace(&s1, &s2, &table);

        prop_assert_eq!(*result.path.first().unwrap(), Position::new(m, n));
        prop_assert_eq!(*result.path.last().unwrap(), Position::new(0, 0));
        prop_assert!(path_contiguous(&result.path));
        for cell in &result.match_cells {
            prop_assert!(result.path.contains(cell));
        }
        prop_assert_eq!(result.match_cells.len(), result.lcs.chars().count());
    }

    /// The walk's tie-break mirrors the evaluator's, so every interior
    /// path cell it leaves upward must have been recorded FromTop, and
    /// every leftward one FromLeft.
    #[test]
    fn path_consistent_with_transitions(
        s1 in "[a-j]{1,10}",
        s2 in "[a-j]{1,10}",
    ) {
        let table = compute_full(&s1, &s2);
        let result = backtrace(&s1, &s2, &table);
        let steps = generate_steps(&s1, &s2);

        for w in result.path.windows(2) {
            let (from, to) = (w[0], w[1]);
            if from.row == 0 || from.col == 0 {
                continue; // border padding has no recorded transition
            }
            let step = steps
                .iter()
                .find(|s| s.is_assign() && s.cell == Some(from))
                .unwrap();
            let up = to.row + 1 == from.row && to.col == from.col;
            let left = to.row == from.row && to.col + 1 == from.col;
            match step.transition.as_ref().unwrap() {
                Transition::Match => prop_assert!(!up && !left),
                Transition::FromTop(_) => prop_assert!(up),
                Transition::FromLeft(_) => prop_assert!(left),
            }
        }
    }

    #[test]
    fn lcs_at_the_corner_matches_the_global_walk(
        s1 in "[a-j]{0,10}",
        s2 in "[a-j]{0,10}",
    ) {
        let m = s1.chars().count();
        let n = s2.chars().count();
        let table = compute_full(&s1, &s2);
        let global = backtrace(&s1, &s2, &table);
        let local = lcs_at(&s1, &s2, &table, m, n);
        prop_assert_eq!(local.lcs, global.lcs);
        prop_assert_eq!(local.s1_indices, global.s1_indices);
        prop_assert_eq!(local.s2_indices, global.s2_indices);
    }

    #[test]
    fn lcs_at_any_cell_matches_the_prefix_problem(
        s1 in "[a-j]{1,8}",
        s2 in "[a-j]{1,8}",
        row_frac in 0.0f64..=1.0,
        col_frac in 0.0f64..=1.0,
    ) {
        let c1: Vec<char> = s1.chars().collect();
        let c2: Vec<char> = s2.chars().collect();
        let row = (row_frac * c1.len() as f64).floor() as usize;
        let col = (col_frac * c2.len() as f64).floor() as usize;

        let table = compute_full(&s1, &s2);
        let local = lcs_at(&s1, &s2, &table, row, col);

        // The walk from (row, col) solves the prefix problem.
        let p1: String = c1[..row].iter().collect();
        let p2: String = c2[..col].iter().collect();
        let prefix_table = compute_full(&p1, &p2);
        prop_assert_eq!(local.lcs.chars().count() as u32, table.get(row, col));
        prop_assert_eq!(table.get(row, col), prefix_table.corner());
        prop_assert!(is_subsequence(&local.lcs, &p1));
        prop_assert!(is_subsequence(&local.lcs, &p2));
    }

    #[test]
    fn step_count_formula_holds(
        m in 0usize..12,
        n in 0usize..12,
    ) {
        let s1 = "a".repeat(m);
        let s2 = "b".repeat(n);
        prop_assert_eq!(generate_steps(&s1, &s2).len(), utils::step_count(m, n));
    }
}
