//! Example: trace the LCS computation of two short strings.
//!
//! Run with:
//! `cargo run --example trace`

use lcs_trace::{backtrace, compute_full, generate_steps, Phase};

fn main() {
    let s1 = "abcde";
    let s2 = "ace";

    let steps = generate_steps(s1, s2);
    println!("traced \"{s1}\" vs \"{s2}\": {} steps", steps.len());
    println!();

    for (idx, step) in steps.iter().enumerate() {
        let cell = step
            .cell
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".into());
        let detail = match step.phase {
            Phase::Compare => format!(
                "compare '{}' vs '{}'",
                step.char1.unwrap(),
                step.char2.unwrap()
            ),
            Phase::MatchAssign => format!("match, write {}", step.value),
            Phase::MismatchAssign => {
                let info = step
                    .transition
                    .as_ref()
                    .and_then(|t| t.comparison())
                    .expect("mismatch assigns carry the comparison");
                format!(
                    "mismatch, max(top {}, left {}) = {}",
                    info.top_value, info.left_value, step.value
                )
            }
            Phase::Return => format!("return {}", step.value),
            _ => String::new(),
        };
        println!("{idx:3}  {:15?} {cell:8} {detail}", step.phase);
    }

    let table = compute_full(s1, s2);
    let result = backtrace(s1, s2, &table);
    println!();
    println!("LCS length: {}", table.corner());
    println!("LCS: {}", result.lcs);
    println!("indices in s1: {:?}", result.s1_indices);
    println!("indices in s2: {:?}", result.s2_indices);
    println!("backtrace path: {} cells", result.path.len());
}
