//! Cross-checks against an independently written textbook DP.

use lcs_trace::{compute_full, generate_steps};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn textbook_lcs_table(s: &[char], t: &[char]) -> Vec<Vec<u32>> {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if s[i - 1] == t[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp
}

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghij";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn assert_tables_equal(s1: &str, s2: &str) {
    let table = compute_full(s1, s2);
    let c1: Vec<char> = s1.chars().collect();
    let c2: Vec<char> = s2.chars().collect();
    let baseline = textbook_lcs_table(&c1, &c2);

    assert_eq!(table.rows(), baseline.len());
    for (i, row) in baseline.iter().enumerate() {
        for (j, &expected) in row.iter().enumerate() {
            assert_eq!(
                table.get(i, j),
                expected,
                "cell ({i}, {j}) for {s1:?} vs {s2:?}"
            );
        }
    }
}

#[test]
fn compute_full_matches_the_textbook_dp() {
    for (s1, s2) in [
        ("abcde", "ace"),
        ("abcbdab", "bdcaba"),
        ("aaaa", "aa"),
        ("", ""),
        ("abc", ""),
        ("", "abc"),
    ] {
        assert_tables_equal(s1, s2);
    }
}

#[test]
fn compute_full_matches_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x1c5_7ab1e);
    for _ in 0..200 {
        let len1 = rng.gen_range(0..=10);
        let s1 = random_text(&mut rng, len1);
        let len2 = rng.gen_range(0..=10);
        let s2 = random_text(&mut rng, len2);
        assert_tables_equal(&s1, &s2);
    }
}

#[test]
fn sequencer_and_fast_path_agree_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let len1 = rng.gen_range(0..=10);
        let s1 = random_text(&mut rng, len1);
        let len2 = rng.gen_range(0..=10);
        let s2 = random_text(&mut rng, len2);
        let steps = generate_steps(&s1, &s2);
        let table = compute_full(&s1, &s2);
        assert_eq!(steps.last().unwrap().snapshot, table);
        assert_eq!(steps.last().unwrap().value, table.corner());
    }
}
