use std::env;
use std::time::Instant;

use lcs_trace::{backtrace, compute_full, generate_steps, utils};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("step_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("LCS Step-Trace Probe: timeline size and memory cost");
    eprintln!("{}", "=".repeat(72));
    eprintln!();
    eprintln!("Every step carries a full deep-copy table snapshot, so the full");
    eprintln!("timeline costs O(m*n) snapshots of O(m*n) cells each. This probe");
    eprintln!("makes that trade-off visible across input sizes and verifies the");
    eprintln!("terminal step against the non-animated full-table computation.");
    eprintln!();
    eprintln!("Metrics:");
    eprintln!("  steps:         emitted timeline length (expected 3 + m + 3mn + 1)");
    eprintln!("  wall_s:        wall-clock seconds to generate the timeline");
    eprintln!("  rss_delta_kib: resident-set growth while the timeline is live");
    eprintln!();

    let mut sys = System::new();
    let sizes = options.sizes();
    let total = sizes.len();
    let mut measurements = Vec::with_capacity(total);

    for (idx, &len) in sizes.iter().enumerate() {
        eprint!("  [{}/{}] m = n = {len}... ", idx + 1, total);
        let s1 = cyclic_text(len, 0);
        let s2 = cyclic_text(len, 3);

        let before = rss_kib(&mut sys);
        let start = Instant::now();
        let steps = generate_steps(&s1, &s2);
        let wall_s = start.elapsed().as_secs_f64();
        let after = rss_kib(&mut sys);

        let table = compute_full(&s1, &s2);
        let last = steps.last().expect("timeline is never empty");
        let status = if steps.len() == utils::step_count(len, len)
            && last.value == table.corner()
            && backtrace(&s1, &s2, &table).lcs.chars().count() as u32 == table.corner()
        {
            "passed"
        } else {
            "FAILED"
        };

        eprintln!(
            "steps={}, lcs_len={}, time={wall_s:.3}s, status={status}",
            steps.len(),
            last.value
        );
        measurements.push(Measurement {
            len,
            steps: steps.len(),
            lcs_len: last.value,
            wall_s,
            rss_delta_kib: after.saturating_sub(before),
            status,
        });
        drop(steps);
    }

    eprintln!();
    println!("len,steps,lcs_len,wall_s,rss_delta_kib,status");
    for m in &measurements {
        println!(
            "{},{},{},{:.6},{},{}",
            m.len, m.steps, m.lcs_len, m.wall_s, m.rss_delta_kib, m.status
        );
    }

    if measurements.iter().any(|m| m.status == "FAILED") {
        std::process::exit(1);
    }
}

struct Measurement {
    len: usize,
    steps: usize,
    lcs_len: u32,
    wall_s: f64,
    rss_delta_kib: u64,
    status: &'static str,
}

struct Options {
    max_len: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut max_len = 256usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--max-len=") {
                max_len = parse_len(value)?;
            } else if arg == "--max-len" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-len".to_string())?
                    .into();
                max_len = parse_len(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self { max_len })
    }

    fn sizes(&self) -> Vec<usize> {
        // The UI caps inputs at 10 chars; sizes beyond that exist to show
        // where the snapshot-per-step cost goes as inputs grow.
        [4, 8, 10, 16, 32, 64, 128, 256, 512]
            .into_iter()
            .filter(|&len| len <= self.max_len)
            .collect()
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin step_probe [-- <options>]

Options:
  --max-len <N>   Largest input length to probe (default: 256)
  -h, --help      Print this help message

Examples:
  cargo run --bin step_probe
  cargo run --bin step_probe -- --max-len 64
"
        );
    }
}

fn parse_len(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .filter(|&len| len > 0)
        .ok_or_else(|| "max length must be a positive integer".to_string())
}

fn cyclic_text(len: usize, offset: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghij";
    (0..len)
        .map(|i| ALPHABET[(i + offset) % ALPHABET.len()] as char)
        .collect()
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        p.memory() / 1024
    } else {
        0
    }
}
