//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of grids on *your* machine.
//! - Loads the dictionary once, then searches each grid several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few found words:        `cargo run --bin bench_local --release -- -p 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Not statistically rigorous. Use the same machine and `--release` for comparable numbers.
//! - Grids live in `get_cases()` below.
//! - One warm-up run per grid is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::dictionary::Dictionary;
use wordgrid::grid::Grid;
use wordgrid::sink::WordCounter;
use wordgrid::solver;

/// Simple local benchmark runner: load the dictionary once, time several grids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file ("word" or "word;score" per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    dictionary: String,

    /// Minimum score filter
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Number of repeats per grid (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many distinct words per grid (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: grid letters (row-major) and dimensions.
#[derive(Clone)]
struct Case {
    letters: &'static str,
    rows: usize,
    cols: usize,
}

/// Edit/add new grids here. The summary displays the letters as the "name".
fn get_cases() -> Vec<Case> {
    vec![
        Case { letters: "abansdfdghjoklnz", rows: 4, cols: 4 },
        Case { letters: "seatrnodlpiecmuh", rows: 4, cols: 4 },
        Case { letters: "eeeeeeeeeeeeeeee", rows: 4, cols: 4 },
        Case { letters: "streamingplatedo", rows: 4, cols: 4 },
        Case { letters: "quartzedlinesofmightpbcka", rows: 5, cols: 5 },
        Case { letters: "tonsilerastediceloarnpegs", rows: 5, cols: 5 },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 28;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// One row in the benchmark summary: (grid name, median seconds, emissions, distinct words).
    type SummaryRow = (String, f64, usize, usize);

    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary, cli.min_score)?;
    eprintln!("Loaded {} entries in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let grid = match Grid::new(case.letters, case.rows, case.cols) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("  ✗ Bad case {}: {}", case.letters, e.display_detailed());
                continue;
            }
        };
        eprintln!("\n[{:02}] {} ({}x{})", idx + 1, case.letters, case.rows, case.cols);

        // Warm-up run, timing ignored.
        let _warmup = solver::find_words(&grid, &dictionary);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = WordCounter::new();

        for rep in 0..cli.num_repeats {
            let mut counter = WordCounter::new();
            let t_solve = Instant::now();
            let report = solver::solve_grid(black_box(&grid), &dictionary, &mut counter);
            let solve_secs = t_solve.elapsed().as_secs_f64();

            let _keep = black_box(report.stats.words_emitted);
            times.push(solve_secs);

            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} emitted, {} distinct, {} queries)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                counter.total(),
                counter.distinct(),
                report.stats.oracle_queries
            );
            last = counter;
        }

        let med = median(times);

        if cli.print_limit > 0 {
            let mut words: Vec<(&String, &usize)> = last.counts().iter().collect();
            words.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()).then(a.0.cmp(b.0)));
            for (word, paths) in words.into_iter().take(cli.print_limit) {
                println!("{word} ({paths} {})", pluralizer(*paths, "path".into(), None));
            }
        }

        eprintln!("  → median {:.4}s over {} run(s)", med, cli.num_repeats);
        summary.push((case.letters.to_string(), med, last.total(), last.distinct()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_NAME_LEN$} | {:>10} | {:>9} | {:>9}",
        "grid", "median (s)", "# emitted", "# words"
    );
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<9}-+-{:-<9}", "", "", "", "");
    for (name, med, emitted, distinct) in &summary {
        let display = if name.chars().count() > MAX_NAME_LEN {
            format!("{}…", name.chars().take(MAX_NAME_LEN - 1).collect::<String>())
        } else {
            name.clone()
        };
        eprintln!("{display:<MAX_NAME_LEN$} | {med:>10.4} | {emitted:>9} | {distinct:>9}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "path".into(), None), "paths");
        assert_eq!(pluralizer(1, "path".into(), None), "path");
        assert_eq!(pluralizer(2, "radius".into(), Some("radii".into())), "radii");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_fit_their_dimensions() {
        for case in get_cases() {
            assert!(Grid::new(case.letters, case.rows, case.cols).is_ok(), "{}", case.letters);
        }
    }
}
