use clap::Parser;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use wordgrid::dictionary::Dictionary;
use wordgrid::grid::Grid;
use wordgrid::sink::UniqueWords;
use wordgrid::solver::{self, SearchConfig, SearchReport, SearchStatus, SolverError};

/// Find every dictionary word traceable through adjacent cells of a letter grid
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Grid letters, row-major (e.g., "abansdfdghjoklnz" for a 4x4 grid)
    letters: String,

    /// Number of grid rows (default: infer a square grid)
    #[arg(short, long, requires = "cols")]
    rows: Option<usize>,

    /// Number of grid columns (default: infer a square grid)
    #[arg(short, long, requires = "rows")]
    cols: Option<usize>,

    /// Path to the dictionary file ("word" or "word;score" per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    dictionary: String,

    /// Minimum score filter for scored dictionary lines
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Print each word once instead of once per path
    #[arg(short, long)]
    unique: bool,

    /// Stop seeding new starting cells after this many seconds
    #[arg(short = 't', long, value_parser = parse_time_limit)]
    time_limit: Option<Duration>,
}

/// Parse `--time-limit` as a non-negative, finite number of seconds.
fn parse_time_limit(arg: &str) -> Result<Duration, String> {
    let secs: f64 = arg.trim().parse().map_err(|e| format!("'{arg}' is not a number of seconds: {e}"))?;
    if secs < 0.0 {
        return Err(format!("time limit must not be negative (got {secs})"));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("time limit {arg} is out of range: {e}"))
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], printing any error in detailed form before
/// exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    log::info!("Starting wordgrid");

    if let Err(e) = try_main() {
        eprintln!("Error: {}", e.display_detailed());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic:
/// 1. Parse CLI arguments.
/// 2. Build the grid (letters are lowercased to match the dictionary).
/// 3. Load the dictionary.
/// 4. Search, printing words on stdout as they are found (or once at the end with `--unique`).
/// 5. Print diagnostics on stderr.
fn try_main() -> Result<(), SolverError> {
    let cli = Cli::parse();

    let letters = cli.letters.trim().to_lowercase();
    let grid = match (cli.rows, cli.cols) {
        (Some(rows), Some(cols)) => Grid::new(&letters, rows, cols)?,
        _ => Grid::square(&letters)?,
    };

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary, cli.min_score)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let mut config = SearchConfig::default();
    if let Some(limit) = cli.time_limit {
        config = config.with_time_budget(limit);
    }

    let (report, printed) = if cli.unique {
        let mut sink = UniqueWords::new();
        let report = solver::solve_grid_with(&grid, &dictionary, &mut sink, &config);
        for word in sink.words() {
            println!("{word}");
        }
        (report, sink.len())
    } else {
        let mut printed = 0usize;
        let mut sink = |word: &str| {
            println!("{word}");
            printed += 1;
        };
        let report = solver::solve_grid_with(&grid, &dictionary, &mut sink, &config);
        (report, printed)
    };

    print_summary(&report, printed, dictionary.len(), load_secs);
    Ok(())
}

fn print_summary(report: &SearchReport, printed: usize, dictionary_len: usize, load_secs: f64) {
    match report.status {
        SearchStatus::TimedOut { elapsed, cells_searched } => {
            eprintln!(
                "⚠️  Timed out after {:.1}s with {cells_searched} starting cells searched; some words may be missing",
                elapsed.as_secs_f64()
            );
        }
        SearchStatus::Exhausted => {
            eprintln!("✓ Every starting cell searched");
        }
    }

    if report.stats.oracle_failures > 0 {
        eprintln!("⚠️  {} branches abandoned after dictionary failures", report.stats.oracle_failures);
    }

    eprintln!(
        "Loaded {} entries in {:.3}s; searched in {:.3}s ({} words printed, {} emitted, {} dictionary queries).",
        dictionary_len,
        load_secs,
        report.elapsed.as_secs_f64(),
        printed,
        report.stats.words_emitted,
        report.stats.oracle_queries
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_limit_accepts_seconds() {
        assert_eq!(parse_time_limit("2.5"), Ok(Duration::from_millis(2500)));
        assert_eq!(parse_time_limit("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn test_parse_time_limit_rejects_unrepresentable_values() {
        for arg in ["1e30", "inf", "NaN", "-1", "soon"] {
            assert!(parse_time_limit(arg).is_err(), "{arg} should be rejected");
        }
    }

    #[test]
    fn test_cli_reports_bad_time_limit() {
        let err = Cli::try_parse_from(["wordgrid", "abcd", "--time-limit", "1e30"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        let cli = Cli::try_parse_from(["wordgrid", "abcd", "-t", "1.5"]).unwrap();
        assert_eq!(cli.time_limit, Some(Duration::from_millis(1500)));
    }
}
