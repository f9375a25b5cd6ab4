//! The path-search engine: finds every dictionary word traceable on a grid.
//!
//! A word is traceable if its letters can be read along a path of distinct,
//! pairwise-adjacent cells (all eight neighbors count as adjacent). The
//! driver seeds a one-letter path at every cell; the recursive search then
//! asks the [`PrefixOracle`] about the current candidate, emits it if it is
//! complete, prunes if it is absent, and otherwise extends the path through
//! each unused neighbor in clockwise order.
//!
//! # Error Handling
//!
//! The search itself cannot fail. [`SolverError`] only covers the
//! convenience entry points that also build a grid:
//!
//! - S001: `Grid` (Grid construction failed (wraps [`GridError`]))
//! - S002: `Dictionary` (Dictionary loading failed (wraps [`DictionaryError`]))
//!
//! Oracle failures are local: the branch that hit one is abandoned, the
//! failure is logged and counted in [`SearchStats::oracle_failures`], and the
//! search carries on.
//!
//! # Examples
//!
//! ```
//! use wordgrid::dictionary::Dictionary;
//! use wordgrid::grid::Grid;
//! use wordgrid::solver::{self, SearchStatus};
//!
//! let grid = Grid::new("ABCD", 2, 2)?;
//! let dictionary = Dictionary::from_words(["AB", "AC", "ABD"]);
//!
//! let mut found: Vec<String> = Vec::new();
//! let report = solver::solve_grid(&grid, &dictionary, &mut found);
//!
//! assert_eq!(found, vec!["AB", "ABD", "AC"]);
//! assert_eq!(report.status, SearchStatus::Exhausted);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::adjacency::Neighbors;
use crate::errors::{DictionaryError, GridError};
use crate::grid::{Cell, Grid};
use crate::oracle::PrefixOracle;
use crate::path_state::PathState;
use crate::sink::WordSink;
use instant::Instant;
use log::{debug, trace, warn};
use std::time::Duration;

/// How the run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every starting cell was searched.
    Exhausted,

    /// The time budget expired before all starting cells were seeded.
    /// `cells_searched` starting cells were searched completely.
    TimedOut { elapsed: Duration, cells_searched: usize },
}

/// Counters collected during a run. They never influence the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Oracle queries made (one per search node).
    pub oracle_queries: usize,
    /// Words handed to the sink.
    pub words_emitted: usize,
    /// Candidates pruned by an `Absent` verdict.
    pub pruned_branches: usize,
    /// Branches abandoned because the oracle failed.
    pub oracle_failures: usize,
    /// Longest candidate queried, in letters.
    pub max_depth: usize,
}

/// Outcome of one driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub status: SearchStatus,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Knobs for a search session. Grid dimensions live on the [`Grid`] itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock limit, checked between starting cells. `None` = unlimited.
    pub time_budget: Option<Duration>,
}

impl SearchConfig {
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// Unified error type for the convenience entry points.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::Grid(_) => "S001",
            SolverError::Dictionary(_) => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::Grid(_) => "Grid construction failed",
            SolverError::Dictionary(_) => "Dictionary loading failed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::Grid(_) => "The grid letters could not be laid out with the requested dimensions. This wraps a GridError (see Grid Errors for specific codes).",
            SolverError::Dictionary(_) => "The word list could not be loaded. This wraps a DictionaryError (see Dictionary Errors for specific codes).",
        }
    }

    /// Wrapped errors carry their own help.
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        None
    }

    /// Formats the error with its code and the wrapped error's detailed form
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let inner = match self {
            SolverError::Grid(e) => e.display_detailed(),
            SolverError::Dictionary(e) => e.display_detailed(),
        };
        format!("{}\n  caused by: {}", self.code(), inner)
    }
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,
    limit: Option<Duration>,
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

/// Read-only inputs plus the sink and counters for one run.
struct SearchCtx<'a, O: ?Sized, S: ?Sized> {
    grid: &'a Grid,
    oracle: &'a O,
    sink: &'a mut S,
    stats: SearchStats,
}

impl<O, S> SearchCtx<'_, O, S>
where
    O: PrefixOracle + ?Sized,
    S: WordSink + ?Sized,
{
    /// Explore every path that extends `word`, whose last letter sits at `anchor`.
    ///
    /// `path` is borrowed and never modified; each extension gets its own copy.
    fn search_from(&mut self, word: &str, anchor: Cell, path: &PathState) {
        let depth = word.chars().count();
        debug_assert_eq!(
            depth,
            path.used_count(),
            "candidate length must equal the number of used cells"
        );
        debug_assert!(path.is_used(anchor), "anchor {anchor:?} must be on the path");

        self.stats.oracle_queries += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let verdict = match self.oracle.query(word) {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("Abandoning branch at {anchor:?}: {e}");
                self.stats.oracle_failures += 1;
                return;
            }
        };

        if !verdict.can_extend() {
            self.stats.pruned_branches += 1;
            return;
        }
        if verdict.is_complete() {
            self.sink.emit(word);
            self.stats.words_emitted += 1;
        }

        // One enumerator for the whole loop: each child resumes the rotation.
        for next in Neighbors::new(anchor, path) {
            let mut next_word = String::with_capacity(word.len() + 4);
            next_word.push_str(word);
            next_word.push(self.grid.letter(next));

            let next_path = path.with_used(next);
            self.search_from(&next_word, next, &next_path);
        }
    }
}

/// Search `grid` for every word `oracle` accepts, emitting each into `sink`.
///
/// A word is emitted once per path that spells it, so duplicates are expected.
/// Runs to completion; see [`solve_grid_with`] for a time budget.
pub fn solve_grid<O, S>(grid: &Grid, oracle: &O, sink: &mut S) -> SearchReport
where
    O: PrefixOracle + ?Sized,
    S: WordSink + ?Sized,
{
    solve_grid_with(grid, oracle, sink, &SearchConfig::default())
}

/// Like [`solve_grid`], honoring `config`.
///
/// The time budget is only checked between starting cells: a starting cell
/// that has begun is always searched completely, and the words it emits are
/// correct regardless of the deadline.
pub fn solve_grid_with<O, S>(
    grid: &Grid,
    oracle: &O,
    sink: &mut S,
    config: &SearchConfig,
) -> SearchReport
where
    O: PrefixOracle + ?Sized,
    S: WordSink + ?Sized,
{
    let budget = TimeBudget::new(config.time_budget);
    let mut ctx = SearchCtx {
        grid,
        oracle,
        sink,
        stats: SearchStats::default(),
    };

    debug!("Searching {}x{} grid:\n{grid}", grid.rows(), grid.cols());

    let mut status = SearchStatus::Exhausted;
    for (cells_searched, start) in grid.cells().enumerate() {
        if budget.expired() {
            let elapsed = budget.elapsed();
            warn!(
                "Time budget expired after {:.3}s; {cells_searched}/{} starting cells searched",
                elapsed.as_secs_f64(),
                grid.len()
            );
            status = SearchStatus::TimedOut { elapsed, cells_searched };
            break;
        }

        trace!("Seeding path at {start:?}");
        let path = PathState::seeded(grid, start);
        let word = grid.letter(start).to_string();
        ctx.search_from(&word, start, &path);
    }

    let stats = ctx.stats;
    let elapsed = budget.elapsed();
    debug!(
        "Search finished in {:.3}s: {} words emitted, {} oracle queries, {} pruned, {} oracle failures, max depth {}",
        elapsed.as_secs_f64(),
        stats.words_emitted,
        stats.oracle_queries,
        stats.pruned_branches,
        stats.oracle_failures,
        stats.max_depth
    );

    SearchReport { status, stats, elapsed }
}

/// Build a `rows x cols` grid from `letters` and search it.
///
/// # Errors
///
/// [`SolverError::Grid`] if `letters` does not fit the dimensions.
pub fn solve_letters<O, S>(
    letters: &str,
    rows: usize,
    cols: usize,
    oracle: &O,
    sink: &mut S,
) -> Result<SearchReport, SolverError>
where
    O: PrefixOracle + ?Sized,
    S: WordSink + ?Sized,
{
    let grid = Grid::new(letters, rows, cols)?;
    Ok(solve_grid(&grid, oracle, sink))
}

/// Every emission for `grid`, in search order, duplicates included.
#[must_use]
pub fn find_words<O: PrefixOracle + ?Sized>(grid: &Grid, oracle: &O) -> Vec<String> {
    let mut found = Vec::new();
    solve_grid(grid, oracle, &mut found);
    found
}
