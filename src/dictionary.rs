//! `dictionary`: load a word list and answer prefix queries against it.
//!
//! This is the crate's stock [`PrefixOracle`]. It reads a word list (from a
//! file, or from an in-memory string), normalizes it, and keeps a
//! lexicographically sorted `Vec<String>`. Every entry that starts with a
//! given prefix sits in one contiguous run of that vector, directly at the
//! prefix's insertion point, so a single binary search classifies a
//! candidate.
//!
//! The text format is one entry per line, either `word` or `word;score`:
//! - Blank lines are skipped.
//! - Lines whose score does not parse as an integer are skipped.
//! - Entries scored below `min_score` are skipped; unscored entries always pass.
//! - Entries are trimmed and lowercased, then sorted and deduplicated.

use std::path::Path;

use crate::errors::{DictionaryError, OracleError};
use crate::oracle::{PrefixOracle, Verdict};

/// Sorted, deduplicated word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Entries in lexicographic (byte) order.
    entries: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from words taken verbatim (no case folding).
    ///
    /// Empty strings are dropped; duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        Self::from_unsorted(entries)
    }

    fn from_unsorted(mut entries: Vec<String>) -> Self {
        // `dedup` only removes adjacent duplicates, so sort first
        entries.sort();
        entries.dedup();
        Self { entries }
    }

    /// Parse a word list from an in-memory string.
    ///
    /// See the module docs for the line format.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> Self {
        let entries = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }

                let word = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word_raw.trim()
                    }
                    None => line,
                };

                (!word.is_empty()).then(|| word.to_lowercase())
            })
            .collect();

        Self::from_unsorted(entries)
    }

    /// Read a word list from `path` and parse it.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::Io`] if the file cannot be read.
    /// - [`DictionaryError::Empty`] if no line yields an entry.
    pub fn load_from_path<P: AsRef<Path>>(path: P, min_score: i32) -> Result<Self, DictionaryError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| DictionaryError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse_from_str(&data, min_score);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                name: path_ref.display().to_string(),
            });
        }

        log::debug!("Loaded {} dictionary entries from {}", dictionary.len(), path_ref.display());
        Ok(dictionary)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.binary_search_by(|e| e.as_str().cmp(word)).is_ok()
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Classify `candidate` without the `Result` wrapper; this oracle never fails.
    #[must_use]
    pub fn verdict(&self, candidate: &str) -> Verdict {
        let idx = self.entries.partition_point(|e| e.as_str() < candidate);
        match self.entries.get(idx) {
            Some(entry) if entry == candidate => Verdict::Complete,
            Some(entry) if entry.starts_with(candidate) => Verdict::PrefixOnly,
            _ => Verdict::Absent,
        }
    }
}

impl PrefixOracle for Dictionary {
    fn query(&self, candidate: &str) -> Result<Verdict, OracleError> {
        Ok(self.verdict(candidate))
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts() {
        let dict = Dictionary::from_words(["cat", "cats", "dog", "do"]);
        assert_eq!(dict.verdict("c"), Verdict::PrefixOnly);
        assert_eq!(dict.verdict("ca"), Verdict::PrefixOnly);
        assert_eq!(dict.verdict("cat"), Verdict::Complete);
        assert_eq!(dict.verdict("cats"), Verdict::Complete);
        assert_eq!(dict.verdict("catz"), Verdict::Absent);
        assert_eq!(dict.verdict("do"), Verdict::Complete);
        assert_eq!(dict.verdict("e"), Verdict::Absent);
        assert_eq!(dict.verdict("zzz"), Verdict::Absent);
    }

    #[test]
    fn test_empty_dictionary_is_all_absent() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert_eq!(dict.verdict("a"), Verdict::Absent);
    }

    #[test]
    fn test_from_words_keeps_case_and_dedups() {
        let dict: Dictionary = ["AB", "AC", "AB", ""].into_iter().collect();
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["AB", "AC"]);
        assert!(dict.contains("AB"));
        assert!(!dict.contains("ab"));
    }

    #[test]
    fn test_parse_plain_and_scored_lines() {
        let input = "cat;50\ndog\nbird;40\n\nemu;abc\n";
        let dict = Dictionary::parse_from_str(input, 45);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_normalizes_and_trims() {
        let input = "  CAT  ;  50  \n Dog \nBIRD;70\ncat;10";
        let dict = Dictionary::parse_from_str(input, 0);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["bird", "cat", "dog"]);
    }

    #[test]
    fn test_parse_negative_scores() {
        let input = "cat;-10\ndog;60\nbird;-5";
        let dict = Dictionary::parse_from_str(input, 0);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["dog"]);
    }

    #[test]
    fn test_parse_skips_empty_words() {
        let dict = Dictionary::parse_from_str(";50\n   \ncat", 0);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dictionary::load_from_path("definitely/not/here.txt", 0).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert_eq!(err.code(), "D001");
    }

    #[test]
    fn test_query_never_fails() {
        let dict = Dictionary::from_words(["ab"]);
        assert_eq!(dict.query("a"), Ok(Verdict::PrefixOnly));
        assert_eq!(dict.query("ab"), Ok(Verdict::Complete));
    }
}
