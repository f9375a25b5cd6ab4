//! Output sinks that receive found words.
//!
//! The search calls [`WordSink::emit`] once per path that spells a complete
//! word, so the same text arrives as often as it can be traced. Sinks that
//! want something else (unique words, counts) decide that here, not in the
//! search.

use std::collections::{HashMap, HashSet};

/// Receiver for words found by the search.
pub trait WordSink {
    fn emit(&mut self, word: &str);
}

impl<F> WordSink for F
where
    F: FnMut(&str),
{
    fn emit(&mut self, word: &str) {
        self(word);
    }
}

/// Every emission, in order, duplicates included.
impl WordSink for Vec<String> {
    fn emit(&mut self, word: &str) {
        self.push(word.to_string());
    }
}

/// Keeps the first occurrence of each word, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct UniqueWords {
    seen: HashSet<String>,
    words: Vec<String>,
}

impl UniqueWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSink for UniqueWords {
    fn emit(&mut self, word: &str) {
        if self.seen.insert(word.to_string()) {
            self.words.push(word.to_string());
        }
    }
}

/// Number of times each word was emitted (i.e. number of distinct paths spelling it).
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    counts: HashMap<String, usize>,
    total: usize,
}

impl WordCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Total emissions across all words.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }
}

impl WordSink for WordCounter {
    fn emit(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_default() += 1;
        self.total += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(sink: &mut impl WordSink, words: &[&str]) {
        for w in words {
            sink.emit(w);
        }
    }

    #[test]
    fn test_vec_keeps_duplicates_in_order() {
        let mut sink: Vec<String> = Vec::new();
        feed(&mut sink, &["ab", "ac", "ab"]);
        assert_eq!(sink, vec!["ab", "ac", "ab"]);
    }

    #[test]
    fn test_closure_sink() {
        let mut lengths = Vec::new();
        let mut sink = |w: &str| lengths.push(w.len());
        feed(&mut sink, &["a", "abc"]);
        assert_eq!(lengths, vec![1, 3]);
    }

    #[test]
    fn test_unique_words_first_seen_order() {
        let mut sink = UniqueWords::new();
        feed(&mut sink, &["tea", "eat", "tea", "ate", "eat"]);
        assert_eq!(sink.words(), ["tea", "eat", "ate"]);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_word_counter() {
        let mut sink = WordCounter::new();
        feed(&mut sink, &["aaa", "aaa", "aa"]);
        assert_eq!(sink.count("aaa"), 2);
        assert_eq!(sink.count("aa"), 1);
        assert_eq!(sink.count("b"), 0);
        assert_eq!(sink.total(), 3);
        assert_eq!(sink.distinct(), 2);
    }
}
