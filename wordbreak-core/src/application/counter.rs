//! Word frequency counting over segmented text

use icu_properties::props::GeneralCategory;
use icu_properties::CodePointMapData;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::topk::BoundedHeap;
use crate::domain::WordBreaker;
use crate::error::{Error, Result};

/// Decides which segments count as words and how they are spelled
pub trait WordFilter: Send + Sync {
    /// Normalized form of `word`, or `None` to ignore it
    fn normalize<'a>(&self, word: &'a str) -> Option<Cow<'a, str>>;
}

/// Keeps segments that start with a letter or digit
///
/// Whitespace, punctuation, symbols, marks and controls are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWordFilter {
    lowercase: bool,
}

impl DefaultWordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold kept words to lower case
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }
}

impl WordFilter for DefaultWordFilter {
    fn normalize<'a>(&self, word: &'a str) -> Option<Cow<'a, str>> {
        let first = word.chars().next()?;
        if !is_letter_or_number(first) {
            return None;
        }
        if self.lowercase && word.chars().any(char::is_uppercase) {
            Some(Cow::Owned(word.to_lowercase()))
        } else {
            Some(Cow::Borrowed(word))
        }
    }
}

/// General category L* or N*; marks are excluded even when Alphabetic
fn is_letter_or_number(c: char) -> bool {
    matches!(
        CodePointMapData::<GeneralCategory>::new().get(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

impl<F: WordFilter + ?Sized> WordFilter for Box<F> {
    fn normalize<'a>(&self, word: &'a str) -> Option<Cow<'a, str>> {
        (**self).normalize(word)
    }
}

/// Accepts every segment unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl WordFilter for KeepAll {
    fn normalize<'a>(&self, word: &'a str) -> Option<Cow<'a, str>> {
        Some(Cow::Borrowed(word))
    }
}

/// A word and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: usize,
    first_seen: usize,
}

/// Ranking key: higher count first, then earlier first occurrence
#[derive(Debug)]
struct Ranked<'a> {
    word: &'a str,
    entry: Entry,
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entry
            .count
            .cmp(&other.entry.count)
            .then_with(|| other.entry.first_seen.cmp(&self.entry.first_seen))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Running word counts, possibly over several documents
#[derive(Debug, Clone, Default)]
pub struct WordTally {
    counts: HashMap<String, Entry>,
    seen: usize,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence
    pub fn add(&mut self, word: &str) {
        let seq = self.seen;
        self.seen += 1;
        match self.counts.get_mut(word) {
            Some(entry) => entry.count += 1,
            None => {
                self.counts.insert(
                    word.to_string(),
                    Entry {
                        count: 1,
                        first_seen: seq,
                    },
                );
            }
        }
    }

    /// Fold another tally in; its words count as occurring after this one's
    pub fn merge(&mut self, other: WordTally) {
        let offset = self.seen;
        for (word, theirs) in other.counts {
            self.counts
                .entry(word)
                .and_modify(|ours| ours.count += theirs.count)
                .or_insert(Entry {
                    count: theirs.count,
                    first_seen: offset + theirs.first_seen,
                });
        }
        self.seen += other.seen;
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted occurrences
    pub fn total(&self) -> usize {
        self.seen
    }

    /// Occurrences of a word
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).map_or(0, |e| e.count)
    }

    /// The `n` most frequent words, most frequent first.
    ///
    /// Equal counts are ordered by first occurrence.
    pub fn top(&self, n: usize) -> Result<Vec<WordCount>> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "requested word count must be greater than 0".into(),
            ));
        }
        let mut heap = BoundedHeap::new(n)?;
        heap.extend(self.counts.iter().map(|(word, entry)| Ranked {
            word,
            entry: *entry,
        }));
        Ok(heap
            .into_sorted_vec()
            .into_iter()
            .map(|r| WordCount {
                word: r.word.to_string(),
                count: r.entry.count,
            })
            .collect())
    }
}

/// Segments text and counts the resulting words
#[derive(Debug, Clone)]
pub struct WordCounter<F = DefaultWordFilter> {
    breaker: WordBreaker,
    filter: F,
}

impl WordCounter<DefaultWordFilter> {
    /// Counter with the default filter
    pub fn with_default_filter(breaker: WordBreaker) -> Self {
        Self::new(breaker, DefaultWordFilter::default())
    }
}

impl<F: WordFilter> WordCounter<F> {
    pub fn new(breaker: WordBreaker, filter: F) -> Self {
        Self { breaker, filter }
    }

    pub fn breaker(&self) -> &WordBreaker {
        &self.breaker
    }

    /// Add the words of `text` to a tally
    pub fn tally_into(&self, text: &str, tally: &mut WordTally) {
        for word in self.breaker.words(text) {
            if let Some(word) = self.filter.normalize(word) {
                tally.add(&word);
            }
        }
    }

    /// Count the words of `text`
    pub fn tally(&self, text: &str) -> WordTally {
        let mut tally = WordTally::new();
        self.tally_into(text, &mut tally);
        tally
    }

    /// The `n` most frequent words of `text`
    pub fn top_words(&self, text: &str, n: usize) -> Result<Vec<WordCount>> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "requested word count must be greater than 0".into(),
            ));
        }
        if text.is_empty() {
            return Ok(Vec::new());
        }
        self.tally(text).top(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_ruleset;

    fn counter() -> WordCounter {
        WordCounter::with_default_filter(WordBreaker::new(default_ruleset().unwrap()))
    }

    fn words(counts: &[WordCount]) -> Vec<&str> {
        counts.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn test_top_words() {
        let top = counter()
            .top_words("123 123 123 ABC ABC ABC ABC A A 2 2", 3)
            .unwrap();
        assert_eq!(words(&top), ["ABC", "123", "A"]);
        assert_eq!(top[0].count, 4);
    }

    #[test]
    fn test_empty_text_and_zero_n() {
        assert!(counter().top_words("", 3).unwrap().is_empty());
        assert!(matches!(
            counter().top_words("a b", 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fewer_words_than_requested() {
        let top = counter().top_words("one, two.", 10).unwrap();
        assert_eq!(words(&top), ["one", "two"]);
    }

    #[test]
    fn test_default_filter() {
        let filter = DefaultWordFilter::new();
        assert_eq!(filter.normalize("word").as_deref(), Some("word"));
        assert_eq!(filter.normalize("42").as_deref(), Some("42"));
        assert_eq!(filter.normalize(" "), None);
        assert_eq!(filter.normalize("$"), None);
        assert_eq!(filter.normalize("_x"), None);
        assert_eq!(filter.normalize("\u{0300}"), None);
        assert_eq!(filter.normalize(""), None);

        let folding = DefaultWordFilter::new().lowercase(true);
        assert_eq!(folding.normalize("Word").as_deref(), Some("word"));
        assert!(matches!(folding.normalize("word"), Some(Cow::Borrowed(_))));
    }

    #[test]
    fn test_default_filter_drops_marks() {
        let filter = DefaultWordFilter::new();
        // Hebrew point, Devanagari visarga, Arabic fathatan, Greek ypogegrammeni
        for mark in ["\u{05B0}", "\u{0903}", "\u{064B}", "\u{0345}"] {
            assert_eq!(filter.normalize(mark), None, "{mark:?}");
        }
        assert_eq!(filter.normalize("\u{05D0}\u{05B0}").as_deref(), Some("\u{05D0}\u{05B0}"));
        assert_eq!(filter.normalize("\u{0664}").as_deref(), Some("\u{0664}"));
        assert_eq!(filter.normalize("\u{216B}").as_deref(), Some("\u{216B}"));

        assert!(counter().top_words("\u{05B0}", 3).unwrap().is_empty());
    }

    #[test]
    fn test_case_folding_merges_counts() {
        let counter = WordCounter::new(
            WordBreaker::new(default_ruleset().unwrap()),
            DefaultWordFilter::new().lowercase(true),
        );
        let tally = counter.tally("The cat and the hat. THE end");
        assert_eq!(tally.count("the"), 3);
        assert_eq!(tally.count("The"), 0);
    }

    #[test]
    fn test_merge_keeps_first_occurrence_order() {
        let counter = counter();
        let mut tally = counter.tally("beta alpha");
        tally.merge(counter.tally("alpha beta gamma gamma"));

        assert_eq!(tally.count("alpha"), 2);
        assert_eq!(tally.total(), 6);
        let top = tally.top(3).unwrap();
        assert_eq!(words(&top), ["beta", "alpha", "gamma"]);
    }

    #[test]
    fn test_keep_all_filter() {
        let counter = WordCounter::new(WordBreaker::new(default_ruleset().unwrap()), KeepAll);
        let tally = counter.tally("a a");
        assert_eq!(tally.count(" "), 1);
        assert_eq!(tally.len(), 2);
    }
}
