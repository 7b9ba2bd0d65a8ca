//! Boundary scanner: drives the matcher across a text and yields words
//!
//! The scanner keeps a cursor, the start of the pending word and the current
//! state class. At each boundary the matched rule decides what happens:
//!
//! - break: the pending word `[word_start, cursor)` is emitted if non-empty,
//!   the next word starts at the cursor and the cursor moves past the next
//!   character, whose class becomes the state;
//! - no-break: the cursor moves on and the state becomes the class of the
//!   character just passed;
//! - transform: the cursor moves on and the state becomes the rule's target.
//!
//! A state update to `ANY` leaves the state unchanged. The end of the text is
//! always a break, so the words concatenate back to the input.

use std::iter::FusedIterator;
use std::sync::Arc;

use super::class::ClassId;
use super::matcher::RuleMatcher;
use super::rule::RuleAction;
use super::ruleset::Ruleset;

#[derive(Debug, Clone)]
struct ScanState<'r, 't> {
    matcher: RuleMatcher<'r>,
    text: &'t str,
    cursor: usize,
    word_start: usize,
    state: ClassId,
}

impl<'r, 't> ScanState<'r, 't> {
    fn new(ruleset: &'r Ruleset, text: &'t str) -> Self {
        Self {
            matcher: RuleMatcher::new(ruleset),
            text,
            cursor: 0,
            word_start: 0,
            state: ClassId::SOT,
        }
    }

    fn next_span(&mut self) -> Option<(usize, &'t str)> {
        while self.state != ClassId::EOT {
            let found = self.matcher.find(self.text, self.cursor, self.state);

            let action = match found.rule {
                Some(rule) if !found.at_end() => rule.action(),
                _ => RuleAction::Break,
            };

            match action {
                RuleAction::Break => {
                    let (start, end) = (self.word_start, self.cursor);
                    self.word_start = end;
                    self.cursor += found.consumed;
                    self.state = found.next_class;
                    if end > start {
                        return Some((start, &self.text[start..end]));
                    }
                }
                RuleAction::NoBreak => {
                    self.cursor += found.consumed;
                    self.enter(found.next_class);
                }
                RuleAction::Transform => {
                    self.cursor += found.consumed;
                    if let Some(rule) = found.rule {
                        self.enter(rule.target());
                    }
                }
            }
        }
        None
    }

    #[inline]
    fn enter(&mut self, class: ClassId) {
        if class != ClassId::ANY {
            self.state = class;
        }
    }

    fn remaining_upper_bound(&self) -> usize {
        if self.state == ClassId::EOT {
            0
        } else {
            self.text.len() - self.word_start
        }
    }
}

/// Iterator over the words of a text
///
/// Created by [`WordBreaker::words`] or [`Words::new`].
#[derive(Debug, Clone)]
pub struct Words<'r, 't> {
    scan: ScanState<'r, 't>,
}

impl<'r, 't> Words<'r, 't> {
    /// Segment `text` with a borrowed ruleset
    pub fn new(ruleset: &'r Ruleset, text: &'t str) -> Self {
        Self {
            scan: ScanState::new(ruleset, text),
        }
    }

    /// Byte offset where the next word will start
    pub fn offset(&self) -> usize {
        self.scan.word_start
    }
}

impl<'t> Iterator for Words<'_, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan.next_span().map(|(_, word)| word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.scan.remaining_upper_bound()))
    }
}

impl FusedIterator for Words<'_, '_> {}

/// Iterator over `(byte_offset, word)` pairs
#[derive(Debug, Clone)]
pub struct WordIndices<'r, 't> {
    scan: ScanState<'r, 't>,
}

impl<'r, 't> WordIndices<'r, 't> {
    /// Segment `text` with a borrowed ruleset
    pub fn new(ruleset: &'r Ruleset, text: &'t str) -> Self {
        Self {
            scan: ScanState::new(ruleset, text),
        }
    }
}

impl<'t> Iterator for WordIndices<'_, 't> {
    type Item = (usize, &'t str);

    fn next(&mut self) -> Option<Self::Item> {
        self.scan.next_span()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.scan.remaining_upper_bound()))
    }
}

impl FusedIterator for WordIndices<'_, '_> {}

/// Word segmenter over a shared ruleset
///
/// Cloning is cheap; every clone shares the same compiled ruleset, and each
/// call to [`words`](Self::words) starts an independent scan.
#[derive(Debug, Clone)]
pub struct WordBreaker {
    ruleset: Arc<Ruleset>,
}

impl WordBreaker {
    pub fn new(ruleset: Arc<Ruleset>) -> Self {
        Self { ruleset }
    }

    pub fn ruleset(&self) -> &Arc<Ruleset> {
        &self.ruleset
    }

    /// Lazily segment `text` into words
    pub fn words<'t>(&self, text: &'t str) -> Words<'_, 't> {
        Words::new(&self.ruleset, text)
    }

    /// Lazily segment `text`, yielding each word with its byte offset
    pub fn word_indices<'t>(&self, text: &'t str) -> WordIndices<'_, 't> {
        WordIndices::new(&self.ruleset, text)
    }
}

impl From<Ruleset> for WordBreaker {
    fn from(ruleset: Ruleset) -> Self {
        Self::new(Arc::new(ruleset))
    }
}
