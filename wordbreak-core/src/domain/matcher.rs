//! Rule selection at a single boundary
//!
//! Buckets are searched in four tiers until one yields a rule:
//!
//! 1. `state → next`
//! 2. `state → ANY`
//! 3. `ANY → next`
//! 4. `ANY → ANY`
//!
//! A bucket holding exactly one rule is taken as is, without checking its
//! context against the text. A bucket holding several rules is walked in
//! priority order and the first rule whose left and right contexts both
//! match the surrounding text wins. When no tier produces a rule the result
//! carries no rule, which the scanner treats as a break.

use super::class::ClassId;
use super::ruleset::{IndexedRule, Ruleset};

/// Outcome of matching at one boundary
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'r> {
    /// Selected rule, `None` for the default break
    pub rule: Option<&'r IndexedRule>,
    /// UTF-8 width of the character after the boundary, 0 at end of text
    pub consumed: usize,
    /// Class of the character after the boundary, [`ClassId::EOT`] at end of text
    pub next_class: ClassId,
}

impl MatchResult<'_> {
    /// Whether the boundary sits at the end of the text
    pub fn at_end(&self) -> bool {
        self.next_class == ClassId::EOT
    }
}

/// Selects rules from a [`Ruleset`] for positions in a text
#[derive(Debug, Clone, Copy)]
pub struct RuleMatcher<'r> {
    ruleset: &'r Ruleset,
}

impl<'r> RuleMatcher<'r> {
    /// Create a matcher over a ruleset
    pub fn new(ruleset: &'r Ruleset) -> Self {
        Self { ruleset }
    }

    /// The underlying ruleset
    pub fn ruleset(&self) -> &'r Ruleset {
        self.ruleset
    }

    /// Find the rule governing the boundary at byte `offset` of `text` when
    /// the scanner is in `state`.
    ///
    /// `offset` must lie on a character boundary.
    pub fn find(&self, text: &str, offset: usize, state: ClassId) -> MatchResult<'r> {
        let (consumed, next_class) = match text[offset..].chars().next() {
            Some(ch) => (ch.len_utf8(), self.ruleset.classes().resolve_char(ch)),
            None => (0, ClassId::EOT),
        };

        let tiers = [
            (state, next_class),
            (state, ClassId::ANY),
            (ClassId::ANY, next_class),
            (ClassId::ANY, ClassId::ANY),
        ];
        let rule = tiers
            .iter()
            .find_map(|&(from, to)| self.select(from, to, text, offset));

        if let Some(rule) = rule {
            log::trace!("offset {offset}: {}", rule.rule());
        }

        MatchResult {
            rule,
            consumed,
            next_class,
        }
    }

    fn select(
        &self,
        from: ClassId,
        to: ClassId,
        text: &str,
        offset: usize,
    ) -> Option<&'r IndexedRule> {
        match self.ruleset.bucket(from, to) {
            [] => None,
            // Single-candidate buckets are trusted without verification
            [only] => Some(only),
            candidates => candidates
                .iter()
                .find(|rule| self.verify(rule, text, offset)),
        }
    }

    fn verify(&self, rule: &IndexedRule, text: &str, offset: usize) -> bool {
        self.matches_before(rule.left(), text, offset) && self.matches_after(rule.right(), text, offset)
    }

    /// Walk backwards from the boundary, last pattern element first
    fn matches_before(&self, pattern: &[ClassId], text: &str, offset: usize) -> bool {
        let mut chars = text[..offset].chars().rev();
        let mut exhausted = false;
        for &expected in pattern.iter().rev() {
            if exhausted {
                return false;
            }
            match chars.next() {
                Some(ch) => {
                    if !self.class_matches(expected, ch) {
                        return false;
                    }
                }
                None if expected == ClassId::SOT => exhausted = true,
                None => return false,
            }
        }
        true
    }

    /// Walk forwards from the boundary, first pattern element first
    fn matches_after(&self, pattern: &[ClassId], text: &str, offset: usize) -> bool {
        let mut chars = text[offset..].chars();
        let mut exhausted = false;
        for &expected in pattern {
            if exhausted {
                return false;
            }
            match chars.next() {
                Some(ch) => {
                    if !self.class_matches(expected, ch) {
                        return false;
                    }
                }
                None if expected == ClassId::EOT => exhausted = true,
                None => return false,
            }
        }
        true
    }

    #[inline]
    fn class_matches(&self, expected: ClassId, ch: char) -> bool {
        expected == ClassId::ANY || self.ruleset.classes().resolve_char(ch) == expected
    }
}
