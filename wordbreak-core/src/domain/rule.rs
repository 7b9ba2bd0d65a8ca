//! Segmentation rules
//!
//! A rule looks at the classes on both sides of a boundary:
//!
//! ```text
//! NAME: (L1, L2, ..., Ln) + (R1, R2, ..., Rm) => TARGET ACTION
//! ```
//!
//! `Ln` is the class immediately before the boundary and `R1` the class
//! immediately after it. The pair `(Ln, R1)` is the key under which the rule
//! is indexed.

use smallvec::SmallVec;
use std::fmt;

use super::class::normalize_name;
use crate::error::{Error, Result};

/// Class-name sequence of a rule context
pub type Pattern = SmallVec<[String; 2]>;

/// What a matched rule does at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleAction {
    /// A word boundary exists (`÷`)
    Break,
    /// No word boundary (`×`)
    NoBreak,
    /// No boundary, and the scanner re-enters with the rule's target class (`→`)
    Transform,
}

impl RuleAction {
    /// Grammar symbol for the action
    pub fn symbol(self) -> char {
        match self {
            RuleAction::Break => '÷',
            RuleAction::NoBreak => '×',
            RuleAction::Transform => '→',
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleAction::Break => "BREAK",
            RuleAction::NoBreak => "NO_BREAK",
            RuleAction::Transform => "TRANSFORM",
        };
        f.write_str(name)
    }
}

/// A single boundary rule over class names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    left: Pattern,
    right: Pattern,
    target: String,
    action: RuleAction,
}

impl Rule {
    /// Create a rule.
    ///
    /// Class names are upper-cased. Both contexts must be non-empty. A
    /// transform rule carries exactly one left class (the state it applies
    /// in); its right context is the pattern being absorbed.
    pub fn new<L, R, S>(
        name: impl Into<String>,
        left: L,
        right: R,
        target: impl AsRef<str>,
        action: RuleAction,
    ) -> Result<Self>
    where
        L: IntoIterator<Item = S>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let left: Pattern = left.into_iter().map(|s| normalize_name(s.as_ref())).collect();
        let right: Pattern = right.into_iter().map(|s| normalize_name(s.as_ref())).collect();
        let target = normalize_name(target.as_ref());

        let invalid = |reason: &str| Error::InvalidRule {
            name: name.clone(),
            reason: reason.to_string(),
        };
        if left.is_empty() {
            return Err(invalid("left context is empty"));
        }
        if right.is_empty() {
            return Err(invalid("right context is empty"));
        }
        if left.iter().chain(right.iter()).any(|c| c.is_empty()) || target.is_empty() {
            return Err(invalid("empty class name"));
        }
        if action == RuleAction::Transform && left.len() != 1 {
            return Err(invalid("transform rule must have exactly one state class"));
        }

        Ok(Self {
            name,
            left,
            right,
            target,
            action,
        })
    }

    /// Diagnostic name; several rules may share it
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classes before the boundary, most recent last
    pub fn left(&self) -> &[String] {
        &self.left
    }

    /// Classes after the boundary, nearest first
    pub fn right(&self) -> &[String] {
        &self.right
    }

    /// Resulting class
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Action taken when the rule matches
    pub fn action(&self) -> RuleAction {
        self.action
    }

    /// Class immediately preceding the boundary
    pub fn last_of_left(&self) -> &str {
        // Non-empty by construction
        &self.left[self.left.len() - 1]
    }

    /// Class immediately following the boundary
    pub fn first_of_right(&self) -> &str {
        &self.right[0]
    }

    /// Total number of classes in both contexts
    pub fn pattern_len(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:({})+({})=>{} {}",
            self.name,
            self.left.join(","),
            self.right.join(","),
            self.target,
            self.action.symbol()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_keys() {
        let rule = Rule::new(
            "WB7",
            ["ALetter", "MidLetter"],
            ["ALetter"],
            "ALetter",
            RuleAction::NoBreak,
        )
        .unwrap();
        assert_eq!(rule.last_of_left(), "MIDLETTER");
        assert_eq!(rule.first_of_right(), "ALETTER");
        assert_eq!(rule.pattern_len(), 3);
        assert_eq!(rule.to_string(), "WB7:(ALETTER,MIDLETTER)+(ALETTER)=>ALETTER ×");
    }

    #[test]
    fn test_empty_context_rejected() {
        let err = Rule::new("X", Vec::<&str>::new(), vec!["A"], "A", RuleAction::Break)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRule { .. }));

        let err = Rule::new("X", vec!["A"], Vec::<&str>::new(), "A", RuleAction::Break)
            .unwrap_err();
        assert!(err.to_string().contains("right context is empty"));
    }

    #[test]
    fn test_transform_requires_single_state() {
        assert!(Rule::new("WB4", ["ANY"], ["EXTEND"], "ANY", RuleAction::Transform).is_ok());
        assert!(
            Rule::new("WB4", ["A", "B"], ["EXTEND"], "ANY", RuleAction::Transform).is_err()
        );
    }

    #[test]
    fn test_action_symbols() {
        assert_eq!(RuleAction::Break.symbol(), '÷');
        assert_eq!(RuleAction::NoBreak.symbol(), '×');
        assert_eq!(RuleAction::Transform.symbol(), '→');
        assert_eq!(RuleAction::NoBreak.to_string(), "NO_BREAK");
    }
}
