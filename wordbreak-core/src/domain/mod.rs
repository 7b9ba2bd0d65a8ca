//! Domain layer for rule-driven word segmentation
//!
//! Pure data structures and algorithms: character classes and their index,
//! boundary rules, the compiled ruleset, the rule matcher and the scanner
//! that turns matches into words. Nothing here performs I/O.

pub mod class;
pub mod class_index;
pub mod matcher;
pub mod rule;
pub mod ruleset;
pub mod scanner;

pub use class::{CharClass, ClassId, CodepointRange};
pub use class_index::ClassIndex;
pub use matcher::{MatchResult, RuleMatcher};
pub use rule::{Pattern, Rule, RuleAction};
pub use ruleset::{ClassPattern, IndexedRule, Ruleset};
pub use scanner::{WordBreaker, WordIndices, Words};
