//! Rule-driven word boundary segmentation
//!
//! This crate splits text at word boundaries using a declarative grammar in
//! the style of Unicode Standard Annex #29. Character classes and boundary
//! rules are data: class records are compiled into a range index, rule lines
//! into priority-ordered buckets, and a streaming state machine walks the
//! text asking a four-tier matcher what to do at each character boundary.
//!
//! # Architecture
//!
//! - **domain**: classes, the class index, rules, the ruleset, the matcher
//!   and the boundary scanner
//! - **grammar**: tokenizer and parsers for rule lines and class records
//! - **config**: TOML grammar descriptions and the bundled default grammar
//! - **application**: word counting and bounded top-N selection
//! - **api**: configurable facade over all of the above
//!
//! # Example
//!
//! ```rust
//! use wordbreak_core::{default_ruleset, WordBreaker};
//!
//! let breaker = WordBreaker::new(default_ruleset().unwrap());
//! let words: Vec<_> = breaker.words("Don't panic, 42.5%").collect();
//! assert_eq!(words, ["Don't", " ", "panic", ",", " ", "42.5", "%"]);
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod grammar;

pub use api::{Config, ConfigBuilder, GrammarSource, Input, Output, Segment, WordSegmenter};
pub use application::{BoundedHeap, DefaultWordFilter, WordCount, WordCounter, WordFilter, WordTally};
pub use config::{default_ruleset, load_bundled_ruleset, GrammarConfig, ParseMode, RulesetLoader};
pub use domain::{
    CharClass, ClassId, ClassIndex, CodepointRange, MatchResult, Rule, RuleAction, RuleMatcher,
    Ruleset, WordBreaker, WordIndices, Words,
};
pub use error::{ClassDefinitionError, Error, Result, RuleSyntaxError};
pub use grammar::{ClassDefinitionParser, MacroTable, RuleParser};
