//! Text formats that feed a ruleset: rule lines and class records

pub mod class_def;
pub mod combinations;
pub mod parser;
pub mod token;

pub use class_def::{merge_by_name, ClassDefinitionParser};
pub use combinations::Combinations;
pub use parser::{MacroTable, RuleParser};
pub use token::{Token, Tokenizer};

/// Blank lines and lines whose first character is `#` carry no definition
pub(crate) fn is_blank_or_comment(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}
