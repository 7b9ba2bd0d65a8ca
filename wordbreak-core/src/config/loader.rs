//! Ruleset construction from class and rule definition text

use std::sync::{Arc, OnceLock};

use super::types::{GrammarConfig, ParseMode};
use crate::domain::{CharClass, ClassIndex, Rule, Ruleset};
use crate::error::{Error, Result};
use crate::grammar::{merge_by_name, ClassDefinitionParser, MacroTable, RuleParser};

const BUNDLED_CONFIG: &str = include_str!("../../configs/word_boundary.toml");
const BUNDLED_CLASSES: &str = include_str!("../../configs/WordBreakProperty.txt");
const BUNDLED_RULES: &str = include_str!("../../configs/WordBoundaryRule.txt");

static DEFAULT_RULESET: OnceLock<std::result::Result<Arc<Ruleset>, String>> = OnceLock::new();

/// Compiles class and rule definition text into a [`Ruleset`]
#[derive(Debug, Clone, Default)]
pub struct RulesetLoader {
    macros: MacroTable,
    mode: ParseMode,
}

impl RulesetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_macros(mut self, macros: MacroTable) -> Self {
        self.macros = macros;
        self
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse class records, merging duplicates by name
    pub fn load_classes(&self, text: &str) -> Result<Vec<CharClass>> {
        let parser = ClassDefinitionParser::new()?;
        let mut classes = Vec::new();
        for (_, record) in parser.parse_lines(text) {
            match record {
                Ok(class) => classes.push(class),
                Err(e) if self.mode == ParseMode::Lenient => {
                    log::warn!("skipping class record: {e}");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(merge_by_name(classes))
    }

    /// Parse rule lines with this loader's macro table
    pub fn load_rules(&self, text: &str) -> Result<Vec<Rule>> {
        let parser = RuleParser::with_macros(self.macros.clone());
        let mut rules = Vec::new();
        for (_, parsed) in parser.parse_lines(text) {
            match parsed {
                Ok(expanded) => rules.extend(expanded),
                Err(e) if self.mode == ParseMode::Lenient => {
                    log::warn!("skipping rule: {e}");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(rules)
    }

    /// Build the complete ruleset.
    ///
    /// In lenient mode rules naming unknown classes are dropped with a
    /// warning instead of failing the whole load.
    pub fn load(&self, classes: &str, rules: &str) -> Result<Ruleset> {
        let index = ClassIndex::new(self.load_classes(classes)?)?;
        let mut rules = self.load_rules(rules)?;

        if self.mode == ParseMode::Lenient {
            rules.retain(|rule| match unknown_class(&index, rule) {
                Some(class) => {
                    log::warn!("dropping rule {rule}: unknown class {class}");
                    false
                }
                None => true,
            });
        }

        Ruleset::new(index, rules)
    }
}

fn unknown_class<'r>(index: &ClassIndex, rule: &'r Rule) -> Option<&'r str> {
    rule.left()
        .iter()
        .chain(rule.right())
        .map(String::as_str)
        .chain(std::iter::once(rule.target()))
        .find(|name| index.by_name(name).is_none())
}

/// Configuration of the embedded default grammar
pub(crate) fn bundled_config() -> Result<GrammarConfig> {
    GrammarConfig::from_toml_str(BUNDLED_CONFIG)
}

/// Build a fresh copy of the embedded UAX #29 word grammar
pub fn load_bundled_ruleset() -> Result<Ruleset> {
    let config = bundled_config()?;
    config.loader().load(BUNDLED_CLASSES, BUNDLED_RULES)
}

/// Shared instance of the embedded grammar, built on first use
pub fn default_ruleset() -> Result<Arc<Ruleset>> {
    DEFAULT_RULESET
        .get_or_init(|| {
            load_bundled_ruleset()
                .map(Arc::new)
                .map_err(|e| format!("Failed to load bundled grammar: {e}"))
        })
        .clone()
        .map_err(Error::Configuration)
}
