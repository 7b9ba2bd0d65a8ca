//! Configuration API for word segmentation

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Where the segmentation grammar comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GrammarSource {
    /// The embedded UAX #29 word grammar
    #[default]
    Bundled,
    /// A grammar TOML file on disk
    File(PathBuf),
}

/// Segmentation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) grammar: GrammarSource,
    pub(crate) lowercase: bool,
    pub(crate) filter_words: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grammar: GrammarSource::Bundled,
            lowercase: false,
            filter_words: true,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn grammar(&self) -> &GrammarSource {
        &self.grammar
    }

    /// Whether counted words are folded to lower case
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Whether counting ignores segments that are not words
    pub fn filter_words(&self) -> bool {
        self.filter_words
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if let GrammarSource::File(path) = &self.grammar {
            if path.as_os_str().is_empty() {
                return Err(Error::Configuration(
                    "grammar path must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    grammar: Option<GrammarSource>,
    lowercase: Option<bool>,
    filter_words: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the embedded grammar
    pub fn bundled_grammar(mut self) -> Self {
        self.grammar = Some(GrammarSource::Bundled);
        self
    }

    /// Load the grammar from a TOML file
    pub fn grammar_file(mut self, path: impl AsRef<Path>) -> Self {
        self.grammar = Some(GrammarSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Fold counted words to lower case
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = Some(enabled);
        self
    }

    /// Count only segments that start with a letter or digit (default: on)
    pub fn filter_words(mut self, enabled: bool) -> Self {
        self.filter_words = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let config = Config {
            grammar: self.grammar.unwrap_or_default(),
            lowercase: self.lowercase.unwrap_or(false),
            filter_words: self.filter_words.unwrap_or(true),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.grammar(), &GrammarSource::Bundled);
        assert!(!config.lowercase());
        assert!(config.filter_words());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .grammar_file("grammar.toml")
            .lowercase(true)
            .filter_words(false)
            .build()
            .unwrap();
        assert_eq!(
            config.grammar(),
            &GrammarSource::File(PathBuf::from("grammar.toml"))
        );
        assert!(config.lowercase());
        assert!(!config.filter_words());
    }

    #[test]
    fn test_empty_grammar_path() {
        let err = Config::builder().grammar_file("").build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
