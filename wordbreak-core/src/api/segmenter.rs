//! Word segmenter facade

use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, GrammarSource, Input, Output, Segment};
use crate::application::{DefaultWordFilter, KeepAll, WordCount, WordCounter, WordFilter, WordTally};
use crate::config::{default_ruleset, GrammarConfig};
use crate::domain::{Ruleset, WordBreaker, WordIndices, Words};
use crate::error::Result;

/// Segments text with a configured grammar
#[derive(Debug, Clone)]
pub struct WordSegmenter {
    breaker: WordBreaker,
    config: Config,
}

impl WordSegmenter {
    /// Create a segmenter, loading the configured grammar
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let ruleset = match &config.grammar {
            GrammarSource::Bundled => default_ruleset()?,
            GrammarSource::File(path) => {
                Arc::new(GrammarConfig::from_file(path)?.load_ruleset()?)
            }
        };
        Ok(Self::with_ruleset(ruleset, config))
    }

    /// Segmenter over the bundled grammar with default settings
    pub fn with_defaults() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Segmenter over an already loaded ruleset; the config's grammar source is ignored
    pub fn with_ruleset(ruleset: Arc<Ruleset>, config: Config) -> Self {
        Self {
            breaker: WordBreaker::new(ruleset),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ruleset(&self) -> &Arc<Ruleset> {
        self.breaker.ruleset()
    }

    pub fn breaker(&self) -> &WordBreaker {
        &self.breaker
    }

    /// Lazily split `text` into segments
    pub fn words<'t>(&self, text: &'t str) -> Words<'_, 't> {
        self.breaker.words(text)
    }

    /// Lazily split `text`, with byte offsets
    pub fn word_indices<'t>(&self, text: &'t str) -> WordIndices<'_, 't> {
        self.breaker.word_indices(text)
    }

    /// Collect the segments of `text`
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        self.word_indices(text)
            .map(|(offset, word)| Segment {
                offset,
                text: word.to_string(),
            })
            .collect()
    }

    /// Read and segment an input
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.into_text()?;
        let start = Instant::now();
        let segments = self.segments(&text);
        Ok(Output::new(segments, &text, start.elapsed()))
    }

    /// Word counter following this segmenter's filter settings
    pub fn counter(&self) -> WordCounter<Box<dyn WordFilter>> {
        let filter: Box<dyn WordFilter> = if self.config.filter_words {
            Box::new(DefaultWordFilter::new().lowercase(self.config.lowercase))
        } else if self.config.lowercase {
            Box::new(LowercaseAll)
        } else {
            Box::new(KeepAll)
        };
        WordCounter::new(self.breaker.clone(), filter)
    }

    /// Count the words of `text`
    pub fn tally(&self, text: &str) -> WordTally {
        self.counter().tally(text)
    }

    /// The `n` most frequent words of `text`
    pub fn top_words(&self, text: &str, n: usize) -> Result<Vec<WordCount>> {
        self.counter().top_words(text, n)
    }
}

/// Keeps every segment, folded to lower case
struct LowercaseAll;

impl WordFilter for LowercaseAll {
    fn normalize<'a>(&self, word: &'a str) -> Option<std::borrow::Cow<'a, str>> {
        Some(word.to_lowercase().into())
    }
}
