//! Grammar configuration
//!
//! A grammar is described by a TOML file naming its class and rule sources,
//! the macro table used while parsing rules, and how strictly malformed
//! lines are treated. The default UAX #29 grammar is embedded in the crate.

mod loader;
mod types;

pub use loader::{default_ruleset, load_bundled_ruleset, RulesetLoader};
pub use types::{GrammarConfig, MetadataConfig, ParseMode, ParsingConfig, SourcesConfig};
