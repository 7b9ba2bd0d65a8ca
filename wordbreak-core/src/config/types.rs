use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::loader::RulesetLoader;
use crate::domain::Ruleset;
use crate::error::{Error, Result};
use crate::grammar::MacroTable;

/// Top-level grammar description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub macros: BTreeMap<String, Vec<String>>,
    pub sources: SourcesConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
    /// Directory that relative source paths are resolved against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Locations of the class and rule definition files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub classes: PathBuf,
    pub rules: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsingConfig {
    #[serde(default)]
    pub mode: ParseMode,
}

/// How malformed class or rule lines are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Abort on the first malformed line
    #[default]
    Strict,
    /// Log and skip malformed lines
    Lenient,
}

impl GrammarConfig {
    /// Parse a configuration; relative sources resolve against the working directory
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GrammarConfig = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse grammar config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file; relative sources resolve against its directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.metadata.name.trim().is_empty() {
            return Err(Error::Configuration("metadata.name must not be empty".into()));
        }
        if let Some((alias, _)) = self.macros.iter().find(|(_, classes)| classes.is_empty()) {
            return Err(Error::Configuration(format!(
                "macro '{alias}' must name at least one class"
            )));
        }
        Ok(())
    }

    /// The macro table for rule parsing
    pub fn macro_table(&self) -> MacroTable {
        self.macros
            .iter()
            .map(|(alias, classes)| (alias.as_str(), classes.iter().map(String::as_str).collect()))
            .collect()
    }

    /// A loader configured with this grammar's macros and parse mode
    pub fn loader(&self) -> RulesetLoader {
        RulesetLoader::new()
            .with_macros(self.macro_table())
            .with_mode(self.parsing.mode)
    }

    /// Resolve a source path against the configuration's directory
    pub fn resolve(&self, source: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if source.is_relative() => base.join(source),
            _ => source.to_path_buf(),
        }
    }

    /// Read both sources and compile the ruleset
    pub fn load_ruleset(&self) -> Result<Ruleset> {
        let classes = read_to_string(&self.resolve(&self.sources.classes))?;
        let rules = read_to_string(&self.resolve(&self.sources.rules))?;
        log::info!("loading grammar '{}'", self.metadata.name);
        self.loader().load(&classes, &rules)
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
