//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordbreak_core::GrammarConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the grammar configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub grammar: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating grammar configuration: {}", self.grammar.display());

        let loaded = GrammarConfig::from_file(&self.grammar)
            .and_then(|config| config.load_ruleset().map(|ruleset| (config, ruleset)));

        match loaded {
            Ok((config, ruleset)) => {
                let classes = ruleset.classes();
                println!("✓ Grammar is valid!");
                println!("  Name: {}", config.metadata.name);
                if let Some(description) = &config.metadata.description {
                    println!("  Description: {description}");
                }
                println!("  Parse mode: {:?}", config.parsing.mode);
                println!("  Macros: {}", config.macros.len());
                println!(
                    "  Classes: {} ({} intervals)",
                    classes.len(),
                    classes.interval_count()
                );
                println!(
                    "  Rules: {} in {} buckets",
                    ruleset.rule_count(),
                    ruleset.bucket_count()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Grammar is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}
