//! List command implementation

use anyhow::Result;
use clap::ValueEnum;

use super::{ListCommands, OutputFormat};

/// Execute a list subcommand
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Classes(grammar) => {
            let segmenter = grammar.segmenter()?;
            let classes = segmenter.ruleset().classes();
            println!("Character classes ({}):", grammar.display_name());
            for (id, class) in classes.classes() {
                if id.is_sentinel() {
                    println!("  {:<20} (built-in)", class.name());
                } else {
                    println!("  {:<20} {} ranges", class.name(), class.ranges().len());
                }
            }
        }
        ListCommands::Rules(grammar) => {
            let segmenter = grammar.segmenter()?;
            println!("Rules ({}):", grammar.display_name());
            for rule in segmenter.ruleset().rules() {
                println!("  {rule}");
            }
        }
        ListCommands::Formats => {
            println!("Available output formats:");
            for format in OutputFormat::value_variants() {
                if let Some(value) = format.to_possible_value() {
                    println!(
                        "  {:<6} - {}",
                        value.get_name(),
                        value.get_help().map(ToString::to_string).unwrap_or_default()
                    );
                }
            }
        }
    }
    Ok(())
}
