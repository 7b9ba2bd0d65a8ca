//! wordbreak CLI library
//!
//! Command implementations behind the `wordbreak` binary: splitting text
//! into words, counting the most frequent ones, and inspecting grammars.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
