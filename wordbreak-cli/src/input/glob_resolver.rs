//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;

use super::InputSource;
use crate::error::CliError;

/// Resolve file patterns to input sources.
///
/// `-` stands for stdin and may appear once; files are sorted and deduplicated.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == "-" {
            stdin = true;
            continue;
        }
        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !stdin {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }
    Ok(sources)
}
