// extractguard/src/commands/mod.rs
//! Command implementations behind the `extractguard` subcommands.

pub mod config;
pub mod score;
pub mod stats;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole of `path`, or stdin when no path is given.
pub fn read_input(path: Option<&Path>, what: &str) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .with_context(|| format!("Failed to read {} from stdin", what))?;
            Ok(buffer)
        }
    }
}
