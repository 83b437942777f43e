//! `config show` command.

use anyhow::Result;
use std::io::Write;

use extractguard_core::ScoringConfig;

/// Writes the effective configuration as YAML, or JSON when `json` is set.
pub fn run_show<W: Write>(config: &ScoringConfig, json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, config)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", serde_yaml::to_string(config)?)?;
    }
    Ok(())
}
