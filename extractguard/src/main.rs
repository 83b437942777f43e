// extractguard/src/main.rs
//! ExtractGuard entry point.
//!
//! Parses arguments, loads the scoring configuration and dispatches to a command.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{debug, error};
use std::io;
use std::process::ExitCode;

use extractguard::cli::{Cli, Commands, ConfigCommand};
use extractguard::commands::{self, score::ScoreOptions};
use extractguard::logger;
use extractguard::ui::output_format;
use extractguard::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use extractguard_core::ScoringConfig;

/// Exit status used when `--fail-over-risk` is exceeded.
const RISK_EXCEEDED_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    // A missing .env file is the normal case.
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    logger::init_logger(logger::level_for_flags(args.quiet, args.debug));

    let theme_map = match build_theme_map(args.theme.as_ref()).context("Theme error") {
        Ok(theme_map) => theme_map,
        Err(e) => {
            report_error(&e, &ThemeStyle::default_theme_map());
            return ExitCode::FAILURE;
        }
    };

    match run(args, &theme_map) {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, &theme_map);
            ExitCode::FAILURE
        }
    }
}

/// Prints the full error chain to stderr.
fn report_error(err: &anyhow::Error, theme_map: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    if let Err(io_err) =
        output_format::print_error_message(&mut io::stderr(), &format!("{:#}", err), theme_map, stderr_supports_color)
    {
        error!("{:#} (failed to write to stderr: {})", err, io_err);
    }
}

fn run(args: Cli, theme_map: &ThemeMap) -> Result<ExitCode> {
    let config = ScoringConfig::load(args.config.as_deref()).context("Failed to load scoring configuration")?;
    debug!("Effective scoring configuration: {:?}", config);

    let stdout = io::stdout();
    let enable_colors = stdout.is_terminal();
    let stderr_supports_color = io::stderr().is_terminal();
    let mut writer = stdout.lock();

    match args.command {
        Commands::Score(cmd) => {
            let document_text = commands::read_input(Some(cmd.text.as_path()), "document text")?;
            let model_response = commands::read_input(cmd.response.as_deref(), "model response")?;
            let json_file = cmd.json_file.clone();
            let opts = ScoreOptions {
                document_text,
                model_response,
                json: cmd.json,
                json_file: cmd.json_file,
                fail_over_risk: cmd.fail_over_risk,
            };

            let outcome = commands::score::run_score(&config, opts, theme_map, enable_colors, &mut writer)?;

            if let Some(path) = json_file.filter(|_| !args.quiet) {
                output_format::print_info_message(
                    &mut io::stderr(),
                    &format!("JSON result written to {}", path.display()),
                    theme_map,
                    stderr_supports_color,
                )?;
            }

            if outcome.risk_exceeded {
                if !args.quiet {
                    output_format::print_warn_message(
                        &mut io::stderr(),
                        &format!(
                            "Risk before anonymization ({:.2}%) exceeds the allowed threshold.",
                            outcome.result.privacy_risk.risk_before
                        ),
                        theme_map,
                        stderr_supports_color,
                    )?;
                }
                return Ok(ExitCode::from(RISK_EXCEEDED_EXIT_CODE));
            }
        }
        Commands::Stats(cmd) => {
            let input = commands::read_input(cmd.input.as_deref(), "extraction records")?;
            commands::stats::run_stats(&input, cmd.json, theme_map, enable_colors, &mut writer)?;
        }
        Commands::Config(ConfigCommand::Show { json }) => {
            commands::config::run_show(&config, json, &mut writer)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
