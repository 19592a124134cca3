//! Focuser Status Decoder
//!
//! Turns the integer codes reported by the focus daemon into the same
//! diagnostics and labels its console shows.

mod cli;
mod render;
mod settings;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use render::{Decoded, OutputStyle};
use settings::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Result of a completed invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    /// `--strict` was given and at least one code was unknown
    UnknownCodes,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::UnknownCodes => ExitCode::FAILURE,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings_path = Settings::settings_path();
    let settings = Settings::load();

    // Log to stderr so decoded output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(path = ?settings_path, style = ?settings.style, "Loaded settings");

    let mut out = std::io::stdout().lock();
    let outcome = run(cli, settings, settings_path, &mut out)?;
    Ok(outcome.into())
}

fn run(
    cli: Cli,
    settings: Settings,
    settings_path: Option<PathBuf>,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    match cli.command {
        Commands::Command { codes, strict } => {
            let decoded: Vec<Decoded> = codes.into_iter().map(render::decode_command).collect();
            for d in decoded.iter().filter(|d| !d.known) {
                tracing::warn!(code = d.code, "Unknown command status code");
            }
            emit(out, &decoded, cli.json)?;
            Ok(strict_outcome(&decoded, strict))
        }
        Commands::Focuser { codes, style } => {
            let style = style.unwrap_or(settings.style);
            let decoded: Vec<Decoded> = codes
                .into_iter()
                .map(|code| render::decode_focuser(code, style))
                .collect();
            for d in decoded.iter().filter(|d| !d.known) {
                tracing::warn!(code = d.code, "Unknown focuser status code");
            }
            emit(out, &decoded, cli.json)?;
            Ok(Outcome::Success)
        }
        Commands::List { style } => {
            let style = style.unwrap_or(settings.style);
            list(out, style, cli.json)?;
            Ok(Outcome::Success)
        }
        Commands::Config { style, log_filter } => {
            config(out, settings, settings_path, style, log_filter, cli.json)?;
            Ok(Outcome::Success)
        }
    }
}

fn strict_outcome(decoded: &[Decoded], strict: bool) -> Outcome {
    if strict && decoded.iter().any(|d| !d.known) {
        Outcome::UnknownCodes
    } else {
        Outcome::Success
    }
}

fn emit(out: &mut impl Write, decoded: &[Decoded], json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(decoded)?)?;
    } else {
        for d in decoded {
            writeln!(out, "{}", d.line())?;
        }
    }
    Ok(())
}

fn list(out: &mut impl Write, style: OutputStyle, json: bool) -> anyhow::Result<()> {
    let (commands, states) = render::tables(style);

    if json {
        let tables = serde_json::json!({
            "commands": commands,
            "focuser": states,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&tables)?)?;
        return Ok(());
    }

    writeln!(out, "Command results:")?;
    for d in &commands {
        writeln!(out, "{}", d.line())?;
    }
    writeln!(out, "{:>5}  error: Unknown error code <code>", "other")?;
    writeln!(out)?;
    writeln!(out, "Focuser states:")?;
    for d in &states {
        writeln!(out, "{}", d.line())?;
    }
    writeln!(out, "{:>5}  {}", "other", render::unknown_label(style))?;
    Ok(())
}

fn config(
    out: &mut impl Write,
    mut settings: Settings,
    settings_path: Option<PathBuf>,
    style: Option<OutputStyle>,
    log_filter: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let changed = style.is_some() || log_filter.is_some();
    if let Some(style) = style {
        settings.style = style;
    }
    if let Some(filter) = log_filter {
        settings.log_filter = Some(filter);
    }

    if changed {
        let path = settings_path
            .as_deref()
            .context("could not determine settings path")?;
        settings.save_to(path).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to save settings");
        })?;
        tracing::info!(path = %path.display(), "Saved settings");
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
    } else {
        match &settings_path {
            Some(path) => writeln!(out, "config: {}", path.display())?,
            None => writeln!(out, "config: <unavailable>")?,
        }
        writeln!(out, "style: {}", settings.style.name())?;
        writeln!(out, "log_filter: {}", settings.log_filter())?;
    }
    Ok(())
}
