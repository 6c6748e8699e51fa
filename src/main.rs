// SPDX-License-Identifier: MIT
//
// hexplorer — explore the 24-bit color space from a terminal.
//
// This is the main binary that wires together all the crates:
//
//   hx-color   → color math (parsing, luminance, mixing, schemes, naming)
//   hx-term    → swatch rendering with TrueColor / ANSI-256 escapes
//   hx-session → command loop, prompts, JSON export
//
// Startup order:
//
//   flags + env → Config → (Termux) storage check → (opt-in) profile patch
//   banner → start color prompt → Session::run → exit code
//
// Logging goes to stderr and is silent below `warn` unless HEXPLORER_LOG
// says otherwise, so it never interleaves with the interactive output.

mod config;
mod setup;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use hx_session::{JsonDirExporter, Prompt, Session, ask_start_color, write_banner};
use hx_term::Painter;
use tracing_subscriber::EnvFilter;

use crate::config::{Args, Config, Environment};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HEXPLORER_LOG";

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let env = Environment::capture();
    let config = Config::resolve(args, &env);
    tracing::debug!(?config, "resolved configuration");

    let mut painter = Painter::new(io::stdout().lock(), config.color);
    let mut prompt = Prompt::new(io::stdin().lock());

    if env.is_termux() {
        setup::ensure_storage_access(
            &mut painter,
            &mut prompt,
            Path::new(setup::SHARED_STORAGE),
            setup::request_termux_storage,
        )?;
    }

    if config.patch_profile {
        match env.bashrc() {
            Some(profile) => match setup::patch_profile(&profile) {
                Ok(true) => painter.line(format_args!(
                    "Added COLORTERM and TERM exports to {}",
                    profile.display()
                ))?,
                Ok(false) => {}
                Err(err) => tracing::warn!(%err, "could not patch shell profile"),
            },
            None => tracing::warn!("no home directory, skipping profile patch"),
        }
    }

    write_banner(&mut painter)?;
    let Some(start) = ask_start_color(&mut painter, &mut prompt)? else {
        return Ok(());
    };

    let exporter = JsonDirExporter::new(config.export_dir);
    let mut session = Session::new(start, painter, exporter, rand::rng());
    session.run(&mut prompt).context("session ended unexpectedly")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("hexplorer: {err:#}");
            ExitCode::FAILURE
        }
    }
}
