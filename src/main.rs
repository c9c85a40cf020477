//! # sizescan
//!
//! Scans a directory for files with specified extensions and lists their
//! sizes and names, largest first, with paginated output.
//!
//! ## Usage
//!
//! ```bash
//! # Largest files in the current directory
//! sizescan
//!
//! # The 3 largest mp4/mp3 files under ~/Desktop, searching subfolders
//! sizescan ~/Desktop e=mp4,mp3 3 -r
//! ```

mod cli;

use std::io;
use std::process::exit;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use sizescan::{
    args::{ResolvedArgs, resolve_tokens},
    config::{Config, FileConfig},
    error::Error,
    output::JsonReport,
    presenter::{Outcome, Presenter},
    scanner::Scanner,
    stale,
};

use cli::Cli;

/// Entry point for the sizescan application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing the single-line message to stderr before exiting with a non-zero
/// status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function orchestrates the full pipeline: parse the flag surface,
/// load the config file, classify the free tokens, scan, and either print
/// the JSON report or run the interactive paginated listing.
///
/// # Errors
///
/// Returns errors from token resolution, directory scanning, JSON
/// serialization, terminal I/O, or a declined pagination prompt.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let json_mode = args.json();
    let config = Config::from_file(&load_config(json_mode));

    let ResolvedArgs {
        dir,
        filter,
        params,
    } = resolve_tokens(
        args.tokens(),
        &config.catalog,
        args.recursive(),
        args.useless(),
    )?;

    let mut scanner = Scanner::new(filter, params.recursive).with_quiet(json_mode);

    if params.useless {
        let age = config.stale;
        scanner = scanner.with_post_filter(Box::new(move |path| {
            stale::is_stale(path, &age, Utc::now())
        }));
    }

    let results = scanner.scan(&dir)?;

    if json_mode {
        let report = JsonReport::from_entries(&results, params.limit);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let presenter = Presenter::new(config.page_size);
    let stdin = io::stdin();
    let outcome = presenter.present(&results, params.limit, stdin.lock(), io::stdout().lock())?;

    match outcome {
        Outcome::Completed => Ok(()),
        Outcome::Aborted => Err(Error::UserAbort.into()),
    }
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
