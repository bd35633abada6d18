// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Scan command - inspects every repository under a directory and prints
//! the activity report

use crate::config::Config;
use crate::report::Report;
use crate::scanner::{scan, ScanOptions};
use anyhow::{Context, Result};
use chrono::Utc;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Everything the scan command needs, resolved from flags and environment
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Directory whose subdirectories are scanned
    pub root: PathBuf,
    /// Configuration file location
    pub config_path: PathBuf,
    /// Overrides the configured active window for this run
    pub days_ago: Option<i64>,
    /// Abort on the first repository that cannot be inspected
    pub strict: bool,
    /// Emit JSON instead of the table
    pub json: bool,
    /// Color the activity markers
    pub color: bool,
}

/// Run the scan command
pub fn run(args: &ScanArgs, out: &mut dyn Write) -> Result<()> {
    let config = Config::load_or_create(&args.config_path).with_context(|| {
        format!("Failed to load configuration {}", args.config_path.display())
    })?;
    let active_window_days = args.days_ago.unwrap_or(config.global.days_ago);

    info!("Scanning: {:?}", args.root);

    let options = ScanOptions {
        continue_on_inspection_error: !args.strict,
    };
    let records = scan(&args.root, &options)
        .with_context(|| format!("Failed to scan {}", args.root.display()))?;

    let report = Report::build(records, Utc::now(), active_window_days);
    if report.is_empty() {
        info!("No repositories with commits under {}", args.root.display());
    }

    if args.json {
        writeln!(out, "{}", report.to_json().context("Failed to serialize report")?)?;
    } else {
        write!(out, "{}", report.render(args.color))?;
    }

    Ok(())
}
