// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Gitwork CLI - which of your repositories are still alive

use anyhow::Result;
use clap::{CommandFactory, Parser};
use gitwork::commands;
use gitwork::commands::scan::ScanArgs;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitwork")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the git repositories to report on
    #[arg(short = 'g', long = "git-path", env = "GIT", value_name = "DIR")]
    git_path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "GITWORK_CONFIG")]
    config: Option<PathBuf>,

    /// Days without a commit before a repository is abandoned (overrides config)
    #[arg(long, value_name = "DAYS")]
    days_ago: Option<i64>,

    /// Fail on the first directory that is not a readable repository
    #[arg(long)]
    strict: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();

    if let Some(shell) = cli.completions {
        return commands::completions::run(shell, &mut Cli::command(), &mut stdout);
    }

    let Some(root) = cli.git_path else {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!("Set --git-path or the GIT environment variable to the directory to scan.");
        std::process::exit(1);
    };

    let config_path = match cli.config {
        Some(path) => path,
        None => gitwork::config::default_path()?,
    };

    let args = ScanArgs {
        root,
        config_path,
        days_ago: cli.days_ago,
        strict: cli.strict,
        json: cli.json,
        color: !cli.no_color && std::io::stdout().is_terminal(),
    };

    commands::scan::run(&args, &mut stdout)
}
