// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Activity report - orders inspected repositories and renders the table

use crate::types::{Activity, RepositoryRecord};
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Narrowest width of the name and branch columns
const MIN_COLUMN_WIDTH: usize = 25;

/// Spaces kept between a column's longest cell and the next column
const COLUMN_GAP: usize = 2;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Whole days elapsed between `commit_time` and `now`, rounded down.
///
/// Commits dated after `now` (clock skew) count as zero days old.
#[must_use]
pub fn days_ago(now: DateTime<Utc>, commit_time: DateTime<Utc>) -> i64 {
    (now - commit_time).num_seconds().div_euclid(SECONDS_PER_DAY).max(0)
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Repository name
    pub name: String,
    /// Branch HEAD points to
    pub branch: String,
    /// Author time of the HEAD commit
    pub commit_time: DateTime<Utc>,
    /// Whole days since that commit
    pub days_ago: i64,
    /// Active or abandoned
    pub activity: Activity,
}

/// Repositories ordered most recently changed first
#[derive(Debug, Clone, Default)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Order `records` newest first and classify each against the window.
    ///
    /// Equal timestamps are ordered by name so output is stable.
    #[must_use]
    pub fn build(
        mut records: Vec<RepositoryRecord>,
        now: DateTime<Utc>,
        active_window_days: i64,
    ) -> Self {
        records.sort_by(|a, b| {
            b.commit_time
                .cmp(&a.commit_time)
                .then_with(|| a.name.cmp(&b.name))
        });

        let rows = records
            .into_iter()
            .map(|record| {
                let days = days_ago(now, record.commit_time);
                ReportRow {
                    name: record.name,
                    branch: record.branch,
                    commit_time: record.commit_time,
                    days_ago: days,
                    activity: Activity::classify(days, active_window_days),
                }
            })
            .collect();

        Self { rows }
    }

    /// Rows in report order
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no repository made it into the report
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table, with terminal colors when `color` is set
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let name_width = column_width("GIT", self.rows.iter().map(|r| r.name.as_str()));
        let branch_width = column_width("BRANCH", self.rows.iter().map(|r| r.branch.as_str()));

        let mut out = format!("{:<name_width$}{:<branch_width$}LAST CHANGE\n", "GIT", "BRANCH");

        for row in &self.rows {
            out.push_str(&format!(
                "{:<name_width$}{:<branch_width$}{}\n",
                row.name,
                row.branch,
                last_change(row, color)
            ));
        }

        out
    }

    /// Rows as a pretty-printed JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.rows)
    }
}

/// Plain-text report for `records` as seen at `now`
#[must_use]
pub fn report(records: Vec<RepositoryRecord>, now: DateTime<Utc>, active_window_days: i64) -> String {
    Report::build(records, now, active_window_days).render(false)
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    let longest = cells
        .map(|c| c.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);
    MIN_COLUMN_WIDTH.max(longest + COLUMN_GAP)
}

fn last_change(row: &ReportRow, color: bool) -> String {
    match (row.activity, color) {
        (Activity::Active, false) => format!("{} days ago", row.days_ago),
        (Activity::Abandoned, false) => format!("{} days ago (abandoned)", row.days_ago),
        (Activity::Active, true) => format!("{} {}", row.days_ago, "days ago".green().bold()),
        (Activity::Abandoned, true) => format!(
            "{} {} {}",
            row.days_ago,
            "days ago".bright_black().bold(),
            "(abandoned)".red().bold()
        ),
    }
}
