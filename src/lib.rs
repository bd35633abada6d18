// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Gitwork library - activity report for a directory of git repositories
//!
//! Every immediate subdirectory of a root is treated as a candidate
//! repository. Candidates that open cleanly and have a commit behind HEAD
//! are reported most recently changed first, with anything older than a
//! configurable number of days flagged as abandoned.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod inspect;
pub mod report;
pub mod scanner;

/// Core data types shared by the scanner and the reporter
pub mod types {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    /// Branch label shown when HEAD points straight at a commit
    pub const DETACHED_BRANCH: &str = "(detached)";

    // =========================================================================
    // Repository Record
    // =========================================================================

    /// One successfully inspected repository
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RepositoryRecord {
        /// Last path segment of the repository directory
        pub name: String,
        /// Author time of the commit HEAD resolves to
        pub commit_time: DateTime<Utc>,
        /// Short name of the branch HEAD points to
        pub branch: String,
    }

    // =========================================================================
    // Activity Classification
    // =========================================================================

    /// Whether a repository has seen recent work
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Activity {
        /// Last commit is inside the active window
        Active,
        /// Last commit is at least `active_window_days` old
        Abandoned,
    }

    impl Activity {
        /// Classify a repository by the age of its last commit.
        ///
        /// The window is exclusive: a commit exactly `active_window_days`
        /// days old is abandoned.
        #[must_use]
        pub fn classify(days_ago: i64, active_window_days: i64) -> Self {
            if days_ago < active_window_days {
                Self::Active
            } else {
                Self::Abandoned
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_classify_boundary_is_abandoned() {
            assert_eq!(Activity::classify(89, 90), Activity::Active);
            assert_eq!(Activity::classify(90, 90), Activity::Abandoned);
            assert_eq!(Activity::classify(91, 90), Activity::Abandoned);
        }

        #[test]
        fn test_classify_future_commit_is_active() {
            assert_eq!(Activity::classify(-1, 90), Activity::Active);
        }

        #[test]
        fn test_zero_window_abandons_everything_not_in_future() {
            assert_eq!(Activity::classify(0, 0), Activity::Abandoned);
        }
    }
}

