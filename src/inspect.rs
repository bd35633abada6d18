// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Repository inspection - reads HEAD, its commit and the branch it is on

use crate::types::{RepositoryRecord, DETACHED_BRANCH};
use chrono::DateTime;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a candidate could not be turned into a [`RepositoryRecord`]
#[derive(Debug, Error)]
pub enum InspectError {
    /// No repository metadata at the path
    #[error("{} is not a git repository", path.display())]
    NotARepository {
        /// Candidate path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: BoxError,
    },

    /// HEAD could not be read
    #[error("HEAD of {} cannot be resolved", path.display())]
    NoHead {
        /// Candidate path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: BoxError,
    },

    /// HEAD names a branch that has no commits yet
    #[error("HEAD of {} is unborn", path.display())]
    UnbornHead {
        /// Candidate path
        path: PathBuf,
    },

    /// HEAD's target is not a readable commit
    #[error("HEAD of {} does not point to a commit", path.display())]
    NoCommit {
        /// Candidate path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: BoxError,
    },

    /// The commit's author line could not be decoded
    #[error("commit at HEAD of {} has an unreadable author: {reason}", path.display())]
    BadSignature {
        /// Candidate path
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },
}

impl InspectError {
    /// Path of the candidate that failed
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotARepository { path, .. }
            | Self::NoHead { path, .. }
            | Self::UnbornHead { path }
            | Self::NoCommit { path, .. }
            | Self::BadSignature { path, .. } => path,
        }
    }

    /// True when the repository opened but HEAD leads nowhere usable
    #[must_use]
    pub fn is_missing_head(&self) -> bool {
        matches!(self, Self::NoHead { .. } | Self::UnbornHead { .. })
    }
}

/// Open `path` as a repository and read what HEAD currently points at.
///
/// The commit is looked up through HEAD's own target, so repositories whose
/// default branch is not `master` or `main` work the same way. The timestamp
/// is the author time, not the committer time.
pub fn inspect(path: &Path) -> Result<RepositoryRecord, InspectError> {
    let repo = gix::open(path).map_err(|e| InspectError::NotARepository {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let head = repo.head().map_err(|e| InspectError::NoHead {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let Some(head_id) = head.id() else {
        return Err(InspectError::UnbornHead {
            path: path.to_path_buf(),
        });
    };

    let commit = repo
        .find_commit(head_id.detach())
        .map_err(|e| InspectError::NoCommit {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let bad_signature = |reason: String| InspectError::BadSignature {
        path: path.to_path_buf(),
        reason,
    };

    let author = commit.author().map_err(|e| bad_signature(e.to_string()))?;
    let time = author.time().map_err(|e| bad_signature(e.to_string()))?;
    let commit_time = DateTime::from_timestamp(time.seconds, 0)
        .ok_or_else(|| bad_signature(format!("timestamp {} out of range", time.seconds)))?;

    let branch = match head.referent_name() {
        Some(name) => name.shorten().to_string(),
        None => DETACHED_BRANCH.to_string(),
    };

    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    trace!("{} is on {} at {}", name, branch, commit_time);

    Ok(RepositoryRecord {
        name,
        commit_time,
        branch,
    })
}
