// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Repository discovery - lists candidate directories and inspects each one

use crate::inspect::{inspect, InspectError};
use crate::types::RepositoryRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Failure to enumerate the scan root
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The root path does not exist
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The root path exists but is not a directory
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The root path could not be examined
    #[error("failed to read {}", path.display())]
    Io {
        /// Path being examined
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Listing the root directory failed
    #[error("failed to list {}", path.display())]
    Walk {
        /// Root being listed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: walkdir::Error,
    },
}

/// Failure of a whole scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root could not be enumerated
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    /// A candidate failed inspection while errors were not being skipped
    #[error(transparent)]
    Inspect(#[from] InspectError),
}

/// Scan behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Omit candidates that fail inspection instead of aborting the scan
    pub continue_on_inspection_error: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            continue_on_inspection_error: true,
        }
    }
}

/// List the immediate subdirectories of `root` as absolute paths.
///
/// Files and symlinks are ignored and nothing below the first level is
/// visited. Entries come back sorted by file name.
pub fn list_candidates(root: &Path) -> Result<Vec<PathBuf>, DiscoverError> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DiscoverError::NotFound(root.to_path_buf()));
        }
        Err(source) => {
            return Err(DiscoverError::Io {
                path: root.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(DiscoverError::NotADirectory(root.to_path_buf()));
    }

    let root = root.canonicalize().map_err(|source| DiscoverError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| DiscoverError::Walk {
            path: root.clone(),
            source,
        })?;

        if entry.file_type().is_dir() {
            candidates.push(entry.into_path());
        }
    }

    debug!("Found {} candidate directories in {}", candidates.len(), root.display());
    Ok(candidates)
}

/// Discover and inspect every candidate under `root`.
///
/// Records come back in discovery order; sorting is the reporter's job.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Vec<RepositoryRecord>, ScanError> {
    let candidates = list_candidates(root)?;
    let mut records = Vec::with_capacity(candidates.len());

    for candidate in &candidates {
        match inspect(candidate) {
            Ok(record) => records.push(record),
            Err(e) if options.continue_on_inspection_error => {
                debug!("Skipping {}: {}", e.path().display(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        "Inspected {} of {} candidates in {}",
        records.len(),
        candidates.len(),
        root.display()
    );
    Ok(records)
}
