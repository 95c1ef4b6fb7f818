//! Application-level errors and their exit codes.

use std::path::PathBuf;

use robonav_core::{InvalidMapError, Point};

/// Anything that stops a run before the robot reaches the goal.
///
/// "No path" and "bad map" are kept apart: one needs a different map
/// layout, the other a fixed map file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid map: {0}")]
    InvalidMap(#[from] InvalidMapError),

    #[error("cannot read map {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON map {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no path from start {start} to goal {goal}")]
    Unreachable { start: Point, goal: Point },

    #[error("search gave up after {expanded} expansions")]
    Exhausted { expanded: usize },

    #[error("terminal: {0}")]
    Terminal(Box<dyn std::error::Error>),
}

impl Error {
    /// Process exit code: 1 for search failures, 2 for bad maps, 3 for
    /// I/O and terminal trouble.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unreachable { .. } | Self::Exhausted { .. } => 1,
            Self::InvalidMap(_) | Self::Json { .. } => 2,
            Self::Io { .. } | Self::Terminal(_) => 3,
        }
    }
}
