use std::path::PathBuf;

use thiserror::Error;

use crate::schema::TrackId;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario JSON{}: {source}", path_suffix(.path))]
    JsonParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{track} track has no steps")]
    EmptyTrack { track: TrackId },

    #[error("{track} step '{id}' has non-positive duration {duration}")]
    NonPositiveDuration {
        track: TrackId,
        id: String,
        duration: f64,
    },

    #[error("{track} track contains duplicate step id '{id}'")]
    DuplicateStepId { track: TrackId, id: String },
}

impl ScenarioError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn json(path: Option<PathBuf>, source: serde_json::Error) -> Self {
        Self::JsonParse { path, source }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}
