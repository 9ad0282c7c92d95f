//! Error types shared across the crate

use std::path::PathBuf;

use thiserror::Error;

/// Failures from the audio output paths (sample playback and tone synthesis)
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio sample is configured")]
    NoSample,
    #[error("no audio output device available: {0}")]
    Device(String),
    #[error("could not decode audio sample: {0}")]
    Decode(String),
    #[error("playback failed: {0}")]
    Playback(String),
}

/// Failures reading or writing the persisted preference slot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed preferences file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures scheduling a background task (tick source or theme poller)
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("a task of this kind is already active")]
    AlreadyRunning,
    #[error("no async runtime available to schedule the task")]
    NoRuntime,
}
