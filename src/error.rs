//! Custom error types for dermascan.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the dermascan library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the model file from disk.
    #[error("failed to read model file {path}: {source}")]
    ModelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inference runtime rejected the model bytes.
    #[error("failed to load model {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: ort::Error,
    },

    /// Failed to load or decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Model inference failed.
    #[error("model inference failed: {source}")]
    Inference {
        #[source]
        source: ort::Error,
    },

    /// The model produced an output of unexpected shape.
    #[error("output shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The single message shown to the user for any analysis failure.
    ///
    /// Every variant collapses to the same string at the user-facing
    /// boundary; the tagged variants exist for diagnostics and logs.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        "Image analysis failed. Please try again."
    }
}

/// Result type alias for dermascan operations.
pub type Result<T> = std::result::Result<T, Error>;
