//! Loading the bundled classification model.

use std::fs;
use std::path::Path;

use ort::session::Session;

use crate::error::{Error, Result};

/// An exclusively-owned, loaded classification graph.
///
/// The model file is read fully into memory before the session is built,
/// matching how the bundled asset is shipped and consumed. The handle is
/// acquired for the scope of one classification pass and released on drop.
pub struct ModelHandle {
    session: Session,
}

impl ModelHandle {
    /// Load a model from an ONNX file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelRead`] if the file cannot be read and
    /// [`Error::ModelLoad`] if the inference runtime rejects its contents.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        tracing::info!("Loading model from {}", path.display());

        let bytes = fs::read(path).map_err(|source| Error::ModelRead {
            path: path.to_path_buf(),
            source,
        })?;

        let session = Session::builder()
            .map_err(|source| Error::ModelLoad {
                path: path.to_path_buf(),
                source,
            })?
            .commit_from_memory(&bytes)
            .map_err(|source| Error::ModelLoad {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { session })
    }

    /// Consume the handle, yielding the underlying session.
    pub(crate) fn into_session(self) -> Session {
        self.session
    }
}
