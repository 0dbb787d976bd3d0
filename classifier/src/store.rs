use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::artifact;
use crate::error::ArtifactError;
use crate::svm::LinearSvm;

/// Default artifact location, relative to the running process.
pub const DEFAULT_ARTIFACT_PATH: &str = "svm_iris_model.json";

/// Process-wide handle to the classifier artifact.
///
/// The artifact is deserialized at most once, on first access. The outcome
/// is cached for the lifetime of the store, a failed load included: a
/// missing file stays missing until the process restarts.
pub struct ModelStore {
    path: PathBuf,
    cell: OnceLock<Result<LinearSvm, ArtifactError>>,
}

impl ModelStore {
    /// Creates a store for the given path without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded model, or the load failure.
    ///
    /// The first call deserializes the artifact; every later call returns
    /// the cached outcome without touching the filesystem again.
    pub fn get(&self) -> Result<&LinearSvm, &ArtifactError> {
        self.cell
            .get_or_init(|| {
                log::info!("loading model artifact from '{}'", self.path.display());
                let loaded = artifact::load(&self.path);
                if let Err(e) = &loaded {
                    log::error!("model load failed: {e}");
                }
                loaded
            })
            .as_ref()
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_PATH)
    }
}
