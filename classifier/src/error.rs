use std::fmt;
use std::path::PathBuf;

/// All errors that can occur while loading the classifier artifact.
#[derive(Debug)]
pub enum ArtifactError {
    /// The artifact file does not exist at the expected path.
    NotFound { path: PathBuf },
    /// The file exists but cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The document parsed but does not describe a usable model.
    Invalid(String),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "model file '{}' not found", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid JSON in '{}': {source}", path.display())
            }
            Self::Invalid(msg) => write!(f, "invalid artifact: {msg}"),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
