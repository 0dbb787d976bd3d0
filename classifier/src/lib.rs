pub mod artifact;
mod error;
mod features;
mod store;
mod svm;

pub use error::ArtifactError;
pub use features::{FeatureRecord, FEATURE_NAMES};
pub use store::{ModelStore, DEFAULT_ARTIFACT_PATH};
pub use svm::LinearSvm;
