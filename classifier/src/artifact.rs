//! Artifact file deserialization.
//!
//! The artifact is a JSON document: the class labels, the column names the
//! model was fitted with, and one linear decision machine per class pair.
//! Beyond the shape checks needed to build the model, the contents are
//! accepted as-is.

use std::path::Path;

use ndarray::Array1;
use serde::Deserialize;

use crate::error::ArtifactError;
use crate::features::FEATURE_NAMES;
use crate::svm::{LinearSvm, Machine};

/// Raw artifact document as stored on disk.
#[derive(Debug, Deserialize)]
pub struct ArtifactDraft {
    pub classes: Vec<String>,
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub machines: Vec<MachineDraft>,
}

/// One pairwise decision machine as stored on disk.
#[derive(Debug, Deserialize)]
pub struct MachineDraft {
    pub positive: usize,
    pub negative: usize,
    pub weights: Vec<f32>,
    pub bias: f32,
}

/// Deserializes a [`LinearSvm`] from a JSON artifact file.
///
/// # Errors
/// `NotFound` if the file is missing, `Io` if it cannot be read, `Json` if
/// it does not parse, `Invalid` if the parsed draft cannot be built.
pub fn load(path: &Path) -> Result<LinearSvm, ArtifactError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ArtifactError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let draft: ArtifactDraft =
        serde_json::from_str(&content).map_err(|e| ArtifactError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;

    build(draft)
}

/// Validates a draft and builds the model.
///
/// A feature-name mismatch against the training-time columns is logged as a
/// warning, not rejected: the model still runs, the predictions are suspect.
///
/// # Errors
/// Returns `Invalid` if the draft violates a shape requirement.
pub fn build(draft: ArtifactDraft) -> Result<LinearSvm, ArtifactError> {
    if draft.classes.is_empty() {
        return Err(ArtifactError::Invalid("classes must not be empty".into()));
    }
    if draft.machines.is_empty() {
        return Err(ArtifactError::Invalid("machines must not be empty".into()));
    }

    let names_match = draft.feature_names.is_empty()
        || (draft.feature_names.len() == FEATURE_NAMES.len()
            && draft
                .feature_names
                .iter()
                .zip(FEATURE_NAMES)
                .all(|(got, expected)| got.as_str() == expected));
    if !names_match {
        log::warn!(
            "artifact feature names {:?} do not match training columns {:?}",
            draft.feature_names,
            FEATURE_NAMES
        );
    }

    let n_classes = draft.classes.len();
    let machines = draft
        .machines
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            if m.positive >= n_classes || m.negative >= n_classes {
                return Err(ArtifactError::Invalid(format!(
                    "machine {i}: class index out of range (classes: {n_classes})"
                )));
            }
            if m.weights.len() != FEATURE_NAMES.len() {
                return Err(ArtifactError::Invalid(format!(
                    "machine {i}: expected {} weights, got {}",
                    FEATURE_NAMES.len(),
                    m.weights.len()
                )));
            }

            Ok(Machine {
                positive: m.positive,
                negative: m.negative,
                weights: Array1::from(m.weights),
                bias: m.bias,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LinearSvm::new(draft.classes, machines))
}
