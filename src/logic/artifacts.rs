//! Artifact Loader - Model and Column-List Deserialization
//!
//! Loads the two on-disk artifacts (fitted ONNX regressor, training column
//! list) into one `Artifacts` value held by an `ArtifactStore`. The store is
//! constructed in `main`, handed to Tauri as managed state and injected into
//! commands, so there is no hidden process-wide cache. A failed load never
//! panics: the store stays empty and the error text goes to the UI banner.

use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use ort::session::{builder::GraphOptimizationLevel, Session};

use crate::constants::{COLUMNS_FILENAME, MODEL_FILENAME};

use super::predict::OnnxRegression;
use super::schema::FeatureSchema;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct ArtifactError(pub String);

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ArtifactError: {}", self.0)
    }
}

impl std::error::Error for ArtifactError {}

// ============================================================================
// LOADED ARTIFACTS
// ============================================================================

/// Both artifacts, immutable after load. The session sits behind a `Mutex`
/// because `ort` needs `&mut` to run.
pub struct Artifacts {
    pub model: Mutex<OnnxRegression>,
    pub schema: FeatureSchema,
    pub model_path: String,
    pub loaded_at: DateTime<Utc>,
}

/// Status for the UI banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactStatus {
    pub model_loaded: bool,
    pub model_path: Option<String>,
    pub column_count: usize,
    pub schema_hash: Option<u32>,
    pub loaded_at: Option<String>,
}

// ============================================================================
// STORE
// ============================================================================

/// Holder for the loaded artifacts. Write on (re)load, read on predict.
pub struct ArtifactStore {
    inner: RwLock<Option<Artifacts>>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self { inner: RwLock::new(None) }
    }

    /// Load both artifacts from `dir` and swap them in atomically.
    ///
    /// A failed load leaves whatever was previously loaded in place, so a
    /// bad reload cannot take a working predictor down.
    pub fn load_from_dir(&self, dir: &Path) -> Result<(), ArtifactError> {
        let model_path = dir.join(MODEL_FILENAME);
        let columns_path = dir.join(COLUMNS_FILENAME);

        if !model_path.exists() || !columns_path.exists() {
            return Err(ArtifactError(format!(
                "Model files not found. Please ensure '{}' and '{}' are in {}.",
                MODEL_FILENAME,
                COLUMNS_FILENAME,
                dir.display()
            )));
        }

        let columns_json = std::fs::read_to_string(&columns_path)
            .map_err(|e| ArtifactError(format!("Failed to read {}: {}", COLUMNS_FILENAME, e)))?;
        let schema = FeatureSchema::from_json(&columns_json)
            .map_err(|e| ArtifactError(format!("Failed to parse {}: {}", COLUMNS_FILENAME, e.0)))?;

        log::info!("Loading ONNX model from: {}", model_path.display());

        let session = Session::builder()
            .map_err(|e| ArtifactError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ArtifactError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(&model_path)
            .map_err(|e| ArtifactError(format!("Failed to load model: {}", e)))?;

        let artifacts = Artifacts {
            model: Mutex::new(OnnxRegression::new(session)),
            schema,
            model_path: model_path.display().to_string(),
            loaded_at: Utc::now(),
        };

        log::info!(
            "Artifacts loaded: {} columns, schema hash {:08x}",
            artifacts.schema.len(),
            artifacts.schema.layout_hash()
        );

        *self.inner.write() = Some(artifacts);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Run `f` against the loaded artifacts, or `None` if nothing is loaded
    pub fn with_loaded<R>(&self, f: impl FnOnce(&Artifacts) -> R) -> Option<R> {
        self.inner.read().as_ref().map(f)
    }

    pub fn status(&self) -> ArtifactStatus {
        match self.inner.read().as_ref() {
            Some(artifacts) => ArtifactStatus {
                model_loaded: true,
                model_path: Some(artifacts.model_path.clone()),
                column_count: artifacts.schema.len(),
                schema_hash: Some(artifacts.schema.layout_hash()),
                loaded_at: Some(artifacts.loaded_at.to_rfc3339()),
            },
            None => ArtifactStatus {
                model_loaded: false,
                model_path: None,
                column_count: 0,
                schema_hash: None,
                loaded_at: None,
            },
        }
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_leave_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new();

        let err = store.load_from_dir(dir.path()).unwrap_err();
        assert!(err.0.contains(MODEL_FILENAME));
        assert!(err.0.contains(COLUMNS_FILENAME));
        assert!(!store.is_loaded());

        let status = store.status();
        assert!(!status.model_loaded);
        assert_eq!(status.column_count, 0);
        assert!(status.loaded_at.is_none());
    }

    #[test]
    fn test_only_one_artifact_present_is_still_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODEL_FILENAME), b"onnx").unwrap();

        let store = ArtifactStore::new();
        assert!(store.load_from_dir(dir.path()).is_err());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_unparseable_column_list_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODEL_FILENAME), b"onnx").unwrap();
        std::fs::write(dir.path().join(COLUMNS_FILENAME), b"not json").unwrap();

        let store = ArtifactStore::new();
        let err = store.load_from_dir(dir.path()).unwrap_err();
        assert!(err.0.contains(COLUMNS_FILENAME));
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_with_loaded_on_empty_store() {
        let store = ArtifactStore::new();
        assert!(store.with_loaded(|a| a.schema.len()).is_none());
    }
}
