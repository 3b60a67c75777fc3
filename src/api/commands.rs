//! Tauri Commands - API for the Frontend
//!
//! One command per interaction the form page makes: fetch the choices,
//! check the artifact banner, predict, and retry a failed artifact load.

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::constants;
use crate::logic::predict::{self, PredictError};
use crate::logic::{ArtifactStatus, ArtifactStore, FormOptions, InputRecord};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Result of one Predict click, shaped for the single status line in the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// "success" | "warning" | "error"
    pub status: String,
    pub message: String,
    pub salary: Option<f32>,
}

impl PredictionOutcome {
    fn success(salary: f32) -> Self {
        Self {
            status: "success".to_string(),
            message: format!("Estimated Annual Salary: {}", predict::format_inr(salary)),
            salary: Some(salary),
        }
    }

    fn model_missing() -> Self {
        Self {
            status: "warning".to_string(),
            message: "Model not loaded. Please check your files.".to_string(),
            salary: None,
        }
    }

    fn failure(err: &PredictError) -> Self {
        Self {
            status: "error".to_string(),
            message: format!("Prediction failed. Error: {}", err.0),
            salary: None,
        }
    }
}

// ============================================================================
// FORM COMMANDS
// ============================================================================

/// Choices and bounds for the form widgets
#[tauri::command]
pub async fn get_form_options() -> Result<FormOptions, String> {
    Ok(FormOptions::current())
}

// ============================================================================
// ARTIFACT COMMANDS
// ============================================================================

/// Current artifact state, for the startup banner
#[tauri::command]
pub async fn get_artifact_status(store: State<'_, ArtifactStore>) -> Result<ArtifactStatus, String> {
    Ok(store.status())
}

/// Retry loading the artifacts from the configured directory
#[tauri::command]
pub async fn reload_artifacts(store: State<'_, ArtifactStore>) -> Result<ArtifactStatus, String> {
    store
        .load_from_dir(&constants::artifact_dir())
        .map_err(|e| e.0)?;
    Ok(store.status())
}

// ============================================================================
// PREDICTION COMMAND
// ============================================================================

/// Run one submission through the pipeline.
///
/// Never errs at the command boundary: missing artifacts come back as a
/// warning outcome and inference failures as an error outcome, both carrying
/// the message the status line shows verbatim.
#[tauri::command]
pub async fn predict_salary(
    record: InputRecord,
    store: State<'_, ArtifactStore>,
) -> Result<PredictionOutcome, String> {
    let outcome = store.with_loaded(|artifacts| {
        let mut model = artifacts.model.lock();
        match predict::predict_salary(&mut *model, &artifacts.schema, &record) {
            Ok(salary) => PredictionOutcome::success(salary),
            Err(e) => {
                log::warn!("Prediction failed: {}", e);
                PredictionOutcome::failure(&e)
            }
        }
    });

    Ok(outcome.unwrap_or_else(PredictionOutcome::model_missing))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome_formats_currency() {
        let outcome = PredictionOutcome::success(100000.0);
        assert_eq!(outcome.status, "success");
        assert_eq!(outcome.message, "Estimated Annual Salary: ₹100,000.00");
        assert_eq!(outcome.salary, Some(100000.0));
    }

    #[test]
    fn test_missing_model_is_a_warning_not_an_error() {
        let outcome = PredictionOutcome::model_missing();
        assert_eq!(outcome.status, "warning");
        assert!(outcome.salary.is_none());
    }

    #[test]
    fn test_failure_outcome_carries_underlying_text() {
        let outcome = PredictionOutcome::failure(&PredictError("bad shape".to_string()));
        assert_eq!(outcome.status, "error");
        assert!(outcome.message.contains("bad shape"));
    }
}
