//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change artifact filenames or locations, only edit this file.

use std::path::PathBuf;

/// Fixed filename of the serialized regression model
pub const MODEL_FILENAME: &str = "salary_model.onnx";

/// Fixed filename of the training-time column list
pub const COLUMNS_FILENAME: &str = "input_columns.json";

/// Currency symbol used when rendering predictions
pub const CURRENCY_SYMBOL: &str = "₹";

/// Inclusive bounds for the experience input
pub const MIN_EXPERIENCE: u32 = 0;
pub const MAX_EXPERIENCE: u32 = 50;

/// Default value shown in the experience input
pub const DEFAULT_EXPERIENCE: u32 = 2;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Salary Predictor";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Directory the artifacts are loaded from.
///
/// Defaults to the working directory; `SALARY_MODEL_DIR` overrides it.
pub fn artifact_dir() -> PathBuf {
    std::env::var("SALARY_MODEL_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}
