//! Predictor - ONNX Regression Inference
//!
//! Runs the loaded model on one aligned row and renders the scalar result
//! as currency text. Everything the runtime can throw is wrapped into
//! `PredictError` here; callers only ever see a message, never a panic.

use ndarray::Array2;
use ort::session::Session;
use ort::value::Value;

use crate::constants::CURRENCY_SYMBOL;

use super::encode::align;
use super::form::InputRecord;
use super::schema::FeatureSchema;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct PredictError(pub String);

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PredictError: {}", self.0)
    }
}

impl std::error::Error for PredictError {}

// ============================================================================
// MODEL SEAM
// ============================================================================

/// Single-row regression inference. The one seam between alignment and the
/// runtime, so tests can swap in a stub model.
pub trait RegressionModel {
    fn predict_row(&mut self, row: &[f32]) -> Result<f32, PredictError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// The real model: an ONNX Runtime session over the fitted regressor
pub struct OnnxRegression {
    session: Session,
}

impl OnnxRegression {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl RegressionModel for OnnxRegression {
    fn predict_row(&mut self, row: &[f32]) -> Result<f32, PredictError> {
        let input_array = Array2::<f32>::from_shape_vec((1, row.len()), row.to_vec())
            .map_err(|e| PredictError(format!("Array error: {}", e)))?;

        let output_name = self
            .session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| PredictError("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| PredictError(format!("Tensor error: {}", e)))?;

        let outputs = self
            .session
            .run(ort::inputs![input_tensor])
            .map_err(|e| PredictError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| PredictError("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictError(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;

        data.first()
            .copied()
            .ok_or_else(|| PredictError("Model returned an empty output".to_string()))
    }
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Align one submission against the schema and run it through the model.
pub fn predict_salary(
    model: &mut dyn RegressionModel,
    schema: &FeatureSchema,
    record: &InputRecord,
) -> Result<f32, PredictError> {
    let row = align(schema, record);
    log::debug!("Aligned row ({} columns): {:?}", row.len(), row);

    let salary = model.predict_row(&row)?;
    log::debug!("Predicted salary: {}", salary);

    Ok(salary)
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Render a salary as `₹1,234,567.89` (thousands-grouped, two decimals)
pub fn format_inr(value: f32) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    format!("{}{}{}.{}", CURRENCY_SYMBOL, sign, int_grouped, frac_part)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::form::{Company, EducationLevel, JobTitle, Location};

    /// Stub model returning a fixed constant, for exercising the pipeline
    /// without an ONNX file.
    struct ConstantModel(f32);

    impl RegressionModel for ConstantModel {
        fn predict_row(&mut self, _row: &[f32]) -> Result<f32, PredictError> {
            Ok(self.0)
        }
    }

    struct FailingModel;

    impl RegressionModel for FailingModel {
        fn predict_row(&mut self, _row: &[f32]) -> Result<f32, PredictError> {
            Err(PredictError("shape mismatch".to_string()))
        }
    }

    fn record() -> InputRecord {
        InputRecord {
            company: Company::Google,
            education: EducationLevel::Master,
            years_of_experience: 5,
            location: Location::Bangalore,
            job_title: JobTitle::DataScientist,
        }
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::from_column_names(
            ["Years of Experience", "Company_Google", "Company_Amazon"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_stub_model_round_trip() {
        let mut model = ConstantModel(100000.0);
        let salary = predict_salary(&mut model, &schema(), &record()).unwrap();

        assert_eq!(salary, 100000.0);
        assert_eq!(format_inr(salary), "₹100,000.00");
    }

    #[test]
    fn test_model_errors_propagate_as_values() {
        let mut model = FailingModel;
        let err = predict_salary(&mut model, &schema(), &record()).unwrap_err();
        assert!(err.to_string().contains("shape mismatch"));
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(100000.0), "₹100,000.00");
        assert_eq!(format_inr(1234567.5), "₹1,234,567.50");
    }

    #[test]
    fn test_format_inr_rounds_to_two_decimals() {
        assert_eq!(format_inr(1234.567), "₹1,234.57");
    }

    #[test]
    fn test_format_inr_negative() {
        // Not validated non-negative; a badly fitted model may go below zero
        assert_eq!(format_inr(-1500.0), "₹-1,500.00");
    }
}
