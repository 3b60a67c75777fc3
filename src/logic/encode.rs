//! Feature Aligner - One-Hot Encoding and Schema Projection
//!
//! Pure functions, no I/O. `one_hot` expands a form submission into named
//! columns; `align` projects those columns onto the training-time schema so
//! the model always sees exactly the row shape it was fitted on.

use super::form::InputRecord;
use super::schema::{FeatureSchema, EXPERIENCE_COLUMN};

/// One-hot encode a submission into `Field_Value` columns.
///
/// Indicator columns are emitted only for the categories the record actually
/// holds; siblings are implied zero. The numeric field passes through under
/// its training column name.
pub fn one_hot(record: &InputRecord) -> Vec<(String, f32)> {
    vec![
        (EXPERIENCE_COLUMN.to_string(), record.experience() as f32),
        (format!("Company_{}", record.company.as_str()), 1.0),
        (format!("Education Level_{}", record.education.as_str()), 1.0),
        (format!("Location_{}", record.location.as_str()), 1.0),
        (format!("Job Title_{}", record.job_title.as_str()), 1.0),
    ]
}

/// Project a submission onto the schema.
///
/// For every schema column in order: take the encoded value if present,
/// otherwise the column default. Encoded columns the schema does not know
/// are dropped without comment — a category unseen at training time ends up
/// indistinguishable from "no category indicated", matching the trained
/// model's reference-category handling.
pub fn align(schema: &FeatureSchema, record: &InputRecord) -> Vec<f32> {
    let encoded = one_hot(record);

    schema
        .columns()
        .iter()
        .map(|spec| {
            encoded
                .iter()
                .find(|(name, _)| name == &spec.name)
                .map(|(_, value)| *value)
                .unwrap_or(spec.default)
        })
        .collect()
}

/// Debug helper: which encoded columns a given schema would drop
pub fn dropped_columns(schema: &FeatureSchema, record: &InputRecord) -> Vec<String> {
    one_hot(record)
        .into_iter()
        .filter(|(name, _)| !schema.columns().iter().any(|spec| &spec.name == name))
        .map(|(name, _)| name)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::form::{Company, EducationLevel, JobTitle, Location};

    fn schema(columns: &[&str]) -> FeatureSchema {
        FeatureSchema::from_column_names(columns.iter().map(|s| s.to_string()).collect())
            .unwrap()
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

    /// The worked scenario: row must come out as [5, 1, 0, 1, 0, 1, 1]
    #[test]
    fn test_reference_alignment() {
        let schema = schema(&[
            "Years of Experience",
            "Company_Google",
            "Company_Amazon",
            "Education Level_Master",
            "Education Level_Bachelor",
            "Location_Bangalore",
            "Job Title_Data Scientist",
        ]);

        let row = align(&schema, &record());
        assert_eq!(row, vec![5.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_row_length_always_matches_schema() {
        let schema = schema(&[
            "Years of Experience",
            "Company_Amazon",
            "Company_Wipro",
            "Location_Pune",
        ]);

        for company in Company::ALL {
            for location in Location::ALL {
                let mut r = record();
                r.company = company;
                r.location = location;
                assert_eq!(align(&schema, &r).len(), schema.len());
            }
        }
    }

    #[test]
    fn test_matched_category_sets_one_with_zero_siblings() {
        let schema = schema(&[
            "Education Level_High School",
            "Education Level_Bachelor",
            "Education Level_Master",
            "Education Level_PhD",
        ]);

        let mut r = record();
        r.education = EducationLevel::Bachelor;

        assert_eq!(align(&schema, &r), vec![0.0, 1.0, 0.0, 0.0]);
    }

    /// A category the schema never saw contributes nothing, so its siblings
    /// all stay 0.
    #[test]
    fn test_unseen_category_dropped_silently() {
        let schema = schema(&["Company_Google", "Company_Amazon"]);

        let mut r = record();
        r.company = Company::Wipro;

        assert_eq!(align(&schema, &r), vec![0.0, 0.0]);
        // Wipro, the three other categorical fields, and the numeric column
        assert_eq!(dropped_columns(&schema, &r).len(), 5);
    }

    #[test]
    fn test_alignment_is_idempotent() {
        let schema = schema(&[
            "Years of Experience",
            "Company_Google",
            "Location_Bangalore",
        ]);

        let r = record();
        assert_eq!(align(&schema, &r), align(&schema, &r));
    }

    #[test]
    fn test_numeric_passthrough() {
        let schema = schema(&["Years of Experience"]);

        let mut r = record();
        r.years_of_experience = 0;
        assert_eq!(align(&schema, &r), vec![0.0]);

        r.years_of_experience = 50;
        assert_eq!(align(&schema, &r), vec![50.0]);

        // Out-of-widget payload is clamped, not rejected
        r.years_of_experience = 999;
        assert_eq!(align(&schema, &r), vec![50.0]);
    }
}
