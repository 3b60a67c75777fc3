//! Feature Schema - Training-Time Column Layout
//!
//! The expected-columns artifact is an ordered JSON list of the feature
//! names the model was trained on. This module turns it into a fixed schema
//! of column descriptors at load time, so alignment becomes a deterministic
//! projection instead of ad hoc map juggling. The schema is read-only for
//! the lifetime of the loaded artifacts.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

/// The numeric passthrough column. Every other training column is a one-hot
/// indicator.
pub const EXPERIENCE_COLUMN: &str = "Years of Experience";

// ============================================================================
// COLUMN DESCRIPTORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Raw numeric value copied from the input record
    Numeric,
    /// One-hot indicator, 0 or 1
    Indicator,
}

/// One column the model expects, in training order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
    /// Value used when the encoded record has no entry for this column
    pub default: f32,
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered column layout the aligned row must match exactly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSchema {
    columns: Vec<ColumnSpec>,
}

#[derive(Debug)]
pub struct SchemaError(pub String);

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SchemaError: {}", self.0)
    }
}

impl std::error::Error for SchemaError {}

impl FeatureSchema {
    /// Build the schema from the raw column-name list of the artifact.
    ///
    /// Rejects an empty list and duplicate names; anything else the
    /// training side produced is accepted as-is.
    pub fn from_column_names(names: Vec<String>) -> Result<Self, SchemaError> {
        if names.is_empty() {
            return Err(SchemaError("column list is empty".to_string()));
        }

        let mut seen = std::collections::HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError(format!("duplicate column: {}", name)));
            }
        }

        let columns = names
            .into_iter()
            .map(|name| {
                let kind = if name == EXPERIENCE_COLUMN {
                    ColumnKind::Numeric
                } else {
                    ColumnKind::Indicator
                };
                ColumnSpec { name, kind, default: 0.0 }
            })
            .collect();

        Ok(Self { columns })
    }

    /// Parse the JSON artifact content (a plain array of strings)
    pub fn from_json(content: &str) -> Result<Self, SchemaError> {
        let names: Vec<String> = serde_json::from_str(content)
            .map_err(|e| SchemaError(format!("invalid column list: {}", e)))?;
        Self::from_column_names(names)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// CRC32 over the ordered column names. Surfaced in status output so a
    /// swapped artifact is visible without diffing files.
    pub fn layout_hash(&self) -> u32 {
        let mut hasher = Hasher::new();
        for spec in &self.columns {
            hasher.update(spec.name.as_bytes());
            hasher.update(&[0]); // Separator
        }
        hasher.finalize()
    }
}

// ============================================================================
// TESTS
// ============================================================================
