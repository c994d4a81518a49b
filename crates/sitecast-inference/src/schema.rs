//! Feature schema for model input vectors.
//!
//! The column artifact is a JSON array of feature names in training
//! order. Each name is resolved into an extractor exactly once at load
//! time; building a vector per request is then a plain lookup with no
//! string formatting. A column that matches nothing stays at 0.0.

use std::path::Path;

use sitecast_core::errors::ArtifactError;
use sitecast_core::project::{ProjectInput, ProjectSize, ProjectType};
use tracing::debug;

const TYPE_COLUMN_PREFIX: &str = "project_type_";
const SIZE_COLUMN_PREFIX: &str = "project_size_";

/// What a single feature column extracts from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureKind {
    /// Raw built area in square metres.
    Area,
    /// Raw planned duration in months.
    Duration,
    /// Raw workforce headcount.
    Workers,
    /// One-hot: 1.0 when the input's project type matches.
    TypeOneHot(ProjectType),
    /// One-hot: 1.0 when the input's project size matches.
    SizeOneHot(ProjectSize),
    /// Column name matched nothing the engine knows; always 0.0.
    Unmatched,
}

impl FeatureKind {
    /// Resolve a trained column name into an extractor.
    fn resolve(name: &str) -> Self {
        match name {
            "area_m2" => FeatureKind::Area,
            "duration_months" => FeatureKind::Duration,
            "workers" => FeatureKind::Workers,
            _ => {
                if let Some(label) = name.strip_prefix(TYPE_COLUMN_PREFIX) {
                    match ProjectType::from_label(label) {
                        Some(t) => FeatureKind::TypeOneHot(t),
                        None => FeatureKind::Unmatched,
                    }
                } else if let Some(label) = name.strip_prefix(SIZE_COLUMN_PREFIX) {
                    match ProjectSize::from_label(label) {
                        Some(s) => FeatureKind::SizeOneHot(s),
                        None => FeatureKind::Unmatched,
                    }
                } else {
                    FeatureKind::Unmatched
                }
            }
        }
    }

    /// Extract this feature's value from the input.
    fn extract(self, input: &ProjectInput) -> f32 {
        match self {
            FeatureKind::Area => input.area_m2 as f32,
            FeatureKind::Duration => input.duration_months as f32,
            FeatureKind::Workers => input.workers as f32,
            FeatureKind::TypeOneHot(t) => {
                if input.project_type == t {
                    1.0
                } else {
                    0.0
                }
            }
            FeatureKind::SizeOneHot(s) => {
                if input.project_size == s {
                    1.0
                } else {
                    0.0
                }
            }
            FeatureKind::Unmatched => 0.0,
        }
    }
}

/// Ordered feature schema resolved from the column artifact.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<(String, FeatureKind)>,
}

impl FeatureSchema {
    /// Resolve a schema from column names in training order.
    pub fn from_columns(names: Vec<String>) -> Self {
        let columns = names
            .into_iter()
            .map(|name| {
                let kind = FeatureKind::resolve(&name);
                (name, kind)
            })
            .collect();
        Self { columns }
    }

    /// Load and resolve the column artifact from a JSON file.
    ///
    /// # Errors
    /// Returns `ArtifactError` when the file is missing, unreadable, not
    /// a JSON string array, or empty.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound {
                path: path.display().to_string(),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|e| ArtifactError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let names: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| ArtifactError::ColumnsInvalid {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if names.is_empty() {
            return Err(ArtifactError::ColumnsInvalid {
                path: path.display().to_string(),
                reason: "column list is empty".to_string(),
            });
        }

        let schema = Self::from_columns(names);
        debug!(columns = schema.len(), "feature schema resolved");
        Ok(schema)
    }

    /// Build a model input vector in artifact column order.
    pub fn vector(&self, input: &ProjectInput) -> Vec<f32> {
        self.columns
            .iter()
            .map(|(_, kind)| kind.extract(input))
            .collect()
    }

    /// Number of feature columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
