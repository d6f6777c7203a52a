// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Regression pipeline artifact loading and inference.
//!
//! The training side exports the fitted pipeline as a JSON document: the
//! seven input columns with their fitted encoders, plus one linear head per
//! target. This module deserializes and validates that artifact and exposes
//! the single capability the front end needs, [`Predict`].
//!
//! ```json
//! {
//!   "schema": [
//!     { "name": "MAKE", "kind": "one_hot", "categories": ["ACURA", "..."] },
//!     { "name": "ENGINE SIZE", "kind": "standardize", "mean": 3.1, "scale": 1.3 }
//!   ],
//!   "targets": ["Fuel Consumption (COMB L/100km)", "CO2 Emissions (g/km)"],
//!   "weights": [[0.1, 0.2], [3.0, 4.0]],
//!   "intercepts": [9.6, 225.0]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::Deserialize;

use crate::error::{PredictorError, Result};
use crate::frame::{Frame, Value};
use crate::spec::COLUMNS;
use crate::{error, info, success};

/// Default artifact path, relative to the working directory.
pub const DEFAULT_MODEL: &str = "model/vehicle_consumption_emissions_model.json";

/// The single capability the front end requires from a loaded artifact.
///
/// One output row per input row, one column per target. Implementations
/// must not clip or otherwise post-process their raw numeric output.
pub trait Predict {
    /// Run the pipeline on tabular input.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame does not match the fitted schema or a
    /// cell has the wrong type for its column.
    fn predict(&self, frame: &Frame) -> Result<Vec<Vec<f64>>>;
}

/// Per-column feature encoding, mirroring the fitted preprocessing stage.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Encoder {
    /// One-hot over a fitted vocabulary; unknown categories encode to zeros.
    OneHot { categories: Vec<String> },
    /// Standardization: (x - mean) / scale.
    Standardize { mean: f64, scale: f64 },
}

impl Encoder {
    /// Width of this encoder's block in the feature vector.
    fn width(&self) -> usize {
        match self {
            Self::OneHot { categories } => categories.len(),
            Self::Standardize { .. } => 1,
        }
    }

    /// Append this column's encoded features to `out`.
    fn encode(&self, value: &Value, column: &str, out: &mut Vec<f64>) -> Result<()> {
        match self {
            Self::OneHot { categories } => {
                let text = value.to_string();
                for category in categories {
                    out.push(if *category == text { 1.0 } else { 0.0 });
                }
                Ok(())
            }
            Self::Standardize { mean, scale } => {
                let x = value.as_number().ok_or_else(|| {
                    PredictorError::PredictionError(format!(
                        "column '{column}' expects a numeric value, got '{value}'"
                    ))
                })?;
                out.push((x - mean) / scale);
                Ok(())
            }
        }
    }
}

/// One schema column of the artifact: name plus fitted encoder.
#[derive(Debug, Clone, Deserialize)]
struct ColumnSpec {
    name: String,
    #[serde(flatten)]
    encoder: Encoder,
}

/// Raw artifact document, prior to validation.
#[derive(Debug, Deserialize)]
struct ArtifactFile {
    schema: Vec<ColumnSpec>,
    targets: Vec<String>,
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

/// A fitted regression pipeline deserialized from disk.
///
/// Read-only after load. Predicts combined fuel consumption and CO2
/// emissions from a seven-column vehicle specification row.
#[derive(Debug, Clone)]
pub struct EmissionsModel {
    columns: Vec<ColumnSpec>,
    targets: Vec<String>,
    /// Shape (targets, feature width).
    weights: Array2<f64>,
    intercepts: Array1<f64>,
    feature_width: usize,
}

impl EmissionsModel {
    /// Load and validate an artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a [`PredictorError::ModelLoadError`] if the file is missing,
    /// is not valid JSON, or fails schema validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PredictorError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            PredictorError::ModelLoadError(format!("Failed to open {}: {e}", path.display()))
        })?;
        let raw: ArtifactFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            PredictorError::ModelLoadError(format!("Failed to parse model artifact: {e}"))
        })?;

        Self::from_artifact(raw)
    }

    /// Parse and validate an artifact from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a [`PredictorError::ModelLoadError`] on malformed JSON or a
    /// schema violation.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: ArtifactFile = serde_json::from_str(json).map_err(|e| {
            PredictorError::ModelLoadError(format!("Failed to parse model artifact: {e}"))
        })?;
        Self::from_artifact(raw)
    }

    /// Validate the raw document and build the in-memory pipeline.
    fn from_artifact(raw: ArtifactFile) -> Result<Self> {
        if raw.schema.len() != COLUMNS.len() {
            return Err(PredictorError::ModelLoadError(format!(
                "artifact schema has {} columns, expected {}",
                raw.schema.len(),
                COLUMNS.len()
            )));
        }
        for (i, (column, expected)) in raw.schema.iter().zip(COLUMNS).enumerate() {
            if column.name != expected {
                return Err(PredictorError::ModelLoadError(format!(
                    "artifact schema mismatch at column {i}: expected '{expected}', found '{}'",
                    column.name
                )));
            }
        }
        for column in &raw.schema {
            match &column.encoder {
                Encoder::OneHot { categories } if categories.is_empty() => {
                    return Err(PredictorError::ModelLoadError(format!(
                        "column '{}' has an empty vocabulary",
                        column.name
                    )));
                }
                Encoder::Standardize { scale, .. } if *scale <= 0.0 => {
                    return Err(PredictorError::ModelLoadError(format!(
                        "column '{}' has a non-positive scale",
                        column.name
                    )));
                }
                _ => {}
            }
        }

        if raw.targets.len() < 2 {
            return Err(PredictorError::ModelLoadError(format!(
                "artifact must carry at least two targets, found {}",
                raw.targets.len()
            )));
        }
        if raw.weights.len() != raw.targets.len() || raw.intercepts.len() != raw.targets.len() {
            return Err(PredictorError::ModelLoadError(format!(
                "artifact carries {} targets but {} weight rows and {} intercepts",
                raw.targets.len(),
                raw.weights.len(),
                raw.intercepts.len()
            )));
        }

        let feature_width: usize = raw.schema.iter().map(|c| c.encoder.width()).sum();
        for (target, row) in raw.targets.iter().zip(&raw.weights) {
            if row.len() != feature_width {
                return Err(PredictorError::ModelLoadError(format!(
                    "weight row for target '{target}' has {} coefficients, expected {feature_width}",
                    row.len()
                )));
            }
        }

        let n_targets = raw.targets.len();
        let flat: Vec<f64> = raw.weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((n_targets, feature_width), flat)
            .map_err(|e| PredictorError::ModelLoadError(format!("invalid weight matrix: {e}")))?;

        Ok(Self {
            columns: raw.schema,
            targets: raw.targets,
            weights,
            intercepts: Array1::from_vec(raw.intercepts),
            feature_width,
        })
    }

    /// Target names, in output-column order.
    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Width of the encoded feature vector.
    #[must_use]
    pub const fn feature_width(&self) -> usize {
        self.feature_width
    }

    /// Encode one frame row into the pipeline's feature vector.
    fn encode_row(&self, row: &[Value]) -> Result<Array1<f64>> {
        let mut features = Vec::with_capacity(self.feature_width);
        for (column, value) in self.columns.iter().zip(row) {
            column.encoder.encode(value, &column.name, &mut features)?;
        }
        // Guards the dot product below against a short row.
        if features.len() != self.feature_width {
            return Err(PredictorError::PredictionError(format!(
                "encoded {} features, pipeline expects {}",
                features.len(),
                self.feature_width
            )));
        }
        Ok(Array1::from_vec(features))
    }
}

impl Predict for EmissionsModel {
    fn predict(&self, frame: &Frame) -> Result<Vec<Vec<f64>>> {
        let matches_schema = frame.columns().len() == self.columns.len()
            && frame
                .columns()
                .iter()
                .zip(&self.columns)
                .all(|(name, column)| *name == column.name);
        if !matches_schema {
            return Err(PredictorError::PredictionError(format!(
                "input columns {:?} do not match the fitted schema",
                frame.columns()
            )));
        }

        let mut outputs = Vec::with_capacity(frame.len());
        for row in frame.rows() {
            let features = self.encode_row(row)?;
            let y = self.weights.dot(&features) + &self.intercepts;
            outputs.push(y.to_vec());
        }
        Ok(outputs)
    }
}

/// Load the artifact for a session.
///
/// Logs the attempt and the outcome; any failure is reported on the console
/// and surfaced as `None` rather than escalated. The caller decides how to
/// proceed.
pub fn load_model<P: AsRef<Path>>(path: P) -> Option<EmissionsModel> {
    let path = path.as_ref();
    info!("Loading model from {}...", path.display());

    match EmissionsModel::load(path) {
        Ok(model) => {
            success!("Model loaded successfully.");
            Some(model)
        }
        Err(e) => {
            error!("Error loading model: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Fuel, Transmission};
    use crate::spec::VehicleSpec;

    /// Tiny hand-checkable artifact: identity scalers, small vocabularies.
    const ARTIFACT: &str = r#"{
        "schema": [
            { "name": "MAKE", "kind": "one_hot", "categories": ["TOYOTA", "HONDA"] },
            { "name": "MODEL", "kind": "one_hot", "categories": ["COROLLA"] },
            { "name": "VEHICLE CLASS", "kind": "one_hot", "categories": ["COMPACT"] },
            { "name": "ENGINE SIZE", "kind": "standardize", "mean": 0.0, "scale": 1.0 },
            { "name": "CYLINDERS", "kind": "standardize", "mean": 0.0, "scale": 1.0 },
            { "name": "TRANSMISSION", "kind": "one_hot", "categories": ["AS", "M"] },
            { "name": "FUEL", "kind": "one_hot", "categories": ["X"] }
        ],
        "targets": ["Fuel Consumption (COMB L/100km)", "CO2 Emissions (g/km)"],
        "weights": [
            [1.0, 0.5, 0.25, 0.25, 2.0, 0.5, -0.5, 0.0, 0.5],
            [10.0, 5.0, 2.5, 2.5, 20.0, 5.0, -5.0, 0.0, 5.0]
        ],
        "intercepts": [1.0, 10.0]
    }"#;

    fn sample_spec() -> VehicleSpec {
        VehicleSpec {
            make: "TOYOTA".to_string(),
            model: "COROLLA".to_string(),
            vehicle_class: "COMPACT".to_string(),
            engine_size: 1.8,
            cylinders: 4,
            transmission: Transmission::As,
            fuel: Fuel::X,
        }
    }

    #[test]
    fn test_from_json_valid() {
        let model = EmissionsModel::from_json(ARTIFACT).unwrap();
        assert_eq!(model.targets().len(), 2);
        assert_eq!(model.feature_width(), 9);
    }

    #[test]
    fn test_predict_linear_head() {
        let model = EmissionsModel::from_json(ARTIFACT).unwrap();
        let frame = sample_spec().to_frame();
        let rows = model.predict(&frame).unwrap();

        assert_eq!(rows.len(), 1);
        // features: [1, 0, 1, 1, 1.8, 4, 1, 0, 1]
        // fc  = 1.0 + 0.25 + 0.25 + 2.0*1.8 + 0.5*4 + (-0.5) + 0.5 + 1.0 = 8.1
        // co2 = 10.0 + 2.5 + 2.5 + 20.0*1.8 + 5.0*4 + (-5.0) + 5.0 + 10.0 = 81.0
        assert!((rows[0][0] - 8.1).abs() < 1e-9);
        assert!((rows[0][1] - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_category_encodes_to_zeros() {
        let model = EmissionsModel::from_json(ARTIFACT).unwrap();
        let mut spec = sample_spec();
        spec.make = "VOLVO".to_string();
        spec.model = "XC90".to_string();

        let rows = model.predict(&spec.to_frame()).unwrap();
        // Same as above minus the TOYOTA (1.0) and COROLLA (0.25) contributions.
        assert!((rows[0][0] - 6.85).abs() < 1e-9);
    }

    #[test]
    fn test_missing_file() {
        let err = EmissionsModel::load("no/such/artifact.json").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_malformed_json() {
        let err = EmissionsModel::from_json("not json").unwrap_err();
        assert!(matches!(err, PredictorError::ModelLoadError(_)));
    }

    #[test]
    fn test_schema_name_mismatch() {
        let doc = ARTIFACT.replace("\"MAKE\"", "\"BRAND\"");
        let err = EmissionsModel::from_json(&doc).unwrap_err();
        assert!(err.to_string().contains("schema mismatch"));
    }

    #[test]
    fn test_weight_width_mismatch() {
        let doc = ARTIFACT.replace("[1.0, 0.5, 0.25, 0.25, 2.0, 0.5, -0.5, 0.0, 0.5]", "[1.0]");
        let err = EmissionsModel::from_json(&doc).unwrap_err();
        assert!(err.to_string().contains("coefficients"));
    }

    #[test]
    fn test_single_target_rejected() {
        let doc = ARTIFACT
            .replace(", \"CO2 Emissions (g/km)\"", "")
            .replace(
                ",\n            [10.0, 5.0, 2.5, 2.5, 20.0, 5.0, -5.0, 0.0, 5.0]",
                "",
            )
            .replace("[1.0, 10.0]", "[1.0]");
        let err = EmissionsModel::from_json(&doc).unwrap_err();
        assert!(err.to_string().contains("at least two targets"));
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        let doc = ARTIFACT.replacen("\"scale\": 1.0", "\"scale\": 0.0", 1);
        let err = EmissionsModel::from_json(&doc).unwrap_err();
        assert!(err.to_string().contains("non-positive scale"));
    }

    #[test]
    fn test_predict_rejects_foreign_columns() {
        let model = EmissionsModel::from_json(ARTIFACT).unwrap();
        let frame = Frame::new(["A", "B"]);
        let err = model.predict(&frame).unwrap_err();
        assert!(matches!(err, PredictorError::PredictionError(_)));
    }

    #[test]
    fn test_load_model_absent_is_none() {
        assert!(load_model("no/such/artifact.json").is_none());
    }
}
