// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Prediction invocation and result extraction.

use crate::error::{PredictorError, Result};
use crate::model::Predict;
use crate::results::Prediction;
use crate::spec::VehicleSpec;

/// Predict fuel consumption and CO2 emissions for one vehicle.
///
/// Builds the one-row input frame, invokes the model, and reads the two
/// leading columns of the first output row. Raw model output passes through
/// unchanged.
///
/// # Errors
///
/// Returns an error if the model rejects the input or returns fewer than
/// one row or two columns.
pub fn predict_vehicle<M: Predict>(model: &M, spec: &VehicleSpec) -> Result<Prediction> {
    let frame = spec.to_frame();
    let rows = model.predict(&frame)?;

    let row = rows.first().ok_or_else(|| {
        PredictorError::PredictionError("model returned no output rows".to_string())
    })?;
    if row.len() < 2 {
        return Err(PredictorError::PredictionError(format!(
            "model returned {} output columns, expected at least 2",
            row.len()
        )));
    }

    Ok(Prediction {
        fuel_consumption: row[0],
        co2_emissions: row[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Fuel, Transmission};
    use crate::frame::Frame;
    use crate::spec::COLUMNS;

    /// Stub model returning a fixed output, recording nothing.
    struct FixedModel(Vec<Vec<f64>>);

    impl Predict for FixedModel {
        fn predict(&self, _frame: &Frame) -> Result<Vec<Vec<f64>>> {
            Ok(self.0.clone())
        }
    }

    /// Stub model asserting on the frame it receives.
    struct SchemaCheckingModel;

    impl Predict for SchemaCheckingModel {
        fn predict(&self, frame: &Frame) -> Result<Vec<Vec<f64>>> {
            assert_eq!(frame.columns(), COLUMNS);
            assert_eq!(frame.len(), 1);
            Ok(vec![vec![7.5, 180.0]])
        }
    }

    fn sample_spec() -> VehicleSpec {
        VehicleSpec {
            make: "ACURA".to_string(),
            model: "MDX".to_string(),
            vehicle_class: "SUV".to_string(),
            engine_size: 3.5,
            cylinders: 6,
            transmission: Transmission::As,
            fuel: Fuel::Z,
        }
    }

    /// Output scalars pass through exactly, with no rounding.
    #[test]
    fn test_identity_pass_through() {
        let model = FixedModel(vec![vec![9.123_456, 214.987_654]]);
        let prediction = predict_vehicle(&model, &sample_spec()).unwrap();
        assert_eq!(prediction.fuel_consumption, 9.123_456);
        assert_eq!(prediction.co2_emissions, 214.987_654);
    }

    /// Negative raw output is not clipped.
    #[test]
    fn test_no_sanity_checking() {
        let model = FixedModel(vec![vec![-3.0, -50.0]]);
        let prediction = predict_vehicle(&model, &sample_spec()).unwrap();
        assert_eq!(prediction.fuel_consumption, -3.0);
        assert_eq!(prediction.co2_emissions, -50.0);
    }

    /// Extra output columns beyond the first two are ignored.
    #[test]
    fn test_extra_columns_ignored() {
        let model = FixedModel(vec![vec![6.5, 150.0, 99.0]]);
        let prediction = predict_vehicle(&model, &sample_spec()).unwrap();
        assert_eq!(prediction.fuel_consumption, 6.5);
        assert_eq!(prediction.co2_emissions, 150.0);
    }

    #[test]
    fn test_empty_output_is_error() {
        let model = FixedModel(vec![]);
        let err = predict_vehicle(&model, &sample_spec()).unwrap_err();
        assert!(err.to_string().contains("no output rows"));
    }

    #[test]
    fn test_single_column_is_error() {
        let model = FixedModel(vec![vec![7.0]]);
        let err = predict_vehicle(&model, &sample_spec()).unwrap_err();
        assert!(err.to_string().contains("expected at least 2"));
    }

    #[test]
    fn test_frame_shape_seen_by_model() {
        let prediction = predict_vehicle(&SchemaCheckingModel, &sample_spec()).unwrap();
        assert_eq!(prediction.fuel_consumption, 7.5);
    }
}
