// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! # Vehicle Fuel Consumption & Emissions Predictor
//!
//! Command-line front end for a pre-trained regression pipeline that
//! predicts a vehicle's combined fuel consumption (L/100km) and CO2
//! emissions (g/km) from its specifications. The pipeline is trained and
//! exported elsewhere; this crate deserializes the artifact, collects a
//! specification interactively, runs the prediction, and renders the
//! report.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use fuel_predictor::{EmissionsModel, Fuel, Transmission, VehicleSpec, predict_vehicle};
//!
//! fn main() -> Result<(), fuel_predictor::PredictorError> {
//!     let model = EmissionsModel::load("model/vehicle_consumption_emissions_model.json")?;
//!
//!     let spec = VehicleSpec {
//!         make: "TOYOTA".to_string(),
//!         model: "COROLLA".to_string(),
//!         vehicle_class: "COMPACT".to_string(),
//!         engine_size: 1.8,
//!         cylinders: 4,
//!         transmission: Transmission::As,
//!         fuel: Fuel::X,
//!     };
//!
//!     let prediction = predict_vehicle(&model, &spec)?;
//!     println!(
//!         "{:.2} L/100km, {:.2} g/km ({})",
//!         prediction.fuel_consumption,
//!         prediction.co2_emissions,
//!         prediction.efficiency()
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Run with the packaged artifact
//! fuel-predictor predict
//!
//! # Point at a different artifact
//! fuel-predictor predict --model exports/pipeline.json
//! ```
//!
//! The `predict` command prompts for the seven specification fields (make,
//! model, vehicle class, engine size, cylinders, transmission, fuel), then
//! prints the predicted consumption and emissions with a qualitative
//! efficiency band, looping until the user declines another vehicle.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Artifact loading and the [`Predict`] capability |
//! | [`catalog`] | Fixed make/class catalogs and coded transmission/fuel types |
//! | [`spec`] | [`VehicleSpec`] and its tabular form |
//! | [`frame`] | Named-column tabular input ([`Frame`], [`Value`]) |
//! | [`inference`] | Prediction invocation ([`predict_vehicle`]) |
//! | [`results`] | [`Prediction`] and the [`Efficiency`] banding |
//! | [`report`] | Fixed-format report rendering |
//! | [`prompt`] | Interactive specification collection |
//! | [`error`] | Error types ([`PredictorError`], [`Result`]) |

// Modules
pub mod catalog;
pub mod cli;
pub mod error;
pub mod frame;
pub mod inference;
pub mod model;
pub mod prompt;
pub mod report;
pub mod results;
pub mod spec;

// Re-export main types for convenience
pub use catalog::{Fuel, Transmission};
pub use error::{PredictorError, Result};
pub use frame::{Frame, Value};
pub use inference::predict_vehicle;
pub use model::{DEFAULT_MODEL, EmissionsModel, Predict};
pub use results::{Efficiency, Prediction};
pub use spec::VehicleSpec;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
