// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Vehicle specification record.

use crate::catalog::{Fuel, Transmission};
use crate::frame::{Frame, Value};

/// Input column names, in the order the fitted pipeline expects them.
pub const COLUMNS: [&str; 7] = [
    "MAKE",
    "MODEL",
    "VEHICLE CLASS",
    "ENGINE SIZE",
    "CYLINDERS",
    "TRANSMISSION",
    "FUEL",
];

/// One vehicle's specification, as submitted for prediction.
///
/// Built fresh for every cycle by the collector, which guarantees the
/// categorical fields belong to their catalogs. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSpec {
    /// Make, one of [`crate::catalog::MAKES`].
    pub make: String,
    /// Model name, free text normalized to uppercase.
    pub model: String,
    /// Vehicle class, one of [`crate::catalog::VEHICLE_CLASSES`].
    pub vehicle_class: String,
    /// Engine displacement in liters.
    pub engine_size: f64,
    /// Number of cylinders.
    pub cylinders: u32,
    /// Transmission type code.
    pub transmission: Transmission,
    /// Fuel type code.
    pub fuel: Fuel,
}

impl VehicleSpec {
    /// Build the one-row tabular input the model consumes.
    ///
    /// Columns carry the exact names and order of [`COLUMNS`]; categorical
    /// fields go in as their codes, numeric fields as numbers.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the row is built with one cell per column.
    #[must_use]
    pub fn to_frame(&self) -> Frame {
        let mut frame = Frame::new(COLUMNS);
        frame
            .push_row(vec![
                Value::Text(self.make.clone()),
                Value::Text(self.model.clone()),
                Value::Text(self.vehicle_class.clone()),
                Value::Number(self.engine_size),
                Value::Number(f64::from(self.cylinders)),
                Value::Text(self.transmission.as_str().to_string()),
                Value::Text(self.fuel.as_str().to_string()),
            ])
            .expect("one cell per schema column");
        frame
    }
}
