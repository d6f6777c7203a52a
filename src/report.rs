// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Report rendering for one prediction cycle.
//!
//! Echoes the specification with transmission and fuel codes decoded to
//! their labels, then the two predictions to two decimal places, then the
//! efficiency sentence.

use std::fmt::Write;

use crate::catalog::{fuel_label, transmission_label};
use crate::results::Prediction;
use crate::spec::VehicleSpec;

/// Width of the report's section rules.
const RULE_WIDTH: usize = 50;

/// Render the fixed-format specification and prediction report.
#[must_use]
pub fn render_report(spec: &VehicleSpec, prediction: &Prediction) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}VEHICLE SPECIFICATIONS", " ".repeat(15));
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Make: {}", spec.make);
    let _ = writeln!(out, "Model: {}", spec.model);
    let _ = writeln!(out, "Vehicle Class: {}", spec.vehicle_class);
    let _ = writeln!(out, "Engine Size: {} L", spec.engine_size);
    let _ = writeln!(out, "Cylinders: {}", spec.cylinders);
    let _ = writeln!(
        out,
        "Transmission: {}",
        transmission_label(spec.transmission.as_str())
    );
    let _ = writeln!(out, "Fuel Type: {}", fuel_label(spec.fuel.as_str()));

    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}PREDICTIONS", " ".repeat(20));
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "Fuel Consumption: {:.2} L/100km",
        prediction.fuel_consumption
    );
    let _ = writeln!(out, "CO2 Emissions: {:.2} g/km", prediction.co2_emissions);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "This vehicle's fuel efficiency is {}.",
        prediction.efficiency()
    );
    let _ = write!(out, "{rule}");

    out
}

/// Print the report for one cycle.
pub fn print_report(spec: &VehicleSpec, prediction: &Prediction) {
    println!();
    println!("{}", render_report(spec, prediction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Fuel, Transmission};

    fn sample() -> (VehicleSpec, Prediction) {
        let spec = VehicleSpec {
            make: "TOYOTA".to_string(),
            model: "COROLLA".to_string(),
            vehicle_class: "COMPACT".to_string(),
            engine_size: 1.8,
            cylinders: 4,
            transmission: Transmission::As,
            fuel: Fuel::X,
        };
        let prediction = Prediction {
            fuel_consumption: 7.456,
            co2_emissions: 174.321,
        };
        (spec, prediction)
    }

    #[test]
    fn test_report_echoes_specification() {
        let (spec, prediction) = sample();
        let report = render_report(&spec, &prediction);

        assert!(report.contains("VEHICLE SPECIFICATIONS"));
        assert!(report.contains("Make: TOYOTA"));
        assert!(report.contains("Model: COROLLA"));
        assert!(report.contains("Vehicle Class: COMPACT"));
        assert!(report.contains("Engine Size: 1.8 L"));
        assert!(report.contains("Cylinders: 4"));
    }

    #[test]
    fn test_report_decodes_codes() {
        let (spec, prediction) = sample();
        let report = render_report(&spec, &prediction);

        assert!(report.contains("Transmission: Automatic with Select Shift"));
        assert!(report.contains("Fuel Type: Regular Gasoline"));
    }

    #[test]
    fn test_predictions_rounded_to_two_decimals() {
        let (spec, prediction) = sample();
        let report = render_report(&spec, &prediction);

        assert!(report.contains("Fuel Consumption: 7.46 L/100km"));
        assert!(report.contains("CO2 Emissions: 174.32 g/km"));
    }

    #[test]
    fn test_efficiency_sentence() {
        let (spec, prediction) = sample();
        let report = render_report(&spec, &prediction);
        assert!(report.contains("This vehicle's fuel efficiency is good (efficient)."));
    }

    #[test]
    fn test_band_sentence_tracks_consumption() {
        let (spec, mut prediction) = sample();
        prediction.fuel_consumption = 13.0;
        let report = render_report(&spec, &prediction);
        assert!(report.contains("poor (very inefficient)"));
    }
}
