// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Interactive prediction session.
//!
//! Loads the artifact once, then runs collect → predict → present cycles
//! until the user declines to continue. A failed load prints a message and
//! ends the session without running any cycle.

use crate::cli::args::PredictArgs;
use crate::error::Result;
use crate::inference::predict_vehicle;
use crate::model::load_model;
use crate::prompt::{collect_spec, confirm_another};
use crate::report::print_report;
use crate::verbose;

/// Width of the session banner rule.
const BANNER_WIDTH: usize = 70;

/// Print the startup banner.
fn print_banner() {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("{rule}");
    println!("{}VEHICLE FUEL CONSUMPTION & EMISSIONS PREDICTOR", " ".repeat(15));
    println!("{rule}");
}

/// Run the interactive session.
///
/// # Errors
///
/// Returns an error if a prompt receives malformed numeric input or the
/// model violates the prediction contract; a failed model load is handled
/// here and is not an error.
pub fn run_session(args: &PredictArgs) -> Result<()> {
    print_banner();

    let Some(model) = load_model(&args.model) else {
        println!("\nCould not load the model. Please ensure the model file exists.");
        return Ok(());
    };
    verbose!(
        "Pipeline summary: {} encoded features, {} targets",
        model.feature_width(),
        model.targets().len()
    );

    loop {
        let spec = collect_spec()?;
        let prediction = predict_vehicle(&model, &spec)?;
        print_report(&spec, &prediction);

        if !confirm_another()? {
            break;
        }
    }

    println!("\nThank you for using the Vehicle Fuel Consumption & Emissions Predictor!");
    Ok(())
}
