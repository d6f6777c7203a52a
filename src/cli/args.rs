// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::model::DEFAULT_MODEL;
use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Predict Options:
    --model, -m <MODEL>    Path to the model artifact [default: model/vehicle_consumption_emissions_model.json]
    --verbose              Show verbose output

Examples:
    fuel-predictor predict
    fuel-predictor predict --model exports/pipeline.json
    fuel-predictor predict --verbose false"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict fuel consumption and CO2 emissions interactively
    Predict(PredictArgs),
}

/// Arguments for the predict command.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Path to the serialized model artifact
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
