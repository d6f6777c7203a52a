// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use clap::Parser;

use fuel_predictor::cli::args::{Cli, Commands};
use fuel_predictor::cli::logging::set_verbose;
use fuel_predictor::cli::session::run_session;
use fuel_predictor::error;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(args) => {
            set_verbose(args.verbose);
            if let Err(e) = run_session(&args) {
                error!("{e}");
                process::exit(1);
            }
        }
    }
}
