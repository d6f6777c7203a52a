// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for the interactive predictor.
//!
//! This module contains the command-line interface logic, including argument
//! parsing, console logging, and the interactive session driver.

// Modules
/// CLI arguments.
pub mod args;

/// Console logging.
pub mod logging;

/// Interactive session driver.
pub mod session;
