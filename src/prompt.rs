// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Interactive collection of a vehicle specification.
//!
//! Categorical fields are offered as numbered menus; an index outside the
//! menu silently resolves to the field's documented default rather than
//! failing. Numeric fields are parsed as literals with no range checks, and
//! a non-numeric entry is a fatal input error for the session.

use std::io::{self, Write};

use crate::catalog::{
    DEFAULT_MAKE, DEFAULT_VEHICLE_CLASS, Fuel, MAKES, Transmission, VEHICLE_CLASSES,
};
use crate::error::{PredictorError, Result};
use crate::spec::VehicleSpec;

/// Resolve a 1-based menu index into `items`.
fn pick<T>(items: &[T], index: i64) -> Option<&T> {
    if index >= 1 && index as usize <= items.len() {
        items.get(index as usize - 1)
    } else {
        None
    }
}

/// Resolve a 1-based MAKE menu index; out of range falls back to the default.
#[must_use]
pub fn select_make(index: i64) -> &'static str {
    pick(&MAKES, index).copied().unwrap_or(DEFAULT_MAKE)
}

/// Resolve a 1-based VEHICLE CLASS menu index; out of range falls back to
/// the default.
#[must_use]
pub fn select_vehicle_class(index: i64) -> &'static str {
    pick(&VEHICLE_CLASSES, index)
        .copied()
        .unwrap_or(DEFAULT_VEHICLE_CLASS)
}

/// Resolve a 1-based TRANSMISSION menu index; out of range falls back to AS.
#[must_use]
pub fn select_transmission(index: i64) -> Transmission {
    pick(&Transmission::ALL, index).copied().unwrap_or_default()
}

/// Resolve a 1-based FUEL menu index; out of range falls back to X.
#[must_use]
pub fn select_fuel(index: i64) -> Fuel {
    pick(&Fuel::ALL, index).copied().unwrap_or_default()
}

/// Parse a menu index entry.
///
/// # Errors
///
/// Returns a [`PredictorError::InputError`] on non-numeric text.
pub fn parse_index(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| PredictorError::InputError(format!("invalid number: '{trimmed}'")))
}

/// Parse an engine size entry in liters.
///
/// # Errors
///
/// Returns a [`PredictorError::InputError`] on non-numeric text.
pub fn parse_engine_size(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| PredictorError::InputError(format!("invalid engine size: '{trimmed}'")))
}

/// Parse a cylinder count entry.
///
/// # Errors
///
/// Returns a [`PredictorError::InputError`] on non-numeric text.
pub fn parse_cylinders(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| PredictorError::InputError(format!("invalid cylinder count: '{trimmed}'")))
}

/// Print a prompt without a trailing newline and read one trimmed line.
fn prompt(text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print a numbered menu, `per_row` entries per line.
fn print_menu(items: &[&str], per_row: usize) {
    for (i, item) in items.iter().enumerate() {
        print!("{}. {}\t", i + 1, item);
        if (i + 1) % per_row == 0 {
            println!();
        }
    }
}

/// Collect one specification through sequential console prompts.
///
/// # Errors
///
/// Returns a [`PredictorError::InputError`] if any numeric prompt receives
/// non-numeric text, or an IO error if the console goes away.
pub fn collect_spec() -> Result<VehicleSpec> {
    println!("\nPlease enter the following vehicle specifications:");

    println!("\nAvailable Makes:");
    print_menu(&MAKES, 4);
    let make = select_make(parse_index(&prompt("\nEnter the number for MAKE: ")?)?);

    let model = prompt("Enter MODEL (e.g., COROLLA): ")?.to_uppercase();

    println!("\nAvailable Vehicle Classes:");
    print_menu(&VEHICLE_CLASSES, 3);
    let vehicle_class = select_vehicle_class(parse_index(&prompt(
        "\nEnter the number for VEHICLE CLASS: ",
    )?)?);

    let engine_size = parse_engine_size(&prompt("Enter ENGINE SIZE in liters (e.g., 1.8): ")?)?;
    let cylinders = parse_cylinders(&prompt("Enter number of CYLINDERS (e.g., 4): ")?)?;

    println!("\nAvailable Transmission Types:");
    for (i, transmission) in Transmission::ALL.iter().enumerate() {
        println!(
            "{}. {:<2} - {}",
            i + 1,
            transmission.as_str(),
            transmission.label()
        );
    }
    let transmission =
        select_transmission(parse_index(&prompt("Enter the number for TRANSMISSION: ")?)?);

    println!("\nAvailable Fuel Types:");
    for (i, fuel) in Fuel::ALL.iter().enumerate() {
        println!("{}. {} - {}", i + 1, fuel.as_str(), fuel.label());
    }
    let fuel = select_fuel(parse_index(&prompt("Enter the number for FUEL: ")?)?);

    Ok(VehicleSpec {
        make: make.to_string(),
        model,
        vehicle_class: vehicle_class.to_string(),
        engine_size,
        cylinders,
        transmission,
        fuel,
    })
}

/// Ask whether to run another cycle; only a case-insensitive "y" continues.
///
/// # Errors
///
/// Returns an IO error if the console goes away.
pub fn confirm_another() -> Result<bool> {
    let answer = prompt("\nWould you like to try another vehicle? (y/n): ")?;
    Ok(answer.eq_ignore_ascii_case("y"))
}
