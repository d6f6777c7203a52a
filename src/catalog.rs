// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Fixed vehicle catalogs.
//!
//! This module holds the enumerations the collector presents as numbered
//! menus, together with the coded transmission and fuel types and their
//! display labels. Order matters: menu indices are 1-based positions into
//! these lists.

use std::fmt;
use std::str::FromStr;

/// Vehicle makes, in menu order.
pub const MAKES: [&str; 39] = [
    "ACURA",
    "ALFA ROMEO",
    "ASTON MARTIN",
    "AUDI",
    "BENTLEY",
    "BMW",
    "BUICK",
    "CADILLAC",
    "CHEVROLET",
    "CHRYSLER",
    "DODGE",
    "FIAT",
    "FORD",
    "GENESIS",
    "GMC",
    "HONDA",
    "HYUNDAI",
    "INFINITI",
    "JAGUAR",
    "JEEP",
    "KIA",
    "LAMBORGHINI",
    "LAND ROVER",
    "LEXUS",
    "LINCOLN",
    "MASERATI",
    "MAZDA",
    "MERCEDES-BENZ",
    "MINI",
    "MITSUBISHI",
    "NISSAN",
    "PORSCHE",
    "RAM",
    "ROLLS-ROYCE",
    "SUBARU",
    "TESLA",
    "TOYOTA",
    "VOLKSWAGEN",
    "VOLVO",
];

/// Vehicle classes, in menu order.
pub const VEHICLE_CLASSES: [&str; 11] = [
    "COMPACT",
    "SUV",
    "MID-SIZE",
    "FULL-SIZE",
    "TWO-SEATER",
    "MINICOMPACT",
    "SUBCOMPACT",
    "PICKUP TRUCK",
    "MINIVAN",
    "STATION WAGON",
    "VAN",
];

/// Fallback make when a menu selection is out of range.
pub const DEFAULT_MAKE: &str = "TOYOTA";

/// Fallback vehicle class when a menu selection is out of range.
pub const DEFAULT_VEHICLE_CLASS: &str = "COMPACT";

/// Coded transmission types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transmission {
    /// A - Automatic.
    A,
    /// AM - Automated Manual.
    Am,
    /// AS - Automatic with Select Shift.
    As,
    /// AV - Continuously Variable.
    Av,
    /// M - Manual.
    M,
}

impl Transmission {
    /// All transmission types, in menu order.
    pub const ALL: [Self; 5] = [Self::A, Self::Am, Self::As, Self::Av, Self::M];

    /// Returns the code used in the tabular data and the artifact.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Am => "AM",
            Self::As => "AS",
            Self::Av => "AV",
            Self::M => "M",
        }
    }

    /// Returns the human-readable label shown in menus and reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::A => "Automatic",
            Self::Am => "Automated Manual",
            Self::As => "Automatic with Select Shift",
            Self::Av => "Continuously Variable",
            Self::M => "Manual",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Transmission {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AM" => Ok(Self::Am),
            "AS" => Ok(Self::As),
            "AV" => Ok(Self::Av),
            "M" => Ok(Self::M),
            _ => Err(CodeParseError {
                code: s.to_string(),
                domain: "transmission",
                expected: "A, AM, AS, AV, M",
            }),
        }
    }
}

impl Default for Transmission {
    fn default() -> Self {
        Self::As
    }
}

/// Coded fuel types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fuel {
    /// X - Regular Gasoline.
    X,
    /// Z - Premium Gasoline.
    Z,
    /// D - Diesel.
    D,
    /// E - Ethanol (E85).
    E,
    /// N - Natural Gas.
    N,
}

impl Fuel {
    /// All fuel types, in menu order.
    pub const ALL: [Self; 5] = [Self::X, Self::Z, Self::D, Self::E, Self::N];

    /// Returns the code used in the tabular data and the artifact.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Z => "Z",
            Self::D => "D",
            Self::E => "E",
            Self::N => "N",
        }
    }

    /// Returns the human-readable label shown in menus and reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::X => "Regular Gasoline",
            Self::Z => "Premium Gasoline",
            Self::D => "Diesel",
            Self::E => "Ethanol (E85)",
            Self::N => "Natural Gas",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Fuel {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "X" => Ok(Self::X),
            "Z" => Ok(Self::Z),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "N" => Ok(Self::N),
            _ => Err(CodeParseError {
                code: s.to_string(),
                domain: "fuel",
                expected: "X, Z, D, E, N",
            }),
        }
    }
}

impl Default for Fuel {
    fn default() -> Self {
        Self::X
    }
}

/// Decode a transmission code to its display label.
///
/// Unknown codes pass through unchanged.
#[must_use]
pub fn transmission_label(code: &str) -> &str {
    code.parse::<Transmission>().map_or(code, |t| t.label())
}

/// Decode a fuel code to its display label.
///
/// Unknown codes pass through unchanged.
#[must_use]
pub fn fuel_label(code: &str) -> &str {
    code.parse::<Fuel>().map_or(code, |f| f.label())
}

/// Error returned when parsing an invalid transmission or fuel code.
#[derive(Debug, Clone)]
pub struct CodeParseError {
    code: String,
    domain: &'static str,
    expected: &'static str,
}

impl fmt::Display for CodeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} code '{}', expected one of: {}",
            self.domain, self.code, self.expected
        )
    }
}

impl std::error::Error for CodeParseError {}
