//! # Length Units
//!
//! The wire-length entry carries a unit flag: centimeters or inches. Inches
//! are normalized by a fixed ×3 factor before any formula uses the length.
//!
//! The factor is a domain constant inherited from the formula set, not a
//! physical cm-per-inch conversion (which would be 2.54). It must stay at 3
//! for results to match the published formulas.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::units::LengthUnit;
//!
//! assert_eq!(LengthUnit::Cm.normalize(10.0), 10.0);
//! assert_eq!(LengthUnit::Inch.normalize(10.0), 30.0);
//! ```

use serde::{Deserialize, Serialize};

/// Normalization factor applied to inch-denominated lengths.
pub const INCH_LENGTH_FACTOR: f64 = 3.0;

/// Unit flag for the wire-length input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "CM")]
    Cm,
    #[serde(rename = "INCH")]
    Inch,
}

impl LengthUnit {
    /// All unit variants, in form display order
    pub const ALL: [LengthUnit; 2] = [LengthUnit::Cm, LengthUnit::Inch];

    /// Normalize a raw length value to the internal unit used by the formulas
    pub fn normalize(&self, raw_length: f64) -> f64 {
        match self {
            LengthUnit::Cm => raw_length,
            LengthUnit::Inch => raw_length * INCH_LENGTH_FACTOR,
        }
    }

    /// The serialized token ("CM" or "INCH")
    pub fn token(&self) -> &'static str {
        match self {
            LengthUnit::Cm => "CM",
            LengthUnit::Inch => "INCH",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_passthrough() {
        assert_eq!(LengthUnit::Cm.normalize(5.0), 5.0);
        assert_eq!(LengthUnit::Cm.normalize(0.0), 0.0);
    }

    #[test]
    fn test_inch_normalization() {
        assert_eq!(LengthUnit::Inch.normalize(10.0), 30.0);
        assert_eq!(LengthUnit::Inch.normalize(0.0), 0.0);
    }

    #[test]
    fn test_serde_tokens() {
        assert_eq!(serde_json::to_string(&LengthUnit::Cm).unwrap(), "\"CM\"");
        let unit: LengthUnit = serde_json::from_str("\"INCH\"").unwrap();
        assert_eq!(unit, LengthUnit::Inch);
    }
}
