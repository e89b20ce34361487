//! # Wire Materials
//!
//! The closed set of conductor materials the calculator recognizes, each
//! with a fixed numeric coefficient used directly in the cost and impedance
//! formulas. The coefficient is a dimensionless domain weight, not a real
//! resistivity value.
//!
//! Using a closed enum (rather than a string-keyed map) makes an
//! unrecognized material a deserialization failure instead of a runtime
//! lookup miss.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::materials::WireMaterial;
//!
//! let material = WireMaterial::Copper;
//! assert_eq!(material.coefficient(), 1.0);
//! assert_eq!(material.token(), "COPPER");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{WireError, WireResult};

/// Conductor material for the wire under design.
///
/// Serialized as the upper-case token the calculator form presents
/// ("COPPER", "ALUMINUM", ...). `ALUMIUM` is accepted on input as a legacy
/// spelling found in older setups files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireMaterial {
    #[serde(rename = "COPPER")]
    Copper,
    #[serde(rename = "ALUMINUM", alias = "ALUMIUM")]
    Aluminum,
    #[serde(rename = "SILVER")]
    Silver,
    #[serde(rename = "GOLD")]
    Gold,
    #[serde(rename = "NICKEL")]
    Nickel,
    #[serde(rename = "ALLOY")]
    Alloy,
}

impl WireMaterial {
    /// All material variants, in form display order
    pub const ALL: [WireMaterial; 6] = [
        WireMaterial::Copper,
        WireMaterial::Aluminum,
        WireMaterial::Silver,
        WireMaterial::Gold,
        WireMaterial::Nickel,
        WireMaterial::Alloy,
    ];

    /// Fixed coefficient used in the cost and impedance formulas
    pub fn coefficient(&self) -> f64 {
        match self {
            WireMaterial::Copper => 1.0,
            WireMaterial::Aluminum => 3.0,
            WireMaterial::Silver => 4.0,
            WireMaterial::Gold => 5.0,
            WireMaterial::Nickel => 6.0,
            WireMaterial::Alloy => 7.0,
        }
    }

    /// The canonical serialized token (e.g., "COPPER")
    pub fn token(&self) -> &'static str {
        match self {
            WireMaterial::Copper => "COPPER",
            WireMaterial::Aluminum => "ALUMINUM",
            WireMaterial::Silver => "SILVER",
            WireMaterial::Gold => "GOLD",
            WireMaterial::Nickel => "NICKEL",
            WireMaterial::Alloy => "ALLOY",
        }
    }

    /// Parse from common string representations (case-insensitive)
    pub fn from_str_flexible(s: &str) -> WireResult<Self> {
        match s.to_uppercase().as_str() {
            "COPPER" => Ok(WireMaterial::Copper),
            "ALUMINUM" | "ALUMIUM" => Ok(WireMaterial::Aluminum),
            "SILVER" => Ok(WireMaterial::Silver),
            "GOLD" => Ok(WireMaterial::Gold),
            "NICKEL" => Ok(WireMaterial::Nickel),
            "ALLOY" => Ok(WireMaterial::Alloy),
            _ => Err(WireError::invalid_input(
                "wire_material",
                s,
                "Unrecognized wire material",
            )),
        }
    }

    /// Get display name for UI dropdowns
    pub fn display_name(&self) -> &'static str {
        match self {
            WireMaterial::Copper => "Copper",
            WireMaterial::Aluminum => "Aluminum",
            WireMaterial::Silver => "Silver",
            WireMaterial::Gold => "Gold",
            WireMaterial::Nickel => "Nickel",
            WireMaterial::Alloy => "Alloy",
        }
    }
}

impl std::fmt::Display for WireMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients() {
        assert_eq!(WireMaterial::Copper.coefficient(), 1.0);
        assert_eq!(WireMaterial::Aluminum.coefficient(), 3.0);
        assert_eq!(WireMaterial::Silver.coefficient(), 4.0);
        assert_eq!(WireMaterial::Gold.coefficient(), 5.0);
        assert_eq!(WireMaterial::Nickel.coefficient(), 6.0);
        assert_eq!(WireMaterial::Alloy.coefficient(), 7.0);
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&WireMaterial::Copper).unwrap();
        assert_eq!(json, "\"COPPER\"");

        let roundtrip: WireMaterial = serde_json::from_str("\"NICKEL\"").unwrap();
        assert_eq!(roundtrip, WireMaterial::Nickel);
    }

    #[test]
    fn test_legacy_alumium_alias() {
        // Older setups files carry the legacy spelling
        let legacy: WireMaterial = serde_json::from_str("\"ALUMIUM\"").unwrap();
        assert_eq!(legacy, WireMaterial::Aluminum);
        assert_eq!(legacy.token(), "ALUMINUM");
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            WireMaterial::from_str_flexible("gold").unwrap(),
            WireMaterial::Gold
        );
        assert_eq!(
            WireMaterial::from_str_flexible("Alumium").unwrap(),
            WireMaterial::Aluminum
        );
        assert!(WireMaterial::from_str_flexible("TUNGSTEN").is_err());
    }

    #[test]
    fn test_unrecognized_token_fails_deserialization() {
        let result: Result<WireMaterial, _> = serde_json::from_str("\"TUNGSTEN\"");
        assert!(result.is_err());
    }
}
