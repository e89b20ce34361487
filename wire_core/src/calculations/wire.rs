//! # Wire Sizing Calculation
//!
//! Derives three figures from one set of user inputs:
//!
//! - **wire size** = (V × I) / (vt + ph + L + Vd)
//! - **estimated cost** = L × wm
//! - **impedance** = L × (5 × wm)
//!
//! where `vt` is the voltage-type code (DC=1, AC=2), `ph` the phase count,
//! `L` the unit-normalized wire length, `Vd` the voltage-drop percentage,
//! and `wm` the material coefficient. The formulas are illustrative, not
//! real electrical engineering; no correctness beyond them is claimed.
//!
//! The calculation is stateless and deterministic. Failure modes are
//! invalid input and a zero denominator in the wire-size formula; both are
//! reported to the caller, never a panic.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::calculations::wire::{calculate, Phases, VoltageType, WireInput};
//! use wire_core::materials::WireMaterial;
//! use wire_core::units::LengthUnit;
//!
//! let input = WireInput {
//!     voltage_type: VoltageType::Dc,
//!     wire_material: WireMaterial::Copper,
//!     phases: Phases::Single,
//!     voltage: 120.0,
//!     current: 10.0,
//!     wire_length: 5.0,
//!     length_unit: LengthUnit::Cm,
//!     voltage_drop_pct: 2.0,
//! };
//!
//! let output = calculate(&input).unwrap();
//! assert_eq!(output.wire_size_text(), "133.33");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{WireError, WireResult};
use crate::materials::WireMaterial;
use crate::units::LengthUnit;

/// Supply type: direct or alternating current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoltageType {
    #[serde(rename = "DC")]
    Dc,
    #[serde(rename = "AC")]
    Ac,
}

impl VoltageType {
    /// All voltage-type variants, in form display order
    pub const ALL: [VoltageType; 2] = [VoltageType::Dc, VoltageType::Ac];

    /// Numeric code used in the wire-size denominator (DC=1, AC=2)
    pub fn code(&self) -> f64 {
        match self {
            VoltageType::Dc => 1.0,
            VoltageType::Ac => 2.0,
        }
    }

    /// The serialized token ("DC" or "AC")
    pub fn token(&self) -> &'static str {
        match self {
            VoltageType::Dc => "DC",
            VoltageType::Ac => "AC",
        }
    }
}

impl std::fmt::Display for VoltageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Number of supply phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phases {
    #[serde(rename = "1")]
    Single,
    #[serde(rename = "3")]
    Three,
}

impl Phases {
    /// All phase variants, in form display order
    pub const ALL: [Phases; 2] = [Phases::Single, Phases::Three];

    /// Numeric phase count used in the wire-size denominator
    pub fn count(&self) -> f64 {
        match self {
            Phases::Single => 1.0,
            Phases::Three => 3.0,
        }
    }
}

impl std::fmt::Display for Phases {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phases::Single => write!(f, "1"),
            Phases::Three => write!(f, "3"),
        }
    }
}

/// Input parameters for one wire-sizing calculation.
///
/// This is the record the setup store persists. Enum fields cannot hold
/// unrecognized tokens by construction; bad tokens in a setups file fail at
/// deserialization time.
///
/// ## JSON Example
///
/// ```json
/// {
///   "voltage_type": "DC",
///   "wire_material": "COPPER",
///   "phases": "1",
///   "voltage": 120.0,
///   "current": 10.0,
///   "wire_length": 5.0,
///   "length_unit": "CM",
///   "voltage_drop_pct": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireInput {
    /// Supply type (DC or AC)
    pub voltage_type: VoltageType,

    /// Conductor material
    pub wire_material: WireMaterial,

    /// Number of supply phases (1 or 3)
    pub phases: Phases,

    /// Supply voltage in volts
    pub voltage: f64,

    /// Load current in amperes
    pub current: f64,

    /// Wire length in the unit given by `length_unit`
    pub wire_length: f64,

    /// Unit flag for `wire_length`
    pub length_unit: LengthUnit,

    /// Voltage drop over the full length, in percent
    pub voltage_drop_pct: f64,
}

impl WireInput {
    /// Validate input parameters.
    ///
    /// A zero wire length is admitted: it is a legitimate input to the
    /// denominator, which has its own zero check in [`calculate`].
    pub fn validate(&self) -> WireResult<()> {
        if !self.voltage.is_finite() {
            return Err(WireError::invalid_input(
                "voltage",
                self.voltage.to_string(),
                "Voltage must be a finite number",
            ));
        }
        if self.voltage <= 0.0 {
            return Err(WireError::invalid_input(
                "voltage",
                self.voltage.to_string(),
                "Voltage must be positive",
            ));
        }
        if !self.current.is_finite() {
            return Err(WireError::invalid_input(
                "current",
                self.current.to_string(),
                "Current must be a finite number",
            ));
        }
        if self.current <= 0.0 {
            return Err(WireError::invalid_input(
                "current",
                self.current.to_string(),
                "Current must be positive",
            ));
        }
        if !self.wire_length.is_finite() {
            return Err(WireError::invalid_input(
                "wire_length",
                self.wire_length.to_string(),
                "Wire length must be a finite number",
            ));
        }
        if self.wire_length < 0.0 {
            return Err(WireError::invalid_input(
                "wire_length",
                self.wire_length.to_string(),
                "Wire length cannot be negative",
            ));
        }
        if !self.voltage_drop_pct.is_finite() {
            return Err(WireError::invalid_input(
                "voltage_drop_pct",
                self.voltage_drop_pct.to_string(),
                "Voltage drop must be a finite number",
            ));
        }
        Ok(())
    }

    /// Wire length normalized to the internal unit used by the formulas
    pub fn normalized_length(&self) -> f64 {
        self.length_unit.normalize(self.wire_length)
    }
}

/// Derived figures from one calculation.
///
/// Values are full-precision; the `*_text` helpers provide the two-decimal
/// renderings the form displays. Outputs are ephemeral and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireOutput {
    /// Recommended wire size (AWG)
    pub wire_size: f64,

    /// Estimated cost in dollars per unit
    pub estimated_cost: f64,

    /// Impedance in ohms
    pub impedance: f64,
}

impl WireOutput {
    /// Wire size rendered to two decimals (e.g., "133.33")
    pub fn wire_size_text(&self) -> String {
        format!("{:.2}", self.wire_size)
    }

    /// Estimated cost rendered as the form shows it (e.g., "$5.00 / UNIT")
    pub fn estimated_cost_text(&self) -> String {
        format!("${:.2} / UNIT", self.estimated_cost)
    }

    /// Impedance rendered as the form shows it (e.g., "25.00 OHMS")
    pub fn impedance_text(&self) -> String {
        format!("{:.2} OHMS", self.impedance)
    }
}

/// Run the wire-sizing calculation.
///
/// # Returns
///
/// * `Ok(WireOutput)` - Derived figures at full precision
/// * `Err(WireError::InvalidInput)` - A numeric field failed validation
/// * `Err(WireError::DivisionByZero)` - The wire-size denominator is zero
pub fn calculate(input: &WireInput) -> WireResult<WireOutput> {
    input.validate()?;

    let length = input.normalized_length();
    let coefficient = input.wire_material.coefficient();

    let denominator =
        input.voltage_type.code() + input.phases.count() + length + input.voltage_drop_pct;
    if denominator == 0.0 {
        return Err(WireError::DivisionByZero { denominator });
    }

    Ok(WireOutput {
        wire_size: (input.voltage * input.current) / denominator,
        estimated_cost: length * coefficient,
        impedance: length * (5.0 * coefficient),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> WireInput {
        // The worked example: denominator = 1 + 1 + 5 + 2 = 9
        WireInput {
            voltage_type: VoltageType::Dc,
            wire_material: WireMaterial::Copper,
            phases: Phases::Single,
            voltage: 120.0,
            current: 10.0,
            wire_length: 5.0,
            length_unit: LengthUnit::Cm,
            voltage_drop_pct: 2.0,
        }
    }

    #[test]
    fn test_worked_example() {
        let output = calculate(&test_input()).unwrap();

        // wire_size = 1200 / 9 = 133.33...
        assert!((output.wire_size - 1200.0 / 9.0).abs() < 1e-12);
        assert_eq!(output.estimated_cost, 5.0);
        assert_eq!(output.impedance, 25.0);

        assert_eq!(output.wire_size_text(), "133.33");
        assert_eq!(output.estimated_cost_text(), "$5.00 / UNIT");
        assert_eq!(output.impedance_text(), "25.00 OHMS");
    }

    #[test]
    fn test_deterministic() {
        let input = test_input();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inch_normalization_in_all_formulas() {
        let mut input = test_input();
        input.wire_length = 10.0;
        input.length_unit = LengthUnit::Inch;

        let output = calculate(&input).unwrap();

        // Normalized length 30 feeds all three formulas:
        // denominator = 1 + 1 + 30 + 2 = 34
        assert!((output.wire_size - 1200.0 / 34.0).abs() < 1e-12);
        assert_eq!(output.estimated_cost, 30.0);
        assert_eq!(output.impedance, 150.0);
    }

    #[test]
    fn test_division_by_zero() {
        let mut input = test_input();
        // DC(1) + 1 phase + length 0 + drop -2 = 0
        input.wire_length = 0.0;
        input.voltage_drop_pct = -2.0;

        let result = calculate(&input);
        assert_eq!(
            result.unwrap_err(),
            WireError::DivisionByZero { denominator: 0.0 }
        );
    }

    #[test]
    fn test_zero_length_is_valid_input() {
        let mut input = test_input();
        input.wire_length = 0.0;

        // denominator = 1 + 1 + 0 + 2 = 4, still well-defined
        let output = calculate(&input).unwrap();
        assert_eq!(output.wire_size, 300.0);
        assert_eq!(output.estimated_cost, 0.0);
        assert_eq!(output.impedance, 0.0);
    }

    #[test]
    fn test_negative_voltage_rejected() {
        let mut input = test_input();
        input.voltage = -120.0;

        match calculate(&input) {
            Err(WireError::InvalidInput { field, .. }) => assert_eq!(field, "voltage"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_current_rejected() {
        let mut input = test_input();
        input.current = f64::NAN;

        match calculate(&input) {
            Err(WireError::InvalidInput { field, .. }) => assert_eq!(field, "current"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_length_rejected() {
        let mut input = test_input();
        input.wire_length = -1.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_material_coefficient_in_outputs() {
        let mut input = test_input();
        input.wire_material = WireMaterial::Gold;

        let output = calculate(&input).unwrap();
        assert_eq!(output.estimated_cost, 25.0); // 5 * 5
        assert_eq!(output.impedance, 125.0); // 5 * (5 * 5)
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: WireInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_phase_tokens() {
        let json = serde_json::to_string(&Phases::Three).unwrap();
        assert_eq!(json, "\"3\"");
        let roundtrip: Phases = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(roundtrip, Phases::Single);
    }
}
