//! # Wire Calculations
//!
//! Calculation types follow a single pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Output` - Derived results (JSON-serializable, never persisted)
//! - `calculate(input) -> Result<*Output, WireError>` - Pure function
//!
//! The only calculation today is [`wire`] (wire size, estimated cost,
//! impedance). The module split leaves room for further derived figures
//! without disturbing the store, which persists inputs only.

pub mod wire;

// Re-export commonly used types
pub use wire::{calculate, Phases, VoltageType, WireInput, WireOutput};
