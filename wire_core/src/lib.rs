//! # wire_core - Electrical Wire Calculator Engine
//!
//! `wire_core` is the computational core of WireCalc: a small library that
//! derives simplified wire-sizing figures (wire size, estimated cost,
//! impedance) from user-entered parameters, and persists named "setups" of
//! those parameters to a local JSON file for later recall.
//!
//! ## Design Philosophy
//!
//! - **Stateless engine**: the calculation is a pure function of its input
//! - **JSON-First**: all persisted and derived types implement
//!   Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Explicit ownership**: the UI layer holds one [`setups::SetupStore`]
//!   and calls [`calculations::wire::calculate`] directly; there is no
//!   shared global state
//!
//! ## Quick Start
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
//! println!("{} AWG", output.wire_size_text());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The wire-sizing calculation (inputs, outputs, formulas)
//! - [`materials`] - Conductor materials and their fixed coefficients
//! - [`units`] - Length unit flag and normalization
//! - [`setups`] - Named setup list with index-addressed CRUD and flush
//! - [`errors`] - Structured error types
//! - [`file_io`] - Setups file operations with atomic saves

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod setups;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::wire::{calculate, WireInput, WireOutput};
pub use errors::{WireError, WireResult};
pub use setups::{Setup, SetupStore};
