//! Core domain logic - exemption rules and segment derivation.
//!
//! Everything here is pure: no I/O, no hidden state, deterministic output for
//! a given input.

mod exemption;
mod segment;

pub use exemption::ExemptionSet;
pub use segment::storage_segment;
