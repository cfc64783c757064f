//! Constant values for the starknonce workspace
//!
//! Subgroup orders and size constants for the curves the nonce generator
//! is used with. Orders are stored as fixed-width big-endian byte arrays,
//! the same encoding the generator consumes and produces.

#![no_std]

pub mod curves;
