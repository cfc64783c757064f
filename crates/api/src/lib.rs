//! Core types shared across the starknonce ecosystem
//!
//! This crate holds the pieces every other workspace member agrees on: the
//! error taxonomy and the integer status codes it maps to at the bridge
//! boundary, a zeroizing fixed-size byte container for key material, and
//! the narrow trait contracts for the collaborators the bridge forwards to
//! (digest producers and the signature verifier). None of those
//! collaborators are implemented here.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export the primary error type, result alias and bridge status codes
pub use error::{Error, Result, Status};

// Re-export the secret byte container
pub use types::SecretBytes;
