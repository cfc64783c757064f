//! Deterministic nonce generation primitives
//!
//! The algorithmic kernel of the starknonce workspace: a fixed-width
//! big-endian scalar codec, an HMAC-DRBG bit stream keyed from the signing
//! inputs, and the candidate selection loop that turns the stream into
//! curve-valid ECDSA nonces.
//!
//! Everything here is a pure function of its inputs. No state survives a
//! call, no randomness is consumed, and identical inputs always reproduce
//! identical output — that is the point of RFC 6979.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod codec;
pub mod drbg;
pub mod error;
pub mod rfc6979;

pub use error::{Error, Result};
pub use rfc6979::{generate_nonce, generate_nonce_rfc6979, NONCE_SIZE};
