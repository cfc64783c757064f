//! # starknonce
//!
//! Deterministic ECDSA nonce generation for signing toolkits.
//!
//! The nonce (k-value) of an ECDSA signature must be secret, never reused,
//! and valid for the curve; a repeated or biased nonce leaks the private
//! key. This library derives the nonce deterministically from the signing
//! inputs per RFC 6979, so no external random source is involved:
//!
//! - [`rfc6979::generate_nonce_rfc6979`]: canonical RFC 6979 over a
//!   caller-supplied subgroup order, with an `attempt` index for
//!   deterministic retry flows;
//! - [`rfc6979::generate_nonce`]: the seeded STARK-curve variant, with a
//!   32-byte seed as extra entropy.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`starknonce-api`]: error taxonomy, status codes, trait contracts
//! - [`starknonce-params`]: curve orders and size constants
//! - [`starknonce-algorithms`]: codec, HMAC-DRBG and the selection loop
//!
//! The [`ffi`] module is the C ABI bridge host language runtimes link
//! against.
//!
//! [`rfc6979::generate_nonce_rfc6979`]: starknonce_algorithms::rfc6979::generate_nonce_rfc6979
//! [`rfc6979::generate_nonce`]: starknonce_algorithms::rfc6979::generate_nonce
//! [`starknonce-api`]: starknonce_api
//! [`starknonce-params`]: starknonce_params
//! [`starknonce-algorithms`]: starknonce_algorithms

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use starknonce_algorithms as algorithms;
pub use starknonce_api as api;
pub use starknonce_params as params;

pub mod ffi;

/// Common imports for starknonce users
pub mod prelude {
    pub use crate::algorithms::rfc6979::{generate_nonce, generate_nonce_rfc6979, NONCE_SIZE};
    pub use crate::api::{Error, Result, SecretBytes, Status};
    pub use crate::params::curves::{
        CURVE_SCALAR_SIZE, NIST_P256_ORDER, SECP256K1_ORDER, STARK_CURVE_ORDER,
    };
}
