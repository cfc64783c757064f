//! Trait contracts for external collaborators
//!
//! The bridge forwards to a handful of cryptographic routines that live
//! outside this workspace: domain digest functions (Pedersen, Poseidon,
//! Keccak-style) and the curve's signature verifier. These modules pin
//! down the narrow call shapes the nonce generator and its callers rely
//! on, without implementing any of them.

pub mod hash;
pub mod signature;

pub use hash::DigestFunction;
pub use signature::SignatureVerifier;
