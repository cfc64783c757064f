//! Digest producer contract

use crate::error::Result;

/// Size of a message digest in bytes
///
/// Every digest folded into nonce derivation is exactly this wide. The
/// generator treats it as opaque bytes and never re-hashes it.
pub const DIGEST_SIZE: usize = 32;

/// Contract for a domain digest function with a fixed 32-byte output
///
/// Implementations live outside this workspace (Pedersen and Poseidon
/// hashes, `starknet_keccak`, plain SHA-2). The generator only consumes
/// their output.
pub trait DigestFunction {
    /// Returns the name of this digest function
    fn name() -> &'static str;

    /// Hash arbitrary input bytes into a fixed-width digest
    fn digest(data: &[u8]) -> Result<[u8; DIGEST_SIZE]>;
}
