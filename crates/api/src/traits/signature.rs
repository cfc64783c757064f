//! Signature verifier contract

use crate::error::Result;
use crate::traits::hash::DIGEST_SIZE;

/// Contract for the curve's signature verification routine
///
/// The verifier is assumed correct and tested elsewhere; the nonce
/// generator's retry flow only needs its accept/reject verdict. All
/// components are fixed-width big-endian scalars.
pub trait SignatureVerifier {
    /// Returns the name of the underlying curve
    fn name() -> &'static str;

    /// Check `(r, s)` against `public_key` and the message digest
    ///
    /// `Ok(false)` is a well-formed rejection; `Err` is reserved for
    /// inputs that violate the call contract (malformed scalars).
    fn verify(
        public_key: &[u8; DIGEST_SIZE],
        digest: &[u8; DIGEST_SIZE],
        r: &[u8; DIGEST_SIZE],
        s: &[u8; DIGEST_SIZE],
    ) -> Result<bool>;
}
