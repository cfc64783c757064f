//! Deterministic ECDSA nonce derivation
//!
//! One parameterized candidate selection loop over the [`drbg`] stream,
//! exposed through two entry points:
//!
//! - [`generate_nonce_rfc6979`]: the canonical RFC 6979 derivation over a
//!   caller-supplied subgroup order, with an explicit `attempt` index
//!   selecting the Nth valid candidate for deterministic retry flows;
//! - [`generate_nonce`]: the seeded STARK-curve variant, where a 32-byte
//!   seed supplies the extra-entropy slot of the DRBG derivation.
//!
//! Both reproduce their native counterparts bit for bit: candidates are
//! truncated to the order's bit length (`bits2int`) before the range
//! check, the digest is folded as raw bytes, and the seed is folded as
//! its minimal big-endian encoding.
//!
//! [`drbg`]: crate::drbg

use zeroize::Zeroize;

use starknonce_api::SecretBytes;
use starknonce_params::curves::STARK_CURVE_ORDER;

use crate::codec::{self, SCALAR_SIZE};
use crate::drbg::HmacDrbg;
use crate::error::{validate, Result};

/// Size of a generated nonce in bytes
pub const NONCE_SIZE: usize = SCALAR_SIZE;

/// Derive the STARK-curve nonce for `(message_hash, private_key, seed)`
///
/// Seeded single-shot variant: the seed's minimal big-endian encoding is
/// folded into the DRBG derivation as extra entropy (an all-zero seed
/// contributes nothing and reproduces the plain RFC 6979 derivation).
/// All three inputs must be exactly 32 bytes.
pub fn generate_nonce(
    message_hash: &[u8],
    private_key: &[u8],
    seed: &[u8],
) -> Result<[u8; NONCE_SIZE]> {
    let digest = codec::decode(message_hash)?;
    let seed = codec::decode(seed)?;

    let mut key_bytes = codec::decode(private_key)?;
    let key = SecretBytes::new(key_bytes);
    key_bytes.zeroize();

    nth_candidate(
        &key,
        &STARK_CURVE_ORDER,
        &digest,
        codec::strip_leading_zeros(&seed),
        0,
    )
}

/// Derive the `attempt`-th RFC 6979 nonce for the given subgroup order
///
/// `attempt = 0` is the canonical RFC 6979 output. Each increment selects
/// the next valid candidate of the same derivation stream, so a caller
/// whose downstream signature computation failed can re-derive a fresh,
/// deterministic nonce without any shared state. `private_key`, `order`
/// and `message_hash` must be exactly 32 bytes; the order must be at
/// least 2.
pub fn generate_nonce_rfc6979(
    private_key: &[u8],
    order: &[u8],
    message_hash: &[u8],
    attempt: u32,
) -> Result<[u8; NONCE_SIZE]> {
    let order = codec::decode(order)?;
    let digest = codec::decode(message_hash)?;

    let mut key_bytes = codec::decode(private_key)?;
    let key = SecretBytes::new(key_bytes);
    key_bytes.zeroize();

    nth_candidate(&key, &order, &digest, &[], attempt)
}

/// Candidate selection loop: draw until `attempt + 1` valid candidates
/// have been seen, return the last one.
///
/// A draw is valid iff `0 < candidate < order` after the `bits2int`
/// truncation. Out-of-range draws advance the stream without consuming
/// the attempt budget, exactly as RFC 6979 step h discards them.
fn nth_candidate(
    private_key: &SecretBytes<SCALAR_SIZE>,
    order: &[u8; SCALAR_SIZE],
    digest: &[u8; SCALAR_SIZE],
    extra_entropy: &[u8],
    attempt: u32,
) -> Result<[u8; NONCE_SIZE]> {
    let order_bits = codec::bit_len(order);
    validate::parameter(
        order_bits >= 2,
        "subgroup order",
        "order below 2 admits no valid nonce",
    )?;
    let shift = SCALAR_SIZE * 8 - order_bits;

    let mut drbg = HmacDrbg::new(private_key.as_ref(), digest, extra_entropy);
    let mut candidate = [0u8; SCALAR_SIZE];
    let mut remaining = u64::from(attempt) + 1;

    loop {
        drbg.fill_bytes(&mut candidate);
        codec::shift_right(&mut candidate, shift);

        let valid = !codec::ct_is_zero(&candidate) & codec::ct_lt(&candidate, order);
        if bool::from(valid) {
            remaining -= 1;
            if remaining == 0 {
                return Ok(candidate);
            }
        }
    }
}
