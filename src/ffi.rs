//! C ABI bridge
//!
//! The entry points host language runtimes bind to. Both mirror the
//! headers of the native libraries this crate replaces: every scalar
//! buffer is exactly 32 big-endian bytes, the return value is an integer
//! status code ([`Status`]), and the output buffer is written only on
//! success (status `0`). Inputs are read-only; nothing is retained after
//! the call returns.
//!
//! # Safety
//!
//! Callers must pass either null or valid pointers to buffers of exactly
//! [`NONCE_SIZE`] bytes. Null pointers are reported as
//! [`Status::NullPointer`]; undersized buffers cannot be detected across
//! the ABI and are undefined behavior, as with any C interface.

use core::slice;

use starknonce_algorithms::rfc6979::{generate_nonce, generate_nonce_rfc6979, NONCE_SIZE};
use starknonce_algorithms::{codec, Error as AlgoError};
use starknonce_api::{Error, Status};

fn failure(err: AlgoError) -> i32 {
    Status::from(&Error::from(err)).code()
}

/// Write a derived nonce into `out_buffer` and report a status code.
///
/// # Safety
///
/// `out_buffer` must be non-null and valid for [`NONCE_SIZE`] bytes.
unsafe fn deliver(result: Result<[u8; NONCE_SIZE], AlgoError>, out_buffer: *mut u8) -> i32 {
    match result {
        Ok(nonce) => {
            let out = slice::from_raw_parts_mut(out_buffer, NONCE_SIZE);
            match codec::encode(&nonce, out) {
                Ok(()) => Status::Success.code(),
                Err(_) => Status::EncodingFailed.code(),
            }
        }
        Err(err) => failure(err),
    }
}

/// Seeded STARK-curve nonce derivation.
///
/// `p_message_hash`, `p_private_key` and `p_seed` each point to 32
/// big-endian bytes; the nonce is written to the 32-byte `out_buffer`.
/// Returns `0` on success.
///
/// # Safety
///
/// See the module-level safety contract.
#[no_mangle]
pub unsafe extern "C" fn generate_k(
    p_message_hash: *const u8,
    p_private_key: *const u8,
    p_seed: *const u8,
    out_buffer: *mut u8,
) -> i32 {
    if p_message_hash.is_null()
        || p_private_key.is_null()
        || p_seed.is_null()
        || out_buffer.is_null()
    {
        return Status::NullPointer.code();
    }

    let message_hash = slice::from_raw_parts(p_message_hash, NONCE_SIZE);
    let private_key = slice::from_raw_parts(p_private_key, NONCE_SIZE);
    let seed = slice::from_raw_parts(p_seed, NONCE_SIZE);

    deliver(generate_nonce(message_hash, private_key, seed), out_buffer)
}

/// Canonical RFC 6979 nonce derivation with an explicit attempt index.
///
/// `p_private_key`, `p_subgroup_order` and `p_hash` each point to 32
/// big-endian bytes; `attempt` must be non-negative; the nonce is written
/// to the 32-byte `out_buffer`. Returns `0` on success.
///
/// # Safety
///
/// See the module-level safety contract.
#[no_mangle]
pub unsafe extern "C" fn generate_rfc6979_k(
    p_private_key: *const u8,
    p_subgroup_order: *const u8,
    p_hash: *const u8,
    attempt: i32,
    out_buffer: *mut u8,
) -> i32 {
    if p_private_key.is_null()
        || p_subgroup_order.is_null()
        || p_hash.is_null()
        || out_buffer.is_null()
    {
        return Status::NullPointer.code();
    }
    if attempt < 0 {
        return Status::InvalidParameter.code();
    }

    let private_key = slice::from_raw_parts(p_private_key, NONCE_SIZE);
    let order = slice::from_raw_parts(p_subgroup_order, NONCE_SIZE);
    let hash = slice::from_raw_parts(p_hash, NONCE_SIZE);

    deliver(
        generate_nonce_rfc6979(private_key, order, hash, attempt as u32),
        out_buffer,
    )
}
