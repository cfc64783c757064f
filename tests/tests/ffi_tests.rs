//! Binary contract of the C ABI bridge

use starknonce::ffi::{generate_k, generate_rfc6979_k};
use starknonce::prelude::*;
use starknonce_tests::{hex32, P256_SHA256_VECTORS};

#[test]
fn rfc6979_entry_matches_safe_api() {
    let vector = &P256_SHA256_VECTORS[0];
    let key = hex32(vector.private_key);
    let digest = hex32(vector.message_digest);
    let expected = hex32(vector.expected_k);

    let mut out = [0u8; NONCE_SIZE];
    let status = unsafe {
        generate_rfc6979_k(
            key.as_ptr(),
            NIST_P256_ORDER.as_ptr(),
            digest.as_ptr(),
            0,
            out.as_mut_ptr(),
        )
    };

    assert_eq!(status, 0);
    assert_eq!(out, expected);
}

#[test]
fn seeded_entry_matches_safe_api() {
    let key = [0x42u8; 32];
    let digest = [0x24u8; 32];
    let mut seed = [0u8; 32];
    seed[31] = 7;

    let mut out = [0u8; NONCE_SIZE];
    let status = unsafe {
        generate_k(
            digest.as_ptr(),
            key.as_ptr(),
            seed.as_ptr(),
            out.as_mut_ptr(),
        )
    };

    assert_eq!(status, 0);
    assert_eq!(out, generate_nonce(&digest, &key, &seed).unwrap());
}

#[test]
fn null_pointers_are_reported() {
    let buf = [0u8; 32];
    let mut out = [0u8; NONCE_SIZE];

    let status = unsafe {
        generate_k(
            core::ptr::null(),
            buf.as_ptr(),
            buf.as_ptr(),
            out.as_mut_ptr(),
        )
    };
    assert_eq!(status, Status::NullPointer.code());

    let status = unsafe {
        generate_rfc6979_k(
            buf.as_ptr(),
            buf.as_ptr(),
            buf.as_ptr(),
            0,
            core::ptr::null_mut(),
        )
    };
    assert_eq!(status, Status::NullPointer.code());
}

#[test]
fn negative_attempt_is_rejected() {
    let key = [0x42u8; 32];
    let digest = [0x24u8; 32];
    let mut out = [0u8; NONCE_SIZE];

    let status = unsafe {
        generate_rfc6979_k(
            key.as_ptr(),
            STARK_CURVE_ORDER.as_ptr(),
            digest.as_ptr(),
            -1,
            out.as_mut_ptr(),
        )
    };
    assert_eq!(status, Status::InvalidParameter.code());
    // Output must be untouched on failure
    assert_eq!(out, [0u8; NONCE_SIZE]);
}

#[test]
fn degenerate_order_is_reported() {
    let key = [0x42u8; 32];
    let digest = [0x24u8; 32];
    let zero_order = [0u8; 32];
    let mut out = [0u8; NONCE_SIZE];

    let status = unsafe {
        generate_rfc6979_k(
            key.as_ptr(),
            zero_order.as_ptr(),
            digest.as_ptr(),
            0,
            out.as_mut_ptr(),
        )
    };
    assert_eq!(status, Status::InvalidParameter.code());
    assert_eq!(out, [0u8; NONCE_SIZE]);
}

#[test]
fn attempt_index_advances_the_candidate() {
    let key = [0x42u8; 32];
    let digest = [0x24u8; 32];

    let mut first = [0u8; NONCE_SIZE];
    let mut second = [0u8; NONCE_SIZE];
    unsafe {
        assert_eq!(
            generate_rfc6979_k(
                key.as_ptr(),
                STARK_CURVE_ORDER.as_ptr(),
                digest.as_ptr(),
                0,
                first.as_mut_ptr(),
            ),
            0
        );
        assert_eq!(
            generate_rfc6979_k(
                key.as_ptr(),
                STARK_CURVE_ORDER.as_ptr(),
                digest.as_ptr(),
                1,
                second.as_mut_ptr(),
            ),
            0
        );
    }
    assert_ne!(first, second);
}
