//! Fixed-width big-endian scalar codec and byte-level helpers
//!
//! Scalars cross the bridge as exactly [`SCALAR_SIZE`] big-endian unsigned
//! bytes; any other width is a caller contract violation and is rejected,
//! never padded or truncated. The helpers below are the byte-level
//! arithmetic the selection loop needs: bit-length of the public order,
//! the `bits2int` right shift, minimal big-endian seed encoding, and
//! constant-time range predicates for secret candidates.

use subtle::{Choice, ConstantTimeEq};

use crate::error::{validate, Result};

/// Fixed width of every scalar buffer, in bytes
pub const SCALAR_SIZE: usize = starknonce_params::curves::CURVE_SCALAR_SIZE;

/// Decode a big-endian scalar buffer of exactly [`SCALAR_SIZE`] bytes
pub fn decode(bytes: &[u8]) -> Result<[u8; SCALAR_SIZE]> {
    validate::length("scalar decode", bytes.len(), SCALAR_SIZE)?;

    let mut out = [0u8; SCALAR_SIZE];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Encode a scalar into a caller-supplied buffer of exactly [`SCALAR_SIZE`] bytes
pub fn encode(scalar: &[u8; SCALAR_SIZE], out: &mut [u8]) -> Result<()> {
    validate::length("scalar encode", out.len(), SCALAR_SIZE)?;

    out.copy_from_slice(scalar);
    Ok(())
}

/// Bit length of a big-endian unsigned value (zero for the zero value)
///
/// The operand is the public subgroup order, so this runs in variable
/// time.
pub fn bit_len(bytes: &[u8]) -> usize {
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != 0 {
            return (bytes.len() - i - 1) * 8 + (8 - byte.leading_zeros() as usize);
        }
    }
    0
}

/// In-place logical right shift of a big-endian value
///
/// This is the `bits2int` truncation of RFC 6979 §2.3.2: a full-width
/// DRBG draw keeps only its leftmost `qlen` bits. The shift amount is
/// derived from the public order, so variable time is acceptable here.
pub fn shift_right(value: &mut [u8; SCALAR_SIZE], shift: usize) {
    if shift == 0 {
        return;
    }
    if shift >= SCALAR_SIZE * 8 {
        value.fill(0);
        return;
    }

    let byte_shift = shift / 8;
    let bit_shift = shift % 8;

    for i in (0..SCALAR_SIZE).rev() {
        let hi = if i >= byte_shift {
            value[i - byte_shift]
        } else {
            0
        };
        let lo = if i >= byte_shift + 1 {
            value[i - byte_shift - 1]
        } else {
            0
        };
        value[i] = if bit_shift == 0 {
            hi
        } else {
            (hi >> bit_shift) | (lo << (8 - bit_shift))
        };
    }
}

/// Minimal big-endian encoding: the input without its leading zero bytes
///
/// An all-zero input encodes as the empty slice. This is how the seeded
/// variant folds its extra entropy into the DRBG derivation.
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Constant-time check that a big-endian value is zero
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let mut acc = 0u8;
    for &byte in bytes {
        acc |= byte;
    }
    acc.ct_eq(&0)
}

/// Constant-time big-endian comparison: 1 if `a < b`, 0 otherwise
///
/// Both operands must have the same length. Implemented as a borrow
/// chain over `a - b`; the final borrow is the verdict.
pub fn ct_lt(a: &[u8], b: &[u8]) -> Choice {
    debug_assert_eq!(a.len(), b.len());

    let mut borrow = 0u16;
    for (&x, &y) in a.iter().zip(b.iter()).rev() {
        let diff = (x as u16).wrapping_sub((y as u16) + borrow);
        borrow = (diff >> 8) & 1;
    }
    Choice::from(borrow as u8)
}
