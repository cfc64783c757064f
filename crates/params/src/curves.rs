//! Curve subgroup orders and scalar sizes

/// Size of a curve scalar in bytes (32 bytes = 256 bits)
///
/// Every scalar-sized input and output of the nonce generator is exactly
/// this wide, big-endian, unsigned.
pub const CURVE_SCALAR_SIZE: usize = 32;

/// Subgroup order of the STARK curve
///
/// n = 0x0800000000000010FFFFFFFFFFFFFFFFB781126DCAE7B2321E66A241ADC64D2F
///
/// The order is 252 bits, four bits short of the scalar width. Candidate
/// nonces drawn for this curve are right-shifted accordingly before the
/// range check.
pub const STARK_CURVE_ORDER: [u8; CURVE_SCALAR_SIZE] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xB7, 0x81, 0x12, 0x6D, 0xCA, 0xE7, 0xB2, 0x32, 0x1E, 0x66, 0xA2, 0x41, 0xAD, 0xC6,
    0x4D, 0x2F,
];

/// Subgroup order of the secp256k1 curve
///
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
pub const SECP256K1_ORDER: [u8; CURVE_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// Subgroup order of the NIST P-256 curve (secp256r1)
///
/// n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
pub const NIST_P256_ORDER: [u8; CURVE_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
    0x25, 0x51,
];
