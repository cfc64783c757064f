//! HMAC-DRBG bit stream keyed from the signing inputs
//!
//! The deterministic bit generator of RFC 6979 §3.2 (the HMAC_DRBG shape
//! of NIST SP 800-90A), instantiated over HMAC-SHA-256 from the vetted
//! RustCrypto crates. State is derived solely from
//! `(private key, message digest, extra entropy)` — never from a system
//! random source — so the stream is fully reproducible for the same
//! signing inputs while remaining unpredictable to anyone without the
//! private key.
//!
//! State lives for one nonce derivation only and is zeroized on drop.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroize;

/// Width of one DRBG output block in bytes (the SHA-256 output size)
pub const OUTPUT_SIZE: usize = 32;

type HmacSha256 = Hmac<Sha256>;

const KEY_EXPECT: &str = "HMAC-SHA-256 accepts any key length";

/// Keyed deterministic bit generator
///
/// `K` is held inside the running HMAC instance; `V` is the chaining
/// value (RFC 6979 §3.2.c).
pub struct HmacDrbg {
    k: HmacSha256,
    v: [u8; OUTPUT_SIZE],
}

impl HmacDrbg {
    /// Derive fresh DRBG state from the signing inputs
    ///
    /// Performs the two derivation passes of RFC 6979 §3.2.d–g, folding
    /// the domain byte `0x00` then `0x01` together with
    /// `entropy ‖ nonce ‖ additional`. For nonce generation `entropy` is
    /// the private key, `nonce` the message digest, and `additional` the
    /// optional extra seed (empty when absent).
    pub fn new(entropy: &[u8], nonce: &[u8], additional: &[u8]) -> Self {
        let mut k = HmacSha256::new_from_slice(&[0u8; OUTPUT_SIZE]).expect(KEY_EXPECT);
        let mut v = [0x01u8; OUTPUT_SIZE];

        for domain in 0u8..=1 {
            k.update(&v);
            k.update(&[domain]);
            k.update(entropy);
            k.update(nonce);
            k.update(additional);
            k = HmacSha256::new_from_slice(k.finalize().into_bytes().as_slice())
                .expect(KEY_EXPECT);

            k.update(&v);
            v.copy_from_slice(k.finalize_reset().into_bytes().as_slice());
        }

        Self { k, v }
    }

    /// Produce the next output block and advance the stream
    ///
    /// Emits `V = HMAC(K, V)`, then performs the update round
    /// `K = HMAC(K, V ‖ 0x00)`, `V = HMAC(K, V)` so the following call
    /// yields the next distinct deterministic block. Rejected candidates
    /// and accepted ones advance the stream identically.
    pub fn fill_bytes(&mut self, out: &mut [u8; OUTPUT_SIZE]) {
        self.k.update(&self.v);
        self.v
            .copy_from_slice(self.k.finalize_reset().into_bytes().as_slice());
        out.copy_from_slice(&self.v);

        self.k.update(&self.v);
        self.k.update(&[0x00]);
        self.k = HmacSha256::new_from_slice(self.k.finalize_reset().into_bytes().as_slice())
            .expect(KEY_EXPECT);

        self.k.update(&self.v);
        self.v
            .copy_from_slice(self.k.finalize_reset().into_bytes().as_slice());
    }
}

impl Drop for HmacDrbg {
    fn drop(&mut self) {
        // Best-effort: V is ours to scrub. K lives inside the HMAC
        // instance, whose internal key schedule the hmac crate does not
        // zeroize on drop.
        self.v.zeroize();
    }
}
