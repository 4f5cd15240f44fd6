//! SHA3-{224,256,384,512}, SHAKE{128,256}, cSHAKE{128,256}, and
//! KMACXOF{128,256}, per FIPS 202 and NIST SP 800-185. Every function here
//! is pure and returns exactly the requested number of output bytes.

use crate::sha3::nist_800_185::{bytepad, encode_string, right_encode};
use crate::sha3::sponge::Sponge;

const SHA3_SUFFIX: u8 = 0x06;
const SHAKE_SUFFIX: u8 = 0x1F;
const CSHAKE_SUFFIX: u8 = 0x04;

fn rate_bytes_for_capacity_bits(capacity_bits: usize) -> usize {
    (1600 - capacity_bits) / 8
}

/// SHA3-d(m) for d in {224, 256, 384, 512}: sponge with b=1600, c=2d,
/// suffix 0x06, truncated to d/8 bytes.
pub fn sha3(d: usize, message: &[u8]) -> Vec<u8> {
    assert!(
        matches!(d, 224 | 256 | 384 | 512),
        "SHA3 digest length must be 224, 256, 384, or 512 bits"
    );
    let mut sponge = Sponge::new(rate_bytes_for_capacity_bits(2 * d));
    sponge.absorb_all(message, SHA3_SUFFIX).expect("suffix is non-zero");
    sponge.squeeze(d / 8)
}

/// SHAKE-k(m, L) for k in {128, 256}: capacity 2k, suffix 0x1F.
pub fn shake(k: usize, message: &[u8], out_len_bytes: usize) -> Vec<u8> {
    assert!(matches!(k, 128 | 256), "SHAKE security level must be 128 or 256");
    let mut sponge = Sponge::new(rate_bytes_for_capacity_bits(2 * k));
    sponge.absorb_all(message, SHAKE_SUFFIX).expect("suffix is non-zero");
    sponge.squeeze(out_len_bytes)
}

/// cSHAKE-k(m, L, N, S): falls back to SHAKE-k when both `n` and `s` are
/// empty; otherwise capacity 2k, suffix 0x04, and the absorbed input is
/// `bytepad(encode_string(N) ++ encode_string(S), rate_bytes) ++ m`.
pub fn cshake(k: usize, message: &[u8], out_len_bytes: usize, n: &[u8], s: &[u8]) -> Vec<u8> {
    if n.is_empty() && s.is_empty() {
        return shake(k, message, out_len_bytes);
    }
    assert!(matches!(k, 128 | 256), "cSHAKE security level must be 128 or 256");
    let rate = rate_bytes_for_capacity_bits(2 * k);

    let mut prefix = encode_string(n);
    prefix.extend(encode_string(s));
    let mut absorbed = bytepad(&prefix, rate);
    absorbed.extend_from_slice(message);

    let mut sponge = Sponge::new(rate);
    sponge
        .absorb_all(&absorbed, CSHAKE_SUFFIX)
        .expect("suffix is non-zero");
    sponge.squeeze(out_len_bytes)
}

/// KMACXOF-k(K, m, L, S): `cSHAKE-k(newX, L, "KMAC", S)` where
/// `newX = bytepad(encode_string(K), rate_bytes) ++ m ++ right_encode(0)`.
/// The trailing `right_encode(0)` distinguishes XOF output from
/// fixed-length KMAC.
pub fn kmac_xof(k: usize, key: &[u8], message: &[u8], out_len_bytes: usize, s: &[u8]) -> Vec<u8> {
    let rate = rate_bytes_for_capacity_bits(2 * k);
    let mut new_x = bytepad(&encode_string(key), rate);
    new_x.extend_from_slice(message);
    new_x.extend(right_encode(0));
    cshake(k, &new_x, out_len_bytes, b"KMAC", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    #[test]
    fn sha3_256_of_empty_string() {
        let digest = sha3(256, b"");
        assert_eq!(
            hex(&digest),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn shake128_of_empty_string() {
        let digest = shake(128, b"", 32);
        assert_eq!(
            hex(&digest),
            "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"
        );
    }

    #[test]
    fn cshake_with_no_customization_matches_shake() {
        let a = cshake(256, b"hello", 64, b"", b"");
        let b = shake(256, b"hello", 64);
        assert_eq!(a, b);
    }

    #[test]
    fn kmac_xof_is_deterministic_and_length_correct() {
        let a = kmac_xof(256, b"", b"", 64, b"");
        let b = kmac_xof(256, b"", b"", 64, b"");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn kmac_xof_differs_by_customization_string() {
        let a = kmac_xof(256, b"key", b"msg", 32, b"A");
        let b = kmac_xof(256, b"key", b"msg", 32, b"B");
        assert_ne!(a, b);
    }

    #[test]
    fn kmac_xof_differs_by_key() {
        let a = kmac_xof(256, b"key1", b"msg", 32, b"S");
        let b = kmac_xof(256, b"key2", b"msg", 32, b"S");
        assert_ne!(a, b);
    }
}
