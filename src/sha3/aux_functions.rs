//! Byte-level helpers shared across the hashing, curve, and scheme layers.

use crate::error::CryptoError;
use num::BigUint;
use rand::{CryptoRng, RngCore};

/// Draws `n` cryptographically random bytes from the caller-supplied RNG.
///
/// The core never reaches for `rand::thread_rng()` itself; callers
/// construct one RNG and thread it through.
pub fn get_random_bytes<R: RngCore + CryptoRng>(rng: &mut R, n: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; n];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// XORs `b` into `a` in place. Fails with [`CryptoError::LengthMismatch`] if
/// the two buffers differ in length, rather than panicking on
/// attacker-influenced lengths (e.g. a truncated ciphertext).
pub fn xor_bytes(a: &mut [u8], b: &[u8]) -> Result<(), CryptoError> {
    if a.len() != b.len() {
        return Err(CryptoError::LengthMismatch {
            a: a.len(),
            b: b.len(),
        });
    }
    a.iter_mut().zip(b.iter()).for_each(|(x, y)| *x ^= y);
    Ok(())
}

/// Interprets a big-endian byte string as a nonnegative integer.
pub fn bytes_to_big(input: &[u8]) -> BigUint {
    BigUint::from_bytes_be(input)
}

/// Encodes a nonnegative integer as a big-endian byte string of exactly
/// `len` bytes, left-padding with zeros. Panics if the value does not fit,
/// which would indicate an internal invariant violation (e.g. a modular
/// reduction that didn't happen) rather than attacker-controlled input.
pub fn big_to_bytes(value: &BigUint, len: usize) -> Vec<u8> {
    let raw = value.to_bytes_be();
    assert!(raw.len() <= len, "value does not fit in {len} bytes");
    let mut out = vec![0u8; len - raw.len()];
    out.extend_from_slice(&raw);
    out
}

/// Timestamp string for key-pair metadata.
pub fn get_date_and_time_as_string() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn xor_bytes_rejects_length_mismatch() {
        let mut a = vec![1, 2, 3];
        let b = vec![1, 2];
        assert_eq!(
            xor_bytes(&mut a, &b),
            Err(CryptoError::LengthMismatch { a: 3, b: 2 })
        );
    }

    #[test]
    fn xor_bytes_is_involution() {
        let original = vec![0xDEu8, 0xAD, 0xBE, 0xEF];
        let mask = vec![0x11u8, 0x22, 0x33, 0x44];
        let mut buf = original.clone();
        xor_bytes(&mut buf, &mask).unwrap();
        xor_bytes(&mut buf, &mask).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn big_roundtrip() {
        let bytes = [0xDEu8, 0xAD, 0xBE, 0xEF];
        let n = bytes_to_big(&bytes);
        assert_eq!(big_to_bytes(&n, 4), bytes);
        assert_eq!(big_to_bytes(&n, 8), vec![0, 0, 0, 0, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn random_bytes_use_injected_rng() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let a = get_random_bytes(&mut rng, 16);
        let mut rng2 = ChaCha20Rng::seed_from_u64(42);
        let b = get_random_bytes(&mut rng2, 16);
        assert_eq!(a, b);
    }
}
