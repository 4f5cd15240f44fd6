//! Key-pair derivation from a passphrase. Ref spec.md §4.7,
//! "Key-pair derivation from passphrase".

use num::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::curve::{to_signed_bytes, E521Point};
use crate::sha3::aux_functions::{bytes_to_big, get_date_and_time_as_string, get_random_bytes};
use crate::sha3::hashlib::kmac_xof;

const SECURITY_LEVEL: usize = 256;

/// A Schnorr/ECDHIES key pair derived from a passphrase.
///
/// `private_scalar` holds `s`'s natural signed big-endian encoding and is
/// zeroized on drop; `public_point` is `s*G` and safe to publish.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub owner: String,
    pub private_scalar: Vec<u8>,
    pub public_point: E521Point,
    pub date_created: String,
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private_scalar.zeroize();
    }
}

impl KeyPair {
    /// `s <- 4 * int(KMACXOF256(pw, "", 64, "K"))`, `V <- s*G`.
    ///
    /// If `pw` is empty, 64 bytes are drawn from `rng` and used in its
    /// place, so a caller can generate a key pair with no memorable
    /// passphrase at all.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, pw: &[u8], owner: String) -> KeyPair {
        let drawn;
        let pw = if pw.is_empty() {
            drawn = get_random_bytes(rng, 64);
            &drawn[..]
        } else {
            pw
        };

        let s_hash = kmac_xof(SECURITY_LEVEL, pw, b"", 64, b"K");
        let s = bytes_to_big(&s_hash) * BigUint::from(4u32);
        let public_point = E521Point::generator().scalar_mul(&s);

        KeyPair {
            owner,
            private_scalar: to_signed_bytes(&s),
            public_point,
            date_created: get_date_and_time_as_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(1)
    }

    #[test]
    fn same_passphrase_derives_same_public_point() {
        let a = KeyPair::generate(&mut rng(), b"pw", "a".into());
        let b = KeyPair::generate(&mut rng(), b"pw", "b".into());
        assert_eq!(a.public_point, b.public_point);
    }

    #[test]
    fn different_passphrases_derive_different_public_points() {
        let a = KeyPair::generate(&mut rng(), b"pw1", "a".into());
        let b = KeyPair::generate(&mut rng(), b"pw2", "a".into());
        assert_ne!(a.public_point, b.public_point);
    }

    #[test]
    fn empty_passphrase_draws_from_rng_and_still_derives_a_valid_point() {
        let kp = KeyPair::generate(&mut rng(), b"", "anon".into());
        assert_eq!(
            kp.public_point,
            E521Point::generator().scalar_mul(&bytes_to_big(&kp.private_scalar))
        );
    }
}
