//! Passphrase-based symmetric authenticated encryption, built entirely on
//! KMACXOF256. Ref spec.md §4.7, "Symmetric authenticated encryption".

use constant_time_eq::constant_time_eq;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::sha3::aux_functions::{get_random_bytes, xor_bytes};
use crate::sha3::hashlib::kmac_xof;

const SECURITY_LEVEL: usize = 256;
const SALT_LEN: usize = 64;
const TAG_LEN: usize = 64;

/// `(z, c, t)`: a 64-byte salt, a ciphertext the same length as the
/// plaintext it was produced from, and a 64-byte authentication tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricCryptogram {
    pub z: Vec<u8>,
    pub c: Vec<u8>,
    pub t: Vec<u8>,
}

impl SymmetricCryptogram {
    /// The auxiliary-file encoding of this cryptogram: `z ++ t`, 128 bytes.
    /// The ciphertext `c` is exactly as long as the plaintext and, per
    /// spec.md §6, is meant to travel in a file of its own rather than be
    /// interleaved with the fixed-width fields.
    pub fn aux_to_bytes(&self) -> Vec<u8> {
        let mut out = self.z.clone();
        out.extend_from_slice(&self.t);
        out
    }

    /// Inverse of [`SymmetricCryptogram::aux_to_bytes`], reunited with the
    /// ciphertext it was split from.
    pub fn from_aux_bytes(aux: &[u8], c: Vec<u8>) -> Result<Self, CryptoError> {
        if aux.len() != SALT_LEN + TAG_LEN {
            return Err(CryptoError::BadLength {
                expected: SALT_LEN + TAG_LEN,
                actual: aux.len(),
            });
        }
        Ok(SymmetricCryptogram {
            z: aux[..SALT_LEN].to_vec(),
            c,
            t: aux[SALT_LEN..].to_vec(),
        })
    }
}

fn derive_ke_ka(z: &[u8], pw: &[u8]) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let mut z_pw = z.to_vec();
    z_pw.extend_from_slice(pw);
    let ke_ka = kmac_xof(SECURITY_LEVEL, &z_pw, b"", 128, b"S");
    let half = ke_ka.len() / 2;
    (
        Zeroizing::new(ke_ka[..half].to_vec()),
        Zeroizing::new(ke_ka[half..].to_vec()),
    )
}

/// Encrypts `message` under passphrase `pw`.
///
/// 1. `z <- 64 random bytes`
/// 2. `(ke || ka) <- KMACXOF256(z || pw, "", 128, "S")`, splitting the
///    128-byte output in half.
/// 3. `c <- m XOR KMACXOF256(ke, "", |m|, "SKE")`
/// 4. `t <- KMACXOF256(ka, m, 64, "SKA")`
pub fn encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    pw: &[u8],
    message: &[u8],
) -> SymmetricCryptogram {
    let z = get_random_bytes(rng, SALT_LEN);
    let (ke, ka) = derive_ke_ka(&z, pw);

    let mask = kmac_xof(SECURITY_LEVEL, &ke, b"", message.len(), b"SKE");
    let mut c = message.to_vec();
    xor_bytes(&mut c, &mask).expect("mask length matches message length by construction");

    let t = kmac_xof(SECURITY_LEVEL, &ka, message, TAG_LEN, b"SKA");

    SymmetricCryptogram { z, c, t }
}

/// Decrypts `cg` under passphrase `pw`. The recomputed tag is compared to
/// the stored one in constant time; on mismatch no plaintext is returned,
/// only [`CryptoError::AuthFail`].
pub fn decrypt(pw: &[u8], cg: &SymmetricCryptogram) -> Result<Vec<u8>, CryptoError> {
    let (ke, ka) = derive_ke_ka(&cg.z, pw);

    let mask = kmac_xof(SECURITY_LEVEL, &ke, b"", cg.c.len(), b"SKE");
    let mut m = cg.c.clone();
    xor_bytes(&mut m, &mask).expect("mask length matches ciphertext length by construction");

    let expected_t = kmac_xof(SECURITY_LEVEL, &ka, &m, TAG_LEN, b"SKA");
    if constant_time_eq(&expected_t, &cg.t) {
        Ok(m)
    } else {
        Err(CryptoError::AuthFail)
    }
}
