//! ECDHIES-style elliptic authenticated encryption over E-521. Ref spec.md
//! §4.7, "Elliptic (ECDHIES-style) authenticated encryption".

use constant_time_eq::constant_time_eq;
use num::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::curve::{p, to_signed_bytes, E521Point, POINT_BYTE_LEN};
use crate::error::CryptoError;
use crate::sha3::aux_functions::{bytes_to_big, get_random_bytes, xor_bytes};
use crate::sha3::hashlib::kmac_xof;

const SECURITY_LEVEL: usize = 256;
const TAG_LEN: usize = 64;

/// `(Z, c, t)`: an ephemeral curve point, a ciphertext the same length as
/// the plaintext, and a 64-byte authentication tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllipticCryptogram {
    pub z: E521Point,
    pub c: Vec<u8>,
    pub t: Vec<u8>,
}

impl EllipticCryptogram {
    /// The auxiliary-file encoding of this cryptogram: `Z.to_bytes() ++ t`.
    /// As with [`crate::schemes::symmetric::SymmetricCryptogram`], the
    /// ciphertext `c` is meant to travel separately (spec.md §6).
    pub fn aux_to_bytes(&self) -> Vec<u8> {
        let mut out = self.z.to_bytes();
        out.extend_from_slice(&self.t);
        out
    }

    /// Inverse of [`EllipticCryptogram::aux_to_bytes`], reunited with the
    /// ciphertext it was split from. `t` is whatever remains after the
    /// leading point, and must be at least [`TAG_LEN`] bytes.
    pub fn from_aux_bytes(aux: &[u8], c: Vec<u8>) -> Result<Self, CryptoError> {
        if aux.len() < POINT_BYTE_LEN + TAG_LEN {
            return Err(CryptoError::BadLength {
                expected: POINT_BYTE_LEN + TAG_LEN,
                actual: aux.len(),
            });
        }
        let z = E521Point::from_bytes(&aux[..POINT_BYTE_LEN])?;
        let t = aux[POINT_BYTE_LEN..].to_vec();
        Ok(EllipticCryptogram { z, c, t })
    }
}

fn derive_ke_ka(w: &E521Point) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let wx_bytes = to_signed_bytes(&w.x);
    let ke_ka = kmac_xof(SECURITY_LEVEL, &wx_bytes, b"", 128, b"P");
    let half = ke_ka.len() / 2;
    (
        Zeroizing::new(ke_ka[..half].to_vec()),
        Zeroizing::new(ke_ka[half..].to_vec()),
    )
}

/// Encrypts `message` under the recipient's public point `pub_key`.
///
/// 1. draw 64 random bytes, interpret as nonnegative `k0`, `k <- (4*k0) mod p`
/// 2. `W <- k*pub_key`, `Z <- k*G`
/// 3. `(ke || ka) <- KMACXOF256(Wx, "", 128, "P")`, splitting the
///    128-byte output in half.
/// 4. `c <- m XOR KMACXOF256(ke, "", |m|, "PKE")`
/// 5. `t <- KMACXOF256(ka, m, 64, "PKA")`
pub fn encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    pub_key: &E521Point,
    message: &[u8],
) -> EllipticCryptogram {
    let k_raw = bytes_to_big(&get_random_bytes(rng, 64));
    let k = (&k_raw * BigUint::from(4u32)) % p();

    let w = pub_key.scalar_mul(&k);
    let z = E521Point::generator().scalar_mul(&k);

    let (ke, ka) = derive_ke_ka(&w);

    let mask = kmac_xof(SECURITY_LEVEL, &ke, b"", message.len(), b"PKE");
    let mut c = message.to_vec();
    xor_bytes(&mut c, &mask).expect("mask length matches message length by construction");

    let t = kmac_xof(SECURITY_LEVEL, &ka, message, TAG_LEN, b"PKA");

    EllipticCryptogram { z, c, t }
}

/// Decrypts `cg` under passphrase `pw`.
///
/// `s <- 4 * int(KMACXOF256(pw, "", 64, "K"))`, `W <- s*Z`. Per spec.md §9's
/// preserved "likely defect": unlike `k` during encryption, `s` here is
/// *not* reduced modulo `p` before the scalar multiplication. This mirrors
/// the source exactly; it is flagged, not fixed. [`E521Point::scalar_mul`]
/// is correct for any nonnegative exponent regardless, so the only visible
/// effect is that `s` is a much larger integer than it needs to be.
pub fn decrypt(pw: &[u8], cg: &EllipticCryptogram) -> Result<Vec<u8>, CryptoError> {
    let s_hash = kmac_xof(SECURITY_LEVEL, pw, b"", 64, b"K");
    let s = bytes_to_big(&s_hash) * BigUint::from(4u32);

    let w = cg.z.scalar_mul(&s);
    let (ke, ka) = derive_ke_ka(&w);

    let mask = kmac_xof(SECURITY_LEVEL, &ke, b"", cg.c.len(), b"PKE");
    let mut m = cg.c.clone();
    xor_bytes(&mut m, &mask).expect("mask length matches ciphertext length by construction");

    let expected_t = kmac_xof(SECURITY_LEVEL, &ka, &m, TAG_LEN, b"PKA");
    if constant_time_eq(&expected_t, &cg.t) {
        Ok(m)
    } else {
        Err(CryptoError::AuthFail)
    }
}
