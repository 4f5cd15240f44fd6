//! Schnorr signatures over E-521. Ref spec.md §4.7, "Schnorr signature".

use num::BigUint;
use zeroize::Zeroizing;

use crate::curve::{
    from_signed_bytes_fixed, r, to_signed_bytes_fixed, E521Point, FIELD_BYTE_LEN,
};
use crate::error::CryptoError;
use crate::sha3::aux_functions::{big_to_bytes, bytes_to_big};
use crate::sha3::hashlib::kmac_xof;

const SECURITY_LEVEL: usize = 256;

/// Byte width `h` is stored in: the raw 64-byte KMACXOF256 output it is
/// derived from, read as an unsigned integer. `z` is stored in
/// [`FIELD_BYTE_LEN`] bytes, the same fixed-width signed convention
/// [`E521Point::to_bytes`] uses for coordinates, since `z < r < p` always
/// fits. This resolves the ambiguity in a challenge-response pair whose
/// components come from two different domains (a raw hash digest and a
/// field-sized scalar) without relying on an encoding that can vary in
/// width from one signature to the next.
const H_BYTE_LEN: usize = 64;

/// `(h, z)`: a Schnorr challenge and response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub h: BigUint,
    pub z: BigUint,
}

impl Signature {
    /// Signs `message` under passphrase `pw`.
    ///
    /// 1. `s <- 4 * int(KMACXOF256(pw, "", 64, "K"))`
    /// 2. `k <- 4 * int(KMACXOF256(s_bytes, m, 64, "N"))`
    /// 3. `U <- k*G`
    /// 4. `h <- int(KMACXOF256(Ux_bytes, m, 64, "T"))`
    /// 5. `z <- (k - h*s) mod r`
    pub fn sign(message: &[u8], pw: &[u8]) -> Signature {
        let r = r();

        let s_hash = Zeroizing::new(kmac_xof(SECURITY_LEVEL, pw, b"", 64, b"K"));
        let s = bytes_to_big(&s_hash) * BigUint::from(4u32);
        let s_bytes = Zeroizing::new(crate::curve::to_signed_bytes(&s));

        let k_hash = Zeroizing::new(kmac_xof(SECURITY_LEVEL, &s_bytes, message, 64, b"N"));
        let k = bytes_to_big(&k_hash) * BigUint::from(4u32);

        let u = E521Point::generator().scalar_mul(&k);
        let ux_bytes = crate::curve::to_signed_bytes(&u.x);

        let h = bytes_to_big(&kmac_xof(SECURITY_LEVEL, &ux_bytes, message, 64, b"T"));

        let hs = (&h * &s) % r;
        let k_mod_r = &k % r;
        let z = (k_mod_r + r - hs) % r;

        Signature { h, z }
    }

    /// Verifies `self` over `message` under public point `pub_key`.
    ///
    /// `U <- z*G + h*pub_key`; accept iff the recomputed challenge matches
    /// `h`. Per spec.md §9: `h` is compared directly, without first
    /// reducing it modulo `r` the way `z` is. That asymmetry is preserved
    /// here exactly as described rather than silently fixed.
    pub fn verify(&self, message: &[u8], pub_key: &E521Point) -> bool {
        let u = E521Point::generator()
            .scalar_mul(&self.z)
            .add(&pub_key.scalar_mul(&self.h));
        let ux_bytes = crate::curve::to_signed_bytes(&u.x);
        let h_prime = bytes_to_big(&kmac_xof(SECURITY_LEVEL, &ux_bytes, message, 64, b"T"));
        h_prime == self.h
    }

    /// `h`'s 64-byte unsigned encoding followed by `z`'s [`FIELD_BYTE_LEN`]-byte
    /// fixed-width signed encoding. Always exactly
    /// `H_BYTE_LEN + FIELD_BYTE_LEN` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = big_to_bytes(&self.h, H_BYTE_LEN);
        out.extend(to_signed_bytes_fixed(&self.z, FIELD_BYTE_LEN));
        out
    }

    /// Inverse of [`Signature::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Signature, CryptoError> {
        let expected = H_BYTE_LEN + FIELD_BYTE_LEN;
        if bytes.len() != expected {
            return Err(CryptoError::BadLength {
                expected,
                actual: bytes.len(),
            });
        }
        let h = bytes_to_big(&bytes[..H_BYTE_LEN]);
        let z = from_signed_bytes_fixed(&bytes[H_BYTE_LEN..])?;
        Ok(Signature { h, z })
    }
}
