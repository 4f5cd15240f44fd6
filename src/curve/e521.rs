//! E-521: the Edwards curve `x^2 + y^2 = 1 + d*x^2*y^2` over `GF(2^521 - 1)`,
//! `d = -376014`, cofactor 4.
//!
//! This one module owns both the `E521Point` value type and the curve
//! constants (`p`, `d`, `r`), and exposes only pure functions. There is no
//! inheritance or dynamic dispatch; `E521Point` values are immutable.

use crate::error::CryptoError;
use num::bigint::Sign;
use num::{BigInt, BigUint, One, Zero};
use once_cell::sync::Lazy;

/// Byte length of each coordinate's fixed-width signed encoding: 521 bits
/// needs 66 bytes to carry a sign bit of zero.
pub const FIELD_BYTE_LEN: usize = 66;

/// Total length of an encoded point: `2 * FIELD_BYTE_LEN` = 132 bytes.
pub const POINT_BYTE_LEN: usize = 2 * FIELD_BYTE_LEN;

/// `p = 2^521 - 1`, a Mersenne prime.
pub fn p() -> &'static BigUint {
    static P: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 521) - BigUint::one());
    &P
}

/// `d = -376014 mod p`.
pub fn d() -> &'static BigUint {
    static D: Lazy<BigUint> = Lazy::new(|| p() - BigUint::from(376014u32));
    &D
}

/// `r = 2^519 - R'`, the prime order of the curve's large subgroup (the
/// curve itself has `4r` points).
pub fn r() -> &'static BigUint {
    static R: Lazy<BigUint> = Lazy::new(|| {
        let r_prime: BigUint =
            "337554763258501705789107630418782636071904961214051226618635150085779108655765"
                .parse()
                .expect("R' constant parses");
        (BigUint::one() << 519) - r_prime
    });
    &R
}

fn add_mod(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % p()
}

fn sub_mod(a: &BigUint, b: &BigUint) -> BigUint {
    let p = p();
    if a >= b {
        (a - b) % p
    } else {
        p - ((b - a) % p)
    }
}

fn mul_mod(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % p()
}

/// `p` is prime (a Mersenne prime), so `a^-1 mod p = a^(p-2) mod p` by
/// Fermat's little theorem.
fn modinv(a: &BigUint) -> BigUint {
    let p = p();
    a.modpow(&(p - BigUint::from(2u32)), p)
}

/// `sqrt_mod_p(v, p, lsb)`, valid for `p ≡ 3 (mod 4)` (true for E-521's
/// `p`): `r = v^((p+1)/4) mod p`, flipped to `p - r` if its low bit doesn't
/// match `lsb`, then verified by squaring. Returns `None` if no square root
/// exists.
fn sqrt_mod_p3mod4(v: &BigUint, lsb: bool) -> Option<BigUint> {
    let p = p();
    let exponent = (p + BigUint::one()) / BigUint::from(4u32);
    let mut root = v.modpow(&exponent, p);
    if root.bit(0) != lsb {
        root = p - &root;
    }
    if mul_mod(&root, &root) == *v % p {
        Some(root)
    } else {
        None
    }
}

/// A point on E-521, `(x, y) in GF(p)^2` satisfying the curve equation.
///
/// Every value of this type is on the curve: the only ways to construct
/// one are [`E521Point::identity`] (a
/// short-circuited special case), [`E521Point::new`] and
/// [`E521Point::decompress`]/[`E521Point::from_bytes`] (which validate),
/// and [`E521Point::add`]/[`E521Point::double`]/[`E521Point::negate`]/
/// [`E521Point::scalar_mul`] (which are closed operations on already-valid
/// points).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct E521Point {
    pub x: BigUint,
    pub y: BigUint,
}

impl E521Point {
    /// The neutral element `O = (0, 1)`.
    pub fn identity() -> Self {
        E521Point {
            x: BigUint::zero(),
            y: BigUint::one(),
        }
    }

    /// Builds a point from raw coordinates, rejecting anything off-curve
    /// with [`CryptoError::NotOnCurve`]. The identity is accepted by a
    /// short-circuit.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self, CryptoError> {
        let x = x % p();
        let y = y % p();
        if x.is_zero() && y.is_one() {
            return Ok(E521Point { x, y });
        }
        let point = E521Point { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CryptoError::NotOnCurve)
        }
    }

    fn is_on_curve(&self) -> bool {
        let x2 = mul_mod(&self.x, &self.x);
        let y2 = mul_mod(&self.y, &self.y);
        let lhs = add_mod(&x2, &y2);
        let rhs = add_mod(&BigUint::one(), &mul_mod(&mul_mod(d(), &x2), &y2));
        lhs == rhs
    }

    /// Decompresses an x-coordinate into a full point: computes
    /// `y^2 = (1 - x^2) / (1 - d*x^2) mod p`, then recovers `y` via
    /// [`sqrt_mod_p3mod4`] with the requested low-bit parity. Fails with
    /// [`CryptoError::NoSuchPoint`] if no square root exists.
    pub fn decompress(x: &BigUint, lsb_parity: bool) -> Result<Self, CryptoError> {
        let x = x % p();
        let x2 = mul_mod(&x, &x);
        let numerator = sub_mod(&BigUint::one(), &x2);
        let denominator = sub_mod(&BigUint::one(), &mul_mod(d(), &x2));
        let y2 = mul_mod(&numerator, &modinv(&denominator));
        let y = sqrt_mod_p3mod4(&y2, lsb_parity).ok_or(CryptoError::NoSuchPoint)?;
        E521Point::new(x, y)
    }

    /// The generator `G`: x-coordinate 4, even y. Computed by decompression
    /// rather than hardcoded, so it is visibly a point satisfying the curve
    /// equation rather than an unverifiable literal (see SPEC_FULL.md §4).
    pub fn generator() -> &'static E521Point {
        static G: Lazy<E521Point> = Lazy::new(|| {
            E521Point::decompress(&BigUint::from(4u32), false).expect("E-521 generator exists")
        });
        &G
    }

    /// Complete Edwards addition:
    /// `x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)`,
    /// `y3 = (y1*y2 - x1*x2) / (1 - d*x1*x2*y1*y2)`.
    pub fn add(&self, other: &E521Point) -> E521Point {
        let (x1, y1) = (&self.x, &self.y);
        let (x2, y2) = (&other.x, &other.y);

        let x1y2 = mul_mod(x1, y2);
        let y1x2 = mul_mod(y1, x2);
        let x1x2 = mul_mod(x1, x2);
        let y1y2 = mul_mod(y1, y2);
        let d_prod = mul_mod(d(), &mul_mod(&x1x2, &y1y2));

        let x3_num = add_mod(&x1y2, &y1x2);
        let x3_den = modinv(&add_mod(&BigUint::one(), &d_prod));
        let y3_num = sub_mod(&y1y2, &x1x2);
        let y3_den = modinv(&sub_mod(&BigUint::one(), &d_prod));

        E521Point {
            x: mul_mod(&x3_num, &x3_den),
            y: mul_mod(&y3_num, &y3_den),
        }
    }

    /// `double(P) = add(P, P)`.
    pub fn double(&self) -> E521Point {
        self.add(self)
    }

    /// `negate((x, y)) = (-x mod p, y)`.
    pub fn negate(&self) -> E521Point {
        E521Point {
            x: sub_mod(&BigUint::zero(), &self.x),
            y: self.y.clone(),
        }
    }

    /// Double-and-add, most-significant-bit-first, starting from `O`.
    /// `k = 0` returns `O`.
    pub fn scalar_mul(&self, k: &BigUint) -> E521Point {
        let mut result = E521Point::identity();
        let bits = k.bits();
        for i in (0..bits).rev() {
            result = result.double();
            if k.bit(i) {
                result = result.add(self);
            }
        }
        result
    }

    /// Serializes as `pad(x) ++ pad(y)`, each coordinate the platform's
    /// signed big-endian encoding, left-padded to [`FIELD_BYTE_LEN`] bytes
    /// with the appropriate sign-extension byte. Total length is always
    /// [`POINT_BYTE_LEN`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = pad_signed_be(&self.x.clone().into(), FIELD_BYTE_LEN);
        out.extend(pad_signed_be(&self.y.clone().into(), FIELD_BYTE_LEN));
        out
    }

    /// Parses the two [`FIELD_BYTE_LEN`]-byte halves as signed big-endian
    /// integers and invokes [`E521Point::new`]. Fails with
    /// [`CryptoError::BadLength`] if the input isn't exactly
    /// [`POINT_BYTE_LEN`] bytes, or if either half decodes negative (a
    /// valid field element is always nonnegative).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != POINT_BYTE_LEN {
            return Err(CryptoError::BadLength {
                expected: POINT_BYTE_LEN,
                actual: bytes.len(),
            });
        }
        let x = unpad_signed_be(&bytes[..FIELD_BYTE_LEN])?;
        let y = unpad_signed_be(&bytes[FIELD_BYTE_LEN..])?;
        E521Point::new(x, y)
    }
}

/// Encodes `value` (assumed nonnegative) as a signed big-endian integer,
/// left-padded with sign-extension bytes to exactly `len` bytes.
pub(crate) fn pad_signed_be(value: &BigInt, len: usize) -> Vec<u8> {
    let bytes = value.to_signed_bytes_be();
    assert!(bytes.len() <= len, "value does not fit in {len} bytes");
    let sign_byte = if value.sign() == Sign::Minus { 0xFFu8 } else { 0x00u8 };
    let mut out = vec![sign_byte; len - bytes.len()];
    out.extend(bytes);
    out
}

/// Encodes a nonnegative integer using the platform's natural (unpadded)
/// signed big-endian convention, per spec.md §9's note that coordinates
/// and signature components rely on that convention rather than a
/// fixed-width one.
pub fn to_signed_bytes(value: &BigUint) -> Vec<u8> {
    BigInt::from(value.clone()).to_signed_bytes_be()
}

/// Inverse of [`to_signed_bytes`] for values this crate itself produced.
/// Panics if the bytes decode negative, which would mean the caller passed
/// something that was never one of our own nonnegative encodings.
pub fn from_signed_bytes(bytes: &[u8]) -> BigUint {
    BigInt::from_signed_bytes_be(bytes)
        .to_biguint()
        .expect("signed big-endian encoding of a nonnegative field element")
}

/// Encodes a nonnegative integer as a fixed-width signed big-endian integer,
/// the same convention [`E521Point::to_bytes`] uses for its coordinates.
/// Panics if `value` does not fit in `len` bytes.
pub fn to_signed_bytes_fixed(value: &BigUint, len: usize) -> Vec<u8> {
    pad_signed_be(&BigInt::from(value.clone()), len)
}

/// Inverse of [`to_signed_bytes_fixed`].
pub fn from_signed_bytes_fixed(bytes: &[u8]) -> Result<BigUint, CryptoError> {
    unpad_signed_be(bytes)
}

fn unpad_signed_be(bytes: &[u8]) -> Result<BigUint, CryptoError> {
    let value = BigInt::from_signed_bytes_be(bytes);
    value.to_biguint().ok_or(CryptoError::BadLength {
        expected: bytes.len(),
        actual: bytes.len(),
    })
}
