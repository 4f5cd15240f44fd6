//! Keccak-f\[1600\], the SHA-3/SHAKE/cSHAKE/KMACXOF family (FIPS 202 /
//! NIST SP 800-185), and E-521 Edwards-curve schemes: passphrase-based
//! symmetric authenticated encryption, ECDHIES-style elliptic authenticated
//! encryption, and Schnorr signatures, all built on KMACXOF256.
//!
//! `sha3` is the hashing layer, `curve` is the E-521 field/group layer, and
//! `schemes` composes the two into the authenticated-encryption and
//! signature constructions. See `SPEC_FULL.md` for the full design and
//! `DESIGN.md` for where each piece is grounded.

pub mod curve;
pub mod error;
pub mod schemes;
pub mod sha3;

pub use curve::E521Point;
pub use error::CryptoError;
pub use schemes::{
    EllipticCryptogram, Hashable, KeyEncryptable, KeyPair, Message, PwEncryptable, Signable,
    Signature, SymmetricCryptogram,
};
