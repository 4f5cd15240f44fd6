//! Schemes built on `sha3` + `curve`: symmetric AE, elliptic AE, key-pair
//! derivation, and Schnorr signatures. Ref spec.md §4.7.

pub mod elliptic;
pub mod keypair;
pub mod message;
pub mod signature;
pub mod symmetric;

pub use elliptic::EllipticCryptogram;
pub use keypair::KeyPair;
pub use message::{Hashable, KeyEncryptable, Message, PwEncryptable, Signable};
pub use signature::Signature;
pub use symmetric::SymmetricCryptogram;
