//! A convenience wrapper bundling a byte buffer with whatever digest,
//! nonce, or signature the last operation on it produced.

use rand::{CryptoRng, RngCore};

use crate::curve::E521Point;
use crate::error::CryptoError;
use crate::schemes::elliptic::{self, EllipticCryptogram};
use crate::schemes::signature::Signature;
use crate::schemes::symmetric::{self, SymmetricCryptogram};
use crate::sha3::hashlib::{kmac_xof, sha3};

const TAGGED_HASH_LEN: usize = 64;

/// A byte buffer plus whatever metadata the last operation attached to it.
/// Encrypting replaces `data` with ciphertext and records the nonce/tag
/// needed to decrypt it back; signing attaches a [`Signature`] without
/// touching `data` at all.
#[derive(Clone, Debug, Default)]
pub struct Message {
    pub data: Vec<u8>,
    pub digest: Option<Vec<u8>>,
    pub sym_nonce: Option<Vec<u8>>,
    pub asym_nonce: Option<E521Point>,
    pub signature: Option<Signature>,
}

impl Message {
    pub fn new(data: Vec<u8>) -> Self {
        Message {
            data,
            ..Default::default()
        }
    }
}

/// Plain and keyed hashing.
pub trait Hashable {
    fn compute_sha3_hash(&mut self, d: usize);
    fn compute_tagged_hash(&mut self, key: &[u8], domain: &[u8]);
}

impl Hashable for Message {
    fn compute_sha3_hash(&mut self, d: usize) {
        self.digest = Some(sha3(d, &self.data));
    }

    /// Keyed hash under `key`, domain-separated by `domain` (e.g. `b"D"`
    /// for a generic default domain, distinct from the `"T"`/`"S"`/`"P"`/
    /// etc. separators the schemes in this crate reserve for themselves —
    /// see spec.md §6's domain-separator table).
    fn compute_tagged_hash(&mut self, key: &[u8], domain: &[u8]) {
        self.digest = Some(kmac_xof(256, key, &self.data, TAGGED_HASH_LEN, domain));
    }
}

/// Passphrase-based symmetric authenticated encryption.
pub trait PwEncryptable {
    fn pw_encrypt<R: RngCore + CryptoRng>(&mut self, rng: &mut R, pw: &[u8]);
    fn pw_decrypt(&mut self, pw: &[u8]) -> Result<(), CryptoError>;
}

impl PwEncryptable for Message {
    fn pw_encrypt<R: RngCore + CryptoRng>(&mut self, rng: &mut R, pw: &[u8]) {
        let cg = symmetric::encrypt(rng, pw, &self.data);
        self.sym_nonce = Some(cg.z);
        self.digest = Some(cg.t);
        self.data = cg.c;
    }

    fn pw_decrypt(&mut self, pw: &[u8]) -> Result<(), CryptoError> {
        let cg = SymmetricCryptogram {
            z: self
                .sym_nonce
                .clone()
                .expect("pw_decrypt called on a message with no sym_nonce"),
            c: self.data.clone(),
            t: self
                .digest
                .clone()
                .expect("pw_decrypt called on a message with no digest"),
        };
        self.data = symmetric::decrypt(pw, &cg)?;
        Ok(())
    }
}

/// ECDHIES-style elliptic authenticated encryption.
pub trait KeyEncryptable {
    fn key_encrypt<R: RngCore + CryptoRng>(&mut self, rng: &mut R, pub_key: &E521Point);
    fn key_decrypt(&mut self, pw: &[u8]) -> Result<(), CryptoError>;
}

impl KeyEncryptable for Message {
    fn key_encrypt<R: RngCore + CryptoRng>(&mut self, rng: &mut R, pub_key: &E521Point) {
        let cg = elliptic::encrypt(rng, pub_key, &self.data);
        self.asym_nonce = Some(cg.z);
        self.digest = Some(cg.t);
        self.data = cg.c;
    }

    fn key_decrypt(&mut self, pw: &[u8]) -> Result<(), CryptoError> {
        let cg = EllipticCryptogram {
            z: self
                .asym_nonce
                .clone()
                .expect("key_decrypt called on a message with no asym_nonce"),
            c: self.data.clone(),
            t: self
                .digest
                .clone()
                .expect("key_decrypt called on a message with no digest"),
        };
        self.data = elliptic::decrypt(pw, &cg)?;
        Ok(())
    }
}

/// Schnorr signing and verification.
pub trait Signable {
    fn sign(&mut self, pw: &[u8]);
    fn verify(&self, pub_key: &E521Point) -> bool;
}

impl Signable for Message {
    fn sign(&mut self, pw: &[u8]) {
        self.signature = Some(Signature::sign(&self.data, pw));
    }

    fn verify(&self, pub_key: &E521Point) -> bool {
        match &self.signature {
            Some(sig) => sig.verify(&self.data, pub_key),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::keypair::KeyPair;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(3)
    }

    #[test]
    fn hash_is_deterministic() {
        let mut a = Message::new(b"hello".to_vec());
        let mut b = Message::new(b"hello".to_vec());
        a.compute_sha3_hash(256);
        b.compute_sha3_hash(256);
        assert_eq!(a.digest, b.digest);
    }

    #[test]
    fn tagged_hash_depends_on_key_and_domain() {
        let mut a = Message::new(b"hello".to_vec());
        let mut b = Message::new(b"hello".to_vec());
        a.compute_tagged_hash(b"key1", b"D");
        b.compute_tagged_hash(b"key2", b"D");
        assert_ne!(a.digest, b.digest);

        let mut c = Message::new(b"hello".to_vec());
        c.compute_tagged_hash(b"key1", b"D");
        assert_eq!(a.digest, c.digest);
    }

    #[test]
    fn pw_encrypt_then_decrypt_round_trips() {
        let mut msg = Message::new(b"top secret".to_vec());
        msg.pw_encrypt(&mut rng(), b"hunter2");
        assert_ne!(msg.data, b"top secret");
        msg.pw_decrypt(b"hunter2").unwrap();
        assert_eq!(msg.data, b"top secret");
    }

    #[test]
    fn key_encrypt_then_decrypt_round_trips() {
        let kp = KeyPair::generate(&mut rng(), b"pw", "bob".into());
        let mut msg = Message::new(b"top secret".to_vec());
        msg.key_encrypt(&mut rng(), &kp.public_point);
        msg.key_decrypt(b"pw").unwrap();
        assert_eq!(msg.data, b"top secret");
    }

    #[test]
    fn sign_then_verify_round_trips() {
        let kp = KeyPair::generate(&mut rng(), b"pw", "carol".into());
        let mut msg = Message::new(b"signed content".to_vec());
        msg.sign(b"pw");
        assert!(msg.verify(&kp.public_point));
    }

    #[test]
    fn verify_without_signature_is_false() {
        let kp = KeyPair::generate(&mut rng(), b"pw", "carol".into());
        let msg = Message::new(b"unsigned".to_vec());
        assert!(!msg.verify(&kp.public_point));
    }
}
