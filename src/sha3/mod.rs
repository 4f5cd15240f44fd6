//! Keccak-f[1600], the duplex sponge built on it, and the SHA-3/SHAKE/
//! cSHAKE/KMACXOF family layered on top. Ref NIST FIPS 202 and SP 800-185.

pub mod aux_functions;
pub mod hashlib;
pub mod keccak_f;
pub mod nist_800_185;
pub mod sponge;
