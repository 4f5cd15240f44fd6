//! The generic duplex sponge construction built on Keccak-f[1600].
//!
//! Only one permutation (Keccak-f[1600]) and one padding rule (pad10*1) are
//! ever instantiated here, so the sponge is monomorphized rather than made
//! generic over `(F, pad)`.

use crate::error::CryptoError;
use crate::sha3::keccak_f::{keccak_f1600, STATE_BYTES};

/// pad10*1: appends `suffix, 0, .., 0` then XORs the final byte with `0x80`,
/// bringing the total length to a positive multiple of `rate_bytes`.
///
/// Fails with [`CryptoError::InvalidSuffix`] if `suffix == 0x00`.
pub fn pad10x1(input: &[u8], rate_bytes: usize, suffix: u8) -> Result<Vec<u8>, CryptoError> {
    if suffix == 0 {
        return Err(CryptoError::InvalidSuffix);
    }
    let mut out = Vec::with_capacity(input.len() + rate_bytes);
    out.extend_from_slice(input);
    out.push(suffix);
    while out.len() % rate_bytes != 0 {
        out.push(0);
    }
    let last = out.len() - 1;
    out[last] ^= 0x80;
    Ok(out)
}

fn xor_into(dest: &mut [u8], src: &[u8]) {
    for (d, s) in dest.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// A Keccak-f[1600] sponge instance: `(permutation, padding, rate, state)`.
///
/// Single-owner, single-threaded: two squeezes from the same instance are
/// not independent streams, and the state is not shareable across
/// concurrent mutators.
pub struct Sponge {
    state: [u8; STATE_BYTES],
    rate_bytes: usize,
}

impl Sponge {
    /// Builds a sponge with the given rate in bytes (`capacity_bits = 1600 -
    /// 8*rate_bytes`). `rate_bytes` must be a positive value strictly less
    /// than 200.
    pub fn new(rate_bytes: usize) -> Self {
        assert!(
            rate_bytes > 0 && rate_bytes < STATE_BYTES,
            "rate must be in (0, 200) bytes"
        );
        Self {
            state: [0u8; STATE_BYTES],
            rate_bytes,
        }
    }

    /// `absorb_all(x)`: pads `x` with pad10*1 under `suffix`, then absorbs
    /// each `rate_bytes`-sized block, permuting after each.
    pub fn absorb_all(&mut self, input: &[u8], suffix: u8) -> Result<(), CryptoError> {
        let padded = pad10x1(input, self.rate_bytes, suffix)?;
        for block in padded.chunks(self.rate_bytes) {
            xor_into(&mut self.state[..self.rate_bytes], block);
            keccak_f1600(&mut self.state);
        }
        Ok(())
    }

    /// Squeezes `out_len` bytes of extendable output, permuting between
    /// successive rate-sized chunks.
    pub fn squeeze(&mut self, out_len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(out_len);
        while out.len() < out_len {
            let take = (out_len - out.len()).min(self.rate_bytes);
            out.extend_from_slice(&self.state[..take]);
            keccak_f1600(&mut self.state);
        }
        out
    }

    /// `duplex_absorb(block)`: absent block behaves as `squeeze`; a present
    /// block that is already a positive multiple of `rate_bytes` is absorbed
    /// raw (the caller is responsible for its own padding); anything else
    /// goes through `absorb_all`. Returns the rate-sized output after the
    /// permutation.
    pub fn duplex_absorb(
        &mut self,
        block: Option<&[u8]>,
        suffix: u8,
    ) -> Result<Vec<u8>, CryptoError> {
        match block {
            None => Ok(self.squeeze(self.rate_bytes)),
            Some(b) if !b.is_empty() && b.len() % self.rate_bytes == 0 => {
                for chunk in b.chunks(self.rate_bytes) {
                    xor_into(&mut self.state[..self.rate_bytes], chunk);
                    keccak_f1600(&mut self.state);
                }
                Ok(self.state[..self.rate_bytes].to_vec())
            }
            Some(b) => {
                self.absorb_all(b, suffix)?;
                Ok(self.state[..self.rate_bytes].to_vec())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_suffix() {
        assert_eq!(
            pad10x1(b"hello", 8, 0x00),
            Err(CryptoError::InvalidSuffix)
        );
    }

    #[test]
    fn padding_is_multiple_of_rate() {
        for msg_len in 0..40 {
            let msg = vec![0xAAu8; msg_len];
            let padded = pad10x1(&msg, 8, 0x06).unwrap();
            assert_eq!(padded.len() % 8, 0);
            assert!(padded.len() > msg.len());
        }
    }

    #[test]
    fn padding_on_block_boundary_adds_full_block() {
        let msg = vec![0u8; 16]; // exactly 2 blocks of rate 8
        let padded = pad10x1(&msg, 8, 0x06).unwrap();
        assert_eq!(padded.len(), msg.len() + 8);
    }

    #[test]
    fn squeeze_is_extendable() {
        let mut a = Sponge::new(136);
        a.absorb_all(b"abc", 0x06).unwrap();
        let full = a.squeeze(64);

        let mut b = Sponge::new(136);
        b.absorb_all(b"abc", 0x06).unwrap();
        let mut partial = b.squeeze(32);
        partial.extend(b.squeeze(32));

        assert_eq!(full, partial);
    }

    #[test]
    fn duplex_absorb_none_matches_a_plain_squeeze() {
        let mut a = Sponge::new(8);
        a.absorb_all(b"abc", 0x06).unwrap();
        let mut b = Sponge::new(8);
        b.absorb_all(b"abc", 0x06).unwrap();

        let duplexed = a.duplex_absorb(None, 0x06).unwrap();
        let squeezed = b.squeeze(8);
        assert_eq!(duplexed, squeezed);
    }

    #[test]
    fn duplex_absorb_rate_sized_block_is_absorbed_raw() {
        let mut a = Sponge::new(8);
        let block = vec![0x11u8; 8];
        let out = a.duplex_absorb(Some(&block), 0x06).unwrap();
        assert_eq!(out.len(), 8);

        // Absorbing the same rate-sized block raw must match manually
        // XORing it into the state and permuting, with no pad10*1 applied.
        let mut state = [0u8; STATE_BYTES];
        state[..8].copy_from_slice(&block);
        keccak_f1600(&mut state);
        assert_eq!(out, &state[..8]);
    }

    #[test]
    fn duplex_absorb_non_rate_sized_block_falls_back_to_absorb_all() {
        let mut a = Sponge::new(8);
        let mut b = Sponge::new(8);

        let out = a.duplex_absorb(Some(b"hi"), 0x06).unwrap();
        b.absorb_all(b"hi", 0x06).unwrap();
        assert_eq!(out, b.state[..8].to_vec());
    }

    #[test]
    fn duplex_absorb_rejects_zero_suffix_on_the_absorb_all_path() {
        let mut a = Sponge::new(8);
        assert_eq!(
            a.duplex_absorb(Some(b"hi"), 0x00),
            Err(CryptoError::InvalidSuffix)
        );
    }
}
