//! NIST SP 800-185 §2.3 encoding helpers: `left_encode`, `right_encode`,
//! `encode_string`, `bytepad`.
//!
//! `n` is assumed to fit in a `u64`; SP 800-185 allows up to 2040 bits, but
//! nothing in this crate ever encodes a length or rate that large.

use byteorder::{BigEndian, WriteBytesExt};

fn minimal_be_bytes(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8);
    buf.write_u64::<BigEndian>(value).unwrap();
    while buf.len() > 1 && buf[0] == 0 {
        buf.remove(0);
    }
    buf
}

/// `left_encode(n)`: `[0x01, 0x00]` if `n == 0`, else the length of the
/// minimal big-endian encoding of `n` followed by that encoding.
pub fn left_encode(value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![1, 0];
    }
    let be = minimal_be_bytes(value);
    let mut out = Vec::with_capacity(be.len() + 1);
    out.push(be.len() as u8);
    out.extend(be);
    out
}

/// `right_encode(n)`: symmetric to `left_encode`, length byte appended
/// instead of prepended.
pub fn right_encode(value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0, 1];
    }
    let mut out = minimal_be_bytes(value);
    out.push(out.len() as u8);
    out
}

/// `encode_string(s) = left_encode(8 * len(s)) ++ s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut out = left_encode((s.len() as u64) * 8);
    out.extend_from_slice(s);
    out
}

/// `bytepad(x, w) = left_encode(w) ++ x`, zero-padded until the length is a
/// multiple of `w`.
pub fn bytepad(x: &[u8], w: usize) -> Vec<u8> {
    let mut z = left_encode(w as u64);
    z.extend_from_slice(x);
    let rem = z.len() % w;
    if rem != 0 {
        z.resize(z.len() + (w - rem), 0);
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_encode_zero() {
        assert_eq!(left_encode(0), vec![1, 0]);
    }

    #[test]
    fn right_encode_zero() {
        assert_eq!(right_encode(0), vec![0, 1]);
    }

    #[test]
    fn left_encode_small_values() {
        assert_eq!(left_encode(1), vec![1, 1]);
        assert_eq!(left_encode(168), vec![1, 168]);
        assert_eq!(left_encode(256), vec![2, 1, 0]);
    }

    #[test]
    fn right_encode_small_values() {
        assert_eq!(right_encode(1), vec![1, 1]);
        assert_eq!(right_encode(168), vec![168, 1]);
        assert_eq!(right_encode(256), vec![1, 0, 2]);
    }

    #[test]
    fn encode_string_empty() {
        assert_eq!(encode_string(b""), vec![1, 0]);
    }

    #[test]
    fn bytepad_pads_to_multiple_of_w() {
        let padded = bytepad(b"hi", 8);
        assert_eq!(padded.len() % 8, 0);
        // left_encode(8) is [1, 8], then "hi", then zero padding.
        assert_eq!(&padded[..4], &[1, 8, b'h', b'i']);
    }
}
