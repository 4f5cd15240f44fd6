//! The Keccak-f[1600] permutation.
//!
//! `b = 1600`, interpreted as a 5x5 array of 64-bit lanes (25 lanes * 8 bytes
//! = 200 bytes). Octet `i` of the linear state belongs to lane
//! `(x = (i/8) mod 5, y = (i/8)/5)`, little-endian within the lane, per
//! FIPS 202 §3.1.2.
#![allow(non_snake_case)]

/// Width of the Keccak-f[1600] state in bytes.
pub const STATE_BYTES: usize = 200;

/// Number of rounds in Keccak-f[1600].
const ROUNDS: usize = 24;

/// Lane index for (x, y), x and y taken mod 5.
#[inline(always)]
fn idx(x: usize, y: usize) -> usize {
    (x % 5) + 5 * (y % 5)
}

/// Applies the 24-round Keccak-f[1600] permutation in place.
///
/// `state` is read and written as 25 little-endian 64-bit lanes, per the
/// byte-to-lane mapping in FIPS 202 §3.1.2.
pub fn keccak_f1600(state: &mut [u8; STATE_BYTES]) {
    let mut lanes = [0u64; 25];
    for (i, lane) in lanes.iter_mut().enumerate() {
        let mut b = [0u8; 8];
        b.copy_from_slice(&state[i * 8..i * 8 + 8]);
        *lane = u64::from_le_bytes(b);
    }

    for round in 0..ROUNDS {
        theta(&mut lanes);
        rho(&mut lanes);
        pi(&mut lanes);
        chi(&mut lanes);
        iota(&mut lanes, round);
    }

    for (i, lane) in lanes.iter().enumerate() {
        state[i * 8..i * 8 + 8].copy_from_slice(&lane.to_le_bytes());
    }
}

/// θ: C[x] = ⊕_y A[x][y]; D[x] = C[x-1] ⊕ rotl(C[x+1], 1); A[x][y] ^= D[x].
fn theta(a: &mut [u64; 25]) {
    let mut c = [0u64; 5];
    for (x, cx) in c.iter_mut().enumerate() {
        *cx = a[idx(x, 0)] ^ a[idx(x, 1)] ^ a[idx(x, 2)] ^ a[idx(x, 3)] ^ a[idx(x, 4)];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[idx(x, y)] ^= d;
        }
    }
}

/// Standard rotation offsets (mod 64), row-major starting at (x=0, y=0).
const RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// ρ: lane (x, y) is left-rotated by the standard offset table.
fn rho(a: &mut [u64; 25]) {
    for x in 0..5 {
        for y in 0..5 {
            let i = idx(x, y);
            a[i] = a[i].rotate_left(RHO_OFFSETS[x + 5 * y]);
        }
    }
}

/// π: A'[x][y] = A[(x + 3y) mod 5][x].
fn pi(a: &mut [u64; 25]) {
    let src = *a;
    for x in 0..5 {
        for y in 0..5 {
            a[idx(y, 2 * x + 3 * y)] = src[idx(x, y)];
        }
    }
}

/// χ: A'[x][y] = A[x][y] ⊕ ((¬A[x+1][y]) ∧ A[x+2][y]), row snapshot so writes
/// don't pollute reads.
fn chi(a: &mut [u64; 25]) {
    for y in 0..5 {
        let mut row = [0u64; 5];
        for (x, rx) in row.iter_mut().enumerate() {
            *rx = a[idx(x, y)] ^ (!a[idx(x + 1, y)] & a[idx(x + 2, y)]);
        }
        for (x, rx) in row.into_iter().enumerate() {
            a[idx(x, y)] = rx;
        }
    }
}

/// The 24 standard Keccak-f[1600] round constants.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// ι: A[0][0] ^= RC[round].
fn iota(a: &mut [u64; 25], round: usize) {
    a[idx(0, 0)] ^= ROUND_CONSTANTS[round];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permuting_zero_state_is_not_identity() {
        let mut state = [0u8; STATE_BYTES];
        let before = state;
        keccak_f1600(&mut state);
        assert_ne!(before, state);
    }

    #[test]
    fn permutation_is_deterministic() {
        let mut a = [0u8; STATE_BYTES];
        let mut b = [0u8; STATE_BYTES];
        for i in 0..STATE_BYTES {
            a[i] = i as u8;
            b[i] = i as u8;
        }
        keccak_f1600(&mut a);
        keccak_f1600(&mut b);
        assert_eq!(a, b);
    }
}
