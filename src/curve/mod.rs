//! E-521 Edwards-curve arithmetic.

pub mod e521;

pub use e521::{
    d, from_signed_bytes, from_signed_bytes_fixed, p, r, to_signed_bytes, to_signed_bytes_fixed,
    E521Point, FIELD_BYTE_LEN, POINT_BYTE_LEN,
};
