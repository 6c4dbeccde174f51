//! src/codec.rs
//! Byte-shift codec: `v + 1` on encode, `v - 1` on decode, both modulo 256.
//!
//! This is **not** cryptography. There is no key, and the transform is
//! trivially reversible by anyone who knows it exists.

use crate::consts::SHIFT;
use std::fmt;

/// Which way the bytes are shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformDirection {
    /// Add one to every byte.
    Encode,
    /// Subtract one from every byte.
    Decode,
}

impl TransformDirection {
    /// The direction that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Encode => Self::Decode,
            Self::Decode => Self::Encode,
        }
    }
}

impl fmt::Display for TransformDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => f.write_str("encrypt"),
            Self::Decode => f.write_str("decrypt"),
        }
    }
}

#[inline(always)]
pub const fn encode_byte(value: u8) -> u8 {
    value.wrapping_add(SHIFT)
}

#[inline(always)]
pub const fn decode_byte(value: u8) -> u8 {
    value.wrapping_sub(SHIFT)
}

#[inline(always)]
pub const fn shift_byte(value: u8, direction: TransformDirection) -> u8 {
    match direction {
        TransformDirection::Encode => encode_byte(value),
        TransformDirection::Decode => decode_byte(value),
    }
}

/// Shift every byte of `input`, returning a new buffer of the same length.
///
/// Total over all inputs; an empty slice yields an empty vector.
#[must_use]
pub fn transform(input: &[u8], direction: TransformDirection) -> Vec<u8> {
    let mut output = input.to_vec();
    transform_in_place(&mut output, direction);
    output
}

/// Shift every byte of `buffer` in place.
#[inline]
pub fn transform_in_place(buffer: &mut [u8], direction: TransformDirection) {
    match direction {
        TransformDirection::Encode => buffer.iter_mut().for_each(|b| *b = encode_byte(*b)),
        TransformDirection::Decode => buffer.iter_mut().for_each(|b| *b = decode_byte(*b)),
    }
}
