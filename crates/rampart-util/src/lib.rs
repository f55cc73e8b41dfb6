// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the rampart primitives.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

/// Errors from [`try_hex_to_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// Input has an odd number of characters.
    #[error("hex string has odd length")]
    OddLength,

    /// Input contains a non-hex character at the given index.
    #[error("invalid hex character at index {0}")]
    InvalidCharacter(usize),
}

/// Constant-time equality comparison for byte slices.
///
/// Accumulates the OR of every byte-wise XOR without early exit, so the
/// running time depends only on the length, never on where bytes differ.
/// Slices of different length compare unequal.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    core::hint::black_box(diff) == 0
}

/// XORs `src` into `dst`, up to the shorter of the two lengths.
///
/// # Example
///
/// ```
/// use rampart_util::xor_in_place;
///
/// let mut dst = [0xF0, 0x0F, 0xAA];
/// xor_in_place(&mut dst, &[0xFF, 0xFF]);
/// assert_eq!(dst, [0x0F, 0xF0, 0xAA]);
/// ```
#[inline(always)]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Reads a big-endian `u32` from four bytes.
#[inline(always)]
pub fn u32_from_be(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

/// Writes `value` as four big-endian bytes.
#[inline(always)]
pub fn u32_to_be(value: u32, bytes: &mut [u8; 4]) {
    *bytes = value.to_be_bytes();
}

/// Writes `value` as eight big-endian bytes.
#[inline(always)]
pub fn u64_to_be(value: u64, bytes: &mut [u8; 8]) {
    *bytes = value.to_be_bytes();
}

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use rampart_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Parses a hexadecimal string into bytes.
///
/// Accepts upper and lower case digits.
///
/// # Errors
///
/// Returns [`HexError::OddLength`] for odd-length input and
/// [`HexError::InvalidCharacter`] for any non-hex character.
///
/// # Example
///
/// ```
/// use rampart_util::try_hex_to_bytes;
///
/// assert_eq!(try_hex_to_bytes("deadBEEF"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
/// assert!(try_hex_to_bytes("abc").is_err());
/// ```
pub fn try_hex_to_bytes(hex: &str) -> Result<Vec<u8>, HexError> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    raw.chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let hi = nibble(pair[0]).ok_or(HexError::InvalidCharacter(2 * i))?;
            let lo = nibble(pair[1]).ok_or(HexError::InvalidCharacter(2 * i + 1))?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

/// Parses a hexadecimal string into bytes.
///
/// Intended for test vectors.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use rampart_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    match try_hex_to_bytes(hex) {
        Ok(bytes) => bytes,
        Err(e) => panic!("hex_to_bytes: {e}"),
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
