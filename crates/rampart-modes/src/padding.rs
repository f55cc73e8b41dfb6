// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PKCS#7 padding.

use alloc::vec::Vec;

use rampart_core::CipherError;

/// Pads `data` to a multiple of `block_size`.
///
/// Appends `p = block_size - len % block_size` bytes of value `p`. Input
/// that is already aligned gains a full block of padding, so at least one
/// byte is always appended.
///
/// # Panics
///
/// Panics if `block_size` is 0 or greater than 255.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    assert!(
        (1..=255).contains(&block_size),
        "block size must be in 1..=255"
    );

    let pad_len = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);

    padded
}

/// Strips PKCS#7 padding, borrowing the unpadded prefix.
///
/// # Errors
///
/// Returns [`CipherError::InvalidPadding`] when the trailing byte `p` is 0,
/// exceeds `block_size` or the input length, or when any of the last `p`
/// bytes differs from `p`.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8], CipherError> {
    let Some(&last) = data.last() else {
        return Err(CipherError::InvalidPadding);
    };

    let pad_len = last as usize;
    if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
        return Err(CipherError::InvalidPadding);
    }

    let (content, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        return Err(CipherError::InvalidPadding);
    }

    Ok(content)
}
