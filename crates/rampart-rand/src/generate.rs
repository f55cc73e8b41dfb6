// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_core::{IV_SIZE, Iv, NONCE_SIZE, Nonce};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Draws a fresh 16-byte CBC IV.
///
/// # Errors
///
/// Propagates [`EntropyError`] from `entropy`.
pub fn random_iv<E: EntropySource>(entropy: &E) -> Result<Iv, EntropyError> {
    let mut iv = [0u8; IV_SIZE];
    entropy.fill_bytes(&mut iv)?;
    Ok(iv)
}

/// Draws a fresh 12-byte GCM nonce.
///
/// Uniqueness under a key is the caller's responsibility; random nonces are
/// safe for up to roughly 2^32 messages per key.
///
/// # Errors
///
/// Propagates [`EntropyError`] from `entropy`.
pub fn random_nonce<E: EntropySource>(entropy: &E) -> Result<Nonce, EntropyError> {
    let mut nonce = [0u8; NONCE_SIZE];
    entropy.fill_bytes(&mut nonce)?;
    Ok(nonce)
}
