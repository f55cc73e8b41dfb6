// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher error types.

use crate::consts::{BLOCK_SIZE, KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// Errors returned by the block cipher, its modes and GCM.
///
/// [`CipherError::AuthenticationFailed`] carries no detail: a wrong key, wrong
/// AAD and tampered ciphertext are indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// Key is not exactly [`KEY_SIZE`] bytes.
    #[error("invalid key length: expected {KEY_SIZE} bytes")]
    InvalidKeyLength,

    /// Nonce is not exactly [`NONCE_SIZE`] bytes.
    #[error("invalid nonce length: expected {NONCE_SIZE} bytes")]
    InvalidNonceLength,

    /// CBC ciphertext is empty or not a multiple of [`BLOCK_SIZE`].
    #[error("invalid ciphertext length: expected a positive multiple of {BLOCK_SIZE} bytes")]
    InvalidCiphertextLength,

    /// GCM input is shorter than the tag.
    #[error("ciphertext too short: expected at least {TAG_SIZE} bytes")]
    CiphertextTooShort,

    /// Trailing padding bytes are inconsistent.
    #[error("invalid padding")]
    InvalidPadding,

    /// The counter would wrap within a single call.
    #[error("counter overflow: too many blocks for one call")]
    CounterOverflow,

    /// Tag verification failed.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,
}
