// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_core::CipherError;
use rampart_rand::EntropyError;

/// Errors returned by the container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// The underlying cipher operation failed.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// No IV or nonce could be drawn.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// The container is shorter than its fixed prefix (and tag).
    #[error("container too short: expected at least {0} bytes")]
    ContainerTooShort(usize),
}
