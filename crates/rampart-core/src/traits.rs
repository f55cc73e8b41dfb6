// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher trait definitions.

use crate::types::Block;

/// A keyed 128-bit block permutation.
///
/// Implementations hold an already validated key schedule, so single-block
/// operations cannot fail. Modes of operation are generic over this trait.
pub trait BlockCipher {
    /// Encrypts one block in place.
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts one block in place.
    fn decrypt_block(&self, block: &mut Block);
}
