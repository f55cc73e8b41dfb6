// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type aliases for fixed-size cipher values.

use crate::consts::{BLOCK_SIZE, IV_SIZE, KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// A single cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// AES-128 key.
pub type Key = [u8; KEY_SIZE];

/// CBC initialization vector.
pub type Iv = [u8; IV_SIZE];

/// GCM nonce.
pub type Nonce = [u8; NONCE_SIZE];

/// GCM authentication tag.
pub type Tag = [u8; TAG_SIZE];
