// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Cipher block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes.
pub const KEY_SIZE: usize = 16;

/// CBC initialization vector size in bytes.
pub const IV_SIZE: usize = 16;

/// GCM nonce size in bytes (96 bits).
pub const NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Number of AES-128 rounds.
pub const ROUNDS: usize = 10;

/// Number of round keys in an expanded AES-128 schedule.
pub const ROUND_KEYS: usize = ROUNDS + 1;
