// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_core
//!
//! Shared vocabulary for the rampart AES-128 stack.
//!
//! - Fixed-size array types ([`Block`], [`Key`], [`Iv`], [`Nonce`], [`Tag`])
//! - Size constants
//! - [`CipherError`]: the single error taxonomy for every primitive
//! - [`BlockCipher`]: the seam every mode is written against

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod traits;
mod types;

pub use consts::{BLOCK_SIZE, IV_SIZE, KEY_SIZE, NONCE_SIZE, ROUND_KEYS, ROUNDS, TAG_SIZE};
pub use error::CipherError;
pub use traits::BlockCipher;
pub use types::{Block, Iv, Key, Nonce, Tag};
