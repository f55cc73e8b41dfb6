// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_aes
//!
//! AES-128 (FIPS 197) single-block encryption and decryption.
//!
//! The key schedule is expanded once per [`Aes128`] and zeroized on drop.
//! Only whole 16-byte blocks are processed here; partial blocks are the
//! business of the modes in `rampart-modes` and `rampart-gcm`.
//!
//! ## Example
//!
//! ```rust
//! use rampart_aes::Aes128;
//! use rampart_core::BlockCipher;
//!
//! let cipher = Aes128::new(b"1234567890123456").expect("16-byte key");
//! let mut block = *b"exactly16bytes!!";
//! cipher.encrypt_block(&mut block);
//! cipher.decrypt_block(&mut block);
//! assert_eq!(&block, b"exactly16bytes!!");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod aes;
mod consts;
mod key_schedule;
mod round;

pub use aes::{Aes128, decrypt_block, encrypt_block};
pub use key_schedule::KeySchedule;
