// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_gcm
//!
//! AES-128-GCM (NIST SP 800-38D) with a 96-bit nonce and a 128-bit tag.
//!
//! - [`gf_mul`]: multiplication in GF(2^128) modulo x^128 + x^7 + x^2 + x + 1
//! - [`Ghash`] / [`ghash`]: the universal hash over AAD and ciphertext
//! - [`Aes128Gcm`], [`gcm_encrypt`], [`gcm_decrypt`]: the AEAD itself
//!
//! Decryption verifies the tag in constant time before any keystream is
//! applied; on failure no plaintext byte is produced.
//!
//! ## Example
//!
//! ```rust
//! use rampart_gcm::{gcm_decrypt, gcm_encrypt};
//!
//! let key = b"1234567890123456";
//! let nonce = b"123456789012";
//!
//! let sealed = gcm_encrypt(b"Hello, AES-GCM!", key, nonce, b"").expect("valid inputs");
//! assert_eq!(sealed.len(), 15 + 16);
//!
//! let opened = gcm_decrypt(&sealed, key, nonce, b"").expect("authentic");
//! assert_eq!(opened, b"Hello, AES-GCM!");
//!
//! assert!(gcm_decrypt(&sealed, key, nonce, b"other aad").is_err());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod gcm;
mod gf128;
mod ghash;

pub use gcm::{Aes128Gcm, gcm_decrypt, gcm_encrypt};
pub use gf128::gf_mul;
pub use ghash::{Ghash, ghash};
