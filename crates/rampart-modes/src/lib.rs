// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_modes
//!
//! Block cipher modes of operation over [`rampart_aes::Aes128`]:
//!
//! - [`pkcs7_pad`] / [`pkcs7_unpad`]: reversible padding to a block multiple
//! - [`cbc_encrypt`] / [`cbc_decrypt`]: cipher block chaining
//! - [`ctr_transform`]: counter mode, its own inverse
//! - [`CtrStream`]: counter mode over data arriving in arbitrary chunks
//!
//! Every mode is also available generically over any
//! [`BlockCipher`](rampart_core::BlockCipher) through the `*_with` functions.
//!
//! ## Example
//!
//! ```rust
//! use rampart_modes::{cbc_decrypt, cbc_encrypt};
//!
//! let key = b"1234567890123456";
//! let iv = [0x24u8; 16];
//!
//! let ciphertext = cbc_encrypt(b"attack at dawn", key, &iv).expect("valid key");
//! assert_eq!(ciphertext.len(), 16);
//!
//! let plaintext = cbc_decrypt(&ciphertext, key, &iv).expect("valid ciphertext");
//! assert_eq!(plaintext, b"attack at dawn");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod cbc;
mod counter;
mod ctr;
mod padding;
mod stream;

pub use cbc::{cbc_decrypt, cbc_decrypt_with, cbc_encrypt, cbc_encrypt_with};
pub use counter::CounterWidth;
pub use ctr::{ctr_apply_keystream, ctr_transform, ctr_transform_with_width};
pub use padding::{pkcs7_pad, pkcs7_unpad};
pub use stream::CtrStream;
