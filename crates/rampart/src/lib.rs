// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart
//!
//! AES-128 with PKCS7-padded CBC, CTR and GCM, written from first
//! principles, plus the two sealed container formats used at rest:
//!
//! | Container | Layout |
//! |-----------|--------|
//! | CBC | `IV (16) ‖ ciphertext` |
//! | GCM | `nonce (12) ‖ ciphertext ‖ tag (16)` |
//!
//! The primitive crates are re-exported as modules:
//!
//! - [`aes`]: block cipher and key schedule
//! - [`modes`]: PKCS7, CBC, CTR and streaming CTR
//! - [`gcm`]: GF(2^128), GHASH and AES-128-GCM
//! - [`rand`]: entropy source used for IVs and nonces
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::{open_gcm, seal_gcm};
//! use rampart::rand::SystemEntropySource;
//!
//! let key = b"0123456789abcdef";
//! let entropy = SystemEntropySource {};
//!
//! let sealed = seal_gcm(b"hello", key, b"header", &entropy)?;
//! let opened = open_gcm(&sealed, key, b"header")?;
//!
//! assert_eq!(opened, b"hello");
//! # Ok::<(), rampart::ContainerError>(())
//! ```
//!
//! # Logging
//!
//! Seal and open operations emit `tracing` events carrying lengths only.
//! Keys, IVs, nonces, tags and plaintext never reach a log line.

#[cfg(test)]
mod tests;

mod container;
mod error;

pub mod support;

pub use rampart_aes as aes;
pub use rampart_gcm as gcm;
pub use rampart_modes as modes;
pub use rampart_rand as rand;
pub use rampart_util as util;

pub use container::{
    CBC_CONTAINER_MIN, GCM_CONTAINER_MIN, open_cbc, open_gcm, seal_cbc, seal_gcm,
};
pub use error::ContainerError;
pub use rampart_core::{
    BLOCK_SIZE, Block, BlockCipher, CipherError, IV_SIZE, Iv, KEY_SIZE, Key, NONCE_SIZE, Nonce,
    TAG_SIZE, Tag,
};
