// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_rand
//!
//! The random-byte capability used by the container layer to draw fresh CBC
//! IVs and GCM nonces. The cipher primitives themselves never touch it.
//!
//! ## Core Types
//!
//! - [`EntropySource`]: "fill this buffer with cryptographically random bytes"
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Example
//!
//! ```rust
//! use rampart_rand::{SystemEntropySource, random_iv, random_nonce};
//!
//! let entropy = SystemEntropySource {};
//! let iv = random_iv(&entropy).expect("entropy available");
//! let nonce = random_nonce(&entropy).expect("entropy available");
//! assert_eq!((iv.len(), nonce.len()), (16, 12));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod generate;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use generate::{random_iv, random_nonce};
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
