// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key material as given on the command line.

use std::fmt;

use rampart::{KEY_SIZE, Key};
use rampart_util::try_hex_to_bytes;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A validated 16-byte AES-128 key, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyBytes(Key);

impl KeyBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyBytes { [protected] }")
    }
}

/// `--key`: the raw bytes of a string that must be exactly 16 bytes long.
pub fn parse_string_key(s: &str) -> Result<KeyBytes, String> {
    let key: Key = s
        .as_bytes()
        .try_into()
        .map_err(|_| String::from("key string must be exactly 16 bytes for AES-128"))?;

    Ok(KeyBytes(key))
}

/// `--hexkey`: 32 hex characters decoding to 16 bytes.
pub fn parse_hex_key(s: &str) -> Result<KeyBytes, String> {
    let bytes = Zeroizing::new(try_hex_to_bytes(s).map_err(|e| format!("bad hex key: {e}"))?);

    if bytes.len() != KEY_SIZE {
        return Err(String::from("hex key must decode to 16 bytes"));
    }

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&bytes);

    Ok(KeyBytes(key))
}
