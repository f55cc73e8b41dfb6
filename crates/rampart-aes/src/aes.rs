// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128 block encryption and decryption.

use zeroize::{Zeroize, ZeroizeOnDrop};

use rampart_core::{Block, BlockCipher, CipherError, ROUNDS};

use super::key_schedule::KeySchedule;
use super::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// AES-128 keyed with an expanded schedule.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    schedule: KeySchedule,
}

impl Aes128 {
    /// Validates `key` and expands its schedule.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] unless `key` is 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Ok(Self {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// The expanded key schedule.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }
}

impl BlockCipher for Aes128 {
    fn encrypt_block(&self, block: &mut Block) {
        add_round_key(block, self.schedule.round_key(0));

        for round in 1..ROUNDS {
            sub_bytes(block);
            shift_rows(block);
            mix_columns(block);
            add_round_key(block, self.schedule.round_key(round));
        }

        sub_bytes(block);
        shift_rows(block);
        add_round_key(block, self.schedule.round_key(ROUNDS));
    }

    fn decrypt_block(&self, block: &mut Block) {
        add_round_key(block, self.schedule.round_key(ROUNDS));

        for round in (1..ROUNDS).rev() {
            inv_shift_rows(block);
            inv_sub_bytes(block);
            add_round_key(block, self.schedule.round_key(round));
            inv_mix_columns(block);
        }

        inv_shift_rows(block);
        inv_sub_bytes(block);
        add_round_key(block, self.schedule.round_key(0));
    }
}

impl core::fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes128 {{ [protected] }}")
    }
}

/// Encrypts a single block under `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] unless `key` is 16 bytes.
pub fn encrypt_block(block: &Block, key: &[u8]) -> Result<Block, CipherError> {
    let cipher = Aes128::new(key)?;
    let mut out = *block;
    cipher.encrypt_block(&mut out);
    Ok(out)
}

/// Decrypts a single block under `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] unless `key` is 16 bytes.
pub fn decrypt_block(block: &Block, key: &[u8]) -> Result<Block, CipherError> {
    let cipher = Aes128::new(key)?;
    let mut out = *block;
    cipher.decrypt_block(&mut out);
    Ok(out)
}
