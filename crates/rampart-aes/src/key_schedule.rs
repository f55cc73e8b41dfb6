// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128 key expansion (FIPS 197 §5.2).

use zeroize::{Zeroize, ZeroizeOnDrop};

use rampart_core::{BLOCK_SIZE, Block, CipherError, KEY_SIZE, ROUND_KEYS};
use rampart_util::constant_time_eq;

use super::consts::{RCON, SBOX};

const WORDS_PER_KEY: usize = KEY_SIZE / 4;
const SCHEDULE_WORDS: usize = ROUND_KEYS * BLOCK_SIZE / 4;

/// Expanded AES-128 key: eleven 16-byte round keys.
///
/// A pure function of the key. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    round_keys: [Block; ROUND_KEYS],
}

impl KeySchedule {
    /// Expands a 16-byte key.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] unless `key` is exactly
    /// [`KEY_SIZE`] bytes.
    pub fn expand(key: &[u8]) -> Result<Self, CipherError> {
        if key.len() != KEY_SIZE {
            return Err(CipherError::InvalidKeyLength);
        }

        let mut words = [[0u8; 4]; SCHEDULE_WORDS];
        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
            word.copy_from_slice(chunk);
        }

        for i in WORDS_PER_KEY..SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % WORDS_PER_KEY == 0 {
                temp.rotate_left(1);
                for b in temp.iter_mut() {
                    *b = SBOX[*b as usize];
                }
                temp[0] ^= RCON[i / WORDS_PER_KEY - 1];
            }
            for (t, prev) in temp.iter_mut().zip(words[i - WORDS_PER_KEY].iter()) {
                *t ^= *prev;
            }
            words[i] = temp;
            temp.zeroize();
        }

        let mut schedule = Self {
            round_keys: [[0u8; BLOCK_SIZE]; ROUND_KEYS],
        };
        for (round_key, group) in schedule
            .round_keys
            .iter_mut()
            .zip(words.chunks_exact(WORDS_PER_KEY))
        {
            round_key.copy_from_slice(group.as_flattened());
        }
        words.zeroize();

        Ok(schedule)
    }

    /// Returns round key `round` (0 through 10).
    ///
    /// # Panics
    ///
    /// Panics if `round >= ROUND_KEYS`.
    #[inline(always)]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }

    /// The full 176-byte schedule, round key 0 first.
    pub fn as_bytes(&self) -> &[u8] {
        self.round_keys.as_flattened()
    }
}

impl PartialEq for KeySchedule {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.as_bytes(), other.as_bytes())
    }
}

impl Eq for KeySchedule {}

impl core::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KeySchedule {{ [protected] }}")
    }
}
