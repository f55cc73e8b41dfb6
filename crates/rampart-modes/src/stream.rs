// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Incremental counter mode.
//!
//! Lets the calling layer push data through counter mode in chunks of any
//! size, holding only one keystream block in memory.

use zeroize::Zeroize;

use rampart_aes::Aes128;
use rampart_core::{BLOCK_SIZE, Block, BlockCipher, CipherError};

use super::counter::{CounterWidth, blocks_for};

/// Counter-mode keystream carried across calls.
///
/// Splitting the input at arbitrary points yields the same bytes as one
/// [`ctr_transform`](crate::ctr_transform) over the concatenation.
pub struct CtrStream<C: BlockCipher> {
    cipher: C,
    counter: Block,
    width: CounterWidth,
    keystream: Block,
    /// Bytes of `keystream` already consumed; `BLOCK_SIZE` means exhausted.
    offset: usize,
    /// Keystream blocks that may still be generated before the counter wraps.
    remaining: u128,
}

impl CtrStream<Aes128> {
    /// Starts an AES-128 keystream at `counter` with a 32-bit counter field.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] unless `key` is 16 bytes.
    pub fn new(key: &[u8], counter: &Block) -> Result<Self, CipherError> {
        Ok(Self::with_cipher(Aes128::new(key)?, counter, CounterWidth::U32))
    }
}

impl<C: BlockCipher> CtrStream<C> {
    /// Starts a keystream over an arbitrary block cipher.
    pub fn with_cipher(cipher: C, counter: &Block, width: CounterWidth) -> Self {
        Self {
            cipher,
            counter: *counter,
            width,
            keystream: [0; BLOCK_SIZE],
            offset: BLOCK_SIZE,
            remaining: width.blocks_available(counter),
        }
    }

    /// XORs the next `data.len()` keystream bytes into `data`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::CounterOverflow`] if covering `data` would wrap
    /// the counter. Neither `data` nor the stream position change then.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<(), CipherError> {
        let buffered = BLOCK_SIZE - self.offset;
        let needed = blocks_for(data.len().saturating_sub(buffered));
        if needed > self.remaining {
            return Err(CipherError::CounterOverflow);
        }

        for byte in data.iter_mut() {
            if self.offset == BLOCK_SIZE {
                self.refill();
            }
            *byte ^= self.keystream[self.offset];
            self.offset += 1;
        }

        Ok(())
    }

    fn refill(&mut self) {
        self.keystream = self.counter;
        self.cipher.encrypt_block(&mut self.keystream);
        self.width.increment(&mut self.counter);
        self.remaining -= 1;
        self.offset = 0;
    }
}

impl<C: BlockCipher> Drop for CtrStream<C> {
    fn drop(&mut self) {
        self.keystream.zeroize();
        self.counter.zeroize();
    }
}

impl<C: BlockCipher> core::fmt::Debug for CtrStream<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CtrStream {{ [protected] }}")
    }
}
