// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for mode-level tests.

use core::cell::Cell;

use rampart_core::{Block, BlockCipher};

/// Toy "cipher" that XORs a fixed mask and counts calls.
///
/// Not a permutation worth anything cryptographically, but it makes the
/// chaining and counter structure of a mode directly observable.
pub(crate) struct XorMaskCipher {
    mask: Block,
    encrypt_calls: Cell<usize>,
    decrypt_calls: Cell<usize>,
}

impl XorMaskCipher {
    pub(crate) fn new(mask: Block) -> Self {
        Self {
            mask,
            encrypt_calls: Cell::new(0),
            decrypt_calls: Cell::new(0),
        }
    }

    pub(crate) fn encrypt_calls(&self) -> usize {
        self.encrypt_calls.get()
    }

    pub(crate) fn decrypt_calls(&self) -> usize {
        self.decrypt_calls.get()
    }
}

impl BlockCipher for XorMaskCipher {
    fn encrypt_block(&self, block: &mut Block) {
        self.encrypt_calls.set(self.encrypt_calls.get() + 1);
        for (b, m) in block.iter_mut().zip(self.mask.iter()) {
            *b ^= *m;
        }
    }

    fn decrypt_block(&self, block: &mut Block) {
        self.decrypt_calls.set(self.decrypt_calls.get() + 1);
        for (b, m) in block.iter_mut().zip(self.mask.iter()) {
            *b ^= *m;
        }
    }
}
