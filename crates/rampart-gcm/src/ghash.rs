// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GHASH universal hash (SP 800-38D §6.4).

use zeroize::{Zeroize, ZeroizeOnDrop};

use rampart_core::{BLOCK_SIZE, Block};
use rampart_util::{u64_to_be, xor_in_place};

use super::gf128::gf_mul;

/// Incremental GHASH under a hash subkey `H`.
///
/// The accumulator starts at zero and folds each block as
/// `acc = (acc ^ block) * H`. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Ghash {
    h: Block,
    acc: Block,
}

impl Ghash {
    /// Starts a hash under subkey `h`.
    pub fn new(h: &Block) -> Self {
        Self {
            h: *h,
            acc: [0; BLOCK_SIZE],
        }
    }

    /// Folds one full block.
    pub fn update_block(&mut self, block: &Block) {
        xor_in_place(&mut self.acc, block);
        self.acc = gf_mul(&self.acc, &self.h);
    }

    /// Folds `data` block by block, zero-padding the last partial block on
    /// the right.
    pub fn update_padded(&mut self, data: &[u8]) {
        let mut block: Block = [0; BLOCK_SIZE];

        for chunk in data.chunks(BLOCK_SIZE) {
            block.fill(0);
            block[..chunk.len()].copy_from_slice(chunk);
            self.update_block(&block);
        }

        block.zeroize();
    }

    /// Folds the length block `bitlen(aad) || bitlen(ciphertext)` (two
    /// 64-bit big-endian integers) and returns the accumulator.
    pub fn finalize(mut self, aad_len: usize, ciphertext_len: usize) -> Block {
        let mut len_block: Block = [0; BLOCK_SIZE];
        let (aad_bits, ct_bits) = len_block.split_at_mut(8);
        u64_to_be(
            (aad_len as u64) << 3,
            aad_bits
                .try_into()
                .expect("infallible: len_block[0..8] is exactly 8 bytes"),
        );
        u64_to_be(
            (ciphertext_len as u64) << 3,
            ct_bits
                .try_into()
                .expect("infallible: len_block[8..16] is exactly 8 bytes"),
        );
        self.update_block(&len_block);

        self.acc
    }
}

impl core::fmt::Debug for Ghash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ghash {{ [protected] }}")
    }
}

/// One-shot GHASH over `aad` then `ciphertext`, each zero-padded to a block
/// multiple, followed by the length block.
pub fn ghash(h: &Block, aad: &[u8], ciphertext: &[u8]) -> Block {
    let mut hasher = Ghash::new(h);
    hasher.update_padded(aad);
    hasher.update_padded(ciphertext);
    hasher.finalize(aad.len(), ciphertext.len())
}
