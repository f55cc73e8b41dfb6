// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GF(2^128) multiplication in the GCM bit order (SP 800-38D §6.3).
//!
//! Bit 0 of a block is the most significant bit of byte 0, which maps to
//! the most significant bit of a big-endian `u128`.

use rampart_core::Block;

/// x^128 + x^7 + x^2 + x + 1, reflected.
const R: u128 = 0xe1 << 120;

/// Multiplies two field elements.
///
/// Walks `x` from its first bit to its last, accumulating the running
/// multiple of `y`, which is shifted right and reduced by `R` whenever a set
/// bit falls off. Branch-free in the data.
///
/// Commutative, and `gf_mul(x, 0) == 0` for every `x`.
pub fn gf_mul(x: &Block, y: &Block) -> Block {
    let x = u128::from_be_bytes(*x);
    let mut v = u128::from_be_bytes(*y);
    let mut z = 0u128;

    for i in (0..128).rev() {
        let bit = (x >> i) & 1;
        z ^= v & bit.wrapping_neg();

        let carry = v & 1;
        v = (v >> 1) ^ (R & carry.wrapping_neg());
    }

    z.to_be_bytes()
}
