// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES round transforms over a column-major 16-byte state.
//!
//! Byte `state[4 * c + r]` is row `r` of column `c`.

use rampart_core::Block;

use super::consts::{INV_SBOX, SBOX};

/// Multiplication by `x` in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
#[inline(always)]
pub(crate) fn xtime(a: u8) -> u8 {
    (a << 1) ^ (((a >> 7) & 1) * 0x1b)
}

/// General multiplication in GF(2^8).
#[inline(always)]
pub(crate) fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        p ^= a & 0u8.wrapping_sub(b & 1);
        a = xtime(a);
        b >>= 1;
    }
    p
}

#[inline(always)]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    for (s, k) in state.iter_mut().zip(round_key.iter()) {
        *s ^= *k;
    }
}

#[inline(always)]
pub(crate) fn sub_bytes(state: &mut Block) {
    for b in state.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

#[inline(always)]
pub(crate) fn inv_sub_bytes(state: &mut Block) {
    for b in state.iter_mut() {
        *b = INV_SBOX[*b as usize];
    }
}

/// Rotates row `r` left by `r` positions.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut Block) {
    let old = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = old[4 * ((c + r) % 4) + r];
        }
    }
}

/// Rotates row `r` right by `r` positions.
#[inline(always)]
pub(crate) fn inv_shift_rows(state: &mut Block) {
    let old = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * ((c + r) % 4) + r] = old[4 * c + r];
        }
    }
}

#[inline(always)]
pub(crate) fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        let all = a0 ^ a1 ^ a2 ^ a3;
        col[0] = a0 ^ all ^ xtime(a0 ^ a1);
        col[1] = a1 ^ all ^ xtime(a1 ^ a2);
        col[2] = a2 ^ all ^ xtime(a2 ^ a3);
        col[3] = a3 ^ all ^ xtime(a3 ^ a0);
    }
}

#[inline(always)]
pub(crate) fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
        col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
        col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
        col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
    }
}
