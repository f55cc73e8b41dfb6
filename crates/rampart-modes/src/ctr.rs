// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counter mode (NIST SP 800-38A §6.5).

use alloc::vec::Vec;

use zeroize::Zeroize;

use rampart_aes::Aes128;
use rampart_core::{BLOCK_SIZE, Block, BlockCipher, CipherError};
use rampart_util::xor_in_place;

use super::counter::{CounterWidth, blocks_for};

/// XORs the keystream starting at `counter` into `data` in place.
///
/// Each 16-byte chunk uses the encryption of the current counter block;
/// the final chunk may be partial and uses a truncated keystream block.
/// Applying it twice with the same counter restores the input.
///
/// # Errors
///
/// Returns [`CipherError::CounterOverflow`] if the counter field would wrap
/// before `data` is covered. `data` is left untouched in that case.
pub fn ctr_apply_keystream<C: BlockCipher>(
    cipher: &C,
    counter: &Block,
    width: CounterWidth,
    data: &mut [u8],
) -> Result<(), CipherError> {
    width.check_capacity(counter, blocks_for(data.len()))?;

    let mut ctr = *counter;
    let mut keystream: Block = [0; BLOCK_SIZE];

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        keystream = ctr;
        cipher.encrypt_block(&mut keystream);
        xor_in_place(chunk, &keystream);
        width.increment(&mut ctr);
    }

    keystream.zeroize();
    ctr.zeroize();

    Ok(())
}

/// Counter-mode transform with the trailing-32-bit counter convention.
///
/// Encrypts and decrypts alike. The output is a fresh buffer of the same
/// length as `data`.
///
/// # Errors
///
/// - [`CipherError::InvalidKeyLength`] unless `key` is 16 bytes
/// - [`CipherError::CounterOverflow`] if `data` needs more blocks than the
///   32-bit counter field has left
pub fn ctr_transform(data: &[u8], key: &[u8], counter: &Block) -> Result<Vec<u8>, CipherError> {
    ctr_transform_with_width(data, key, counter, CounterWidth::U32)
}

/// Counter-mode transform with an explicit counter field width.
///
/// # Errors
///
/// Same as [`ctr_transform`].
pub fn ctr_transform_with_width(
    data: &[u8],
    key: &[u8],
    counter: &Block,
    width: CounterWidth,
) -> Result<Vec<u8>, CipherError> {
    let cipher = Aes128::new(key)?;

    let mut output = data.to_vec();
    ctr_apply_keystream(&cipher, counter, width, &mut output)?;

    Ok(output)
}
