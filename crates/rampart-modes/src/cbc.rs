// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher block chaining (NIST SP 800-38A §6.2) with PKCS#7 padding.

use alloc::vec::Vec;

use zeroize::Zeroize;

use rampart_aes::Aes128;
use rampart_core::{BLOCK_SIZE, Block, BlockCipher, CipherError, Iv};
use rampart_util::xor_in_place;

use super::padding::{pkcs7_pad, pkcs7_unpad};

/// CBC-encrypts `plaintext` under an arbitrary block cipher.
///
/// The output is padded and always a non-empty multiple of 16 bytes. The IV
/// is not part of the output.
pub fn cbc_encrypt_with<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &Iv) -> Vec<u8> {
    let mut output = pkcs7_pad(plaintext, BLOCK_SIZE);
    let mut chain: Block = *iv;

    for chunk in output.chunks_exact_mut(BLOCK_SIZE) {
        let block: &mut Block = chunk
            .try_into()
            .expect("infallible: chunks_exact_mut yields BLOCK_SIZE chunks");
        xor_in_place(block, &chain);
        cipher.encrypt_block(block);
        chain = *block;
    }

    output
}

/// CBC-decrypts `ciphertext` under an arbitrary block cipher.
///
/// Every block is recovered from the ciphertext alone (its own block and
/// its predecessor), so no block depends on a neighbour's plaintext.
///
/// # Errors
///
/// - [`CipherError::InvalidCiphertextLength`] unless the length is a positive
///   multiple of 16
/// - [`CipherError::InvalidPadding`] if the recovered padding is inconsistent;
///   the recovered bytes are zeroized first
pub fn cbc_decrypt_with<C: BlockCipher>(
    cipher: &C,
    ciphertext: &[u8],
    iv: &Iv,
) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidCiphertextLength);
    }

    let mut output = ciphertext.to_vec();
    let previous = core::iter::once(iv.as_slice()).chain(ciphertext.chunks_exact(BLOCK_SIZE));

    for (chunk, prev) in output.chunks_exact_mut(BLOCK_SIZE).zip(previous) {
        let block: &mut Block = chunk
            .try_into()
            .expect("infallible: chunks_exact_mut yields BLOCK_SIZE chunks");
        cipher.decrypt_block(block);
        xor_in_place(block, prev);
    }

    match pkcs7_unpad(&output, BLOCK_SIZE).map(<[u8]>::len) {
        Ok(len) => {
            output.truncate(len);
            Ok(output)
        }
        Err(e) => {
            output.zeroize();
            Err(e)
        }
    }
}

/// CBC-encrypts `plaintext` under a 16-byte AES key.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] unless `key` is 16 bytes.
pub fn cbc_encrypt(plaintext: &[u8], key: &[u8], iv: &Iv) -> Result<Vec<u8>, CipherError> {
    let cipher = Aes128::new(key)?;
    Ok(cbc_encrypt_with(&cipher, plaintext, iv))
}

/// CBC-decrypts `ciphertext` under a 16-byte AES key.
///
/// # Errors
///
/// [`CipherError::InvalidKeyLength`], or any error of [`cbc_decrypt_with`].
pub fn cbc_decrypt(ciphertext: &[u8], key: &[u8], iv: &Iv) -> Result<Vec<u8>, CipherError> {
    let cipher = Aes128::new(key)?;
    cbc_decrypt_with(&cipher, ciphertext, iv)
}
