// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128-GCM AEAD (SP 800-38D §7) with 96-bit nonces.
//!
//! Encryption: `C = CTR(K, nonce || 2, P)`, `T = GHASH(H, A, C) ^ E(K, J0)`
//! with `H = E(K, 0^128)` and `J0 = nonce || 1`. `J0` only ever masks the
//! tag. Decryption recomputes `T` over the received ciphertext and applies
//! the keystream only after a constant-time match.

use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use rampart_aes::Aes128;
use rampart_core::{
    BLOCK_SIZE, Block, BlockCipher, CipherError, NONCE_SIZE, Nonce, TAG_SIZE, Tag,
};
use rampart_modes::{CounterWidth, ctr_apply_keystream};
use rampart_util::{constant_time_eq, xor_in_place};

use super::ghash::Ghash;

/// AES-128-GCM keyed once, usable for many messages.
///
/// Holds the expanded key and hash subkey for a single key; both are
/// zeroized on drop. Nonces must never repeat under the same key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Aes128Gcm {
    cipher: Aes128,
    h: Block,
}

impl Aes128Gcm {
    /// Validates `key`, expands it and derives the hash subkey.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] unless `key` is 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let cipher = Aes128::new(key)?;
        let mut h: Block = [0; BLOCK_SIZE];
        cipher.encrypt_block(&mut h);

        Ok(Self { cipher, h })
    }

    /// Encrypts `buffer` in place and returns the tag.
    ///
    /// # Errors
    ///
    /// - [`CipherError::InvalidNonceLength`] unless `nonce` is 12 bytes
    /// - [`CipherError::CounterOverflow`] if `buffer` exceeds 2^32 - 2 blocks
    ///
    /// `buffer` is unchanged on error.
    pub fn encrypt_in_place_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        buffer: &mut [u8],
    ) -> Result<Tag, CipherError> {
        let nonce = to_nonce(nonce)?;

        ctr_apply_keystream(
            &self.cipher,
            &counter_block(nonce, 2),
            CounterWidth::U32,
            buffer,
        )?;

        Ok(self.compute_tag(nonce, aad, buffer))
    }

    /// Verifies `tag` over `buffer` and `aad`, then decrypts `buffer` in place.
    ///
    /// # Errors
    ///
    /// - [`CipherError::InvalidNonceLength`] unless `nonce` is 12 bytes
    /// - [`CipherError::AuthenticationFailed`] on tag mismatch; `buffer` is
    ///   zeroized and no keystream is ever applied to it
    /// - [`CipherError::CounterOverflow`] if `buffer` exceeds 2^32 - 2 blocks
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        buffer: &mut [u8],
        tag: &Tag,
    ) -> Result<(), CipherError> {
        let nonce = to_nonce(nonce)?;

        let mut expected = self.compute_tag(nonce, aad, buffer);
        let authentic = constant_time_eq(&expected, tag);
        expected.zeroize();

        if !authentic {
            buffer.zeroize();
            return Err(CipherError::AuthenticationFailed);
        }

        ctr_apply_keystream(
            &self.cipher,
            &counter_block(nonce, 2),
            CounterWidth::U32,
            buffer,
        )
    }

    /// Encrypts `plaintext` into a fresh `ciphertext || tag` buffer.
    ///
    /// # Errors
    ///
    /// Same as [`Aes128Gcm::encrypt_in_place_detached`].
    pub fn encrypt(
        &self,
        nonce: &[u8],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        let mut output = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        output.extend_from_slice(plaintext);

        match self.encrypt_in_place_detached(nonce, aad, &mut output) {
            Ok(tag) => {
                output.extend_from_slice(&tag);
                Ok(output)
            }
            Err(e) => {
                output.zeroize();
                Err(e)
            }
        }
    }

    /// Verifies and decrypts `ciphertext || tag` into a fresh buffer.
    ///
    /// # Errors
    ///
    /// - [`CipherError::CiphertextTooShort`] if `input` is shorter than the tag
    /// - otherwise as [`Aes128Gcm::decrypt_in_place_detached`]
    pub fn decrypt(
        &self,
        nonce: &[u8],
        aad: &[u8],
        input: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        let (ciphertext, tag) = split_tag(input)?;

        let mut output = ciphertext.to_vec();
        self.decrypt_in_place_detached(nonce, aad, &mut output, tag)?;

        Ok(output)
    }

    fn compute_tag(&self, nonce: &Nonce, aad: &[u8], ciphertext: &[u8]) -> Tag {
        let mut hasher = Ghash::new(&self.h);
        hasher.update_padded(aad);
        hasher.update_padded(ciphertext);
        let mut tag = hasher.finalize(aad.len(), ciphertext.len());

        let mut mask = counter_block(nonce, 1);
        self.cipher.encrypt_block(&mut mask);
        xor_in_place(&mut tag, &mask);
        mask.zeroize();

        tag
    }
}

impl core::fmt::Debug for Aes128Gcm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes128Gcm {{ [protected] }}")
    }
}

/// `nonce || counter` with the counter as 32-bit big-endian.
fn counter_block(nonce: &Nonce, counter: u32) -> Block {
    let mut block: Block = [0; BLOCK_SIZE];
    block[..NONCE_SIZE].copy_from_slice(nonce);
    block[NONCE_SIZE..].copy_from_slice(&counter.to_be_bytes());
    block
}

fn to_nonce(nonce: &[u8]) -> Result<&Nonce, CipherError> {
    nonce.try_into().map_err(|_| CipherError::InvalidNonceLength)
}

fn split_tag(input: &[u8]) -> Result<(&[u8], &Tag), CipherError> {
    if input.len() < TAG_SIZE {
        return Err(CipherError::CiphertextTooShort);
    }

    let (ciphertext, tag) = input.split_at(input.len() - TAG_SIZE);
    let tag = tag
        .try_into()
        .expect("infallible: split leaves exactly TAG_SIZE bytes");

    Ok((ciphertext, tag))
}

/// Encrypts `plaintext` under `key` and `nonce`, returning `ciphertext || tag`.
///
/// The hash subkey and key schedule are derived for this call only.
///
/// # Errors
///
/// - [`CipherError::InvalidKeyLength`] unless `key` is 16 bytes
/// - [`CipherError::InvalidNonceLength`] unless `nonce` is 12 bytes
/// - [`CipherError::CounterOverflow`] for plaintexts over 2^32 - 2 blocks
pub fn gcm_encrypt(
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, CipherError> {
    Aes128Gcm::new(key)?.encrypt(nonce, aad, plaintext)
}

/// Verifies and decrypts `ciphertext || tag` under `key` and `nonce`.
///
/// # Errors
///
/// - [`CipherError::CiphertextTooShort`] if `input` is shorter than 16 bytes
/// - [`CipherError::InvalidKeyLength`] / [`CipherError::InvalidNonceLength`]
/// - [`CipherError::AuthenticationFailed`] if the tag does not verify; no
///   plaintext is produced
pub fn gcm_decrypt(
    input: &[u8],
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, CipherError> {
    split_tag(input)?;
    Aes128Gcm::new(key)?.decrypt(nonce, aad, input)
}
