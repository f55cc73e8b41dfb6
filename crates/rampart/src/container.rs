// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sealed container formats.
//!
//! Every operation builds its output in a fresh buffer; inputs are never
//! aliased with outputs.

use rampart_core::{CipherError, IV_SIZE, Iv, NONCE_SIZE, TAG_SIZE};
use rampart_gcm::{gcm_decrypt, gcm_encrypt};
use rampart_modes::{cbc_decrypt, cbc_encrypt};
use rampart_rand::{EntropySource, random_iv, random_nonce};
use tracing::{debug, warn};

use crate::error::ContainerError;

/// Smallest CBC container accepted by [`open_cbc`] (the IV prefix).
pub const CBC_CONTAINER_MIN: usize = IV_SIZE;

/// Smallest GCM container accepted by [`open_gcm`] (nonce prefix and tag).
pub const GCM_CONTAINER_MIN: usize = NONCE_SIZE + TAG_SIZE;

/// Encrypts `plaintext` under a fresh random IV and returns `IV ‖ ciphertext`.
///
/// # Errors
///
/// - [`ContainerError::Entropy`] if no IV could be drawn
/// - [`ContainerError::Cipher`] with [`CipherError::InvalidKeyLength`]
pub fn seal_cbc<E: EntropySource>(
    plaintext: &[u8],
    key: &[u8],
    entropy: &E,
) -> Result<Vec<u8>, ContainerError> {
    debug!(plaintext_len = plaintext.len(), "sealing cbc container");

    let iv = random_iv(entropy)?;
    let ciphertext = cbc_encrypt(plaintext, key, &iv)?;

    let mut container = Vec::with_capacity(IV_SIZE + ciphertext.len());
    container.extend_from_slice(&iv);
    container.extend_from_slice(&ciphertext);

    Ok(container)
}

/// Splits `IV ‖ ciphertext` and decrypts it.
///
/// # Errors
///
/// - [`ContainerError::ContainerTooShort`] below [`CBC_CONTAINER_MIN`] bytes
/// - [`ContainerError::Cipher`] for key, length or padding failures
pub fn open_cbc(container: &[u8], key: &[u8]) -> Result<Vec<u8>, ContainerError> {
    debug!(container_len = container.len(), "opening cbc container");

    if container.len() < CBC_CONTAINER_MIN {
        return Err(ContainerError::ContainerTooShort(CBC_CONTAINER_MIN));
    }

    let (iv, ciphertext) = container.split_at(IV_SIZE);
    let iv: &Iv = iv.try_into().expect("infallible: split at IV_SIZE");

    Ok(cbc_decrypt(ciphertext, key, iv)?)
}

/// Encrypts `plaintext` under a fresh random nonce and returns
/// `nonce ‖ ciphertext ‖ tag`.
///
/// # Errors
///
/// - [`ContainerError::Entropy`] if no nonce could be drawn
/// - [`ContainerError::Cipher`] for key length or counter overflow
pub fn seal_gcm<E: EntropySource>(
    plaintext: &[u8],
    key: &[u8],
    aad: &[u8],
    entropy: &E,
) -> Result<Vec<u8>, ContainerError> {
    debug!(
        plaintext_len = plaintext.len(),
        aad_len = aad.len(),
        "sealing gcm container"
    );

    let nonce = random_nonce(entropy)?;
    let sealed = gcm_encrypt(plaintext, key, &nonce, aad)?;

    let mut container = Vec::with_capacity(NONCE_SIZE + sealed.len());
    container.extend_from_slice(&nonce);
    container.extend_from_slice(&sealed);

    Ok(container)
}

/// Splits `nonce ‖ ciphertext ‖ tag`, verifies the tag and decrypts.
///
/// # Errors
///
/// - [`ContainerError::ContainerTooShort`] below [`GCM_CONTAINER_MIN`] bytes
/// - [`ContainerError::Cipher`] with [`CipherError::AuthenticationFailed`]
///   if the container, key or `aad` do not match; no plaintext is returned
pub fn open_gcm(container: &[u8], key: &[u8], aad: &[u8]) -> Result<Vec<u8>, ContainerError> {
    debug!(
        container_len = container.len(),
        aad_len = aad.len(),
        "opening gcm container"
    );

    if container.len() < GCM_CONTAINER_MIN {
        return Err(ContainerError::ContainerTooShort(GCM_CONTAINER_MIN));
    }

    let (nonce, sealed) = container.split_at(NONCE_SIZE);

    gcm_decrypt(sealed, key, nonce, aad).map_err(|e| {
        if e == CipherError::AuthenticationFailed {
            warn!("gcm container failed authentication");
        }
        ContainerError::from(e)
    })
}
