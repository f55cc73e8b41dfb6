// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use rampart_core::{CipherError, TAG_SIZE};
use rampart_modes::ctr_transform;
use rampart_util::is_slice_zeroized;

use crate::{Aes128Gcm, gcm_decrypt, gcm_encrypt};

const KEY: &[u8; 16] = b"1234567890123456";
const NONCE: &[u8; 12] = b"123456789012";

#[test]
fn test_hello_roundtrip_without_aad() {
    let plaintext = b"Hello, AES-GCM!";

    let sealed = gcm_encrypt(plaintext, KEY, NONCE, b"").expect("valid inputs");
    assert_eq!(sealed.len(), plaintext.len() + TAG_SIZE);

    let opened = gcm_decrypt(&sealed, KEY, NONCE, b"").expect("authentic");
    assert_eq!(opened, plaintext);

    assert_eq!(
        gcm_decrypt(&sealed, KEY, NONCE, b"x"),
        Err(CipherError::AuthenticationFailed)
    );
}

#[test]
fn test_roundtrip_with_aad() {
    let plaintext = b"Secret message with AAD";
    let aad = b"metadata:version=1.0";

    let sealed = gcm_encrypt(plaintext, KEY, NONCE, aad).expect("valid inputs");
    let opened = gcm_decrypt(&sealed, KEY, NONCE, aad).expect("authentic");

    assert_eq!(opened, plaintext);
}

#[test]
fn test_authentication_failures() {
    let aad = b"correct-aad";
    let sealed = gcm_encrypt(b"Authenticated message", KEY, NONCE, aad).expect("valid inputs");

    assert_eq!(
        gcm_decrypt(&sealed, KEY, NONCE, b"wrong-aad"),
        Err(CipherError::AuthenticationFailed)
    );
    assert_eq!(
        gcm_decrypt(&sealed, b"6543210987654321", NONCE, aad),
        Err(CipherError::AuthenticationFailed)
    );
    assert_eq!(
        gcm_decrypt(&sealed, KEY, b"210987654321", aad),
        Err(CipherError::AuthenticationFailed)
    );

    let mut tampered = sealed.clone();
    tampered[5] ^= 0x01;
    assert_eq!(
        gcm_decrypt(&tampered, KEY, NONCE, aad),
        Err(CipherError::AuthenticationFailed)
    );
}

#[test]
fn test_every_single_bit_flip_rejected() {
    let aad = b"header";
    let sealed = gcm_encrypt(b"sixteen+ byte message", KEY, NONCE, aad).expect("valid inputs");

    for i in 0..sealed.len() {
        for bit in 0..8 {
            let mut tampered = sealed.clone();
            tampered[i] ^= 1 << bit;
            assert_eq!(
                gcm_decrypt(&tampered, KEY, NONCE, aad),
                Err(CipherError::AuthenticationFailed),
                "ciphertext/tag byte {i} bit {bit}"
            );
        }
    }

    for i in 0..KEY.len() {
        for bit in 0..8 {
            let mut key = *KEY;
            key[i] ^= 1 << bit;
            assert_eq!(
                gcm_decrypt(&sealed, &key, NONCE, aad),
                Err(CipherError::AuthenticationFailed),
                "key byte {i} bit {bit}"
            );
        }
    }

    for i in 0..aad.len() {
        for bit in 0..8 {
            let mut bad_aad = *aad;
            bad_aad[i] ^= 1 << bit;
            assert_eq!(
                gcm_decrypt(&sealed, KEY, NONCE, &bad_aad),
                Err(CipherError::AuthenticationFailed),
                "aad byte {i} bit {bit}"
            );
        }
    }
}

#[test]
fn test_truncated_or_extended_input_rejected() {
    let sealed = gcm_encrypt(b"message", KEY, NONCE, b"").expect("valid inputs");

    assert_eq!(
        gcm_decrypt(&sealed[..sealed.len() - 1], KEY, NONCE, b""),
        Err(CipherError::AuthenticationFailed)
    );

    let mut extended = sealed.clone();
    extended.push(0);
    assert_eq!(
        gcm_decrypt(&extended, KEY, NONCE, b""),
        Err(CipherError::AuthenticationFailed)
    );
}

#[test]
fn test_empty_plaintext_is_tag_only() {
    let sealed = gcm_encrypt(b"", KEY, NONCE, b"metadata").expect("valid inputs");
    assert_eq!(sealed.len(), TAG_SIZE);

    let opened = gcm_decrypt(&sealed, KEY, NONCE, b"metadata").expect("authentic");
    assert!(opened.is_empty());
}

#[test]
fn test_large_plaintext() {
    let plaintext: Vec<u8> = (0..10_000).map(|i| (i % 256) as u8).collect();

    let sealed = gcm_encrypt(&plaintext, KEY, NONCE, b"large-data").expect("valid inputs");
    let opened = gcm_decrypt(&sealed, KEY, NONCE, b"large-data").expect("authentic");

    assert_eq!(opened, plaintext);
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        gcm_encrypt(b"test", b"short", NONCE, b""),
        Err(CipherError::InvalidKeyLength)
    );
    assert_eq!(
        gcm_encrypt(b"test", KEY, b"short", b""),
        Err(CipherError::InvalidNonceLength)
    );
    assert_eq!(
        gcm_encrypt(b"test", KEY, &[0u8; 16], b""),
        Err(CipherError::InvalidNonceLength)
    );
    assert_eq!(
        gcm_decrypt(b"short", KEY, NONCE, b""),
        Err(CipherError::CiphertextTooShort)
    );
    assert_eq!(
        gcm_decrypt(&[0u8; 16], b"short", NONCE, b""),
        Err(CipherError::InvalidKeyLength)
    );
    assert_eq!(
        gcm_decrypt(&[0u8; 16], KEY, b"short", b""),
        Err(CipherError::InvalidNonceLength)
    );
}

#[test]
fn test_data_encrypted_from_counter_two() {
    // Counter 1 is reserved for the tag mask; data starts at nonce || 2.
    let plaintext = b"counter layout check, more than one block";
    let sealed = gcm_encrypt(plaintext, KEY, NONCE, b"").expect("valid inputs");

    let mut counter = [0u8; 16];
    counter[..12].copy_from_slice(NONCE);
    counter[15] = 2;
    let expected = ctr_transform(plaintext, KEY, &counter).expect("valid key");

    assert_eq!(&sealed[..plaintext.len()], expected.as_slice());
}

#[test]
fn test_detached_failure_zeroizes_buffer() {
    let gcm = Aes128Gcm::new(KEY).expect("valid key");
    let mut buffer = *b"detached payload";
    let mut tag = gcm
        .encrypt_in_place_detached(NONCE, b"aad", &mut buffer)
        .expect("valid nonce");
    tag[0] ^= 0x80;

    assert_eq!(
        gcm.decrypt_in_place_detached(NONCE, b"aad", &mut buffer, &tag),
        Err(CipherError::AuthenticationFailed)
    );
    assert!(is_slice_zeroized(&buffer));
}

#[test]
fn test_detached_roundtrip() {
    let gcm = Aes128Gcm::new(KEY).expect("valid key");
    let mut buffer = *b"detached payload";
    let tag = gcm
        .encrypt_in_place_detached(NONCE, b"aad", &mut buffer)
        .expect("valid nonce");
    assert_ne!(&buffer, b"detached payload");

    gcm.decrypt_in_place_detached(NONCE, b"aad", &mut buffer, &tag)
        .expect("authentic");
    assert_eq!(&buffer, b"detached payload");
}

#[test]
fn test_invalid_nonce_leaves_buffer_untouched() {
    let gcm = Aes128Gcm::new(KEY).expect("valid key");
    let mut buffer = *b"untouched";

    assert_eq!(
        gcm.encrypt_in_place_detached(b"bad", b"", &mut buffer),
        Err(CipherError::InvalidNonceLength)
    );
    assert_eq!(&buffer, b"untouched");
}

#[test]
fn test_object_matches_free_functions() {
    let gcm = Aes128Gcm::new(KEY).expect("valid key");

    let a = gcm.encrypt(NONCE, b"aad", b"payload").expect("valid nonce");
    let b = gcm_encrypt(b"payload", KEY, NONCE, b"aad").expect("valid inputs");
    assert_eq!(a, b);
    assert_eq!(gcm.decrypt(NONCE, b"aad", &b), Ok(b"payload".to_vec()));
}

#[test]
fn test_debug_is_redacted() {
    let gcm = Aes128Gcm::new(KEY).expect("valid key");
    assert_eq!(format!("{gcm:?}"), "Aes128Gcm { [protected] }");
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 12]>(),
        aad in proptest::collection::vec(any::<u8>(), 0..40),
        plaintext in proptest::collection::vec(any::<u8>(), 0..80),
    ) {
        let sealed = gcm_encrypt(&plaintext, &key, &nonce, &aad).expect("valid inputs");

        prop_assert_eq!(sealed.len(), plaintext.len() + TAG_SIZE);
        prop_assert_eq!(gcm_decrypt(&sealed, &key, &nonce, &aad), Ok(plaintext));
    }
}
