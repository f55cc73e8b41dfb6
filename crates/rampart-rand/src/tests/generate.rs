// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::{EntropyError, SystemEntropySource, random_iv, random_nonce};

#[test]
fn test_random_iv_and_nonce_sizes() {
    let entropy = SystemEntropySource {};

    let iv = random_iv(&entropy).expect("entropy available");
    let nonce = random_nonce(&entropy).expect("entropy available");

    assert_eq!(iv.len(), 16);
    assert_eq!(nonce.len(), 12);
}

#[test]
fn test_consecutive_ivs_differ() {
    let entropy = SystemEntropySource {};

    let a = random_iv(&entropy).expect("entropy available");
    let b = random_iv(&entropy).expect("entropy available");

    assert_ne!(a, b);
}

#[test]
fn test_failure_propagates() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    assert_eq!(random_iv(&entropy), Err(EntropyError::EntropyNotAvailable));
    assert_eq!(random_nonce(&entropy), Err(EntropyError::EntropyNotAvailable));
    assert_eq!(entropy.call_count(), 2);
}

#[test]
fn test_fixed_behaviour_is_deterministic() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Fixed(0x24));

    assert_eq!(random_iv(&entropy), Ok([0x24; 16]));
    assert_eq!(random_nonce(&entropy), Ok([0x24; 12]));
}

#[test]
fn test_reference_is_an_entropy_source() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Fixed(1));
    let by_ref = &entropy;

    assert_eq!(random_iv(&by_ref), Ok([1; 16]));
}
