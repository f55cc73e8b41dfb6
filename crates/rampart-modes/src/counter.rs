// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counter block arithmetic.

use rampart_core::{BLOCK_SIZE, Block, CipherError};
use rampart_util::{u32_from_be, u32_to_be};

/// Width of the incrementing field at the end of a counter block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CounterWidth {
    /// Trailing 32 bits, big-endian. The leading 96 bits never change.
    /// This is the GCM convention.
    #[default]
    U32,

    /// The whole 128-bit block as one big-endian integer.
    U128,
}

impl CounterWidth {
    /// Number of blocks that can be produced from `counter` before the
    /// counter field would wrap (saturating at `u128::MAX`).
    pub fn blocks_available(self, counter: &Block) -> u128 {
        let (current, max) = match self {
            Self::U32 => (u128::from(u32_from_be(tail(counter))), u128::from(u32::MAX)),
            Self::U128 => (u128::from_be_bytes(*counter), u128::MAX),
        };

        (max - current).saturating_add(1)
    }

    /// Ensures `blocks` keystream blocks fit before the counter wraps.
    pub(crate) fn check_capacity(self, counter: &Block, blocks: u128) -> Result<(), CipherError> {
        if blocks > self.blocks_available(counter) {
            return Err(CipherError::CounterOverflow);
        }
        Ok(())
    }

    /// Advances `counter` by one.
    pub fn increment(self, counter: &mut Block) {
        match self {
            Self::U32 => {
                let next = u32_from_be(tail(counter)).wrapping_add(1);
                u32_to_be(next, tail_mut(counter));
            }
            Self::U128 => {
                *counter = u128::from_be_bytes(*counter).wrapping_add(1).to_be_bytes();
            }
        }
    }
}

/// Number of keystream blocks covering `len` bytes.
#[inline(always)]
pub(crate) fn blocks_for(len: usize) -> u128 {
    len.div_ceil(BLOCK_SIZE) as u128
}

fn tail(counter: &Block) -> &[u8; 4] {
    counter[BLOCK_SIZE - 4..]
        .try_into()
        .expect("infallible: counter tail is exactly 4 bytes")
}

fn tail_mut(counter: &mut Block) -> &mut [u8; 4] {
    (&mut counter[BLOCK_SIZE - 4..])
        .try_into()
        .expect("infallible: counter tail is exactly 4 bytes")
}
