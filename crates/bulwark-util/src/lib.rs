// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Zeroization probes and known-answer-test helpers.
//!
//! Hex helpers allocate and are only compiled with the `test-utils` feature.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(feature = "test-utils")]
mod hex;

#[cfg(feature = "test-utils")]
pub use hex::{bytes_to_hex, hex_to_bytes};

/// Checks whether every byte in a slice is zero.
///
/// # Example
///
/// ```
/// use bulwark_util::is_slice_zeroized;
///
/// let zeroed = [0u8; 10];
/// assert!(is_slice_zeroized(&zeroed));
///
/// let not_zeroed = [0u8, 1, 0, 0];
/// assert!(!is_slice_zeroized(&not_zeroed));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Checks whether every word in a slice is zero.
#[inline(always)]
pub fn is_words_zeroized(words: &[u32]) -> bool {
    words.iter().all(|&w| w == 0)
}
