// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Single-block compression against the FIPS 180-4 "abc" example, where the
// padded message is exactly one block and H(1) is the digest.

use crate::{BLOCK_LEN, Sha256State};

fn abc_padded_block() -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    // 24-bit message length
    block[BLOCK_LEN - 1] = 0x18;
    block
}

#[test]
fn test_process_buffer_abc_block() {
    let mut state = Sha256State::sha256();
    state.process_buffer(&abc_padded_block());

    let expected: [u32; 8] = [
        0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
        0xf20015ad,
    ];
    assert_eq!(state.words(), &expected);
}

#[test]
fn test_process_buffer_does_not_touch_length() {
    let mut state = Sha256State::sha256();
    state.process_buffer(&abc_padded_block());

    assert_eq!(state.bit_count(), 0);
    assert!(state.pending().iter().all(|&b| b == 0));
}

#[test]
fn test_process_buffer_is_deterministic() {
    let block = [0x5au8; BLOCK_LEN];

    let mut a = Sha256State::sha256();
    let mut b = Sha256State::sha256();
    a.process_buffer(&block);
    b.process_buffer(&block);

    assert_eq!(a.words(), b.words());

    // Chaining a second block changes the state again
    a.process_buffer(&block);
    assert_ne!(a.words(), b.words());
}
