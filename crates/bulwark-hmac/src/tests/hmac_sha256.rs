// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// HMAC-SHA-256 known-answer tests
//
// References:
// [1] RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//     HMAC-SHA-384, and HMAC-SHA-512, Section 4
//     https://datatracker.ietf.org/doc/html/rfc4231

use bulwark_core::HashMethod;
use bulwark_util::hex_to_bytes;

use crate::{HmacSha256, hmac_sha256};

struct Case {
    name: &'static str,
    key: Vec<u8>,
    data: Vec<u8>,
    expected: &'static str,
}

fn rfc4231_cases() -> Vec<Case> {
    vec![
        Case {
            name: "test case 1",
            key: vec![0x0b; 20],
            data: b"Hi There".to_vec(),
            expected: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
        },
        Case {
            name: "test case 2 (key shorter than output)",
            key: b"Jefe".to_vec(),
            data: b"what do ya want for nothing?".to_vec(),
            expected: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
        },
        Case {
            name: "test case 3",
            key: vec![0xaa; 20],
            data: vec![0xdd; 50],
            expected: "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
        },
        Case {
            name: "test case 4",
            key: (0x01..=0x19).collect(),
            data: vec![0xcd; 50],
            expected: "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b",
        },
        Case {
            name: "test case 6 (key larger than block)",
            key: vec![0xaa; 131],
            data: b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
            expected: "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
        },
        Case {
            name: "test case 7 (key and data larger than block)",
            key: vec![0xaa; 131],
            data: b"This is a test using a larger than block-size key and a larger than block-size data. The key needs to be hashed before being used by the HMAC algorithm.".to_vec(),
            expected: "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2",
        },
    ]
}

#[test]
fn test_hmac_sha256_rfc4231() {
    for case in rfc4231_cases() {
        let tag = hmac_sha256(&case.key, &case.data).expect("Failed to hmac_sha256(..)");
        let expected = hex_to_bytes(case.expected);

        assert_eq!(tag.as_slice(), expected.as_slice(), "{}", case.name);
    }
}

#[test]
fn test_hmac_sha256_rfc4231_streaming() {
    let mut state =
        HmacSha256::with_method(HashMethod::HMAC_SHA256).expect("Failed to with_method(..)");

    for case in rfc4231_cases() {
        state.initialize(&case.key).expect("Failed to initialize(..)");
        for chunk in case.data.chunks(7) {
            state.update(chunk).expect("Failed to update(..)");
        }

        let mut tag = [0u8; 32];
        let written = state.digest_calculate(&mut tag).expect("Failed to digest_calculate(..)");

        assert_eq!(written, 32);
        assert_eq!(tag.as_slice(), hex_to_bytes(case.expected).as_slice(), "{}", case.name);
    }
}

#[test]
fn test_hmac_sha256_truncated_output() {
    // RFC 4231 test case 5: output truncated to 128 bits
    let mut state =
        HmacSha256::with_method(HashMethod::HMAC_SHA256).expect("Failed to with_method(..)");

    let mut tag = [0u8; 16];
    let written = state
        .hmac(&[0x0c; 20], b"Test With Truncation", &mut tag)
        .expect("Failed to hmac(..)");

    assert_eq!(written, 16);
    assert_eq!(tag.as_slice(), hex_to_bytes("a3b6167473100ee06e0c796c2955552b").as_slice());
}

#[test]
fn test_hmac_sha256_oversized_output_buffer() {
    let mut state =
        HmacSha256::with_method(HashMethod::HMAC_SHA256).expect("Failed to with_method(..)");

    let mut out = [0xEEu8; 48];
    let written = state
        .hmac(b"Jefe", b"what do ya want for nothing?", &mut out)
        .expect("Failed to hmac(..)");

    assert_eq!(written, 32);
    assert_eq!(&out[32..], &[0xEEu8; 16]);
}

#[test]
fn test_hmac_sha256_plain_hash_tag() {
    // Binding with the plain SHA-256 method yields the same MAC
    let mut state = HmacSha256::with_method(HashMethod::SHA256).expect("Failed to with_method(..)");

    let mut tag = [0u8; 32];
    state
        .hmac(b"Jefe", b"what do ya want for nothing?", &mut tag)
        .expect("Failed to hmac(..)");

    assert_eq!(
        tag,
        hmac_sha256(b"Jefe", b"what do ya want for nothing?").expect("Failed to hmac_sha256(..)")
    );
}

#[test]
fn test_hmac_sha256_verify() {
    let mut state =
        HmacSha256::with_method(HashMethod::HMAC_SHA256).expect("Failed to with_method(..)");
    let tag = hex_to_bytes("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843");
    let msg = b"what do ya want for nothing?";

    assert!(state.verify(b"Jefe", msg, &tag).expect("Failed to verify(..)"));
    assert!(state.verify(b"Jefe", msg, &tag[..16]).expect("Failed to verify(..)"));
    let altered = b"what do ya want for nothing!";
    assert!(!state.verify(b"Jefe", altered, &tag).expect("Failed to verify(..)"));

    let mut forged = tag.clone();
    forged[31] ^= 0x01;
    assert!(!state.verify(b"Jefe", msg, &forged).expect("Failed to verify(..)"));
}
