// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::Algorithm;

#[test]
fn test_digest_lengths() {
    assert_eq!(Algorithm::Sha1.digest_len(), 20);
    assert_eq!(Algorithm::Sha224.digest_len(), 28);
    assert_eq!(Algorithm::Sha256.digest_len(), 32);
    assert_eq!(Algorithm::Sha384.digest_len(), 48);
    assert_eq!(Algorithm::Sha512.digest_len(), 64);
    assert_eq!(Algorithm::HmacSha224.digest_len(), 28);
    assert_eq!(Algorithm::HmacSha256.digest_len(), 32);
}

#[test]
fn test_block_lengths() {
    assert_eq!(Algorithm::Sha224.block_len(), 64);
    assert_eq!(Algorithm::Sha256.block_len(), 64);
    assert_eq!(Algorithm::HmacSha256.block_len(), 64);
    assert_eq!(Algorithm::Sha384.block_len(), 128);
    assert_eq!(Algorithm::HmacSha512.block_len(), 128);
}

#[test]
fn test_is_hmac() {
    assert!(Algorithm::HmacSha256.is_hmac());
    assert!(Algorithm::HmacSha1.is_hmac());
    assert!(!Algorithm::Sha256.is_hmac());
    assert!(!Algorithm::Sha224.is_hmac());
}

#[test]
fn test_display_uses_name() {
    assert_eq!(format!("{}", Algorithm::Sha224), "SHA-224");
    assert_eq!(format!("{}", Algorithm::HmacSha256), "HMAC-SHA-256");
}
