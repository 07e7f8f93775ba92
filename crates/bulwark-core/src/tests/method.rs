// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{Algorithm, HashMethod};

#[test]
fn test_sha256_method() {
    let m = HashMethod::SHA256;
    assert_eq!(m.algorithm(), Algorithm::Sha256);
    assert_eq!(m.block_len(), 64);
    assert_eq!(m.output_len(), 32);
}

#[test]
fn test_sha224_method() {
    let m = HashMethod::SHA224;
    assert_eq!(m.algorithm(), Algorithm::Sha224);
    assert_eq!(m.block_len(), 64);
    assert_eq!(m.output_len(), 28);
}

#[test]
fn test_hmac_methods_share_hash_sizes() {
    assert_eq!(HashMethod::HMAC_SHA256.output_len(), HashMethod::SHA256.output_len());
    assert_eq!(HashMethod::HMAC_SHA224.block_len(), HashMethod::SHA224.block_len());
    assert_eq!(HashMethod::HMAC_SHA256.algorithm(), Algorithm::HmacSha256);
}

#[test]
fn test_explicit_sizes_are_kept() {
    let m = HashMethod::new(Algorithm::Sha256, 200, 80);
    assert_eq!(m.block_len(), 200);
    assert_eq!(m.output_len(), 80);
}
