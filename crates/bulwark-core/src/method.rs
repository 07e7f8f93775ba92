// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::algorithm::Algorithm;

/// Describes how a generic construction drives an underlying hash.
///
/// HMAC binds to one of these through `metadata_set`, HKDF reads its
/// `output_len` as `HashLen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashMethod {
    algorithm: Algorithm,
    block_len: usize,
    output_len: usize,
}

impl HashMethod {
    /// SHA-224 hash method
    pub const SHA224: Self = Self::for_algorithm(Algorithm::Sha224);

    /// SHA-256 hash method
    pub const SHA256: Self = Self::for_algorithm(Algorithm::Sha256);

    /// HMAC-SHA-224 authentication method
    pub const HMAC_SHA224: Self = Self::for_algorithm(Algorithm::HmacSha224);

    /// HMAC-SHA-256 authentication method
    pub const HMAC_SHA256: Self = Self::for_algorithm(Algorithm::HmacSha256);

    /// Creates a descriptor with explicit sizes.
    ///
    /// Sizes are validated by the consumer, not here.
    pub const fn new(algorithm: Algorithm, block_len: usize, output_len: usize) -> Self {
        Self {
            algorithm,
            block_len,
            output_len,
        }
    }

    /// Creates a descriptor using the algorithm's standard sizes
    pub const fn for_algorithm(algorithm: Algorithm) -> Self {
        Self::new(algorithm, algorithm.block_len(), algorithm.digest_len())
    }

    /// Algorithm tag passed to the hash engine
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Block size in bytes
    pub const fn block_len(&self) -> usize {
        self.block_len
    }

    /// Digest (ICV) size in bytes
    pub const fn output_len(&self) -> usize {
        self.output_len
    }
}
