// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// Algorithm tags recognised by the method layer.
///
/// A tag selects initial constants and output width inside a hash engine.
/// Engines implement only a subset and reject the rest with
/// [`CryptoError::UnsupportedAlgorithm`](crate::CryptoError::UnsupportedAlgorithm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-1 (FIPS 180-4)
    Sha1,
    /// SHA-224 (FIPS 180-4)
    Sha224,
    /// SHA-256 (FIPS 180-4)
    Sha256,
    /// SHA-384 (FIPS 180-4)
    Sha384,
    /// SHA-512 (FIPS 180-4)
    Sha512,
    /// HMAC over SHA-1
    HmacSha1,
    /// HMAC over SHA-224
    HmacSha224,
    /// HMAC over SHA-256
    HmacSha256,
    /// HMAC over SHA-384
    HmacSha384,
    /// HMAC over SHA-512
    HmacSha512,
}

impl Algorithm {
    /// Human-readable algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
            Algorithm::HmacSha1 => "HMAC-SHA-1",
            Algorithm::HmacSha224 => "HMAC-SHA-224",
            Algorithm::HmacSha256 => "HMAC-SHA-256",
            Algorithm::HmacSha384 => "HMAC-SHA-384",
            Algorithm::HmacSha512 => "HMAC-SHA-512",
        }
    }

    /// Whether the tag names an HMAC construction rather than a bare hash
    pub const fn is_hmac(self) -> bool {
        matches!(
            self,
            Algorithm::HmacSha1
                | Algorithm::HmacSha224
                | Algorithm::HmacSha256
                | Algorithm::HmacSha384
                | Algorithm::HmacSha512
        )
    }

    /// Digest (ICV) length in bytes
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 | Algorithm::HmacSha1 => 20,
            Algorithm::Sha224 | Algorithm::HmacSha224 => 28,
            Algorithm::Sha256 | Algorithm::HmacSha256 => 32,
            Algorithm::Sha384 | Algorithm::HmacSha384 => 48,
            Algorithm::Sha512 | Algorithm::HmacSha512 => 64,
        }
    }

    /// Compression block length in bytes
    pub const fn block_len(self) -> usize {
        match self {
            Algorithm::Sha384
            | Algorithm::Sha512
            | Algorithm::HmacSha384
            | Algorithm::HmacSha512 => 128,
            _ => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
