// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seams between the layers of the stack.

use zeroize::Zeroize;

use crate::algorithm::Algorithm;
use crate::error::CryptoError;
use crate::method::HashMethod;

/// Streaming hash engine.
///
/// Contract: `initialize` → `update`* → `finalize`. After `finalize` the
/// engine must be initialized again before it accepts more input.
pub trait Digest: Zeroize {
    /// Resets the engine and loads the initial values for `algorithm`.
    fn initialize(&mut self, algorithm: Algorithm) -> Result<(), CryptoError>;

    /// Absorbs `data`. A zero-length update succeeds without effect.
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;

    /// Pads, writes the digest to the front of `out` and returns its length.
    fn finalize(&mut self, out: &mut [u8]) -> Result<usize, CryptoError>;

    /// Digest length for the currently selected algorithm
    fn output_len(&self) -> usize;

    /// Digest length `algorithm` would select, without touching the state.
    ///
    /// Fails with the same error `initialize` would report for `algorithm`.
    fn output_len_for(&self, algorithm: Algorithm) -> Result<usize, CryptoError>;
}

/// Keyed pseudorandom function (HMAC) as consumed by HKDF.
pub trait Mac: Zeroize {
    /// Binds the MAC to an underlying hash method.
    fn metadata_set(&mut self, method: HashMethod) -> Result<(), CryptoError>;

    /// Currently bound hash method, if any
    fn method(&self) -> Option<HashMethod>;

    /// Keys the MAC and starts the inner hash.
    fn initialize(&mut self, key: &[u8]) -> Result<(), CryptoError>;

    /// Feeds message bytes into the inner hash.
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;

    /// Completes the MAC, writes up to `out.len()` bytes and returns the count.
    fn digest_calculate(&mut self, out: &mut [u8]) -> Result<usize, CryptoError>;

    /// One-shot `initialize` → `update` → `digest_calculate`.
    fn authenticate(
        &mut self,
        key: &[u8],
        data: &[u8],
        out: &mut [u8],
    ) -> Result<usize, CryptoError> {
        self.initialize(key)?;
        self.update(data)?;
        self.digest_calculate(out)
    }
}
