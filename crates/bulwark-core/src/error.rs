// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Errors reported by the hash, HMAC and HKDF engines.
///
/// Every error is raised before the offending copy or computation happens.
/// On error the contents of any caller-supplied output buffer are undefined.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// A caller-supplied buffer or method size does not fit the operation
    #[error("invalid buffer size: {required} bytes required, {provided} provided")]
    InvalidBufferSize {
        /// Bytes the operation needs
        required: usize,
        /// Bytes the caller supplied
        provided: usize,
    },

    /// An internal fixed-capacity buffer would overflow
    #[error("size error: {required} bytes required, capacity is {capacity}")]
    SizeError {
        /// Bytes the operation needs
        required: usize,
        /// Capacity of the internal buffer
        capacity: usize,
    },

    /// A required method binding is missing or unusable
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The underlying primitive was never bound to a hash method
    #[error("method initialization failure: no hash method bound")]
    MethodInitializationFailure,

    /// The engine does not implement the requested algorithm
    #[error("algorithm {0} is not supported by this engine")]
    UnsupportedAlgorithm(Algorithm),

    /// The operation needs state that has not been established yet
    #[error("not ready: {0}")]
    NotReady(&'static str),

    /// Requested output length exceeds maximum (255 * HashLen)
    #[error("requested output length exceeds maximum (255 * HashLen)")]
    OutputTooLong,
}
