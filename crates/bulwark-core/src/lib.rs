// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core building blocks shared by every layer of the bulwark stack.
//!
//! - [`Algorithm`]: algorithm tags understood by the method layer
//! - [`HashMethod`]: binding descriptor (tag, block size, output size)
//! - [`Digest`] / [`Mac`]: the seams HMAC and HKDF are generic over
//! - [`CryptoError`]: the single error type of the stack
//!
//! All state types built on these traits are fixed-size and heap-free.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod consts;
mod error;
mod method;
mod traits;

pub use algorithm::Algorithm;
pub use consts::{MAX_BLOCK_LEN, MAX_DIGEST_LEN};
pub use error::CryptoError;
pub use method::HashMethod;
pub use traits::{Digest, Mac};
