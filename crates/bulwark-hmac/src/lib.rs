// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over any [`bulwark_core::Digest`].
//!
//! [`HmacState`] binds to a hash through a [`bulwark_core::HashMethod`]
//! and exposes the `initialize` → `update` → `digest_calculate` flow
//! consumed by HKDF through [`bulwark_core::Mac`].
//!
//! ```
//! use bulwark_hmac::hmac_sha256;
//!
//! let tag = hmac_sha256(b"key", b"The quick brown fox jumps over the lazy dog")
//!     .expect("Failed to hmac_sha256(..)");
//! assert_eq!(tag[0], 0xf7);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod hmac;

pub use hmac::{HmacSha224, HmacSha256, HmacState, hmac_sha224, hmac_sha256};
