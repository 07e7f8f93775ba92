// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 and SHA-224 per FIPS 180-4 / RFC 6234.
//!
//! [`Sha256State`] is a fixed-size streaming engine implementing
//! [`bulwark_core::Digest`], so it can be plugged into the generic HMAC
//! construction. All state lives inside the struct and is zeroized on drop.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod sha256;
mod word;

pub use consts::{BLOCK_LEN, SHA224_HASH_LEN, SHA256_HASH_LEN};
pub use sha256::{Sha256State, sha224, sha256};
