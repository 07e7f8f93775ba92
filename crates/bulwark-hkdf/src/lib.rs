// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF per RFC 5869, generic over any [`bulwark_core::Mac`].
//!
//! The expand step builds `T(i-1) || info || i` in a fixed scratch buffer
//! whose capacity is the `SCRATCH` const parameter of [`HkdfState`]
//! (120 bytes by default). Inputs that would not fit are rejected with
//! [`bulwark_core::CryptoError::SizeError`] before any output is written.
//!
//! ```
//! use bulwark_hkdf::hkdf_sha256;
//!
//! let mut okm = [0u8; 42];
//! hkdf_sha256(&[0x0b; 22], b"salt", b"context", &mut okm).expect("Failed to hkdf_sha256(..)");
//! ```
//!
//! Reference: RFC 5869 <https://datatracker.ietf.org/doc/html/rfc5869>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod hkdf;

pub use hkdf::{DEFAULT_SCRATCH_LEN, HkdfSha224, HkdfSha256, HkdfState, hkdf_sha256};
