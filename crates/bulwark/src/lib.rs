// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Heap-free SHA-256, HMAC and HKDF with zeroize-on-drop state.</em></p>
//!
//! ---
//!
//! Bulwark is a layered primitive stack: a streaming SHA-256/SHA-224 engine,
//! an HMAC generic over any digest, and an HKDF generic over any MAC. Every
//! state type owns fixed-size buffers, never allocates, and wipes itself when
//! dropped.
//!
//! # Features
//!
//! - **`no_std`**: no allocator required
//! - **Fixed memory**: pads, PRK and expand scratch live inside the state
//! - **Zeroization**: intermediate buffers are wiped right after use, the
//!   rest on drop
//! - **Pluggable**: `HmacState<D: Digest>`, `HkdfState<M: Mac, SCRATCH>`
//!
//! # Quick Start
//!
//! ```rust
//! use bulwark::hkdf::hkdf_sha256;
//! use bulwark::hmac::hmac_sha256;
//! use bulwark::sha2::sha256;
//!
//! let digest = sha256(b"abc");
//! assert_eq!(digest[0], 0xba);
//!
//! let tag = hmac_sha256(b"Jefe", b"what do ya want for nothing?")?;
//! assert_eq!(tag[0], 0x5b);
//!
//! let mut okm = [0u8; 42];
//! hkdf_sha256(&[0x0b; 22], &[], &[], &mut okm)?;
//! assert_eq!(okm[0], 0x8d);
//! # Ok::<(), bulwark::CryptoError>(())
//! ```
//!
//! # Layers
//!
//! The stateful API follows the method-binding flow: bind a hash method,
//! then drive the state.
//!
//! ```rust
//! use bulwark::HashMethod;
//! use bulwark::hkdf::HkdfState;
//! use bulwark::hmac::HmacSha256;
//!
//! let mut hkdf: HkdfState<HmacSha256> = HkdfState::new();
//! hkdf.set_hmac_method(HmacSha256::new())?;
//! hkdf.set_hash_method(HashMethod::SHA256)?;
//!
//! let prk_len = hkdf.extract(b"salt", b"input key material")?.len();
//! assert_eq!(prk_len, 32);
//!
//! let mut key = [0u8; 16];
//! hkdf.expand(b"session key", &mut key)?;
//! # Ok::<(), bulwark::CryptoError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub use bulwark_core::{
    Algorithm, CryptoError, Digest, HashMethod, MAX_BLOCK_LEN, MAX_DIGEST_LEN, Mac,
};
pub use bulwark_hkdf as hkdf;
pub use bulwark_hmac as hmac;
pub use bulwark_sha2 as sha2;
