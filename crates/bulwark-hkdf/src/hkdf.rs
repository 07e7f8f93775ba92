// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF implementation per RFC 5869

use core::fmt;

use bulwark_core::{CryptoError, HashMethod, MAX_DIGEST_LEN, Mac};
use bulwark_hmac::{HmacSha224, HmacSha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Default capacity of the `T(i-1) || info || i` scratch buffer
pub const DEFAULT_SCRATCH_LEN: usize = 120;

/// Largest number of expand iterations (one-byte counter)
const MAX_BLOCKS: usize = 255;

/// HKDF over HMAC with the SHA-256 engine.
///
/// The hash method decides the algorithm; see [`HkdfState::sha256`] and
/// [`HkdfState::sha224`].
pub type HkdfSha256 = HkdfState<HmacSha256>;

/// Same type as [`HkdfSha256`], named for SHA-224 bindings
pub type HkdfSha224 = HkdfState<HmacSha224>;

/// HKDF state with all intermediate buffers.
///
/// Bind a MAC with [`set_hmac_method`](Self::set_hmac_method) and a hash
/// with [`set_hash_method`](Self::set_hash_method) (in either order), then
/// [`extract`](Self::extract) or [`set_prk`](Self::set_prk), then
/// [`expand`](Self::expand) as often as needed.
pub struct HkdfState<M: Mac, const SCRATCH: usize = DEFAULT_SCRATCH_LEN> {
    hmac: Option<M>,
    hash_method: Option<HashMethod>,
    /// PRK from the extract phase or `set_prk`
    prk: [u8; MAX_DIGEST_LEN],
    prk_len: usize,
    prk_ready: bool,
    /// T(i-1) || info || counter
    t: [u8; SCRATCH],
}

impl<M: Mac, const SCRATCH: usize> HkdfState<M, SCRATCH> {
    /// Creates a state with nothing bound.
    pub fn new() -> Self {
        Self {
            hmac: None,
            hash_method: None,
            prk: [0u8; MAX_DIGEST_LEN],
            prk_len: 0,
            prk_ready: false,
            t: [0u8; SCRATCH],
        }
    }

    /// Creates a state with both bindings in place.
    ///
    /// # Errors
    /// Whatever `hmac` reports when bound to `hash_method`.
    pub fn with_methods(hmac: M, hash_method: HashMethod) -> Result<Self, CryptoError> {
        let mut state = Self::new();
        state.set_hmac_method(hmac)?;
        state.set_hash_method(hash_method)?;
        Ok(state)
    }

    /// Installs the MAC used as the PRF.
    ///
    /// If a hash method is already set, the MAC is bound to it right away.
    pub fn set_hmac_method(&mut self, mut hmac: M) -> Result<(), CryptoError> {
        if let Some(method) = self.hash_method {
            hmac.metadata_set(method)?;
        }

        self.hmac = Some(hmac);
        Ok(())
    }

    /// Sets the hash underlying the MAC.
    ///
    /// If a MAC is already installed, it is bound to `method` right away and
    /// the method is only recorded when that succeeds.
    pub fn set_hash_method(&mut self, method: HashMethod) -> Result<(), CryptoError> {
        if let Some(hmac) = self.hmac.as_mut() {
            hmac.metadata_set(method)?;
        }

        self.hash_method = Some(method);
        Ok(())
    }

    /// Installs an externally derived PRK, skipping extract.
    ///
    /// # Errors
    /// [`CryptoError::SizeError`] if `prk` is longer than 64 bytes.
    pub fn set_prk(&mut self, prk: &[u8]) -> Result<(), CryptoError> {
        if prk.len() > MAX_DIGEST_LEN {
            return Err(CryptoError::SizeError {
                required: prk.len(),
                capacity: MAX_DIGEST_LEN,
            });
        }

        self.prk.zeroize();
        self.prk[..prk.len()].copy_from_slice(prk);
        self.prk_len = prk.len();
        self.prk_ready = true;

        Ok(())
    }

    /// HKDF-Extract per RFC 5869 Section 2.2: `PRK = HMAC(salt, IKM)`.
    ///
    /// `salt` is used as the HMAC key as given. An empty salt yields the same
    /// PRK as `HashLen` zero bytes because HMAC zero-pads its key.
    ///
    /// # Errors
    /// [`CryptoError::InvalidParameter`] if a binding is missing or the hash
    /// output exceeds the PRK capacity.
    pub fn extract(&mut self, salt: &[u8], ikm: &[u8]) -> Result<&[u8], CryptoError> {
        let hash_len = self.hash_len()?;
        let hmac = self
            .hmac
            .as_mut()
            .ok_or(CryptoError::InvalidParameter("HMAC method not set"))?;

        self.prk.zeroize();
        self.prk_len = 0;
        self.prk_ready = false;

        hmac.initialize(salt)?;
        hmac.update(ikm)?;
        let len = hmac.digest_calculate(&mut self.prk[..hash_len])?;

        self.prk_len = len;
        self.prk_ready = true;

        Ok(&self.prk[..len])
    }

    /// HKDF-Expand per RFC 5869 Section 2.3, filling all of `okm`.
    ///
    /// `T(i) = HMAC(PRK, T(i-1) || info || i)` for `i = 1..=ceil(L / HashLen)`.
    /// An empty `okm` succeeds without touching the MAC.
    ///
    /// # Errors
    /// - [`CryptoError::InvalidParameter`] if a binding is missing
    /// - [`CryptoError::NotReady`] if there is no PRK yet
    /// - [`CryptoError::OutputTooLong`] if `okm` exceeds `255 * HashLen`
    /// - [`CryptoError::SizeError`] if `T || info || i` does not fit the scratch
    ///   buffer; checked before any output is written
    pub fn expand(&mut self, info: &[u8], okm: &mut [u8]) -> Result<(), CryptoError> {
        let hash_len = self.hash_len()?;
        let hmac = self
            .hmac
            .as_mut()
            .ok_or(CryptoError::InvalidParameter("HMAC method not set"))?;

        if !self.prk_ready {
            return Err(CryptoError::NotReady("no PRK: call extract or set_prk first"));
        }

        if okm.len() > MAX_BLOCKS * hash_len {
            return Err(CryptoError::OutputTooLong);
        }

        if okm.is_empty() {
            return Ok(());
        }

        // T(1) has no predecessor, every later block carries HashLen of it
        let blocks = okm.len().div_ceil(hash_len);
        let chained = if blocks > 1 { hash_len } else { 0 };
        let required = (chained + info.len() + 1).max(hash_len);

        if required > SCRATCH {
            return Err(CryptoError::SizeError {
                required,
                capacity: SCRATCH,
            });
        }

        let result = expand_blocks(
            hmac,
            &self.prk[..self.prk_len],
            &mut self.t,
            hash_len,
            info,
            okm,
        );

        self.t.zeroize();
        result
    }

    /// Full HKDF: extract-then-expand, then wipe the PRK.
    ///
    /// Bindings survive; the PRK and scratch do not, whatever the outcome.
    pub fn derive(
        &mut self,
        ikm: &[u8],
        salt: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<(), CryptoError> {
        let result = self.extract(salt, ikm).map(|_| ());
        let result = result.and_then(|()| self.expand(info, okm));

        self.zeroize();
        result
    }

    /// Current PRK, if extracted or installed
    pub fn prk(&self) -> Option<&[u8]> {
        self.prk_ready.then(|| &self.prk[..self.prk_len])
    }

    /// Whether both the MAC and the hash method are bound
    pub fn is_ready(&self) -> bool {
        self.hmac.is_some() && self.hash_method.is_some()
    }

    /// Capacity of the expand scratch buffer
    pub fn scratch_len(&self) -> usize {
        SCRATCH
    }

    fn hash_len(&self) -> Result<usize, CryptoError> {
        let method = self
            .hash_method
            .ok_or(CryptoError::InvalidParameter("hash method not set"))?;

        if method.output_len() > MAX_DIGEST_LEN {
            return Err(CryptoError::InvalidParameter(
                "hash output exceeds PRK capacity",
            ));
        }

        Ok(method.output_len())
    }

    #[cfg(test)]
    pub(crate) fn scratch(&self) -> &[u8] {
        &self.t
    }

    #[cfg(test)]
    pub(crate) fn prk_buffer(&self) -> &[u8] {
        &self.prk
    }
}

impl HkdfSha256 {
    /// HKDF-SHA-256 state with both bindings in place.
    pub fn sha256() -> Result<Self, CryptoError> {
        Self::with_methods(HmacSha256::new(), HashMethod::SHA256)
    }

    /// HKDF-SHA-224 state with both bindings in place.
    pub fn sha224() -> Result<Self, CryptoError> {
        Self::with_methods(HmacSha224::new(), HashMethod::SHA224)
    }
}

/// Runs the expand loop; the caller wipes `t`.
fn expand_blocks<M: Mac>(
    hmac: &mut M,
    prk: &[u8],
    t: &mut [u8],
    hash_len: usize,
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), CryptoError> {
    let mut t_len = 0;

    for (i, chunk) in okm.chunks_mut(hash_len).enumerate() {
        let msg_len = t_len + info.len() + 1;
        if msg_len > t.len() {
            return Err(CryptoError::SizeError {
                required: msg_len,
                capacity: t.len(),
            });
        }

        // T(i-1) already sits at the front
        t[t_len..t_len + info.len()].copy_from_slice(info);
        t[msg_len - 1] = (i + 1) as u8;

        hmac.initialize(prk)?;
        hmac.update(&t[..msg_len])?;
        t_len = hmac.digest_calculate(&mut t[..hash_len])?;

        chunk.copy_from_slice(&t[..chunk.len()]);
    }

    Ok(())
}

impl<M: Mac, const SCRATCH: usize> Default for HkdfState<M, SCRATCH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mac, const SCRATCH: usize> fmt::Debug for HkdfState<M, SCRATCH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HkdfState")
            .field("hash_method", &self.hash_method)
            .field("hmac_bound", &self.hmac.is_some())
            .field("prk_ready", &self.prk_ready)
            .field("scratch", &SCRATCH)
            .finish_non_exhaustive()
    }
}

impl<M: Mac, const SCRATCH: usize> Zeroize for HkdfState<M, SCRATCH> {
    /// Wipes the PRK, scratch and MAC state; bindings are kept.
    fn zeroize(&mut self) {
        self.prk.zeroize();
        self.prk_len = 0;
        self.prk_ready = false;
        self.t.zeroize();

        if let Some(hmac) = self.hmac.as_mut() {
            hmac.zeroize();
        }
    }
}

impl<M: Mac, const SCRATCH: usize> Drop for HkdfState<M, SCRATCH> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<M: Mac, const SCRATCH: usize> ZeroizeOnDrop for HkdfState<M, SCRATCH> {}

/// HKDF-SHA-256 of `ikm` under `salt` and `info`, filling all of `okm`.
///
/// # Errors
/// See [`HkdfState::expand`].
pub fn hkdf_sha256(
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), CryptoError> {
    let mut state = HkdfSha256::sha256()?;
    state.derive(ikm, salt, info, okm)
}
