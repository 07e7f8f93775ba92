// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC implementation per RFC 2104

use core::fmt;

use bulwark_core::{CryptoError, Digest, HashMethod, MAX_BLOCK_LEN, MAX_DIGEST_LEN, Mac};
use bulwark_sha2::{SHA224_HASH_LEN, SHA256_HASH_LEN, Sha256State};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC over the SHA-256 engine.
///
/// The bound method selects SHA-256; use [`HmacState::sha256`].
pub type HmacSha256 = HmacState<Sha256State>;

/// HMAC over the SHA-256 engine, same type as [`HmacSha256`].
///
/// The bound method selects SHA-224; use [`HmacState::sha224`].
pub type HmacSha224 = HmacState<Sha256State>;

/// HMAC state with all intermediate buffers.
///
/// Pads and scratch buffers are sized for the largest supported hash
/// (128-byte blocks, 64-byte digests); the bound [`HashMethod`] decides how
/// much of them is used. All of it is zeroized on drop.
pub struct HmacState<D: Digest> {
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; MAX_BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; MAX_BLOCK_LEN],
    /// Hashed key when the key is longer than a block
    key_block: [u8; MAX_DIGEST_LEN],
    /// Inner digest, then the full outer digest
    icv: [u8; MAX_DIGEST_LEN],
    method: Option<HashMethod>,
    hash: D,
}

impl<D: Digest + Default> HmacState<D> {
    /// Creates an unbound state around a default digest engine.
    pub fn new() -> Self {
        Self::with_digest(D::default())
    }

    /// Creates a state bound to `method`.
    ///
    /// # Errors
    /// See [`metadata_set`](Self::metadata_set).
    pub fn with_method(method: HashMethod) -> Result<Self, CryptoError> {
        let mut state = Self::new();
        state.metadata_set(method)?;
        Ok(state)
    }
}

impl<D: Digest> HmacState<D> {
    /// Creates an unbound state around `hash`.
    pub fn with_digest(hash: D) -> Self {
        Self {
            k_ipad: [0u8; MAX_BLOCK_LEN],
            k_opad: [0u8; MAX_BLOCK_LEN],
            key_block: [0u8; MAX_DIGEST_LEN],
            icv: [0u8; MAX_DIGEST_LEN],
            method: None,
            hash,
        }
    }

    /// Binds the state to a hash method.
    ///
    /// The digest is asked up front whether it implements the method's
    /// algorithm, so unsupported tags are rejected here rather than on first
    /// use. A rejected method leaves the state untouched; an accepted one
    /// drops any key or message in progress.
    ///
    /// # Errors
    /// - [`CryptoError::InvalidBufferSize`] if the block size is zero or above
    ///   128, or the output size is zero, above 64, above the block size or
    ///   above what the digest produces
    /// - [`CryptoError::UnsupportedAlgorithm`] from the digest engine
    pub fn metadata_set(&mut self, method: HashMethod) -> Result<(), CryptoError> {
        let block_len = method.block_len();
        if block_len == 0 || block_len > MAX_BLOCK_LEN {
            return Err(CryptoError::InvalidBufferSize {
                required: block_len,
                provided: MAX_BLOCK_LEN,
            });
        }

        let output_len = method.output_len();
        if output_len == 0 || output_len > MAX_DIGEST_LEN {
            return Err(CryptoError::InvalidBufferSize {
                required: output_len,
                provided: MAX_DIGEST_LEN,
            });
        }

        // A hashed key must fit in one block
        if output_len > block_len {
            return Err(CryptoError::InvalidBufferSize {
                required: output_len,
                provided: block_len,
            });
        }

        let digest_len = self.hash.output_len_for(method.algorithm())?;
        if output_len > digest_len {
            return Err(CryptoError::InvalidBufferSize {
                required: output_len,
                provided: digest_len,
            });
        }

        // Input is accepted once a key is loaded
        self.hash.zeroize();
        self.wipe();

        self.method = Some(method);
        Ok(())
    }

    /// Bound hash method, if any
    pub fn method(&self) -> Option<HashMethod> {
        self.method
    }

    /// Keys the state and starts the inner hash with `K ⊕ ipad`.
    ///
    /// Keys longer than the block size are replaced by their digest; shorter
    /// keys are zero-padded to the block size.
    ///
    /// # Errors
    /// [`CryptoError::MethodInitializationFailure`] if no method is bound.
    pub fn initialize(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        let method = self.method.ok_or(CryptoError::MethodInitializationFailure)?;
        let result = self.load_key(method, key);

        self.key_block.zeroize();
        result
    }

    fn load_key(&mut self, method: HashMethod, key: &[u8]) -> Result<(), CryptoError> {
        let block_len = method.block_len();

        let key = if key.len() > block_len {
            self.hash.initialize(method.algorithm())?;
            self.hash.update(key)?;
            let len = self.hash.finalize(&mut self.key_block)?;
            &self.key_block[..len]
        } else {
            key
        };

        self.k_ipad.zeroize();
        self.k_opad.zeroize();
        self.k_ipad[..key.len()].copy_from_slice(key);
        self.k_opad[..key.len()].copy_from_slice(key);

        for (i, o) in self.k_ipad[..block_len]
            .iter_mut()
            .zip(self.k_opad[..block_len].iter_mut())
        {
            *i ^= IPAD;
            *o ^= OPAD;
        }

        self.hash.initialize(method.algorithm())?;
        self.hash.update(&self.k_ipad[..block_len])
    }

    /// Feeds message bytes into the inner hash.
    ///
    /// # Errors
    /// [`CryptoError::NotReady`] from the digest if the state is not keyed.
    pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.hash.update(data)
    }

    /// Completes the MAC and writes `min(out.len(), output_len)` bytes.
    ///
    /// Short buffers receive a truncated tag. The pads are wiped afterwards,
    /// so the state must be keyed again before the next message.
    ///
    /// # Errors
    /// - [`CryptoError::MethodInitializationFailure`] if no method is bound
    /// - [`CryptoError::InvalidBufferSize`] if `out` is empty
    /// - [`CryptoError::NotReady`] from the digest if the state is not keyed
    pub fn digest_calculate(&mut self, out: &mut [u8]) -> Result<usize, CryptoError> {
        let method = self.method.ok_or(CryptoError::MethodInitializationFailure)?;

        if out.is_empty() {
            return Err(CryptoError::InvalidBufferSize {
                required: 1,
                provided: 0,
            });
        }

        let result = self.outer(method).map(|icv_len| {
            let len = out.len().min(icv_len);
            out[..len].copy_from_slice(&self.icv[..len]);
            len
        });

        self.wipe();
        result
    }

    fn outer(&mut self, method: HashMethod) -> Result<usize, CryptoError> {
        let block_len = method.block_len();

        // Inner: H(K ⊕ ipad || message)
        let inner_len = self.hash.finalize(&mut self.icv)?;

        // Outer: H(K ⊕ opad || inner)
        self.hash.initialize(method.algorithm())?;
        self.hash.update(&self.k_opad[..block_len])?;
        self.hash.update(&self.icv[..inner_len])?;
        self.hash.finalize(&mut self.icv)?;

        Ok(method.output_len())
    }

    /// HMAC of `data` under `key` in one call.
    ///
    /// Equivalent to `initialize(key)`, `update(data)`, `digest_calculate(out)`.
    pub fn hmac(&mut self, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<usize, CryptoError> {
        self.initialize(key)?;
        self.update(data)?;
        self.digest_calculate(out)
    }

    /// Checks `tag` against the HMAC of `data` in constant time.
    ///
    /// `tag` may be truncated, in which case only its length is compared.
    ///
    /// # Errors
    /// - [`CryptoError::MethodInitializationFailure`] if no method is bound
    /// - [`CryptoError::InvalidBufferSize`] if `tag` is empty or longer than
    ///   the bound output size
    pub fn verify(&mut self, key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool, CryptoError> {
        let method = self.method.ok_or(CryptoError::MethodInitializationFailure)?;

        if tag.is_empty() || tag.len() > method.output_len() {
            return Err(CryptoError::InvalidBufferSize {
                required: method.output_len(),
                provided: tag.len(),
            });
        }

        let mut expected = [0u8; MAX_DIGEST_LEN];
        let result = self
            .hmac(key, data, &mut expected[..tag.len()])
            .map(|len| bool::from(expected[..len].ct_eq(tag)));

        expected.zeroize();
        result
    }

    fn wipe(&mut self) {
        self.k_ipad.zeroize();
        self.k_opad.zeroize();
        self.key_block.zeroize();
        self.icv.zeroize();
    }

    #[cfg(test)]
    pub(crate) fn scratch(&self) -> [&[u8]; 4] {
        [&self.k_ipad[..], &self.k_opad[..], &self.key_block[..], &self.icv[..]]
    }
}

impl HmacState<Sha256State> {
    /// State bound to HMAC-SHA-256.
    pub fn sha256() -> Result<Self, CryptoError> {
        Self::with_method(HashMethod::HMAC_SHA256)
    }

    /// State bound to HMAC-SHA-224.
    pub fn sha224() -> Result<Self, CryptoError> {
        Self::with_method(HashMethod::HMAC_SHA224)
    }
}

impl<D: Digest + Default> Default for HmacState<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> fmt::Debug for HmacState<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacState")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

impl<D: Digest> Zeroize for HmacState<D> {
    /// Wipes key material and the digest; the method binding is kept.
    fn zeroize(&mut self) {
        self.wipe();
        self.hash.zeroize();
    }
}

impl<D: Digest> Drop for HmacState<D> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<D: Digest> ZeroizeOnDrop for HmacState<D> {}

impl<D: Digest> Mac for HmacState<D> {
    fn metadata_set(&mut self, method: HashMethod) -> Result<(), CryptoError> {
        HmacState::metadata_set(self, method)
    }

    fn method(&self) -> Option<HashMethod> {
        self.method
    }

    fn initialize(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        HmacState::initialize(self, key)
    }

    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        HmacState::update(self, data)
    }

    fn digest_calculate(&mut self, out: &mut [u8]) -> Result<usize, CryptoError> {
        HmacState::digest_calculate(self, out)
    }
}

/// HMAC-SHA-256 of `data` under `key`
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; SHA256_HASH_LEN], CryptoError> {
    let mut state = HmacSha256::sha256()?;
    let mut out = [0u8; SHA256_HASH_LEN];
    state.hmac(key, data, &mut out)?;
    Ok(out)
}

/// HMAC-SHA-224 of `data` under `key`
pub fn hmac_sha224(key: &[u8], data: &[u8]) -> Result<[u8; SHA224_HASH_LEN], CryptoError> {
    let mut state = HmacSha224::sha224()?;
    let mut out = [0u8; SHA224_HASH_LEN];
    state.hmac(key, data, &mut out)?;
    Ok(out)
}
