// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256/SHA-224 streaming engine per RFC 6234 Section 6.2

use core::fmt;

use bulwark_core::{Algorithm, CryptoError, Digest};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{
    BLOCK_LEN, H0_224, H0_256, K256, LENGTH_OFFSET, PADDING, SHA224_HASH_LEN, SHA256_HASH_LEN,
};
use crate::word::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// SHA-256/SHA-224 streaming state.
///
/// One engine serves both algorithms: they share the compression function
/// and differ only in H(0) and in how many state words are emitted.
///
/// The struct owns every buffer the computation needs (pending block and
/// message schedule), so no heap allocation happens and all of it is
/// zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha256State {
    // Hash state H(i)
    state: [u32; 8],

    // Message schedule W[0..63]
    schedule: [u32; 64],

    // Bytes absorbed but not yet compressed
    buffer: [u8; BLOCK_LEN],

    // Message length in bits, modulo 2^64
    bit_count: u64,

    // Digest length for the active algorithm
    output_len: usize,

    // False until initialized, and again after finalize or zeroize
    ready: bool,

    #[zeroize(skip)]
    algorithm: Algorithm,
}

impl Sha256State {
    /// Creates a state initialized for `algorithm`.
    ///
    /// # Errors
    /// [`CryptoError::UnsupportedAlgorithm`] unless `algorithm` belongs to
    /// the SHA-224/SHA-256 family.
    pub fn new(algorithm: Algorithm) -> Result<Self, CryptoError> {
        let mut state = Self::blank();
        state.initialize(algorithm)?;
        Ok(state)
    }

    /// Creates a state initialized for SHA-256.
    pub fn sha256() -> Self {
        let mut state = Self::blank();
        state.load(Algorithm::Sha256, &H0_256, SHA256_HASH_LEN);
        state
    }

    /// Creates a state initialized for SHA-224.
    pub fn sha224() -> Self {
        let mut state = Self::blank();
        state.load(Algorithm::Sha224, &H0_224, SHA224_HASH_LEN);
        state
    }

    fn blank() -> Self {
        Self {
            state: [0u32; 8],
            schedule: [0u32; 64],
            buffer: [0u8; BLOCK_LEN],
            bit_count: 0,
            output_len: 0,
            ready: false,
            algorithm: Algorithm::Sha256,
        }
    }

    /// Resets the bit count and pending buffer and loads H(0).
    ///
    /// `Sha256` and `HmacSha256` select the SHA-256 constants, `Sha224` and
    /// `HmacSha224` the SHA-224 ones.
    ///
    /// # Errors
    /// [`CryptoError::UnsupportedAlgorithm`] for any other tag.
    pub fn initialize(&mut self, algorithm: Algorithm) -> Result<(), CryptoError> {
        let (iv, output_len) = parameters(algorithm)?;
        self.load(algorithm, iv, output_len);

        Ok(())
    }

    fn load(&mut self, algorithm: Algorithm, iv: &[u32; 8], output_len: usize) {
        self.state = *iv;
        self.schedule.zeroize();
        self.buffer.zeroize();
        self.bit_count = 0;
        self.output_len = output_len;
        self.algorithm = algorithm;
        self.ready = true;
    }

    /// Absorbs `input`.
    ///
    /// Completes a pending partial block first, then compresses whole blocks
    /// straight from `input` and keeps the tail for the next call.
    ///
    /// # Errors
    /// [`CryptoError::NotReady`] if the state was finalized or zeroized and
    /// not initialized again.
    pub fn update(&mut self, input: &[u8]) -> Result<(), CryptoError> {
        if !self.ready {
            return Err(CryptoError::NotReady("hash state is not initialized"));
        }

        self.absorb(input);
        Ok(())
    }

    fn absorb(&mut self, input: &[u8]) {
        if input.is_empty() {
            return;
        }

        let mut current = self.pending_len();
        let needed = BLOCK_LEN - current;

        self.bit_count = self
            .bit_count
            .wrapping_add((input.len() as u64).wrapping_mul(8));

        let mut rest = input;

        if current > 0 && rest.len() >= needed {
            let (head, tail) = rest.split_at(needed);
            self.buffer[current..].copy_from_slice(head);
            compress(&mut self.state, &mut self.schedule, &self.buffer);
            rest = tail;
            current = 0;
        }

        let mut blocks = rest.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(&mut self.state, &mut self.schedule, block);
        }

        let tail = blocks.remainder();
        self.buffer[current..current + tail.len()].copy_from_slice(tail);
    }

    /// SHA-256 compression function (single block).
    ///
    /// Updates H with one 512-bit block. Neither the bit count nor the
    /// pending buffer is touched.
    pub fn process_buffer(&mut self, block: &[u8; BLOCK_LEN]) {
        compress(&mut self.state, &mut self.schedule, block);
    }

    /// Pads the message, writes the digest to the front of `out` and returns
    /// its length (32 for SHA-256, 28 for SHA-224).
    ///
    /// The state is not reset; call [`initialize`](Self::initialize) before
    /// reusing it.
    ///
    /// # Errors
    /// - [`CryptoError::NotReady`] if the state is not initialized
    /// - [`CryptoError::InvalidBufferSize`] if `out` is shorter than the digest
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<usize, CryptoError> {
        if !self.ready {
            return Err(CryptoError::NotReady("hash state is not initialized"));
        }

        if out.len() < self.output_len {
            return Err(CryptoError::InvalidBufferSize {
                required: self.output_len,
                provided: out.len(),
            });
        }

        Ok(self.pad_and_emit(out))
    }

    fn pad_and_emit(&mut self, out: &mut [u8]) -> usize {
        // Padding per RFC 6234 Section 4.1
        let bit_count = self.bit_count;
        let current = self.pending_len();

        let pad_len = if current < LENGTH_OFFSET {
            LENGTH_OFFSET - current
        } else {
            BLOCK_LEN + LENGTH_OFFSET - current
        };

        self.absorb(&PADDING[..pad_len]);

        // 64-bit length, high word then low word, big-endian
        self.absorb(&((bit_count >> 32) as u32).to_be_bytes());
        self.absorb(&(bit_count as u32).to_be_bytes());

        debug_assert_eq!(self.pending_len(), 0);

        let output_len = self.output_len;
        for (chunk, word) in out[..output_len].chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        self.schedule.zeroize();
        self.buffer.zeroize();
        self.ready = false;

        output_len
    }

    /// Algorithm selected by the last initialization
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Digest length for the selected algorithm
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Message length absorbed so far, in bits (modulo 2^64)
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Whether the state accepts input
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[inline(always)]
    fn pending_len(&self) -> usize {
        ((self.bit_count >> 3) & 0x3F) as usize
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[u32; 8] {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> &[u8; BLOCK_LEN] {
        &self.buffer
    }

    #[cfg(test)]
    pub(crate) fn schedule(&self) -> &[u32; 64] {
        &self.schedule
    }
}

impl Default for Sha256State {
    fn default() -> Self {
        Self::sha256()
    }
}

impl fmt::Debug for Sha256State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256State")
            .field("algorithm", &self.algorithm)
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}

impl Digest for Sha256State {
    fn initialize(&mut self, algorithm: Algorithm) -> Result<(), CryptoError> {
        Sha256State::initialize(self, algorithm)
    }

    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        Sha256State::update(self, data)
    }

    fn finalize(&mut self, out: &mut [u8]) -> Result<usize, CryptoError> {
        Sha256State::finalize(self, out)
    }

    fn output_len(&self) -> usize {
        self.output_len
    }

    fn output_len_for(&self, algorithm: Algorithm) -> Result<usize, CryptoError> {
        parameters(algorithm).map(|(_, output_len)| output_len)
    }
}

/// H(0) and digest length for the tags this engine implements
fn parameters(algorithm: Algorithm) -> Result<(&'static [u32; 8], usize), CryptoError> {
    match algorithm {
        Algorithm::Sha256 | Algorithm::HmacSha256 => Ok((&H0_256, SHA256_HASH_LEN)),
        Algorithm::Sha224 | Algorithm::HmacSha224 => Ok((&H0_224, SHA224_HASH_LEN)),
        other => Err(CryptoError::UnsupportedAlgorithm(other)),
    }
}

/// Compress one 64-byte block into `h` per RFC 6234 Section 6.2.2
fn compress(h: &mut [u32; 8], w: &mut [u32; 64], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    // Step 1: Prepare message schedule W[0..63]
    // W[0..15] from block (big-endian)
    for (t, bytes) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in 16..64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    // Step 2: Initialize working variables with H(i-1)
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

    // Step 3: 64 rounds
    for (k, wt) in K256.iter().zip(w.iter()) {
        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wt);
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (word, v) in h.iter_mut().zip([a, b, c, d, e, f, g, hh]) {
        *word = word.wrapping_add(v);
    }
}

/// SHA-256 of a complete message
pub fn sha256(data: &[u8]) -> [u8; SHA256_HASH_LEN] {
    let mut state = Sha256State::sha256();
    let mut out = [0u8; SHA256_HASH_LEN];

    state.absorb(data);
    state.pad_and_emit(&mut out);

    out
}

/// SHA-224 of a complete message
pub fn sha224(data: &[u8]) -> [u8; SHA224_HASH_LEN] {
    let mut state = Sha256State::sha224();
    let mut out = [0u8; SHA224_HASH_LEN];

    state.absorb(data);
    state.pad_and_emit(&mut out);

    out
}
