// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Largest hash block size supported by HMAC pad buffers (1024-bit blocks)
pub const MAX_BLOCK_LEN: usize = 128;

/// Largest digest supported by ICV and PRK buffers (SHA-512 class)
pub const MAX_DIGEST_LEN: usize = 64;
