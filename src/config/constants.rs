// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known interface identifiers and defaults
//!
//! Centralizes magic constants used across the bindings and the catalog.

use std::time::Duration;

use alloy_primitives::{fixed_bytes, FixedBytes};

/// ERC-165 interface identifiers
pub mod interface_ids {
    use super::*;

    /// `supportsInterface(bytes4)`
    pub const ERC165: FixedBytes<4> = fixed_bytes!("01ffc9a7");

    /// Core ERC-721 functions
    pub const ERC721: FixedBytes<4> = fixed_bytes!("80ac58cd");

    /// ERC-721 enumeration extension
    pub const ERC721_ENUMERABLE: FixedBytes<4> = fixed_bytes!("780e9d63");

    /// ERC-721 metadata extension
    pub const ERC721_METADATA: FixedBytes<4> = fixed_bytes!("5b5e139f");
}

/// Gas assumed for a sticker purchase when the node cannot estimate it.
pub const DEFAULT_BUY_GAS_ESTIMATE: u64 = 400_000;

/// Concurrent contract calls issued by the catalog.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 3;

/// Timeout applied to each pack data request.
pub const DEFAULT_PACK_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Default RPC timeout for bound contract calls.
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);
