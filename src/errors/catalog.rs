// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the sticker pack catalog.

use alloy_primitives::U256;

use super::{BindingError, MetadataError};

/// Errors that can occur while assembling sticker pack listings.
///
/// # Examples
///
/// ```rust,ignore
/// use sticker_bindings::{CatalogError, StickerCatalog};
///
/// match catalog.fetch_pack(pack_id, true).await {
///     Ok(pack) => println!("{} by {}", pack.name, pack.author),
///     Err(CatalogError::ContentFetch { hash, .. }) => eprintln!("metadata {hash} unavailable"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A contract call failed.
    #[error("Contract error: {0}")]
    Binding(#[from] BindingError),

    /// Pack metadata could not be decoded.
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Downloading pack metadata failed.
    #[error("Failed to fetch content {hash}")]
    ContentFetch {
        /// Hex content hash without `0x`
        hash: String,
        /// The underlying fetcher error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value returned by the chain does not fit the catalog's types.
    #[error("Value {value} for {field} is out of range")]
    OutOfRange {
        /// Field that overflowed
        field: &'static str,
        /// The value reported by the contract
        value: U256,
    },
}

impl CatalogError {
    /// Create a `ContentFetch` error from any error type.
    pub fn content_fetch(
        hash: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CatalogError::ContentFetch {
            hash: hash.into(),
            source: Box::new(source),
        }
    }
}
