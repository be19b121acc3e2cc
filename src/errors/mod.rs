// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the sticker-bindings library.
//!
//! Follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`BindingError`],
//!   [`CatalogError`], [`MetadataError`])
//! - **Unified error type** ([`StickerError`]) when the source does not matter
//!
//! [`RpcError`] provides shared variants for provider failures and is wrapped
//! by [`BindingError::Rpc`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use sticker_bindings::{StickerError, StickerCatalog};
//!
//! async fn listing(catalog: &StickerCatalog<P, F>) -> Result<(), StickerError> {
//!     let packs = catalog.available_packs(&Default::default()).await?;
//!     println!("{} packs for sale", packs.len());
//!     Ok(())
//! }
//! ```

mod binding;
mod catalog;
mod metadata;
mod rpc;

pub use binding::BindingError;
pub use catalog::CatalogError;
pub use metadata::MetadataError;
pub use rpc::RpcError;

/// Unified error type for all sticker-bindings operations.
///
/// All module-specific error types convert to `StickerError` via `From`, so
/// `?` works across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum StickerError {
    /// Error from a contract binding.
    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    /// Error from the pack catalog.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error from metadata decoding.
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Error from provider construction.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}
