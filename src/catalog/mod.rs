// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Sticker market listings built on top of the contract bindings.
//!
//! [`StickerCatalog`] combines the `StickerType` registry, the `StickerPack`
//! token and a [`PackContentFetcher`] into ready-to-display
//! [`StickerPackInfo`] values. Pack metadata is an EDN document addressed by
//! the pack's [`ContentHash`] and decoded with [`PackMetadata::from_edn`].
//!
//! [`BuyRequest`] and [`crate::contracts::StickerMarket::buy_with_approval`]
//! cover purchases.

mod content_hash;
pub mod edn;
mod fetcher;
mod metadata;
mod purchase;
mod service;

pub use content_hash::{ContentCodec, ContentHash};
pub use fetcher::{FetchError, PackContentFetcher};
pub use metadata::{PackMetadata, StickerMetadata};
pub use purchase::{BuyRequest, ISntToken};
pub use service::{PackStatus, Sticker, StickerCatalog, StickerPackInfo};
