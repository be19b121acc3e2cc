// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed alloy bindings for the Status sticker market.
//!
//! - [`contracts`]: one binding per contract interface (ERC-165, ERC-20,
//!   ERC-721 and its extensions, `Controlled`, `TokenClaimer`,
//!   `StickerMarket`, `StickerPack`, `StickerType`)
//! - [`binding`]: the untyped [`BoundContract`] core, options, event
//!   iterators, watch subscriptions and sessions
//! - [`abi`]: the embedded JSON ABIs and their selector maps
//! - [`catalog`]: market listings with downloaded pack metadata, and
//!   single-transaction purchases through SNT
//! - [`provider`] and [`transport`]: provider construction with logging and
//!   rate limiting layers
//!
//! # Example
//!
//! ```rust,ignore
//! use sticker_bindings::provider::{create_http_provider, ProviderConfig};
//! use sticker_bindings::{BindingConfig, CallOpts, FilterOpts, StickerType, TopicRules};
//!
//! let provider = create_http_provider(ProviderConfig::new(rpc_url).with_rate_limit(10))?;
//! let registry = StickerType::new(registry_address, provider, BindingConfig::default())?;
//!
//! let packs = registry.pack_count(&CallOpts::default()).await?;
//! let mut registrations = registry.filter_register(&FilterOpts::from_block(0), &[]).await?;
//! while let Some(log) = registrations.next().await? {
//!     println!("pack {} at block {:?}", log.packId, log.raw.block_number);
//! }
//! ```

pub mod abi;
pub mod binding;
pub mod catalog;
pub mod config;
pub mod contracts;
mod errors;
pub mod provider;
mod spans;
pub mod transport;

pub use abi::{ContractKind, SelectorMap};
pub use binding::{
    Binding, BoundContract, CallOpts, CallSession, EventIterator, EventLog, FilterOpts,
    IntoTopic, Session, TopicRules, TransactOpts, TransactSession, WatchHandle, WatchOpts,
};
pub use catalog::{
    BuyRequest, ContentHash, PackContentFetcher, PackMetadata, PackStatus, StickerCatalog,
    StickerPackInfo,
};
pub use config::{
    BindingConfig, BindingConfigBuilder, CatalogConfig, ChainConfig, Deployments, MaxBlockRange,
    StickerDeployment,
};
pub use contracts::{
    Erc165, Erc20Token, Erc721, Erc721Enumerable, Erc721Full, Erc721Metadata, MarketStatus,
    StickerMarket, StickerPack, StickerType,
};
pub use errors::{BindingError, CatalogError, MetadataError, RpcError, StickerError};
