// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Sticker pack listings assembled from the registry, the pack token and
//! downloaded metadata.

use std::collections::HashSet;

use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;
use tracing::{debug, warn, Instrument, Span};

use crate::binding::CallOpts;
use crate::config::{BindingConfig, CatalogConfig, StickerDeployment};
use crate::contracts::{StickerMarket, StickerPack, StickerType};
use crate::errors::{BindingError, CatalogError};
use crate::spans;

use super::{ContentHash, PackContentFetcher, PackMetadata};

/// Where a pack stands for the local user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackStatus {
    /// On sale and not owned
    #[default]
    Available,
    /// Installed locally
    Installed,
    /// Purchase transaction not yet mined
    Pending,
    /// Owned by one of the local accounts
    Purchased,
}

/// A single sticker of a listed pack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub pack_id: U256,
    /// Display URL; empty unless hashes were translated
    pub url: String,
    /// Content hash of the image
    pub hash: String,
}

/// A pack as shown in the market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StickerPackInfo {
    pub id: U256,
    pub name: String,
    pub author: String,
    pub owner: Address,
    /// Price in SNT wei
    pub price: U256,
    /// Preview image, as a URL or a content hash
    pub preview: String,
    /// Thumbnail image, as a URL or a content hash
    pub thumbnail: String,
    pub stickers: Vec<Sticker>,
    pub status: PackStatus,
}

/// Read-only view of the sticker market.
///
/// Contract calls fan out with at most
/// [`CatalogConfig::max_concurrent_requests`] in flight, and each pack
/// record lookup is bounded by [`CatalogConfig::request_timeout`].
///
/// # Example
///
/// ```rust,ignore
/// use sticker_bindings::{CatalogConfig, StickerCatalog};
///
/// let catalog = StickerCatalog::from_deployment(&deployment, provider, binding_config, fetcher, CatalogConfig::default())?;
/// let packs = catalog.market(&[account], &installed).await?;
/// for pack in packs {
///     println!("{} {:?}", pack.name, pack.status);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StickerCatalog<P, F> {
    sticker_type: StickerType<P>,
    sticker_pack: StickerPack<P>,
    market: StickerMarket<P>,
    fetcher: F,
    config: CatalogConfig,
}

impl<P: Provider + Clone, F: PackContentFetcher> StickerCatalog<P, F> {
    /// Bind all three contracts of a deployment to `provider`.
    pub fn from_deployment(
        deployment: &StickerDeployment,
        provider: P,
        binding_config: BindingConfig,
        fetcher: F,
        config: CatalogConfig,
    ) -> Result<Self, BindingError> {
        Ok(Self::new(
            StickerType::new(
                deployment.sticker_type,
                provider.clone(),
                binding_config.clone(),
            )?,
            StickerPack::new(
                deployment.sticker_pack,
                provider.clone(),
                binding_config.clone(),
            )?,
            StickerMarket::new(deployment.sticker_market, provider, binding_config)?,
            fetcher,
            config,
        ))
    }
}

impl<P: Provider, F: PackContentFetcher> StickerCatalog<P, F> {
    pub fn new(
        sticker_type: StickerType<P>,
        sticker_pack: StickerPack<P>,
        market: StickerMarket<P>,
        fetcher: F,
        config: CatalogConfig,
    ) -> Self {
        Self {
            sticker_type,
            sticker_pack,
            market,
            fetcher,
            config,
        }
    }

    pub fn sticker_type(&self) -> &StickerType<P> {
        &self.sticker_type
    }

    pub fn sticker_pack(&self) -> &StickerPack<P> {
        &self.sticker_pack
    }

    pub fn market_contract(&self) -> &StickerMarket<P> {
        &self.market
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn concurrency(&self) -> usize {
        self.config.max_concurrent_requests.max(1)
    }

    /// Load one pack: its registry record plus its downloaded metadata.
    ///
    /// With `translate_hashes` the preview, thumbnail and sticker images are
    /// given as URLs from the fetcher; otherwise the raw content hashes are
    /// kept and sticker URLs are empty.
    pub async fn fetch_pack(
        &self,
        pack_id: U256,
        translate_hashes: bool,
    ) -> Result<StickerPackInfo, CatalogError> {
        async {
            let opts = CallOpts::default().with_timeout(self.config.request_timeout);
            let record = self.sticker_type.get_pack_data(&opts, pack_id).await?;

            let hash = ContentHash::new(record.contenthash);
            let document =
                self.fetcher
                    .fetch(&hash)
                    .await
                    .map_err(|source| CatalogError::ContentFetch {
                        hash: hash.to_hex(),
                        source,
                    })?;
            let metadata = PackMetadata::from_edn(&document)?;
            debug!(
                name = %metadata.name,
                stickers = metadata.stickers.len(),
                "Decoded pack metadata"
            );

            Ok(self.assemble(pack_id, record.owner, record.price, metadata, translate_hashes))
        }
        .instrument(spans::fetch_pack(pack_id))
        .await
    }

    fn assemble(
        &self,
        pack_id: U256,
        owner: Address,
        price: U256,
        metadata: PackMetadata,
        translate_hashes: bool,
    ) -> StickerPackInfo {
        let translate = |hash: String| {
            if translate_hashes {
                self.fetcher.sticker_url(&hash)
            } else {
                hash
            }
        };

        let stickers = metadata
            .stickers
            .into_iter()
            .map(|sticker| Sticker {
                pack_id,
                url: if translate_hashes {
                    self.fetcher.sticker_url(&sticker.hash)
                } else {
                    String::new()
                },
                hash: sticker.hash,
            })
            .collect();

        StickerPackInfo {
            id: pack_id,
            name: metadata.name,
            author: metadata.author,
            owner,
            price,
            preview: translate(metadata.preview),
            thumbnail: translate(metadata.thumbnail),
            stickers,
            status: PackStatus::Available,
        }
    }

    /// Every registered pack except the ids in `skip` (packs already
    /// installed or pending), ordered by id.
    ///
    /// A pack that fails to load is logged and its error returned.
    pub async fn available_packs(
        &self,
        skip: &HashSet<U256>,
    ) -> Result<Vec<StickerPackInfo>, CatalogError> {
        let span = spans::available_packs(self.market.address());
        async {
            let count = self.sticker_type.pack_count(&CallOpts::default()).await?;
            let count = u64::try_from(count).map_err(|_| CatalogError::OutOfRange {
                field: "packCount",
                value: count,
            })?;
            Span::current().record("pack_count", count);

            let ids = (0..count).map(U256::from).filter(|id| !skip.contains(id));
            let mut packs: Vec<StickerPackInfo> = stream::iter(ids)
                .map(|pack_id| async move {
                    self.fetch_pack(pack_id, true).await.inspect_err(|e| {
                        warn!(pack_id = %pack_id, error = %e, "Could not retrieve sticker pack data");
                    })
                })
                .buffer_unordered(self.concurrency())
                .try_collect()
                .await?;

            packs.sort_by_key(|pack| pack.id);
            Ok(packs)
        }
        .instrument(span)
        .await
    }

    /// Pack ids of every pack token held by `account`, in token index order.
    pub async fn purchased_pack_ids(&self, account: Address) -> Result<Vec<U256>, CatalogError> {
        let span = spans::purchased_pack_ids(account);
        async {
            let opts = CallOpts::default();
            let balance = self.sticker_pack.balance_of(&opts, account).await?;
            let balance = u64::try_from(balance).map_err(|_| CatalogError::OutOfRange {
                field: "balanceOf",
                value: balance,
            })?;
            Span::current().record("token_count", balance);

            let limit = self.concurrency();
            let token_ids: Vec<U256> = stream::iter(0..balance)
                .map(|index| {
                    self.sticker_pack
                        .token_of_owner_by_index(&opts, account, U256::from(index))
                })
                .buffered(limit)
                .try_collect()
                .await?;

            let pack_ids: Vec<U256> = stream::iter(token_ids)
                .map(|token_id| self.sticker_pack.token_pack_id(&opts, token_id))
                .buffered(limit)
                .try_collect()
                .await?;

            debug!(packs = pack_ids.len(), "Resolved purchased packs");
            Ok(pack_ids)
        }
        .instrument(span)
        .await
    }

    /// Available packs, each marked [`PackStatus::Purchased`] when any of
    /// `accounts` owns a token of it and [`PackStatus::Available`] otherwise.
    pub async fn market(
        &self,
        accounts: &[Address],
        skip: &HashSet<U256>,
    ) -> Result<Vec<StickerPackInfo>, CatalogError> {
        let mut packs = self.available_packs(skip).await?;

        // One account at a time keeps the total under the concurrency limit.
        let mut purchased = HashSet::new();
        for &account in accounts {
            purchased.extend(self.purchased_pack_ids(account).await?);
        }

        for pack in &mut packs {
            pack.status = if purchased.contains(&pack.id) {
                PackStatus::Purchased
            } else {
                PackStatus::Available
            };
        }
        Ok(packs)
    }
}
