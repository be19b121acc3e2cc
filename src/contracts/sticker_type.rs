// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Binding for the sticker pack registry.
//!
//! `StickerType` is itself an ERC-721 contract: every registered pack is a
//! token owned by its author. On top of that it keeps the pack records
//! (price, donation share, mintability, content hash) and a category index.

use std::ops::Deref;

use alloy_primitives::{Address, Bytes, FixedBytes, TxHash, U256};
use alloy_provider::Provider;
use alloy_rpc_types::Log;
use alloy_sol_types::sol;
use tokio::sync::mpsc;

use crate::abi::ContractKind;
use crate::binding::{
    Binding, BoundContract, CallOpts, EventIterator, EventLog, FilterOpts, TopicRules,
    TransactOpts, WatchHandle, WatchOpts,
};
use crate::config::BindingConfig;
use crate::errors::BindingError;

use super::{Controlled, Erc721Full, TokenClaimer};

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IStickerType,
    "abi/StickerType.json"
);

/// Binding for the `StickerType` pack registry.
#[derive(Debug, Clone)]
pub struct StickerType<P> {
    inner: Erc721Full<P>,
}

impl<P> Deref for StickerType<P> {
    type Target = Erc721Full<P>;

    fn deref(&self) -> &Erc721Full<P> {
        &self.inner
    }
}

impl<P: Provider> Binding for StickerType<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        self.inner.contract()
    }
}

impl<P: Provider + Clone> StickerType<P> {
    pub fn controlled(&self) -> Controlled<P> {
        Controlled::from_contract(self.contract().clone())
    }

    pub fn token_claimer(&self) -> TokenClaimer<P> {
        TokenClaimer::from_contract(self.contract().clone())
    }
}

impl<P: Provider> StickerType<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        let contract = BoundContract::bind(ContractKind::StickerType, address, provider, config)?;
        Ok(Self {
            inner: Erc721Full::from_contract(contract),
        })
    }

    /// Number of packs ever registered. Pack ids run from zero to `count - 1`.
    pub async fn pack_count(&self, opts: &CallOpts) -> Result<U256, BindingError> {
        self.contract()
            .call(opts, &IStickerType::packCountCall {})
            .await
    }

    /// Full record of a pack.
    pub async fn get_pack_data(
        &self,
        opts: &CallOpts,
        pack_id: U256,
    ) -> Result<IStickerType::getPackDataReturn, BindingError> {
        self.contract()
            .call(opts, &IStickerType::getPackDataCall { packId: pack_id })
            .await
    }

    pub async fn get_pack_summary(
        &self,
        opts: &CallOpts,
        pack_id: U256,
    ) -> Result<IStickerType::getPackSummaryReturn, BindingError> {
        self.contract()
            .call(opts, &IStickerType::getPackSummaryCall { packId: pack_id })
            .await
    }

    /// Payment terms of a pack.
    pub async fn get_payment_data(
        &self,
        opts: &CallOpts,
        pack_id: U256,
    ) -> Result<IStickerType::getPaymentDataReturn, BindingError> {
        self.contract()
            .call(opts, &IStickerType::getPaymentDataCall { packId: pack_id })
            .await
    }

    /// The public `packs` mapping.
    pub async fn packs(
        &self,
        opts: &CallOpts,
        pack_id: U256,
    ) -> Result<IStickerType::packsReturn, BindingError> {
        self.contract()
            .call(opts, &IStickerType::packsCall { packId: pack_id })
            .await
    }

    /// Ids of the mintable packs in `category`.
    pub async fn get_available_packs(
        &self,
        opts: &CallOpts,
        category: FixedBytes<4>,
    ) -> Result<Vec<U256>, BindingError> {
        self.contract()
            .call(opts, &IStickerType::getAvailablePacksCall { category })
            .await
    }

    pub async fn get_category_length(
        &self,
        opts: &CallOpts,
        category: FixedBytes<4>,
    ) -> Result<U256, BindingError> {
        self.contract()
            .call(opts, &IStickerType::getCategoryLengthCall { category })
            .await
    }

    pub async fn get_category_pack(
        &self,
        opts: &CallOpts,
        category: FixedBytes<4>,
        index: U256,
    ) -> Result<U256, BindingError> {
        self.contract()
            .call(opts, &IStickerType::getCategoryPackCall { category, index })
            .await
    }

    /// Register a pack without a fee. Controller only.
    pub async fn generate_pack(
        &self,
        opts: &TransactOpts,
        price: U256,
        donate: U256,
        category: Vec<FixedBytes<4>>,
        owner: Address,
        contenthash: Bytes,
    ) -> Result<TxHash, BindingError> {
        self.contract()
            .transact(
                opts,
                &IStickerType::generatePackCall {
                    price,
                    donate,
                    category,
                    owner,
                    contenthash,
                },
            )
            .await
    }

    pub async fn purge_pack(
        &self,
        opts: &TransactOpts,
        pack_id: U256,
        limit: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract()
            .transact(
                opts,
                &IStickerType::purgePackCall {
                    packId: pack_id,
                    limit,
                },
            )
            .await
    }

    pub async fn set_pack_contenthash(
        &self,
        opts: &TransactOpts,
        pack_id: U256,
        contenthash: Bytes,
    ) -> Result<TxHash, BindingError> {
        self.contract()
            .transact(
                opts,
                &IStickerType::setPackContenthashCall {
                    packId: pack_id,
                    contenthash,
                },
            )
            .await
    }

    pub async fn set_pack_price(
        &self,
        opts: &TransactOpts,
        pack_id: U256,
        price: U256,
        donate: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract()
            .transact(
                opts,
                &IStickerType::setPackPriceCall {
                    packId: pack_id,
                    price,
                    donate,
                },
            )
            .await
    }

    pub async fn add_pack_category(
        &self,
        opts: &TransactOpts,
        pack_id: U256,
        category: FixedBytes<4>,
    ) -> Result<TxHash, BindingError> {
        self.contract()
            .transact(
                opts,
                &IStickerType::addPackCategoryCall {
                    packId: pack_id,
                    category,
                },
            )
            .await
    }

    pub async fn remove_pack_category(
        &self,
        opts: &TransactOpts,
        pack_id: U256,
        category: FixedBytes<4>,
    ) -> Result<TxHash, BindingError> {
        self.contract()
            .transact(
                opts,
                &IStickerType::removePackCategoryCall {
                    packId: pack_id,
                    category,
                },
            )
            .await
    }

    /// Allow or stop sales of a pack.
    pub async fn set_pack_state(
        &self,
        opts: &TransactOpts,
        pack_id: U256,
        mintable: bool,
    ) -> Result<TxHash, BindingError> {
        self.contract()
            .transact(
                opts,
                &IStickerType::setPackStateCall {
                    packId: pack_id,
                    mintable,
                },
            )
            .await
    }

    pub async fn filter_register(
        &self,
        opts: &FilterOpts,
        pack_id: &[U256],
    ) -> Result<EventIterator<'_, P, IStickerType::Register>, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().filter_logs(opts, &rules).await
    }

    pub async fn watch_register(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerType::Register>>,
        pack_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().watch_logs(opts, &rules, sink).await
    }

    pub fn parse_register(&self, log: &Log) -> Result<IStickerType::Register, BindingError> {
        self.contract().parse_log(log)
    }

    pub async fn filter_price_changed(
        &self,
        opts: &FilterOpts,
        pack_id: &[U256],
    ) -> Result<EventIterator<'_, P, IStickerType::PriceChanged>, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().filter_logs(opts, &rules).await
    }

    pub async fn watch_price_changed(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerType::PriceChanged>>,
        pack_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().watch_logs(opts, &rules, sink).await
    }

    pub fn parse_price_changed(
        &self,
        log: &Log,
    ) -> Result<IStickerType::PriceChanged, BindingError> {
        self.contract().parse_log(log)
    }

    pub async fn filter_mintability_changed(
        &self,
        opts: &FilterOpts,
        pack_id: &[U256],
    ) -> Result<EventIterator<'_, P, IStickerType::MintabilityChanged>, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().filter_logs(opts, &rules).await
    }

    pub async fn watch_mintability_changed(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerType::MintabilityChanged>>,
        pack_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().watch_logs(opts, &rules, sink).await
    }

    pub fn parse_mintability_changed(
        &self,
        log: &Log,
    ) -> Result<IStickerType::MintabilityChanged, BindingError> {
        self.contract().parse_log(log)
    }

    pub async fn filter_contenthash_changed(
        &self,
        opts: &FilterOpts,
        pack_id: &[U256],
    ) -> Result<EventIterator<'_, P, IStickerType::ContenthashChanged>, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().filter_logs(opts, &rules).await
    }

    pub async fn watch_contenthash_changed(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerType::ContenthashChanged>>,
        pack_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().watch_logs(opts, &rules, sink).await
    }

    pub fn parse_contenthash_changed(
        &self,
        log: &Log,
    ) -> Result<IStickerType::ContenthashChanged, BindingError> {
        self.contract().parse_log(log)
    }

    pub async fn filter_categorized(
        &self,
        opts: &FilterOpts,
        category: &[FixedBytes<4>],
        pack_id: &[U256],
    ) -> Result<EventIterator<'_, P, IStickerType::Categorized>, BindingError> {
        let rules = TopicRules::any().topic1(category).topic2(pack_id);
        self.contract().filter_logs(opts, &rules).await
    }

    pub async fn watch_categorized(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerType::Categorized>>,
        category: &[FixedBytes<4>],
        pack_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(category).topic2(pack_id);
        self.contract().watch_logs(opts, &rules, sink).await
    }

    pub fn parse_categorized(&self, log: &Log) -> Result<IStickerType::Categorized, BindingError> {
        self.contract().parse_log(log)
    }

    pub async fn filter_uncategorized(
        &self,
        opts: &FilterOpts,
        category: &[FixedBytes<4>],
        pack_id: &[U256],
    ) -> Result<EventIterator<'_, P, IStickerType::Uncategorized>, BindingError> {
        let rules = TopicRules::any().topic1(category).topic2(pack_id);
        self.contract().filter_logs(opts, &rules).await
    }

    pub async fn watch_uncategorized(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerType::Uncategorized>>,
        category: &[FixedBytes<4>],
        pack_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(category).topic2(pack_id);
        self.contract().watch_logs(opts, &rules, sink).await
    }

    pub fn parse_uncategorized(
        &self,
        log: &Log,
    ) -> Result<IStickerType::Uncategorized, BindingError> {
        self.contract().parse_log(log)
    }

    pub async fn filter_unregister(
        &self,
        opts: &FilterOpts,
        pack_id: &[U256],
    ) -> Result<EventIterator<'_, P, IStickerType::Unregister>, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().filter_logs(opts, &rules).await
    }

    pub async fn watch_unregister(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerType::Unregister>>,
        pack_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(pack_id);
        self.contract().watch_logs(opts, &rules, sink).await
    }

    pub fn parse_unregister(&self, log: &Log) -> Result<IStickerType::Unregister, BindingError> {
        self.contract().parse_log(log)
    }
}
