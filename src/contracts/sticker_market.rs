// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Binding for the sticker market: pack registration, purchases and market
//! administration.

use std::fmt;
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

use super::{ApproveAndCallFallBack, Controlled, TokenClaimer};

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IStickerMarket,
    "abi/StickerMarket.json"
);

/// Lifecycle state of the market contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketStatus {
    Invalid,
    /// Registration and purchases allowed
    Open,
    /// Only purchases allowed
    BuyOnly,
    /// Only the controller may register packs
    Controlled,
    /// Nothing allowed
    Closed,
    /// A value this crate does not know
    Unknown(u8),
}

impl From<u8> for MarketStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => MarketStatus::Invalid,
            1 => MarketStatus::Open,
            2 => MarketStatus::BuyOnly,
            3 => MarketStatus::Controlled,
            4 => MarketStatus::Closed,
            other => MarketStatus::Unknown(other),
        }
    }
}

impl From<MarketStatus> for u8 {
    fn from(status: MarketStatus) -> Self {
        match status {
            MarketStatus::Invalid => 0,
            MarketStatus::Open => 1,
            MarketStatus::BuyOnly => 2,
            MarketStatus::Controlled => 3,
            MarketStatus::Closed => 4,
            MarketStatus::Unknown(other) => other,
        }
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketStatus::Invalid => f.write_str("invalid"),
            MarketStatus::Open => f.write_str("open"),
            MarketStatus::BuyOnly => f.write_str("buy-only"),
            MarketStatus::Controlled => f.write_str("controlled"),
            MarketStatus::Closed => f.write_str("closed"),
            MarketStatus::Unknown(value) => write!(f, "unknown({value})"),
        }
    }
}

/// Arguments shared by `registerPack` and `generatePack`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackRegistration {
    /// Price in SNT wei
    pub price: U256,
    /// Share of each sale donated, in basis points
    pub donate: U256,
    pub category: Vec<FixedBytes<4>>,
    pub owner: Address,
    /// EIP-1577 content hash of the pack metadata
    pub contenthash: Bytes,
    /// Registration fee paid
    pub fee: U256,
}

/// Binding for the `StickerMarket` contract.
///
/// The controller and token recovery mixins are reachable through
/// [`StickerMarket::controlled`] and [`StickerMarket::token_claimer`].
#[derive(Debug, Clone)]
pub struct StickerMarket<P> {
    contract: BoundContract<P>,
}

impl<P> Deref for StickerMarket<P> {
    type Target = BoundContract<P>;

    fn deref(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Binding for StickerMarket<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider + Clone> StickerMarket<P> {
    /// Controller functions and events of this market.
    pub fn controlled(&self) -> Controlled<P> {
        Controlled::from_contract(self.contract.clone())
    }

    /// Token recovery functions and events of this market.
    pub fn token_claimer(&self) -> TokenClaimer<P> {
        TokenClaimer::from_contract(self.contract.clone())
    }

    /// The `receiveApproval` entry point of this market.
    pub fn approve_and_call_fallback(&self) -> ApproveAndCallFallBack<P> {
        ApproveAndCallFallBack::from_contract(self.contract.clone())
    }
}

impl<P: Provider> StickerMarket<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        let contract = BoundContract::bind(ContractKind::StickerMarket, address, provider, config)?;
        Ok(Self { contract })
    }

    /// SNT token accepted as payment.
    pub async fn snt(&self, opts: &CallOpts) -> Result<Address, BindingError> {
        self.contract
            .call(opts, &IStickerMarket::sntCall {})
            .await
    }

    pub async fn sticker_pack(&self, opts: &CallOpts) -> Result<Address, BindingError> {
        self.contract
            .call(opts, &IStickerMarket::stickerPackCall {})
            .await
    }

    pub async fn sticker_type(&self, opts: &CallOpts) -> Result<Address, BindingError> {
        self.contract
            .call(opts, &IStickerMarket::stickerTypeCall {})
            .await
    }

    pub async fn state(&self, opts: &CallOpts) -> Result<MarketStatus, BindingError> {
        self.contract
            .call(opts, &IStickerMarket::stateCall {})
            .await
            .map(MarketStatus::from)
    }

    pub async fn register_fee(&self, opts: &CallOpts) -> Result<U256, BindingError> {
        self.contract
            .call(opts, &IStickerMarket::registerFeeCall {})
            .await
    }

    pub async fn burn_rate(&self, opts: &CallOpts) -> Result<U256, BindingError> {
        self.contract
            .call(opts, &IStickerMarket::burnRateCall {})
            .await
    }

    /// Category, mint time and content hash of a purchased token.
    pub async fn get_token_data(
        &self,
        opts: &CallOpts,
        token_id: U256,
    ) -> Result<IStickerMarket::getTokenDataReturn, BindingError> {
        self.contract
            .call(opts, &IStickerMarket::getTokenDataCall { tokenId: token_id })
            .await
    }

    /// Buy a pack directly. The market must already hold an SNT allowance of
    /// at least `price` from the sender.
    pub async fn buy_token(
        &self,
        opts: &TransactOpts,
        pack_id: U256,
        destination: Address,
        price: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IStickerMarket::buyTokenCall {
                    packId: pack_id,
                    destination,
                    price,
                },
            )
            .await
    }

    pub async fn register_pack(
        &self,
        opts: &TransactOpts,
        pack: PackRegistration,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IStickerMarket::registerPackCall {
                    price: pack.price,
                    donate: pack.donate,
                    category: pack.category,
                    owner: pack.owner,
                    contenthash: pack.contenthash,
                    fee: pack.fee,
                },
            )
            .await
    }

    /// Controller-only variant of [`Self::register_pack`].
    pub async fn generate_pack(
        &self,
        opts: &TransactOpts,
        pack: PackRegistration,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IStickerMarket::generatePackCall {
                    price: pack.price,
                    donate: pack.donate,
                    category: pack.category,
                    owner: pack.owner,
                    contenthash: pack.contenthash,
                    fee: pack.fee,
                },
            )
            .await
    }

    /// Remove a pack, clearing at most `limit` category entries.
    pub async fn purge_pack(
        &self,
        opts: &TransactOpts,
        pack_id: U256,
        limit: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IStickerMarket::purgePackCall {
                    packId: pack_id,
                    limit,
                },
            )
            .await
    }

    /// Mint a pack token to `owner` without payment. Controller only.
    pub async fn generate_token(
        &self,
        opts: &TransactOpts,
        owner: Address,
        pack_id: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IStickerMarket::generateTokenCall {
                    owner,
                    packId: pack_id,
                },
            )
            .await
    }

    pub async fn set_market_state(
        &self,
        opts: &TransactOpts,
        state: MarketStatus,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IStickerMarket::setMarketStateCall {
                    state: state.into(),
                },
            )
            .await
    }

    pub async fn set_register_fee(
        &self,
        opts: &TransactOpts,
        value: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(opts, &IStickerMarket::setRegisterFeeCall { value })
            .await
    }

    pub async fn set_burn_rate(
        &self,
        opts: &TransactOpts,
        value: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(opts, &IStickerMarket::setBurnRateCall { value })
            .await
    }

    /// Move control of the pack and type registries to a new market.
    pub async fn migrate(
        &self,
        opts: &TransactOpts,
        new_controller: Address,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IStickerMarket::migrateCall {
                    newController: new_controller,
                },
            )
            .await
    }

    pub async fn receive_approval(
        &self,
        opts: &TransactOpts,
        from: Address,
        amount: U256,
        token: Address,
        data: Bytes,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IStickerMarket::receiveApprovalCall {
                    from,
                    amount,
                    token,
                    data,
                },
            )
            .await
    }

    pub async fn filter_market_state(
        &self,
        opts: &FilterOpts,
    ) -> Result<EventIterator<'_, P, IStickerMarket::MarketState>, BindingError> {
        self.contract.filter_logs(opts, &TopicRules::any()).await
    }

    pub async fn watch_market_state(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerMarket::MarketState>>,
    ) -> Result<WatchHandle, BindingError> {
        self.contract
            .watch_logs(opts, &TopicRules::any(), sink)
            .await
    }

    pub fn parse_market_state(
        &self,
        log: &Log,
    ) -> Result<IStickerMarket::MarketState, BindingError> {
        self.contract.parse_log(log)
    }

    pub async fn filter_register_fee(
        &self,
        opts: &FilterOpts,
    ) -> Result<EventIterator<'_, P, IStickerMarket::RegisterFee>, BindingError> {
        self.contract.filter_logs(opts, &TopicRules::any()).await
    }

    pub async fn watch_register_fee(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerMarket::RegisterFee>>,
    ) -> Result<WatchHandle, BindingError> {
        self.contract
            .watch_logs(opts, &TopicRules::any(), sink)
            .await
    }

    pub fn parse_register_fee(
        &self,
        log: &Log,
    ) -> Result<IStickerMarket::RegisterFee, BindingError> {
        self.contract.parse_log(log)
    }

    pub async fn filter_burn_rate(
        &self,
        opts: &FilterOpts,
    ) -> Result<EventIterator<'_, P, IStickerMarket::BurnRate>, BindingError> {
        self.contract.filter_logs(opts, &TopicRules::any()).await
    }

    pub async fn watch_burn_rate(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IStickerMarket::BurnRate>>,
    ) -> Result<WatchHandle, BindingError> {
        self.contract
            .watch_logs(opts, &TopicRules::any(), sink)
            .await
    }

    pub fn parse_burn_rate(&self, log: &Log) -> Result<IStickerMarket::BurnRate, BindingError> {
        self.contract.parse_log(log)
    }
}
