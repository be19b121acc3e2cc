// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-721 bindings: the core interface and its enumerable and metadata
//! extensions.

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

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IERC721,
    "abi/ERC721.json"
);

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IERC721Enumerable,
    "abi/ERC721Enumerable.json"
);

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IERC721Metadata,
    "abi/ERC721Metadata.json"
);

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IERC721Full,
    "abi/ERC721Full.json"
);

/// Binding for the core ERC-721 interface.
///
/// Every NFT binding in the crate dereferences to this type, so the core
/// methods and events are available on all of them.
#[derive(Debug, Clone)]
pub struct Erc721<P> {
    contract: BoundContract<P>,
}

impl<P> Deref for Erc721<P> {
    type Target = BoundContract<P>;

    fn deref(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Binding for Erc721<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Erc721<P> {
    /// Bind the ERC-721 ABI to `address`.
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        BoundContract::bind(ContractKind::Erc721, address, provider, config).map(Self::from_contract)
    }

    /// Wrap a contract bound with an ABI that includes ERC-721.
    pub(crate) fn from_contract(contract: BoundContract<P>) -> Self {
        Self { contract }
    }

    pub async fn balance_of(&self, opts: &CallOpts, owner: Address) -> Result<U256, BindingError> {
        self.contract
            .call(opts, &IERC721::balanceOfCall { owner })
            .await
    }

    pub async fn owner_of(&self, opts: &CallOpts, token_id: U256) -> Result<Address, BindingError> {
        self.contract
            .call(opts, &IERC721::ownerOfCall { tokenId: token_id })
            .await
    }

    pub async fn get_approved(
        &self,
        opts: &CallOpts,
        token_id: U256,
    ) -> Result<Address, BindingError> {
        self.contract
            .call(opts, &IERC721::getApprovedCall { tokenId: token_id })
            .await
    }

    pub async fn is_approved_for_all(
        &self,
        opts: &CallOpts,
        owner: Address,
        operator: Address,
    ) -> Result<bool, BindingError> {
        self.contract
            .call(opts, &IERC721::isApprovedForAllCall { owner, operator })
            .await
    }

    /// ERC-165 interface detection.
    pub async fn supports_interface(
        &self,
        opts: &CallOpts,
        interface_id: FixedBytes<4>,
    ) -> Result<bool, BindingError> {
        self.contract
            .call(
                opts,
                &IERC721::supportsInterfaceCall {
                    interfaceId: interface_id,
                },
            )
            .await
    }

    pub async fn approve(
        &self,
        opts: &TransactOpts,
        to: Address,
        token_id: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(opts, &IERC721::approveCall { to, tokenId: token_id })
            .await
    }

    pub async fn set_approval_for_all(
        &self,
        opts: &TransactOpts,
        operator: Address,
        approved: bool,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(opts, &IERC721::setApprovalForAllCall { operator, approved })
            .await
    }

    pub async fn transfer_from(
        &self,
        opts: &TransactOpts,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IERC721::transferFromCall {
                    from,
                    to,
                    tokenId: token_id,
                },
            )
            .await
    }

    /// `safeTransferFrom(address,address,uint256)`
    pub async fn safe_transfer_from(
        &self,
        opts: &TransactOpts,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IERC721::safeTransferFrom_0Call {
                    from,
                    to,
                    tokenId: token_id,
                },
            )
            .await
    }

    /// `safeTransferFrom(address,address,uint256,bytes)`
    pub async fn safe_transfer_from_with_data(
        &self,
        opts: &TransactOpts,
        from: Address,
        to: Address,
        token_id: U256,
        data: Bytes,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IERC721::safeTransferFrom_1Call {
                    from,
                    to,
                    tokenId: token_id,
                    data,
                },
            )
            .await
    }

    pub async fn filter_transfer(
        &self,
        opts: &FilterOpts,
        from: &[Address],
        to: &[Address],
        token_id: &[U256],
    ) -> Result<EventIterator<'_, P, IERC721::Transfer>, BindingError> {
        let rules = TopicRules::any().topic1(from).topic2(to).topic3(token_id);
        self.contract.filter_logs(opts, &rules).await
    }

    pub async fn watch_transfer(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IERC721::Transfer>>,
        from: &[Address],
        to: &[Address],
        token_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(from).topic2(to).topic3(token_id);
        self.contract.watch_logs(opts, &rules, sink).await
    }

    pub fn parse_transfer(&self, log: &Log) -> Result<IERC721::Transfer, BindingError> {
        self.contract.parse_log(log)
    }

    pub async fn filter_approval(
        &self,
        opts: &FilterOpts,
        owner: &[Address],
        approved: &[Address],
        token_id: &[U256],
    ) -> Result<EventIterator<'_, P, IERC721::Approval>, BindingError> {
        let rules = TopicRules::any()
            .topic1(owner)
            .topic2(approved)
            .topic3(token_id);
        self.contract.filter_logs(opts, &rules).await
    }

    pub async fn watch_approval(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IERC721::Approval>>,
        owner: &[Address],
        approved: &[Address],
        token_id: &[U256],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any()
            .topic1(owner)
            .topic2(approved)
            .topic3(token_id);
        self.contract.watch_logs(opts, &rules, sink).await
    }

    pub fn parse_approval(&self, log: &Log) -> Result<IERC721::Approval, BindingError> {
        self.contract.parse_log(log)
    }

    pub async fn filter_approval_for_all(
        &self,
        opts: &FilterOpts,
        owner: &[Address],
        operator: &[Address],
    ) -> Result<EventIterator<'_, P, IERC721::ApprovalForAll>, BindingError> {
        let rules = TopicRules::any().topic1(owner).topic2(operator);
        self.contract.filter_logs(opts, &rules).await
    }

    pub async fn watch_approval_for_all(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IERC721::ApprovalForAll>>,
        owner: &[Address],
        operator: &[Address],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(owner).topic2(operator);
        self.contract.watch_logs(opts, &rules, sink).await
    }

    pub fn parse_approval_for_all(
        &self,
        log: &Log,
    ) -> Result<IERC721::ApprovalForAll, BindingError> {
        self.contract.parse_log(log)
    }
}

/// Binding for ERC-721 with the enumeration extension.
#[derive(Debug, Clone)]
pub struct Erc721Enumerable<P> {
    inner: Erc721<P>,
}

impl<P> Deref for Erc721Enumerable<P> {
    type Target = Erc721<P>;

    fn deref(&self) -> &Erc721<P> {
        &self.inner
    }
}

impl<P: Provider> Binding for Erc721Enumerable<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.inner.contract
    }
}

impl<P: Provider> Erc721Enumerable<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        let contract =
            BoundContract::bind(ContractKind::Erc721Enumerable, address, provider, config)?;
        Ok(Self {
            inner: Erc721::from_contract(contract),
        })
    }

    pub async fn total_supply(&self, opts: &CallOpts) -> Result<U256, BindingError> {
        total_supply(&self.inner.contract, opts).await
    }

    pub async fn token_of_owner_by_index(
        &self,
        opts: &CallOpts,
        owner: Address,
        index: U256,
    ) -> Result<U256, BindingError> {
        token_of_owner_by_index(&self.inner.contract, opts, owner, index).await
    }

    pub async fn token_by_index(&self, opts: &CallOpts, index: U256) -> Result<U256, BindingError> {
        token_by_index(&self.inner.contract, opts, index).await
    }
}

/// Binding for ERC-721 with the metadata extension.
#[derive(Debug, Clone)]
pub struct Erc721Metadata<P> {
    inner: Erc721<P>,
}

impl<P> Deref for Erc721Metadata<P> {
    type Target = Erc721<P>;

    fn deref(&self) -> &Erc721<P> {
        &self.inner
    }
}

impl<P: Provider> Binding for Erc721Metadata<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.inner.contract
    }
}

impl<P: Provider> Erc721Metadata<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        let contract = BoundContract::bind(ContractKind::Erc721Metadata, address, provider, config)?;
        Ok(Self {
            inner: Erc721::from_contract(contract),
        })
    }

    pub async fn name(&self, opts: &CallOpts) -> Result<String, BindingError> {
        name(&self.inner.contract, opts).await
    }

    pub async fn symbol(&self, opts: &CallOpts) -> Result<String, BindingError> {
        symbol(&self.inner.contract, opts).await
    }

    pub async fn token_uri(&self, opts: &CallOpts, token_id: U256) -> Result<String, BindingError> {
        token_uri(&self.inner.contract, opts, token_id).await
    }
}

/// Binding for ERC-721 with both extensions.
///
/// [`StickerPack`](super::StickerPack) and [`StickerType`](super::StickerType)
/// dereference to this type.
#[derive(Debug, Clone)]
pub struct Erc721Full<P> {
    inner: Erc721<P>,
}

impl<P> Deref for Erc721Full<P> {
    type Target = Erc721<P>;

    fn deref(&self) -> &Erc721<P> {
        &self.inner
    }
}

impl<P: Provider> Binding for Erc721Full<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.inner.contract
    }
}

impl<P: Provider> Erc721Full<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        BoundContract::bind(ContractKind::Erc721Full, address, provider, config)
            .map(Self::from_contract)
    }

    pub(crate) fn from_contract(contract: BoundContract<P>) -> Self {
        Self {
            inner: Erc721::from_contract(contract),
        }
    }

    pub async fn total_supply(&self, opts: &CallOpts) -> Result<U256, BindingError> {
        total_supply(&self.inner.contract, opts).await
    }

    pub async fn token_of_owner_by_index(
        &self,
        opts: &CallOpts,
        owner: Address,
        index: U256,
    ) -> Result<U256, BindingError> {
        token_of_owner_by_index(&self.inner.contract, opts, owner, index).await
    }

    pub async fn token_by_index(&self, opts: &CallOpts, index: U256) -> Result<U256, BindingError> {
        token_by_index(&self.inner.contract, opts, index).await
    }

    pub async fn name(&self, opts: &CallOpts) -> Result<String, BindingError> {
        name(&self.inner.contract, opts).await
    }

    pub async fn symbol(&self, opts: &CallOpts) -> Result<String, BindingError> {
        symbol(&self.inner.contract, opts).await
    }

    pub async fn token_uri(&self, opts: &CallOpts, token_id: U256) -> Result<String, BindingError> {
        token_uri(&self.inner.contract, opts, token_id).await
    }
}

async fn total_supply<P: Provider>(
    contract: &BoundContract<P>,
    opts: &CallOpts,
) -> Result<U256, BindingError> {
    contract
        .call(opts, &IERC721Enumerable::totalSupplyCall {})
        .await
}

async fn token_of_owner_by_index<P: Provider>(
    contract: &BoundContract<P>,
    opts: &CallOpts,
    owner: Address,
    index: U256,
) -> Result<U256, BindingError> {
    contract
        .call(
            opts,
            &IERC721Enumerable::tokenOfOwnerByIndexCall { owner, index },
        )
        .await
}

async fn token_by_index<P: Provider>(
    contract: &BoundContract<P>,
    opts: &CallOpts,
    index: U256,
) -> Result<U256, BindingError> {
    contract
        .call(opts, &IERC721Enumerable::tokenByIndexCall { index })
        .await
}

async fn name<P: Provider>(
    contract: &BoundContract<P>,
    opts: &CallOpts,
) -> Result<String, BindingError> {
    contract.call(opts, &IERC721Metadata::nameCall {}).await
}

async fn symbol<P: Provider>(
    contract: &BoundContract<P>,
    opts: &CallOpts,
) -> Result<String, BindingError> {
    contract.call(opts, &IERC721Metadata::symbolCall {}).await
}

async fn token_uri<P: Provider>(
    contract: &BoundContract<P>,
    opts: &CallOpts,
    token_id: U256,
) -> Result<String, BindingError> {
    contract
        .call(opts, &IERC721Metadata::tokenURICall { tokenId: token_id })
        .await
}
