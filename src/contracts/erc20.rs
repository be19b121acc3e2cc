// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 token binding.

use std::ops::Deref;

use alloy_primitives::{Address, TxHash, U256};
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
    IERC20Token,
    "abi/ERC20Token.json"
);

/// Binding for an ERC-20 token such as SNT.
#[derive(Debug, Clone)]
pub struct Erc20Token<P> {
    contract: BoundContract<P>,
}

impl<P> Deref for Erc20Token<P> {
    type Target = BoundContract<P>;

    fn deref(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Binding for Erc20Token<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Erc20Token<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        let contract = BoundContract::bind(ContractKind::Erc20Token, address, provider, config)?;
        Ok(Self { contract })
    }

    pub async fn total_supply(&self, opts: &CallOpts) -> Result<U256, BindingError> {
        self.contract
            .call(opts, &IERC20Token::totalSupplyCall {})
            .await
    }

    pub async fn balance_of(&self, opts: &CallOpts, owner: Address) -> Result<U256, BindingError> {
        self.contract
            .call(opts, &IERC20Token::balanceOfCall { owner })
            .await
    }

    /// Amount `spender` may still move on behalf of `owner`.
    pub async fn allowance(
        &self,
        opts: &CallOpts,
        owner: Address,
        spender: Address,
    ) -> Result<U256, BindingError> {
        self.contract
            .call(opts, &IERC20Token::allowanceCall { owner, spender })
            .await
    }

    pub async fn transfer(
        &self,
        opts: &TransactOpts,
        to: Address,
        value: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(opts, &IERC20Token::transferCall { to, value })
            .await
    }

    pub async fn approve(
        &self,
        opts: &TransactOpts,
        spender: Address,
        value: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(opts, &IERC20Token::approveCall { spender, value })
            .await
    }

    pub async fn transfer_from(
        &self,
        opts: &TransactOpts,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(opts, &IERC20Token::transferFromCall { from, to, value })
            .await
    }

    pub async fn filter_transfer(
        &self,
        opts: &FilterOpts,
        from: &[Address],
        to: &[Address],
    ) -> Result<EventIterator<'_, P, IERC20Token::Transfer>, BindingError> {
        let rules = TopicRules::any().topic1(from).topic2(to);
        self.contract.filter_logs(opts, &rules).await
    }

    pub async fn watch_transfer(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IERC20Token::Transfer>>,
        from: &[Address],
        to: &[Address],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(from).topic2(to);
        self.contract.watch_logs(opts, &rules, sink).await
    }

    pub fn parse_transfer(&self, log: &Log) -> Result<IERC20Token::Transfer, BindingError> {
        self.contract.parse_log(log)
    }

    pub async fn filter_approval(
        &self,
        opts: &FilterOpts,
        owner: &[Address],
        spender: &[Address],
    ) -> Result<EventIterator<'_, P, IERC20Token::Approval>, BindingError> {
        let rules = TopicRules::any().topic1(owner).topic2(spender);
        self.contract.filter_logs(opts, &rules).await
    }

    pub async fn watch_approval(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IERC20Token::Approval>>,
        owner: &[Address],
        spender: &[Address],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(owner).topic2(spender);
        self.contract.watch_logs(opts, &rules, sink).await
    }

    pub fn parse_approval(&self, log: &Log) -> Result<IERC20Token::Approval, BindingError> {
        self.contract.parse_log(log)
    }
}
