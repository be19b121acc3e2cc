// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Mixin bindings shared by the sticker contracts: controller ownership,
//! stuck-token recovery and the `approveAndCall` receiver.

use std::ops::Deref;

use alloy_primitives::{Address, Bytes, TxHash, U256};
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
    IControlled,
    "abi/Controlled.json"
);

sol!(
    #[derive(Debug, PartialEq, Eq)]
    ITokenClaimer,
    "abi/TokenClaimer.json"
);

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IApproveAndCallFallBack,
    "abi/ApproveAndCallFallBack.json"
);

/// Binding for a contract with a single controller account.
#[derive(Debug, Clone)]
pub struct Controlled<P> {
    contract: BoundContract<P>,
}

impl<P> Deref for Controlled<P> {
    type Target = BoundContract<P>;

    fn deref(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Binding for Controlled<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Controlled<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        BoundContract::bind(ContractKind::Controlled, address, provider, config)
            .map(Self::from_contract)
    }

    pub(crate) fn from_contract(contract: BoundContract<P>) -> Self {
        Self { contract }
    }

    /// Current controller.
    pub async fn controller(&self, opts: &CallOpts) -> Result<Address, BindingError> {
        self.contract
            .call(opts, &IControlled::controllerCall {})
            .await
    }

    /// Hand control to `new_controller`. Only the current controller may call this.
    pub async fn change_controller(
        &self,
        opts: &TransactOpts,
        new_controller: Address,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(
                opts,
                &IControlled::changeControllerCall {
                    newController: new_controller,
                },
            )
            .await
    }

    pub async fn filter_new_controller(
        &self,
        opts: &FilterOpts,
    ) -> Result<EventIterator<'_, P, IControlled::NewController>, BindingError> {
        self.contract.filter_logs(opts, &TopicRules::any()).await
    }

    pub async fn watch_new_controller(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<IControlled::NewController>>,
    ) -> Result<WatchHandle, BindingError> {
        self.contract
            .watch_logs(opts, &TopicRules::any(), sink)
            .await
    }

    pub fn parse_new_controller(
        &self,
        log: &Log,
    ) -> Result<IControlled::NewController, BindingError> {
        self.contract.parse_log(log)
    }
}

/// Binding for recovering tokens sent to a contract by mistake.
#[derive(Debug, Clone)]
pub struct TokenClaimer<P> {
    contract: BoundContract<P>,
}

impl<P> Deref for TokenClaimer<P> {
    type Target = BoundContract<P>;

    fn deref(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Binding for TokenClaimer<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> TokenClaimer<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        BoundContract::bind(ContractKind::TokenClaimer, address, provider, config)
            .map(Self::from_contract)
    }

    pub(crate) fn from_contract(contract: BoundContract<P>) -> Self {
        Self { contract }
    }

    /// Send the contract's balance of `token` to the controller.
    ///
    /// The zero address claims ether.
    pub async fn claim_tokens(
        &self,
        opts: &TransactOpts,
        token: Address,
    ) -> Result<TxHash, BindingError> {
        self.contract
            .transact(opts, &ITokenClaimer::claimTokensCall { token })
            .await
    }

    pub async fn filter_claimed_tokens(
        &self,
        opts: &FilterOpts,
        token: &[Address],
        controller: &[Address],
    ) -> Result<EventIterator<'_, P, ITokenClaimer::ClaimedTokens>, BindingError> {
        let rules = TopicRules::any().topic1(token).topic2(controller);
        self.contract.filter_logs(opts, &rules).await
    }

    pub async fn watch_claimed_tokens(
        &self,
        opts: &WatchOpts,
        sink: mpsc::Sender<EventLog<ITokenClaimer::ClaimedTokens>>,
        token: &[Address],
        controller: &[Address],
    ) -> Result<WatchHandle, BindingError> {
        let rules = TopicRules::any().topic1(token).topic2(controller);
        self.contract.watch_logs(opts, &rules, sink).await
    }

    pub fn parse_claimed_tokens(
        &self,
        log: &Log,
    ) -> Result<ITokenClaimer::ClaimedTokens, BindingError> {
        self.contract.parse_log(log)
    }
}

/// Binding for contracts that accept `approveAndCall` callbacks.
#[derive(Debug, Clone)]
pub struct ApproveAndCallFallBack<P> {
    contract: BoundContract<P>,
}

impl<P> Deref for ApproveAndCallFallBack<P> {
    type Target = BoundContract<P>;

    fn deref(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Binding for ApproveAndCallFallBack<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> ApproveAndCallFallBack<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        BoundContract::bind(ContractKind::ApproveAndCallFallBack, address, provider, config)
            .map(Self::from_contract)
    }

    pub(crate) fn from_contract(contract: BoundContract<P>) -> Self {
        Self { contract }
    }

    /// Normally invoked by the token contract inside `approveAndCall`.
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
                &IApproveAndCallFallBack::receiveApprovalCall {
                    from,
                    amount,
                    token,
                    data,
                },
            )
            .await
    }
}
