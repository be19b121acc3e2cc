// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Buying packs in a single transaction through SNT's `approveAndCall`.
//!
//! The market accepts purchases via `receiveApproval`: the SNT token approves
//! the market for `price` and forwards the encoded `buyToken` call to it.

use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::Provider;
use alloy_sol_types::{sol, SolCall};
use tracing::{debug, warn};

use crate::binding::{CallOpts, TransactOpts};
use crate::config::constants::DEFAULT_BUY_GAS_ESTIMATE;
use crate::contracts::{IStickerMarket, StickerMarket, StickerType};
use crate::errors::BindingError;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface ISntToken {
        function approveAndCall(address spender, uint256 amount, bytes extraData) external returns (bool success);
    }
}

/// A pack purchase to be paid in SNT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyRequest {
    pub pack_id: U256,
    /// Receiver of the pack token
    pub destination: Address,
    /// Price in SNT wei; must equal the registered price
    pub price: U256,
}

impl BuyRequest {
    pub fn new(pack_id: U256, destination: Address, price: U256) -> Self {
        Self {
            pack_id,
            destination,
            price,
        }
    }

    /// Calldata of the market's `buyToken` for this purchase.
    pub fn buy_token_calldata(&self) -> Bytes {
        IStickerMarket::buyTokenCall {
            packId: self.pack_id,
            destination: self.destination,
            price: self.price,
        }
        .abi_encode()
        .into()
    }

    /// The SNT call that approves `market` and forwards the purchase to it.
    pub fn approve_and_call(&self, market: Address) -> ISntToken::approveAndCallCall {
        ISntToken::approveAndCallCall {
            spender: market,
            amount: self.price,
            extraData: self.buy_token_calldata(),
        }
    }
}

impl<P: Provider> StickerType<P> {
    /// Build a purchase of `pack_id` at its currently registered price.
    pub async fn buy_request(
        &self,
        opts: &CallOpts,
        pack_id: U256,
        destination: Address,
    ) -> Result<BuyRequest, BindingError> {
        let record = self.get_pack_data(opts, pack_id).await?;
        Ok(BuyRequest::new(pack_id, destination, record.price))
    }
}

impl<P: Provider> StickerMarket<P> {
    /// Buy a pack by calling `approveAndCall` on the SNT token at `snt`.
    pub async fn buy_with_approval(
        &self,
        opts: &TransactOpts,
        snt: Address,
        request: &BuyRequest,
    ) -> Result<TxHash, BindingError> {
        let call = request.approve_and_call(self.address());
        debug!(
            pack_id = %request.pack_id,
            price = %request.price,
            market = %self.address(),
            "Buying pack through approveAndCall"
        );
        self.send(
            opts,
            snt,
            ISntToken::approveAndCallCall::SIGNATURE,
            call.abi_encode(),
        )
        .await
    }

    /// Gas needed by [`StickerMarket::buy_with_approval`].
    ///
    /// Returns [`DEFAULT_BUY_GAS_ESTIMATE`] when the node cannot estimate,
    /// e.g. because the sender does not hold enough SNT yet.
    pub async fn estimate_buy_gas(
        &self,
        opts: &TransactOpts,
        snt: Address,
        request: &BuyRequest,
    ) -> u64 {
        let call = request.approve_and_call(self.address());
        match self
            .estimate(
                opts,
                snt,
                ISntToken::approveAndCallCall::SIGNATURE,
                call.abi_encode(),
            )
            .await
        {
            Ok(gas) => gas,
            Err(e) => {
                warn!(
                    pack_id = %request.pack_id,
                    error = %e,
                    fallback = DEFAULT_BUY_GAS_ESTIMATE,
                    "Gas estimation failed, using default"
                );
                DEFAULT_BUY_GAS_ESTIMATE
            }
        }
    }
}
