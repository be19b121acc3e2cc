// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Deref;

use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use alloy_sol_types::sol;

use crate::abi::ContractKind;
use crate::binding::{Binding, BoundContract, CallOpts, TransactOpts};
use crate::config::BindingConfig;
use crate::errors::BindingError;

use super::{Controlled, Erc721Full, TokenClaimer};

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IStickerPack,
    "abi/StickerPack.json"
);

/// Binding for the `StickerPack` ERC-721 contract.
///
/// Each token is one purchase of a pack; [`StickerPack::token_pack_id`] maps a
/// token back to its pack. The ERC-721 surface is available through `Deref`.
#[derive(Debug, Clone)]
pub struct StickerPack<P> {
    inner: Erc721Full<P>,
}

impl<P> Deref for StickerPack<P> {
    type Target = Erc721Full<P>;

    fn deref(&self) -> &Erc721Full<P> {
        &self.inner
    }
}

impl<P: Provider> Binding for StickerPack<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        self.inner.contract()
    }
}

impl<P: Provider + Clone> StickerPack<P> {
    pub fn controlled(&self) -> Controlled<P> {
        Controlled::from_contract(self.contract().clone())
    }

    pub fn token_claimer(&self) -> TokenClaimer<P> {
        TokenClaimer::from_contract(self.contract().clone())
    }
}

impl<P: Provider> StickerPack<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        let contract = BoundContract::bind(ContractKind::StickerPack, address, provider, config)?;
        Ok(Self {
            inner: Erc721Full::from_contract(contract),
        })
    }

    /// Pack a token was minted for.
    pub async fn token_pack_id(
        &self,
        opts: &CallOpts,
        token_id: U256,
    ) -> Result<U256, BindingError> {
        self.contract()
            .call(opts, &IStickerPack::tokenPackIdCall { tokenId: token_id })
            .await
    }

    /// Tokens minted so far.
    pub async fn token_count(&self, opts: &CallOpts) -> Result<U256, BindingError> {
        self.contract()
            .call(opts, &IStickerPack::tokenCountCall {})
            .await
    }

    /// Mint a token of `pack_id` to `owner`. Controller only.
    pub async fn generate_token(
        &self,
        opts: &TransactOpts,
        owner: Address,
        pack_id: U256,
    ) -> Result<TxHash, BindingError> {
        self.contract()
            .transact(
                opts,
                &IStickerPack::generateTokenCall {
                    owner,
                    packId: pack_id,
                },
            )
            .await
    }
}
