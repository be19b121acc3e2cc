// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Deref;

use alloy_primitives::{Address, FixedBytes};
use alloy_provider::Provider;
use alloy_sol_types::sol;

use crate::abi::ContractKind;
use crate::binding::{Binding, BoundContract, CallOpts};
use crate::config::BindingConfig;
use crate::errors::BindingError;

sol!(
    #[derive(Debug, PartialEq, Eq)]
    IERC165,
    "abi/ERC165.json"
);

/// Binding for ERC-165 interface detection.
#[derive(Debug, Clone)]
pub struct Erc165<P> {
    contract: BoundContract<P>,
}

impl<P> Deref for Erc165<P> {
    type Target = BoundContract<P>;

    fn deref(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Binding for Erc165<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        &self.contract
    }
}

impl<P: Provider> Erc165<P> {
    pub fn new(address: Address, provider: P, config: BindingConfig) -> Result<Self, BindingError> {
        let contract = BoundContract::bind(ContractKind::Erc165, address, provider, config)?;
        Ok(Self { contract })
    }

    /// Whether the contract implements `interface_id`.
    ///
    /// See [`interface_ids`](crate::config::constants::interface_ids) for the
    /// identifiers of the interfaces bound by this crate.
    pub async fn supports_interface(
        &self,
        opts: &CallOpts,
        interface_id: FixedBytes<4>,
    ) -> Result<bool, BindingError> {
        self.contract
            .call(
                opts,
                &IERC165::supportsInterfaceCall {
                    interfaceId: interface_id,
                },
            )
            .await
    }
}
