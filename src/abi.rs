// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Embedded contract ABIs and selector tables
//!
//! Every interface the crate binds ships as a JSON ABI under `abi/`. The same
//! files feed the `sol!` invocations in [`crate::contracts`], so the strings
//! exported here always describe the generated types.
//!
//! # Example
//!
//! ```rust
//! use sticker_bindings::ContractKind;
//!
//! let selectors = ContractKind::Erc20Token.selectors().unwrap();
//! assert_eq!(selectors.get_hex("a9059cbb"), Some("transfer(address,uint256)"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use alloy_json_abi::JsonAbi;
use alloy_primitives::Selector;

use crate::errors::BindingError;

/// ABI of `ERC165`.
pub const ERC165_ABI: &str = include_str!("../abi/ERC165.json");
/// ABI of `ERC20Token`.
pub const ERC20_TOKEN_ABI: &str = include_str!("../abi/ERC20Token.json");
/// ABI of `ERC721`.
pub const ERC721_ABI: &str = include_str!("../abi/ERC721.json");
/// ABI of `ERC721Enumerable`.
pub const ERC721_ENUMERABLE_ABI: &str = include_str!("../abi/ERC721Enumerable.json");
/// ABI of `ERC721Metadata`.
pub const ERC721_METADATA_ABI: &str = include_str!("../abi/ERC721Metadata.json");
/// ABI of `ERC721Full`.
pub const ERC721_FULL_ABI: &str = include_str!("../abi/ERC721Full.json");
/// ABI of `Controlled`.
pub const CONTROLLED_ABI: &str = include_str!("../abi/Controlled.json");
/// ABI of `TokenClaimer`.
pub const TOKEN_CLAIMER_ABI: &str = include_str!("../abi/TokenClaimer.json");
/// ABI of `ApproveAndCallFallBack`.
pub const APPROVE_AND_CALL_FALLBACK_ABI: &str = include_str!("../abi/ApproveAndCallFallBack.json");
/// ABI of `StickerMarket`.
pub const STICKER_MARKET_ABI: &str = include_str!("../abi/StickerMarket.json");
/// ABI of `StickerPack`.
pub const STICKER_PACK_ABI: &str = include_str!("../abi/StickerPack.json");
/// ABI of `StickerType`.
pub const STICKER_TYPE_ABI: &str = include_str!("../abi/StickerType.json");

/// The contract interfaces this crate binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContractKind {
    Erc165,
    Erc20Token,
    Erc721,
    Erc721Enumerable,
    Erc721Metadata,
    Erc721Full,
    Controlled,
    TokenClaimer,
    ApproveAndCallFallBack,
    StickerMarket,
    StickerPack,
    StickerType,
}

impl ContractKind {
    /// Every bound interface, in declaration order.
    pub const ALL: [ContractKind; 12] = [
        ContractKind::Erc165,
        ContractKind::Erc20Token,
        ContractKind::Erc721,
        ContractKind::Erc721Enumerable,
        ContractKind::Erc721Metadata,
        ContractKind::Erc721Full,
        ContractKind::Controlled,
        ContractKind::TokenClaimer,
        ContractKind::ApproveAndCallFallBack,
        ContractKind::StickerMarket,
        ContractKind::StickerPack,
        ContractKind::StickerType,
    ];

    /// Solidity name of the interface.
    pub const fn name(self) -> &'static str {
        match self {
            ContractKind::Erc165 => "ERC165",
            ContractKind::Erc20Token => "ERC20Token",
            ContractKind::Erc721 => "ERC721",
            ContractKind::Erc721Enumerable => "ERC721Enumerable",
            ContractKind::Erc721Metadata => "ERC721Metadata",
            ContractKind::Erc721Full => "ERC721Full",
            ContractKind::Controlled => "Controlled",
            ContractKind::TokenClaimer => "TokenClaimer",
            ContractKind::ApproveAndCallFallBack => "ApproveAndCallFallBack",
            ContractKind::StickerMarket => "StickerMarket",
            ContractKind::StickerPack => "StickerPack",
            ContractKind::StickerType => "StickerType",
        }
    }

    /// The embedded JSON ABI.
    pub const fn abi_json(self) -> &'static str {
        match self {
            ContractKind::Erc165 => ERC165_ABI,
            ContractKind::Erc20Token => ERC20_TOKEN_ABI,
            ContractKind::Erc721 => ERC721_ABI,
            ContractKind::Erc721Enumerable => ERC721_ENUMERABLE_ABI,
            ContractKind::Erc721Metadata => ERC721_METADATA_ABI,
            ContractKind::Erc721Full => ERC721_FULL_ABI,
            ContractKind::Controlled => CONTROLLED_ABI,
            ContractKind::TokenClaimer => TOKEN_CLAIMER_ABI,
            ContractKind::ApproveAndCallFallBack => APPROVE_AND_CALL_FALLBACK_ABI,
            ContractKind::StickerMarket => STICKER_MARKET_ABI,
            ContractKind::StickerPack => STICKER_PACK_ABI,
            ContractKind::StickerType => STICKER_TYPE_ABI,
        }
    }

    /// Parse the embedded ABI.
    pub fn parse_abi(self) -> Result<JsonAbi, BindingError> {
        serde_json::from_str(self.abi_json()).map_err(|source| BindingError::AbiParse {
            contract: self.name(),
            source,
        })
    }

    /// Selector table for every function in the ABI.
    pub fn selectors(self) -> Result<SelectorMap, BindingError> {
        Ok(SelectorMap::from_abi(&self.parse_abi()?))
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map from 4-byte function selector to canonical signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorMap {
    entries: BTreeMap<Selector, String>,
}

impl SelectorMap {
    /// Collect the selectors of every function in `abi`.
    pub fn from_abi(abi: &JsonAbi) -> Self {
        let entries = abi
            .functions()
            .map(|function| (function.selector(), function.signature()))
            .collect();
        Self { entries }
    }

    /// Signature for a selector.
    pub fn get(&self, selector: &Selector) -> Option<&str> {
        self.entries.get(selector).map(String::as_str)
    }

    /// Signature for a hex selector, with or without `0x`.
    pub fn get_hex(&self, selector: &str) -> Option<&str> {
        let selector: Selector = selector.parse().ok()?;
        self.get(&selector)
    }

    /// Selector of a canonical signature such as `balanceOf(address)`.
    pub fn selector_of(&self, signature: &str) -> Option<Selector> {
        self.entries
            .iter()
            .find(|(_, candidate)| candidate.as_str() == signature)
            .map(|(selector, _)| *selector)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Selector, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
