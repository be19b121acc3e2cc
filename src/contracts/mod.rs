// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed bindings for each contract interface
//!
//! Call, return and event types are generated by `sol!` from the JSON ABIs
//! under `abi/` and live in the `I*` modules (for example
//! [`IStickerType::Register`]). The wrappers in this module turn them into
//! methods taking Rust arguments.
//!
//! Contracts that inherit an interface dereference to its binding:
//!
//! ```text
//! StickerType ─┐
//! StickerPack ─┴─> Erc721Full ─> Erc721 ─> BoundContract
//! Erc721Enumerable, Erc721Metadata ─────> Erc721
//! StickerMarket, Erc20Token, Erc165, Controlled, ... ─> BoundContract
//! ```
//!
//! Mixins that a contract shares with others (controller, token recovery)
//! are reached through view constructors such as
//! [`StickerMarket::controlled`].
//!
//! # Example
//!
//! ```rust,ignore
//! use sticker_bindings::{BindingConfig, CallOpts, StickerType};
//!
//! let registry = StickerType::new(address, provider, BindingConfig::default())?;
//! let opts = CallOpts::default();
//!
//! let count = registry.pack_count(&opts).await?;
//! let name = registry.name(&opts).await?; // ERC-721 metadata, via Deref
//! let owner = registry.controlled().controller(&opts).await?;
//! ```

mod controlled;
mod erc165;
mod erc20;
mod erc721;
mod sticker_market;
mod sticker_pack;
mod sticker_type;

pub use controlled::{
    ApproveAndCallFallBack, Controlled, IApproveAndCallFallBack, IControlled, ITokenClaimer,
    TokenClaimer,
};
pub use erc165::{Erc165, IERC165};
pub use erc20::{Erc20Token, IERC20Token};
pub use erc721::{
    Erc721, Erc721Enumerable, Erc721Full, Erc721Metadata, IERC721Enumerable, IERC721Full,
    IERC721Metadata, IERC721,
};
pub use sticker_market::{IStickerMarket, MarketStatus, PackRegistration, StickerMarket};
pub use sticker_pack::{IStickerPack, StickerPack};
pub use sticker_type::{IStickerType, StickerType};
