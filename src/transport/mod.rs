// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower layers for the RPC client underneath a binding's provider.
//!
//! [`crate::provider::create_http_provider`] installs these from a
//! [`crate::provider::ProviderConfig`]; they can also be stacked by hand:
//!
//! ```rust,ignore
//! use sticker_bindings::transport::{LoggingLayer, RateLimitLayer};
//! use alloy_rpc_client::ClientBuilder;
//! use alloy_provider::ProviderBuilder;
//!
//! let client = ClientBuilder::default()
//!     .layer(LoggingLayer::new())
//!     .layer(RateLimitLayer::per_second(10))
//!     .http(rpc_url);
//! let provider = ProviderBuilder::new().connect_client(client);
//! ```

mod logging;
mod rate_limit;

pub use logging::{LoggingLayer, LoggingService, PayloadLogging};
pub use rate_limit::{RateLimitLayer, RateLimitService};
