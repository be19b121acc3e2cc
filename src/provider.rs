// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Providers for the contract bindings.
//!
//! Bindings accept any [`alloy_provider::Provider`]; these helpers build a
//! plain [`RootProvider`] with the crate's transport layers installed.
//! Transactions are sent through `eth_sendTransaction`, so the node (or a
//! wallet filler added by the caller) is expected to hold the signing keys.

use std::time::Duration;

use alloy_provider::{ProviderBuilder, RootProvider};
use alloy_rpc_client::ClientBuilder;

use crate::errors::RpcError;
use crate::transport::{LoggingLayer, PayloadLogging, RateLimitLayer};

/// Provider returned by the factory functions.
pub type StickerProvider = RootProvider;

/// Endpoint and transport settings for a provider.
///
/// # Example
///
/// ```rust
/// use sticker_bindings::provider::ProviderConfig;
///
/// let config = ProviderConfig::new("https://mainnet.infura.io/v3/KEY")
///     .with_rate_limit(10)
///     .with_logging();
/// assert_eq!(config.rate_limit_per_second, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub url: String,
    /// Requests per second, bursting up to the same number
    pub rate_limit_per_second: Option<u32>,
    /// Minimum spacing between requests; ignored when a rate limit is set
    pub min_delay: Option<Duration>,
    /// Request tracing; `None` disables the logging layer
    pub logging: Option<PayloadLogging>,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            rate_limit_per_second: None,
            min_delay: None,
            logging: None,
        }
    }

    #[must_use]
    pub fn with_rate_limit(mut self, requests_per_second: u32) -> Self {
        self.rate_limit_per_second = Some(requests_per_second);
        self
    }

    #[must_use]
    pub fn with_min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = Some(delay);
        self
    }

    /// Trace each request without payloads.
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.with_payload_logging(PayloadLogging::Off)
    }

    #[must_use]
    pub fn with_payload_logging(mut self, payloads: PayloadLogging) -> Self {
        self.logging = Some(payloads);
        self
    }

    fn rate_limit_layer(&self) -> Option<RateLimitLayer> {
        match (self.rate_limit_per_second, self.min_delay) {
            (Some(rps), delay) => {
                if delay.is_some() {
                    tracing::warn!(
                        "Both rate_limit_per_second and min_delay specified, using rate_limit_per_second"
                    );
                }
                Some(RateLimitLayer::per_second(rps))
            }
            (None, Some(delay)) => Some(RateLimitLayer::with_min_delay(delay)),
            (None, None) => None,
        }
    }

    fn logging_layer(&self) -> Option<LoggingLayer> {
        self.logging
            .map(|payloads| LoggingLayer::new().payloads(payloads))
    }
}

/// Create an HTTP provider.
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL does not parse.
///
/// # Example
///
/// ```rust,ignore
/// use sticker_bindings::provider::{create_http_provider, ProviderConfig};
///
/// let provider = create_http_provider(ProviderConfig::new("http://localhost:8545"))?;
/// ```
pub fn create_http_provider(config: ProviderConfig) -> Result<StickerProvider, RpcError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{}: {e}", config.url)))?;

    let provider = match (config.logging_layer(), config.rate_limit_layer()) {
        (Some(logging), Some(rate_limit)) => {
            let client = ClientBuilder::default()
                .layer(logging)
                .layer(rate_limit)
                .http(url);
            ProviderBuilder::new()
                .disable_recommended_fillers()
                .connect_client(client)
        }
        (Some(logging), None) => {
            let client = ClientBuilder::default().layer(logging).http(url);
            ProviderBuilder::new()
                .disable_recommended_fillers()
                .connect_client(client)
        }
        (None, Some(rate_limit)) => {
            let client = ClientBuilder::default().layer(rate_limit).http(url);
            ProviderBuilder::new()
                .disable_recommended_fillers()
                .connect_client(client)
        }
        (None, None) => ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url),
    };

    Ok(provider)
}

/// Create a WebSocket provider, required for `watch_*` subscriptions.
///
/// # Errors
///
/// Returns [`RpcError::ProviderConnectionFailed`] if the handshake fails.
#[cfg(feature = "ws")]
pub async fn create_ws_provider(config: ProviderConfig) -> Result<StickerProvider, RpcError> {
    use alloy_provider::WsConnect;

    let ws = WsConnect::new(config.url.clone());
    let connection_failed = |e: alloy_transport::TransportError| {
        RpcError::ProviderConnectionFailed(format!("{}: {e}", config.url))
    };

    let client = match (config.logging_layer(), config.rate_limit_layer()) {
        (Some(logging), Some(rate_limit)) => ClientBuilder::default()
            .layer(logging)
            .layer(rate_limit)
            .ws(ws)
            .await
            .map_err(connection_failed)?,
        (Some(logging), None) => ClientBuilder::default()
            .layer(logging)
            .ws(ws)
            .await
            .map_err(connection_failed)?,
        (None, Some(rate_limit)) => ClientBuilder::default()
            .layer(rate_limit)
            .ws(ws)
            .await
            .map_err(connection_failed)?,
        (None, None) => ClientBuilder::default()
            .ws(ws)
            .await
            .map_err(connection_failed)?,
    };

    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_client(client))
}
