// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for bound contracts and the sticker catalog
//!
//! # Example: Using defaults
//!
//! ```rust
//! use sticker_bindings::BindingConfig;
//!
//! // One eth_getLogs request per filter, 30 second RPC timeout
//! let config = BindingConfig::default();
//! assert!(config.max_block_range.is_none());
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use sticker_bindings::BindingConfigBuilder;
//! use std::time::Duration;
//! use alloy_chains::NamedChain;
//!
//! let config = BindingConfigBuilder::new()
//!     .max_block_range(2_000)
//!     .chain_max_block_range(NamedChain::Optimism, 500)
//!     .rpc_timeout(Duration::from_secs(10))
//!     .build();
//!
//! let optimism = config.for_chain(NamedChain::Optimism);
//! assert_eq!(optimism.max_block_range.map(|r| r.as_u64()), Some(500));
//! ```

use std::collections::HashMap;
use std::time::Duration;

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use serde::Deserialize;

mod block_range;
pub mod constants;

pub use block_range::{ChunkRange, MaxBlockRange};

use constants::{
    DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_PACK_REQUEST_TIMEOUT, DEFAULT_RPC_TIMEOUT,
};

/// Configuration for a bound contract
///
/// Controls how log filters are split into requests and how long a single
/// RPC may take. Use [`BindingConfigBuilder`] for a fluent API.
#[derive(Debug, Clone)]
pub struct BindingConfig {
    /// Maximum number of blocks per `eth_getLogs` request.
    /// Default: None (one request for the whole range)
    pub max_block_range: Option<MaxBlockRange>,

    /// Timeout applied to calls and transactions that set none themselves.
    /// Default: 30 seconds
    pub rpc_timeout: Option<Duration>,

    /// Chain-specific overrides
    pub chain_overrides: HashMap<NamedChain, ChainConfig>,
}

/// Chain-specific configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    /// Override max block range for this chain
    pub max_block_range: Option<MaxBlockRange>,

    /// Override RPC timeout for this chain
    pub rpc_timeout: Option<Duration>,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            max_block_range: None,
            rpc_timeout: Some(DEFAULT_RPC_TIMEOUT),
            chain_overrides: HashMap::new(),
        }
    }
}

impl BindingConfig {
    /// Config without timeouts or chunking; every request goes straight to the provider.
    pub fn minimal() -> Self {
        Self {
            max_block_range: None,
            rpc_timeout: None,
            chain_overrides: HashMap::new(),
        }
    }

    /// Effective configuration for one chain.
    ///
    /// Chain overrides win over the global values. The returned config has no
    /// overrides of its own.
    pub fn for_chain(&self, chain: NamedChain) -> BindingConfig {
        let overrides = self.chain_overrides.get(&chain);
        BindingConfig {
            max_block_range: overrides
                .and_then(|c| c.max_block_range)
                .or(self.max_block_range),
            rpc_timeout: overrides.and_then(|c| c.rpc_timeout).or(self.rpc_timeout),
            chain_overrides: HashMap::new(),
        }
    }

    /// Set chain-specific override
    pub fn set_chain_override(&mut self, chain: NamedChain, config: ChainConfig) {
        self.chain_overrides.insert(chain, config);
    }
}

/// Builder for [`BindingConfig`]
pub struct BindingConfigBuilder {
    config: BindingConfig,
}

impl Default for BindingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingConfigBuilder {
    /// Start from [`BindingConfig::default`].
    pub fn new() -> Self {
        Self {
            config: BindingConfig::default(),
        }
    }

    /// Set global max block range per log request
    pub fn max_block_range(mut self, max: u64) -> Self {
        self.config.max_block_range = Some(MaxBlockRange::new(max));
        self
    }

    /// Set global RPC timeout
    pub fn rpc_timeout(mut self, timeout: Duration) -> Self {
        self.config.rpc_timeout = Some(timeout);
        self
    }

    /// Disable the RPC timeout
    pub fn no_rpc_timeout(mut self) -> Self {
        self.config.rpc_timeout = None;
        self
    }

    /// Override the block range for one chain
    pub fn chain_max_block_range(mut self, chain: NamedChain, max: u64) -> Self {
        self.config
            .chain_overrides
            .entry(chain)
            .or_default()
            .max_block_range = Some(MaxBlockRange::new(max));
        self
    }

    /// Override the RPC timeout for one chain
    pub fn chain_rpc_timeout(mut self, chain: NamedChain, timeout: Duration) -> Self {
        self.config.chain_overrides.entry(chain).or_default().rpc_timeout = Some(timeout);
        self
    }

    /// Add chain-specific configuration
    pub fn chain_config(mut self, chain: NamedChain, config: ChainConfig) -> Self {
        self.config.set_chain_override(chain, config);
        self
    }

    /// Build the configuration
    pub fn build(self) -> BindingConfig {
        self.config
    }
}

/// Limits for [`StickerCatalog`](crate::StickerCatalog) fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Contract calls in flight at once
    pub max_concurrent_requests: usize,
    /// Timeout for each `getPackData` request
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            request_timeout: DEFAULT_PACK_REQUEST_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    /// Set the concurrency limit; zero is treated as one.
    #[must_use]
    pub fn with_max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = limit.max(1);
        self
    }

    /// Set the per-pack request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Addresses of the sticker contracts deployed on one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerDeployment {
    /// `StickerMarket` contract
    pub sticker_market: Address,
    /// `StickerPack` ERC-721 contract
    pub sticker_pack: Address,
    /// `StickerType` pack registry
    pub sticker_type: Address,
    /// SNT token used for payment
    pub snt: Address,
}

/// Sticker contract addresses keyed by chain.
///
/// # Example
///
/// ```rust
/// use sticker_bindings::Deployments;
/// use alloy_chains::NamedChain;
///
/// let json = r#"{
///     "mainnet": {
///         "stickerMarket": "0x1111111111111111111111111111111111111111",
///         "stickerPack": "0x2222222222222222222222222222222222222222",
///         "stickerType": "0x3333333333333333333333333333333333333333",
///         "snt": "0x4444444444444444444444444444444444444444"
///     }
/// }"#;
///
/// let deployments = Deployments::from_json(json).unwrap();
/// assert!(deployments.get(NamedChain::Mainnet).is_some());
/// assert!(deployments.get(NamedChain::Sepolia).is_none());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Deployments(HashMap<NamedChain, StickerDeployment>);

impl Deployments {
    /// Parse deployments from a JSON object keyed by chain name.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Addresses for one chain, if configured.
    pub fn get(&self, chain: NamedChain) -> Option<&StickerDeployment> {
        self.0.get(&chain)
    }

    /// Register or replace the addresses for one chain.
    pub fn insert(&mut self, chain: NamedChain, deployment: StickerDeployment) {
        self.0.insert(chain, deployment);
    }

    /// Chains with a configured deployment.
    pub fn chains(&self) -> impl Iterator<Item = NamedChain> + '_ {
        self.0.keys().copied()
    }
}
