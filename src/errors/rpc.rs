// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for blockchain provider operations.
//!
//! Every binding forwards to the provider and hands back whatever the
//! provider reported. These variants only add the name of the operation that
//! was running so a failure can be traced back to a contract method.

/// Errors that can occur during blockchain RPC operations.
///
/// # Examples
///
/// ```rust
/// use sticker_bindings::RpcError;
///
/// let error = RpcError::ProviderUrlInvalid("relative URL without a base".to_string());
/// assert!(error.to_string().contains("Invalid provider URL"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// `eth_call` failed.
    #[error("Contract call failed: {operation}")]
    CallFailed {
        /// Contract and method being called (e.g., "StickerType.packCount()")
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// `eth_sendTransaction` failed.
    #[error("Failed to send transaction for {operation}")]
    SendTransactionFailed {
        /// Contract and method being invoked
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// `eth_estimateGas` failed.
    #[error("Gas estimation failed for {operation}")]
    EstimateGasFailed {
        /// Contract and method being estimated
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch logs from the blockchain.
    ///
    /// This can occur due to rate limiting, invalid block ranges, network
    /// connectivity issues, or provider-side errors.
    #[error("Failed to fetch logs for {operation}")]
    GetLogsFailed {
        /// Description of the operation that failed (e.g., "StickerType.Register 100-200")
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch block number from the blockchain.
    #[error("Failed to get current block number")]
    GetBlockNumberFailed {
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to establish a subscription (requires a pub/sub transport).
    #[error("Failed to subscribe to {subscription_type}")]
    SubscriptionFailed {
        /// What was being subscribed to (e.g., "StickerMarket.MarketState logs")
        subscription_type: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configured provider URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),

    /// Connecting the provider transport failed.
    #[error("Provider connection failed: {0}")]
    ProviderConnectionFailed(String),
}

impl RpcError {
    /// Helper to create a `CallFailed` error from any error type.
    pub fn call_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::CallFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `SendTransactionFailed` error from any error type.
    pub fn send_transaction_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::SendTransactionFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create an `EstimateGasFailed` error from any error type.
    pub fn estimate_gas_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::EstimateGasFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetLogsFailed` error from any error type.
    pub fn get_logs_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetLogsFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetBlockNumberFailed` error from any error type.
    pub fn get_block_number_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create a `SubscriptionFailed` error from any error type.
    pub fn subscription_failed(
        subscription_type: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::SubscriptionFailed {
            subscription_type: subscription_type.into(),
            source: Box::new(source),
        }
    }
}
