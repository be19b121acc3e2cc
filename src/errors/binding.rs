// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for contract bindings.
//!
//! Covers everything a bound contract can report: ABI parsing at bind time,
//! provider failures while calling, transacting or filtering, and decoding
//! failures for return data and event logs.

use alloy_primitives::B256;

use super::RpcError;

/// Errors produced by [`BoundContract`](crate::BoundContract) and every typed
/// binding built on it.
///
/// # Examples
///
/// ```rust,ignore
/// use sticker_bindings::{BindingError, CallOpts, StickerType};
///
/// match sticker_type.pack_count(&CallOpts::default()).await {
///     Ok(count) => println!("{count} packs registered"),
///     Err(BindingError::Rpc(e)) => eprintln!("node rejected the call: {e}"),
///     Err(BindingError::Decode { what, .. }) => eprintln!("unexpected return data for {what}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    /// The embedded JSON ABI could not be parsed.
    #[error("Failed to parse ABI for {contract}")]
    AbiParse {
        /// Contract whose ABI failed to parse
        contract: &'static str,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// RPC error when communicating with the blockchain provider.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Return data or log data did not match the ABI.
    #[error("Failed to decode {what}")]
    Decode {
        /// Signature of the function or event being decoded
        what: String,
        /// The underlying ABI error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Arguments passed to a raw call did not match the ABI.
    #[error("Failed to encode arguments for {method}")]
    Encode {
        /// Method whose arguments failed to encode
        method: String,
        /// The underlying ABI error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The log carried no topics, so its event cannot be identified.
    #[error("Log has no event signature topic")]
    NoEventSignature,

    /// The log was emitted by a different event.
    #[error("Event signature mismatch for {event}: expected {expected}, found {found}")]
    EventSignatureMismatch {
        /// Signature of the event the caller asked for
        event: &'static str,
        /// Topic hash of that event
        expected: B256,
        /// Topic hash carried by the log
        found: B256,
    },

    /// A raw call named a method that is not in the contract ABI.
    #[error("Method {method} not found in {contract} ABI")]
    UnknownMethod {
        /// Contract searched
        contract: &'static str,
        /// Requested method name
        method: String,
    },

    /// A raw call matched several overloads with the same arity.
    #[error("Method {method} is ambiguous in {contract} ABI with {arity} arguments")]
    AmbiguousMethod {
        /// Contract searched
        contract: &'static str,
        /// Requested method name
        method: String,
        /// Number of arguments supplied
        arity: usize,
    },

    /// The operation did not finish within the configured timeout.
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        /// Operation that timed out
        operation: String,
        /// Timeout that elapsed, in milliseconds
        timeout_ms: u128,
    },

    /// The log subscription ended while a watch was still running.
    #[error("Log subscription closed")]
    SubscriptionClosed,

    /// The watch task panicked or was aborted.
    #[error("Watch task failed: {details}")]
    WatchTaskFailed {
        /// Join error description
        details: String,
    },
}

impl BindingError {
    /// Create a `Decode` error from any error type.
    pub fn decode(
        what: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BindingError::Decode {
            what: what.into(),
            source: Box::new(source),
        }
    }

    /// Create an `Encode` error from any error type.
    pub fn encode(
        method: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BindingError::Encode {
            method: method.into(),
            source: Box::new(source),
        }
    }

    /// Create a `Timeout` error for an operation.
    pub fn timeout(operation: impl Into<String>, timeout: std::time::Duration) -> Self {
        BindingError::Timeout {
            operation: operation.into(),
            timeout_ms: timeout.as_millis(),
        }
    }

    /// Whether the error came from the provider rather than from local encoding or decoding.
    pub fn is_rpc(&self) -> bool {
        matches!(self, BindingError::Rpc(_))
    }
}
