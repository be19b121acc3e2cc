// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for sticker-bindings operations.
//!
//! Telemetry is kept apart from the binding logic: each instrumented
//! operation has a span helper here, and the caller attaches it to the
//! future it drives.
//!
//! Usage pattern:
//! ```rust,ignore
//! use tracing::Instrument;
//!
//! let span = spans::contract_call(contract, signature, address);
//! async { /* RPC round trip */ }.instrument(span).await
//! ```

use alloy_primitives::{Address, BlockNumber, U256};
use tracing::{Level, Span};

/// Create span for a read-only contract call.
///
/// Parent: caller's span (catalog operation or user code)
/// Children: transport `rpc_request` span
#[inline]
pub(crate) fn contract_call(contract: &'static str, method: &str, address: Address) -> Span {
    tracing::debug_span!(
        "sticker_bindings.contract_call",
        contract = contract,
        method = method,
        address = %address,
    )
}

/// Create span for sending a transaction.
#[inline]
pub(crate) fn contract_transact(contract: &'static str, method: &str, to: Address) -> Span {
    tracing::span!(
        Level::INFO,
        "sticker_bindings.contract_transact",
        contract = contract,
        method = method,
        to = %to,
    )
}

/// Create span for a gas estimate.
#[inline]
pub(crate) fn estimate_gas(contract: &'static str, method: &str, to: Address) -> Span {
    tracing::debug_span!(
        "sticker_bindings.estimate_gas",
        contract = contract,
        method = method,
        to = %to,
    )
}

/// Create span for one `eth_getLogs` request issued by an event iterator.
///
/// Parent: caller's span
/// Children: transport `rpc_request` span
#[inline]
pub(crate) fn fetch_logs(
    contract: &'static str,
    event: &str,
    from_block: Option<BlockNumber>,
    to_block: Option<BlockNumber>,
) -> Span {
    tracing::debug_span!(
        "sticker_bindings.fetch_logs",
        contract = contract,
        event = event,
        from_block = ?from_block,
        to_block = ?to_block,
    )
}

/// Create span for a log subscription task.
///
/// Lives as long as the watch; every forwarded event is logged inside it.
#[inline]
pub(crate) fn watch_logs(contract: &'static str, event: &'static str, address: Address) -> Span {
    tracing::span!(
        Level::INFO,
        "sticker_bindings.watch_logs",
        contract = contract,
        event = event,
        address = %address,
    )
}

/// Create span for loading one sticker pack.
///
/// Parent: available_packs span, or None when called directly
/// Children: getPackData contract_call span
#[inline]
pub(crate) fn fetch_pack(pack_id: U256) -> Span {
    tracing::debug_span!("sticker_bindings.fetch_pack", pack_id = %pack_id)
}

/// Create span for listing every pack on sale.
///
/// Parent: None (root span for this operation)
/// Children: fetch_pack spans (one per pack)
#[inline]
pub(crate) fn available_packs(market: Address) -> Span {
    tracing::span!(
        Level::INFO,
        "sticker_bindings.available_packs",
        market = %market,
        pack_count = tracing::field::Empty,
    )
}

/// Create span for resolving the packs owned by an account.
#[inline]
pub(crate) fn purchased_pack_ids(account: Address) -> Span {
    tracing::debug_span!(
        "sticker_bindings.purchased_pack_ids",
        account = %account,
        token_count = tracing::field::Empty,
    )
}
