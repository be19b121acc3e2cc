// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract binding core
//!
//! [`BoundContract`] holds a parsed ABI, an address and a provider, and
//! exposes the generic surface every typed binding forwards to:
//!
//! - **Calls**: [`BoundContract::call`], [`BoundContract::raw_call`]
//! - **Transactions**: [`BoundContract::transact`], [`BoundContract::transfer`],
//!   [`BoundContract::transact_calldata`], [`BoundContract::raw_transact`]
//! - **Events**: [`BoundContract::filter_logs`] returns an [`EventIterator`],
//!   [`BoundContract::watch_logs`] returns a [`WatchHandle`], and
//!   [`BoundContract::parse_log`] decodes a single log
//!
//! Sessions ([`CallSession`], [`TransactSession`], [`Session`]) pin the
//! options for a run of requests.

mod bound;
mod iterator;
mod opts;
mod session;
mod topics;
mod watch;

pub use bound::BoundContract;
pub use iterator::{EventIterator, EventLog};
pub use opts::{CallOpts, FilterOpts, TransactOpts, WatchOpts};
pub use session::{Binding, CallSession, Session, TransactSession};
pub use topics::{IntoTopic, TopicRules};
pub use watch::WatchHandle;
