// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoded event logs and the paging iterator over historical logs.

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::ops::Deref;

use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use futures::stream::{self, Stream};
use tracing::warn;

use crate::errors::BindingError;

use super::BoundContract;

/// A decoded event together with the log it was decoded from.
#[derive(Debug, Clone, PartialEq)]
pub struct EventLog<E> {
    /// The decoded event
    pub event: E,
    /// The raw log, carrying block, transaction and index metadata
    pub raw: Log,
}

impl<E: SolEvent> EventLog<E> {
    /// Decode `raw` as event `E`.
    pub fn decode(raw: Log) -> Result<Self, BindingError> {
        let event = decode_event(&raw)?;
        Ok(Self { event, raw })
    }
}

impl<E> EventLog<E> {
    pub fn into_event(self) -> E {
        self.event
    }
}

impl<E> Deref for EventLog<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.event
    }
}

/// Decode a log as event `E` after checking its signature topic.
pub(crate) fn decode_event<E: SolEvent>(log: &Log) -> Result<E, BindingError> {
    let found = *log
        .topics()
        .first()
        .ok_or(BindingError::NoEventSignature)?;
    if found != E::SIGNATURE_HASH {
        return Err(BindingError::EventSignatureMismatch {
            event: E::SIGNATURE,
            expected: E::SIGNATURE_HASH,
            found,
        });
    }
    E::decode_log_data(log.data()).map_err(|e| BindingError::decode(E::SIGNATURE, e))
}

/// Iterator over the historical logs of one event.
///
/// Buffered logs are handed out first; a new `eth_getLogs` request is only
/// issued once the buffer runs dry. The first error ends the iteration: it is
/// returned once, and every later call yields `Ok(None)`.
///
/// # Example
///
/// ```rust,ignore
/// let mut registrations = sticker_type
///     .filter_register(&FilterOpts::range(9_000_000, 9_100_000), &[])
///     .await?;
///
/// while let Some(log) = registrations.next().await? {
///     println!("pack {} registered in block {:?}", log.packId, log.raw.block_number);
/// }
/// ```
pub struct EventIterator<'a, P, E> {
    contract: &'a BoundContract<P>,
    pending: VecDeque<Filter>,
    buffered: VecDeque<Log>,
    failed: bool,
    _event: PhantomData<fn() -> E>,
}

impl<'a, P, E> EventIterator<'a, P, E> {
    pub(crate) fn new(contract: &'a BoundContract<P>, queries: Vec<Filter>) -> Self {
        Self {
            contract,
            pending: queries.into(),
            buffered: VecDeque::new(),
            failed: false,
            _event: PhantomData,
        }
    }

    /// Requests not yet sent to the node.
    pub fn remaining_queries(&self) -> usize {
        self.pending.len()
    }

    /// Logs fetched but not yet returned.
    pub fn buffered(&self) -> usize {
        self.buffered.len()
    }

    /// Drop pending requests and buffered logs.
    pub fn close(&mut self) {
        self.pending.clear();
        self.buffered.clear();
    }

    fn fail(&mut self) {
        self.failed = true;
        self.close();
    }
}

impl<'a, P: Provider, E: SolEvent> EventIterator<'a, P, E> {
    /// Next decoded event, or `None` once every range has been read.
    pub async fn next(&mut self) -> Result<Option<EventLog<E>>, BindingError> {
        loop {
            if self.failed {
                return Ok(None);
            }

            if let Some(raw) = self.buffered.pop_front() {
                return match EventLog::decode(raw) {
                    Ok(log) => Ok(Some(log)),
                    Err(e) => {
                        warn!(error = %e, event = E::SIGNATURE, "Failed to decode log");
                        self.fail();
                        Err(e)
                    }
                };
            }

            let Some(filter) = self.pending.pop_front() else {
                return Ok(None);
            };

            match self.contract.fetch_logs(&filter, E::SIGNATURE).await {
                Ok(logs) => self.buffered.extend(logs),
                Err(e) => {
                    self.fail();
                    return Err(e);
                }
            }
        }
    }

    /// Drain the iterator, stopping at the first error.
    pub async fn collect(mut self) -> Result<Vec<EventLog<E>>, BindingError> {
        let mut events = Vec::new();
        while let Some(event) = self.next().await? {
            events.push(event);
        }
        Ok(events)
    }

    /// Adapt into a stream that ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<EventLog<E>, BindingError>> + 'a
    where
        E: 'a,
    {
        stream::unfold(self, |mut iter| async move {
            match iter.next().await {
                Ok(Some(event)) => Some((Ok(event), iter)),
                Ok(None) => None,
                Err(e) => Some((Err(e), iter)),
            }
        })
    }
}
