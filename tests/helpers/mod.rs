// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for sticker-bindings integration tests
//!
//! Provides a mocked provider, log builders and an in-memory content
//! fetcher so bindings can be exercised without a node.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use alloy_json_rpc::{
    EthNotification, Id, PubSubItem, RequestPacket, Response, ResponsePacket, ResponsePayload,
};
use alloy_primitives::{Address, Bytes, LogData, B256, U256, U64};
use alloy_provider::{ProviderBuilder, RootProvider};
use alloy_pubsub::{ConnectionHandle, ConnectionInterface, PubSubConnect};
use alloy_rpc_client::ClientBuilder;
use alloy_rpc_types::Log;
use alloy_sol_types::abi::TokenSeq;
use alloy_sol_types::{SolEvent, SolType, SolValue};
use alloy_transport::mock::{Asserter, MockTransport};
use alloy_transport::{TransportError, TransportFut, TransportResult};
use async_trait::async_trait;
use serde_json::value::to_raw_value;
use tokio::sync::mpsc;
use sticker_bindings::catalog::FetchError;
use sticker_bindings::{ContentHash, PackContentFetcher};

/// Install a tracing subscriber honouring `RUST_LOG`; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A provider answering from a queue of canned JSON-RPC responses.
pub fn mocked_provider() -> (RootProvider, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    (provider, asserter)
}

/// A provider whose requests never receive a response.
pub fn silent_provider() -> RootProvider {
    RootProvider::new(ClientBuilder::default().transport(SilentTransport, true))
}

#[derive(Clone)]
pub struct SilentTransport;

impl tower::Service<RequestPacket> for SilentTransport {
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = TransportFut<'static>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _request: RequestPacket) -> Self::Future {
        Box::pin(std::future::pending())
    }
}

/// A mocked provider whose requests each take `latency` to answer, together
/// with a tracker of how many were in flight at once.
pub fn tracked_provider(latency: Duration) -> (RootProvider, Asserter, InFlightTracker) {
    let asserter = Asserter::new();
    let tracker = InFlightTracker {
        latency,
        ..InFlightTracker::default()
    };
    let client = ClientBuilder::default()
        .layer(tracker.clone())
        .transport(MockTransport::new(asserter.clone()), true);
    (RootProvider::new(client), asserter, tracker)
}

#[derive(Clone, Default)]
pub struct InFlightTracker {
    latency: Duration,
    current: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl InFlightTracker {
    /// Most requests observed in flight at the same time.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl<S> tower::Layer<S> for InFlightTracker {
    type Service = Tracked<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Tracked {
            inner,
            tracker: self.clone(),
        }
    }
}

#[derive(Clone)]
pub struct Tracked<S> {
    inner: S,
    tracker: InFlightTracker,
}

impl<S> tower::Service<RequestPacket> for Tracked<S>
where
    S: tower::Service<
        RequestPacket,
        Response = ResponsePacket,
        Error = TransportError,
        Future = TransportFut<'static>,
    >,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = TransportFut<'static>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let response = self.inner.call(request);
        let tracker = self.tracker.clone();
        Box::pin(async move {
            let now = tracker.current.fetch_add(1, Ordering::SeqCst) + 1;
            tracker.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(tracker.latency).await;
            let result = response.await;
            tracker.current.fetch_sub(1, Ordering::SeqCst);
            result
        })
    }
}

const FEED_SUBSCRIPTION: u64 = 0x51;

/// In-process pubsub backend: answers `eth_subscribe` and delivers logs
/// pushed with [`LogFeed::push`] as subscription notifications.
#[derive(Clone)]
pub struct LogFeed {
    sender: mpsc::UnboundedSender<Log>,
    receiver: Arc<Mutex<Option<mpsc::UnboundedReceiver<Log>>>>,
}

impl LogFeed {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: Arc::new(Mutex::new(Some(receiver))),
        }
    }

    /// A provider connected to this feed.
    pub async fn provider(&self) -> RootProvider {
        let client = ClientBuilder::default().pubsub(self.clone()).await.unwrap();
        RootProvider::new(client)
    }

    /// Deliver `log` to the open subscription.
    pub fn push(&self, log: Log) {
        self.sender.send(log).unwrap();
    }
}

impl PubSubConnect for LogFeed {
    fn is_local(&self) -> bool {
        true
    }

    fn connect(&self) -> impl Future<Output = TransportResult<ConnectionHandle>> + Send {
        let logs = self.receiver.lock().unwrap().take();
        async move {
            let (handle, interface) = ConnectionHandle::new();
            tokio::spawn(serve_feed(interface, logs));
            Ok(handle)
        }
    }
}

async fn serve_feed(
    mut interface: ConnectionInterface,
    mut logs: Option<mpsc::UnboundedReceiver<Log>>,
) {
    loop {
        tokio::select! {
            request = interface.recv_from_frontend() => {
                let Some(request) = request else { break };
                let request: serde_json::Value = serde_json::from_str(request.get()).unwrap();
                let id: Id = serde_json::from_value(request["id"].clone()).unwrap();
                let result = match request["method"].as_str() {
                    Some("eth_subscribe") => to_raw_value(&U256::from(FEED_SUBSCRIPTION)),
                    _ => to_raw_value(&true),
                }
                .unwrap();
                let _ = interface.send_to_frontend(PubSubItem::Response(Response {
                    id,
                    payload: ResponsePayload::Success(result),
                }));
            }
            Some(log) = next_log(&mut logs) => {
                let _ = interface.send_to_frontend(PubSubItem::Notification(EthNotification {
                    subscription: U256::from(FEED_SUBSCRIPTION).into(),
                    result: to_raw_value(&log).unwrap(),
                }));
            }
        }
    }
}

async fn next_log(logs: &mut Option<mpsc::UnboundedReceiver<Log>>) -> Option<Log> {
    match logs {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}

/// Queue the return data of an `eth_call`, given as the tuple of return
/// values, e.g. `(U256::from(3),)`.
pub fn push_return<T>(asserter: &Asserter, value: T)
where
    T: SolValue,
    for<'a> <T::SolType as SolType>::Token<'a>: TokenSeq<'a>,
{
    asserter.push_success(&Bytes::from(value.abi_encode_params()));
}

/// Queue a raw `eth_call` result.
pub fn push_bytes(asserter: &Asserter, bytes: impl Into<Bytes>) {
    asserter.push_success(&bytes.into());
}

pub fn push_block_number(asserter: &Asserter, number: u64) {
    asserter.push_success(&U64::from(number));
}

pub fn push_tx_hash(asserter: &Asserter, hash: B256) {
    asserter.push_success(&hash);
}

pub fn push_logs(asserter: &Asserter, logs: Vec<Log>) {
    asserter.push_success(&logs);
}

/// An RPC log carrying `event`, emitted by `address` in `block`.
pub fn event_log<E: SolEvent>(address: Address, event: &E, block: u64) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address,
            data: event.encode_log_data(),
        },
        block_number: Some(block),
        ..Default::default()
    }
}

/// An RPC log with arbitrary topics and data.
pub fn raw_log(address: Address, topics: Vec<B256>, data: Bytes) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address,
            data: LogData::new_unchecked(topics, data),
        },
        ..Default::default()
    }
}

/// Content fetcher backed by a map from hex content hash to document.
#[derive(Clone, Default)]
pub struct MemoryFetcher {
    documents: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` for the content hash `hash`.
    pub fn with_document(self, hash: &ContentHash, document: &str) -> Self {
        self.documents
            .lock()
            .unwrap()
            .insert(hash.to_hex(), document.as_bytes().to_vec());
        self
    }

    /// Hex hashes requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackContentFetcher for MemoryFetcher {
    async fn fetch(&self, hash: &ContentHash) -> Result<Vec<u8>, FetchError> {
        let key = hash.to_hex();
        self.requests.lock().unwrap().push(key.clone());
        self.documents
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| format!("no document for {key}").into())
    }

    fn sticker_url(&self, hash: &str) -> String {
        format!("https://ipfs.example/{hash}")
    }
}
