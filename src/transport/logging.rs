// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-request tracing for alloy RPC clients.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket};
use alloy_transport::TransportError;
use tower::Layer;
use tracing::{debug, trace, warn, Instrument};

/// How much of each request and response to record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayloadLogging {
    /// Method, batch size, duration and errors only
    #[default]
    Off,
    /// Also record request payloads at `trace`
    Requests,
    /// Record request and response payloads at `trace`
    Full,
}

/// Tower layer that wraps every JSON-RPC request in a
/// `sticker_bindings.rpc_request` span.
///
/// # Example
///
/// ```rust,ignore
/// use sticker_bindings::transport::{LoggingLayer, PayloadLogging};
///
/// let client = ClientBuilder::default()
///     .layer(LoggingLayer::new().payloads(PayloadLogging::Requests))
///     .http(rpc_url);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingLayer {
    payloads: PayloadLogging,
}

impl LoggingLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(mut self, payloads: PayloadLogging) -> Self {
        self.payloads = payloads;
        self
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, service: S) -> Self::Service {
        LoggingService {
            service,
            payloads: self.payloads,
        }
    }
}

/// Service produced by [`LoggingLayer`].
#[derive(Clone, Debug)]
pub struct LoggingService<S> {
    service: S,
    payloads: PayloadLogging,
}

impl<S> tower::Service<RequestPacket> for LoggingService<S>
where
    S: tower::Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let payloads = self.payloads;
        let mut service = self.service.clone();
        let method = method_label(&request);
        let span = tracing::debug_span!(
            "sticker_bindings.rpc_request",
            method = %method,
            batch = request.len(),
            duration_ms = tracing::field::Empty,
        );

        Box::pin(
            async move {
                if payloads != PayloadLogging::Off {
                    trace!(request = ?request, "Sending RPC request");
                }

                let start = Instant::now();
                let result = service.call(request).await;
                let elapsed_ms = start.elapsed().as_millis() as u64;
                tracing::Span::current().record("duration_ms", elapsed_ms);

                match &result {
                    Ok(response) if payloads == PayloadLogging::Full => {
                        trace!(response = ?response, "RPC response");
                    }
                    Ok(_) => debug!(method = %method, elapsed_ms, "RPC request completed"),
                    Err(e) => warn!(method = %method, elapsed_ms, error = %e, "RPC request failed"),
                }
                result
            }
            .instrument(span),
        )
    }
}

/// `eth_call` for single requests, `batch[eth_call,eth_getLogs]` for batches.
fn method_label(request: &RequestPacket) -> String {
    match request {
        RequestPacket::Single(req) => req.method().to_string(),
        RequestPacket::Batch(reqs) => {
            let methods: Vec<&str> = reqs.iter().map(|req| req.method()).collect();
            format!("batch[{}]", methods.join(","))
        }
    }
}
