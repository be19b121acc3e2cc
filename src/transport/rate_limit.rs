// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Request pacing for RPC endpoints with published rate limits.
//!
//! Uses the generic cell rate algorithm: every request reserves the next
//! emission slot, spaced `period / requests` apart, and a request may run
//! early by at most `burst - 1` slots.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use tokio::{sync::Mutex, time::Instant};
use tower::Layer;
use tracing::trace;

/// Tower layer that paces requests sent through an alloy RPC client.
///
/// Clones share one schedule, so a layer applied to several clients paces
/// them together.
///
/// # Example
///
/// ```rust,ignore
/// use sticker_bindings::transport::RateLimitLayer;
/// use alloy_rpc_client::ClientBuilder;
///
/// // Infura free tier: 10 requests per second, no bursts
/// let client = ClientBuilder::default()
///     .layer(RateLimitLayer::per_second(10))
///     .http(rpc_url);
/// ```
#[derive(Clone, Debug)]
pub struct RateLimitLayer {
    schedule: Arc<Mutex<Schedule>>,
}

impl RateLimitLayer {
    /// Allow `requests` per `period`, with bursts of up to `requests`.
    pub fn new(requests: u32, period: Duration) -> Self {
        let requests = requests.max(1);
        Self::with_burst(period / requests, requests)
    }

    /// Allow `requests` per second.
    pub fn per_second(requests: u32) -> Self {
        Self::new(requests, Duration::from_secs(1))
    }

    /// Keep at least `delay` between consecutive requests.
    pub fn with_min_delay(delay: Duration) -> Self {
        Self::with_burst(delay, 1)
    }

    /// One request every `interval`, running up to `burst` requests back to back.
    pub fn with_burst(interval: Duration, burst: u32) -> Self {
        Self {
            schedule: Arc::new(Mutex::new(Schedule::new(interval, burst))),
        }
    }
}

impl<S> Layer<S> for RateLimitLayer {
    type Service = RateLimitService<S>;

    fn layer(&self, service: S) -> Self::Service {
        RateLimitService {
            service,
            schedule: Arc::clone(&self.schedule),
        }
    }
}

/// Stand-in for slots past the range of `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

#[derive(Debug)]
struct Schedule {
    interval: Duration,
    /// How far ahead of its slot a request may run
    tolerance: Duration,
    /// Theoretical arrival time of the next request
    next_slot: Instant,
}

impl Schedule {
    fn new(interval: Duration, burst: u32) -> Self {
        Self {
            interval,
            tolerance: interval
                .checked_mul(burst.saturating_sub(1))
                .unwrap_or(Duration::MAX),
            next_slot: Instant::now(),
        }
    }

    /// Reserve a slot and return how long the caller must wait for it.
    fn reserve(&mut self, now: Instant) -> Duration {
        let slot = self.next_slot.max(now);
        self.next_slot = slot
            .checked_add(self.interval)
            .unwrap_or_else(|| slot + FAR_FUTURE);
        (slot - now).saturating_sub(self.tolerance)
    }
}

/// Service produced by [`RateLimitLayer`].
#[derive(Clone, Debug)]
pub struct RateLimitService<S> {
    service: S,
    schedule: Arc<Mutex<Schedule>>,
}

impl<S, Request> tower::Service<Request> for RateLimitService<S>
where
    S: tower::Service<Request> + Clone + Send + 'static,
    S::Future: Send,
    Request: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let schedule = Arc::clone(&self.schedule);
        let mut service = self.service.clone();

        Box::pin(async move {
            let wait = schedule.lock().await.reserve(Instant::now());
            if !wait.is_zero() {
                trace!(wait_ms = wait.as_millis() as u64, "Delaying RPC request");
                tokio::time::sleep(wait).await;
            }
            service.call(request).await
        })
    }
}
