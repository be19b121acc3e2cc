// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Live log subscriptions.

use std::pin::pin;

use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use futures::stream::{Stream, StreamExt};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::errors::BindingError;

use super::EventLog;

/// Handle to a running log subscription.
///
/// Dropping the handle stops the subscription.
#[derive(Debug)]
pub struct WatchHandle {
    quit: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<(), BindingError>>,
}

impl WatchHandle {
    pub(crate) fn new(quit: oneshot::Sender<()>, task: JoinHandle<Result<(), BindingError>>) -> Self {
        Self {
            quit: Some(quit),
            task,
        }
    }

    /// Stop forwarding and return how the subscription ended.
    ///
    /// A subscription that already failed reports its error here.
    pub async fn unsubscribe(mut self) -> Result<(), BindingError> {
        if let Some(quit) = self.quit.take() {
            // The task may have exited already; its result is collected below.
            let _ = quit.send(());
        }
        join(self.task).await
    }

    /// Wait for the subscription to end on its own.
    pub async fn wait(self) -> Result<(), BindingError> {
        let Self { quit, task } = self;
        let result = join(task).await;
        drop(quit);
        result
    }

    /// Whether the forwarding task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

async fn join(task: JoinHandle<Result<(), BindingError>>) -> Result<(), BindingError> {
    task.await.map_err(|e| BindingError::WatchTaskFailed {
        details: e.to_string(),
    })?
}

/// Decode logs from `logs` and push them into `sink` until told to stop.
///
/// Ends with `Ok` when `quit` fires or its sender is dropped, or when the
/// receiving side of `sink` is closed. A log that fails to decode ends the
/// loop with that error, and an exhausted stream with
/// [`BindingError::SubscriptionClosed`].
pub(crate) async fn forward_logs<E, S>(
    logs: S,
    sink: mpsc::Sender<EventLog<E>>,
    mut quit: oneshot::Receiver<()>,
) -> Result<(), BindingError>
where
    E: SolEvent,
    S: Stream<Item = Log>,
{
    let mut logs = pin!(logs);
    let mut forwarded = 0u64;

    loop {
        let raw = tokio::select! {
            _ = &mut quit => {
                debug!(forwarded, "Watch stopped");
                return Ok(());
            }
            _ = sink.closed() => {
                debug!(forwarded, "Event receiver dropped, stopping watch");
                return Ok(());
            }
            next = logs.next() => match next {
                Some(raw) => raw,
                None => {
                    warn!(forwarded, "Log subscription ended");
                    return Err(BindingError::SubscriptionClosed);
                }
            },
        };

        let event = EventLog::<E>::decode(raw).inspect_err(|e| {
            warn!(error = %e, "Failed to decode subscribed log");
        })?;

        tokio::select! {
            _ = &mut quit => return Ok(()),
            sent = sink.send(event) => {
                if sent.is_err() {
                    return Ok(());
                }
                forwarded += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::sol;
    use futures::stream;

    sol! {
        event Ping(uint256 indexed seq);
        event Pong(uint256 indexed seq);
    }

    fn log_of<E: SolEvent>(event: &E) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: Address::repeat_byte(1),
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    fn pings(count: u64) -> Vec<Log> {
        (0..count)
            .map(|seq| log_of(&Ping { seq: U256::from(seq) }))
            .collect()
    }

    #[tokio::test]
    async fn test_forwards_in_order_until_stream_ends() {
        let (tx, mut rx) = mpsc::channel(8);
        let (_quit_tx, quit_rx) = oneshot::channel();

        let result = forward_logs::<Ping, _>(stream::iter(pings(3)), tx, quit_rx).await;
        assert!(matches!(result, Err(BindingError::SubscriptionClosed)));

        for expected in 0..3u64 {
            let log = rx.recv().await.unwrap();
            assert_eq!(log.seq, U256::from(expected));
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_quit_stops_pending_stream() {
        let (tx, _rx) = mpsc::channel::<EventLog<Ping>>(1);
        let (quit_tx, quit_rx) = oneshot::channel();

        let task = tokio::spawn(forward_logs::<Ping, _>(stream::pending(), tx, quit_rx));
        quit_tx.send(()).unwrap();
        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_dropped_quit_sender_stops() {
        let (tx, _rx) = mpsc::channel::<EventLog<Ping>>(1);
        let (quit_tx, quit_rx) = oneshot::channel();
        drop(quit_tx);

        let result = forward_logs::<Ping, _>(stream::pending(), tx, quit_rx).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_closed_sink_stops() {
        let (tx, rx) = mpsc::channel::<EventLog<Ping>>(1);
        let (_quit_tx, quit_rx) = oneshot::channel();
        drop(rx);

        let result = forward_logs::<Ping, _>(stream::iter(pings(5)), tx, quit_rx).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_foreign_event_is_reported() {
        let (tx, mut rx) = mpsc::channel(8);
        let (_quit_tx, quit_rx) = oneshot::channel();

        let logs = vec![
            log_of(&Ping { seq: U256::from(1) }),
            log_of(&Pong { seq: U256::from(2) }),
            log_of(&Ping { seq: U256::from(3) }),
        ];
        let result = forward_logs::<Ping, _>(stream::iter(logs), tx, quit_rx).await;

        assert!(matches!(
            result,
            Err(BindingError::EventSignatureMismatch { .. })
        ));
        assert_eq!(rx.recv().await.unwrap().seq, U256::from(1));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_handle_unsubscribe_returns_task_result() {
        let (tx, _rx) = mpsc::channel::<EventLog<Ping>>(1);
        let (quit_tx, quit_rx) = oneshot::channel();
        let task = tokio::spawn(forward_logs::<Ping, _>(stream::pending(), tx, quit_rx));

        let handle = WatchHandle::new(quit_tx, task);
        assert!(!handle.is_finished());
        assert!(handle.unsubscribe().await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_wait_reports_closed_subscription() {
        let (tx, _rx) = mpsc::channel::<EventLog<Ping>>(4);
        let (quit_tx, quit_rx) = oneshot::channel();
        let task = tokio::spawn(forward_logs::<Ping, _>(stream::iter(pings(1)), tx, quit_rx));

        let handle = WatchHandle::new(quit_tx, task);
        assert!(matches!(
            handle.wait().await,
            Err(BindingError::SubscriptionClosed)
        ));
    }
}
