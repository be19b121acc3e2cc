// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The untyped core every contract binding is built on.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Function, JsonAbi};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::{BlockNumberOrTag, Filter, Log, TransactionInput, TransactionRequest};
use alloy_sol_types::{SolCall, SolEvent};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, Instrument};

use crate::abi::ContractKind;
use crate::config::BindingConfig;
use crate::errors::{BindingError, RpcError};
use crate::spans;

use super::iterator::{decode_event, EventIterator};
use super::opts::{CallOpts, FilterOpts, TransactOpts, WatchOpts};
use super::topics::TopicRules;
use super::watch::{forward_logs, WatchHandle};
use super::EventLog;

/// A contract ABI bound to an address and a provider.
///
/// Binding only parses the embedded ABI; nothing is sent to the chain until
/// a method is invoked. Typed bindings in [`crate::contracts`] wrap this type
/// and pass `sol!`-generated call and event types through it.
///
/// # Example
///
/// ```rust,ignore
/// use sticker_bindings::{BindingConfig, BoundContract, CallOpts, ContractKind};
/// use sticker_bindings::contracts::IStickerType;
///
/// let contract = BoundContract::bind(ContractKind::StickerType, address, provider, BindingConfig::default())?;
/// let count = contract.call(&CallOpts::default(), &IStickerType::packCountCall {}).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BoundContract<P> {
    kind: ContractKind,
    address: Address,
    provider: P,
    abi: Arc<JsonAbi>,
    config: BindingConfig,
}

impl<P> BoundContract<P> {
    /// Parse `kind`'s ABI and bind it to `address`.
    pub fn bind(
        kind: ContractKind,
        address: Address,
        provider: P,
        config: BindingConfig,
    ) -> Result<Self, BindingError> {
        let abi = kind.parse_abi()?;
        Ok(Self {
            kind,
            address,
            provider,
            abi: Arc::new(abi),
            config,
        })
    }

    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The parsed ABI.
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Decode a log emitted by event `E`.
    pub fn parse_log<E: SolEvent>(&self, log: &Log) -> Result<E, BindingError> {
        decode_event(log)
    }

    fn operation(&self, method: &str) -> String {
        format!("{}.{}", self.kind.name(), method)
    }

    /// Find the overload of `method` taking `arity` arguments.
    fn resolve(&self, method: &str, arity: usize) -> Result<&Function, BindingError> {
        let unknown = || BindingError::UnknownMethod {
            contract: self.kind.name(),
            method: method.to_string(),
        };
        let overloads = self.abi.function(method).ok_or_else(unknown)?;
        let mut matching = overloads.iter().filter(|f| f.inputs.len() == arity);
        match (matching.next(), matching.next()) {
            (Some(function), None) => Ok(function),
            (Some(_), Some(_)) => Err(BindingError::AmbiguousMethod {
                contract: self.kind.name(),
                method: method.to_string(),
                arity,
            }),
            (None, _) => Err(unknown()),
        }
    }

    async fn bounded<T, F>(
        &self,
        operation: &str,
        timeout: Option<Duration>,
        request: F,
    ) -> Result<T, BindingError>
    where
        F: Future<Output = Result<T, RpcError>>,
    {
        match timeout.or(self.config.rpc_timeout) {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| BindingError::timeout(operation, limit))?
                .map_err(BindingError::from),
            None => request.await.map_err(BindingError::from),
        }
    }
}

impl<P: Provider> BoundContract<P> {
    /// Execute a read-only call and decode its return value.
    pub async fn call<C: SolCall>(
        &self,
        opts: &CallOpts,
        call: &C,
    ) -> Result<C::Return, BindingError> {
        let output = self
            .call_bytes(opts, C::SIGNATURE, call.abi_encode())
            .await?;
        C::abi_decode_returns(&output).map_err(|e| BindingError::decode(C::SIGNATURE, e))
    }

    /// Send a transaction invoking `call`.
    ///
    /// Returns as soon as the node accepts the transaction.
    pub async fn transact<C: SolCall>(
        &self,
        opts: &TransactOpts,
        call: &C,
    ) -> Result<TxHash, BindingError> {
        self.send(opts, self.address, C::SIGNATURE, call.abi_encode())
            .await
    }

    /// Send a plain value transfer with empty calldata.
    pub async fn transfer(&self, opts: &TransactOpts) -> Result<TxHash, BindingError> {
        self.send(opts, self.address, "<transfer>", Vec::new()).await
    }

    /// Send a transaction with caller-supplied calldata.
    pub async fn transact_calldata(
        &self,
        opts: &TransactOpts,
        calldata: Bytes,
    ) -> Result<TxHash, BindingError> {
        self.send(opts, self.address, "<calldata>", calldata.to_vec())
            .await
    }

    /// Ask the node how much gas `call` would use.
    pub async fn estimate_gas<C: SolCall>(
        &self,
        opts: &TransactOpts,
        call: &C,
    ) -> Result<u64, BindingError> {
        self.estimate(opts, self.address, C::SIGNATURE, call.abi_encode())
            .await
    }

    /// Call a method by name with dynamically typed arguments.
    ///
    /// Overloads are told apart by argument count.
    pub async fn raw_call(
        &self,
        opts: &CallOpts,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, BindingError> {
        let function = self.resolve(method, args.len())?;
        let signature = function.signature();
        let input = function
            .abi_encode_input(args)
            .map_err(|e| BindingError::encode(signature.clone(), e))?;
        let output = self.call_bytes(opts, &signature, input).await?;
        function
            .abi_decode_output(&output)
            .map_err(|e| BindingError::decode(signature, e))
    }

    /// Send a transaction for a method named at runtime.
    pub async fn raw_transact(
        &self,
        opts: &TransactOpts,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<TxHash, BindingError> {
        let function = self.resolve(method, args.len())?;
        let signature = function.signature();
        let input = function
            .abi_encode_input(args)
            .map_err(|e| BindingError::encode(signature.clone(), e))?;
        self.send(opts, self.address, &signature, input).await
    }

    /// Query historical logs of event `E` matching `rules`.
    ///
    /// With a `max_block_range` configured, an open-ended range is resolved
    /// against the current head here, once.
    pub async fn filter_logs<E: SolEvent>(
        &self,
        opts: &FilterOpts,
        rules: &TopicRules,
    ) -> Result<EventIterator<'_, P, E>, BindingError> {
        let base = rules.apply(
            Filter::new()
                .address(self.address)
                .event_signature(E::SIGNATURE_HASH),
        );

        let queries = match self.config.max_block_range {
            Some(max_range) => {
                let end = match opts.end {
                    Some(end) => end,
                    None => self.block_number().await?,
                };
                debug!(
                    contract = self.kind.name(),
                    event = E::SIGNATURE,
                    start_block = opts.start,
                    end_block = end,
                    num_chunks = max_range.chunks_needed(opts.start, end),
                    "Splitting log query"
                );
                max_range
                    .chunk_range(opts.start, end)
                    .map(|(from, to)| base.clone().from_block(from).to_block(to))
                    .collect()
            }
            None => {
                let to = opts
                    .end
                    .map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number);
                vec![base.from_block(opts.start).to_block(to)]
            }
        };

        Ok(EventIterator::new(self, queries))
    }

    /// Subscribe to event `E` and forward decoded logs into `sink`.
    pub async fn watch_logs<E>(
        &self,
        opts: &WatchOpts,
        rules: &TopicRules,
        sink: mpsc::Sender<EventLog<E>>,
    ) -> Result<WatchHandle, BindingError>
    where
        E: SolEvent + Send + 'static,
    {
        let mut filter = rules.apply(
            Filter::new()
                .address(self.address)
                .event_signature(E::SIGNATURE_HASH),
        );
        if let Some(start) = opts.start {
            filter = filter.from_block(start);
        }

        let subscription = self.provider.subscribe_logs(&filter).await.map_err(|e| {
            RpcError::subscription_failed(format!("{} logs", self.operation(E::SIGNATURE)), e)
        })?;

        info!(
            contract = self.kind.name(),
            event = E::SIGNATURE,
            address = %self.address,
            "Log subscription established"
        );

        let (quit_tx, quit_rx) = oneshot::channel();
        let span = spans::watch_logs(self.kind.name(), E::SIGNATURE, self.address);
        let task = tokio::spawn(
            forward_logs::<E, _>(subscription.into_stream(), sink, quit_rx).instrument(span),
        );

        Ok(WatchHandle::new(quit_tx, task))
    }

    /// Run one `eth_getLogs` request.
    pub(crate) async fn fetch_logs(
        &self,
        filter: &Filter,
        event: &str,
    ) -> Result<Vec<Log>, BindingError> {
        let from = filter.get_from_block();
        let to = filter.get_to_block();
        let operation = format!(
            "{} {}-{}",
            self.operation(event),
            from.map_or_else(|| "earliest".to_string(), |b| b.to_string()),
            to.map_or_else(|| "latest".to_string(), |b| b.to_string()),
        );
        let span = spans::fetch_logs(self.kind.name(), event, from, to);

        let logs = self
            .bounded(&operation, None, async {
                self.provider
                    .get_logs(filter)
                    .await
                    .map_err(|e| RpcError::get_logs_failed(operation.clone(), e))
            })
            .instrument(span)
            .await?;

        debug!(logs_count = logs.len(), operation = %operation, "Fetched logs");
        Ok(logs)
    }

    async fn block_number(&self) -> Result<u64, BindingError> {
        self.bounded("eth_blockNumber", None, async {
            self.provider
                .get_block_number()
                .await
                .map_err(RpcError::get_block_number_failed)
        })
        .await
    }

    async fn call_bytes(
        &self,
        opts: &CallOpts,
        signature: &str,
        input: Vec<u8>,
    ) -> Result<Bytes, BindingError> {
        let operation = self.operation(signature);
        let mut tx = TransactionRequest::default()
            .to(self.address)
            .input(TransactionInput::new(Bytes::from(input)));
        if let Some(from) = opts.from {
            tx = tx.from(from);
        }

        let span = spans::contract_call(self.kind.name(), signature, self.address);
        self.bounded(&operation, opts.timeout, async {
            self.provider
                .call(tx)
                .block(opts.block_id())
                .await
                .map_err(|e| RpcError::call_failed(operation.clone(), e))
        })
        .instrument(span)
        .await
    }

    /// Send a transaction to `to`, which may differ from the bound address.
    pub(crate) async fn send(
        &self,
        opts: &TransactOpts,
        to: Address,
        signature: &str,
        input: Vec<u8>,
    ) -> Result<TxHash, BindingError> {
        let operation = self.operation(signature);
        let tx = opts.request(to, input);

        let span = spans::contract_transact(self.kind.name(), signature, to);
        let hash = self
            .bounded(&operation, opts.timeout, async {
                self.provider
                    .send_transaction(tx)
                    .await
                    .map(|pending| *pending.tx_hash())
                    .map_err(|e| RpcError::send_transaction_failed(operation.clone(), e))
            })
            .instrument(span)
            .await?;

        info!(operation = %operation, tx_hash = %hash, "Transaction submitted");
        Ok(hash)
    }

    pub(crate) async fn estimate(
        &self,
        opts: &TransactOpts,
        to: Address,
        signature: &str,
        input: Vec<u8>,
    ) -> Result<u64, BindingError> {
        let operation = self.operation(signature);
        let tx = opts.request(to, input);

        let span = spans::estimate_gas(self.kind.name(), signature, to);
        self.bounded(&operation, opts.timeout, async {
            self.provider
                .estimate_gas(tx)
                .await
                .map_err(|e| RpcError::estimate_gas_failed(operation.clone(), e))
        })
        .instrument(span)
        .await
    }
}
