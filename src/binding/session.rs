// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bindings with pre-set call and transaction options.
//!
//! A session borrows a binding and carries the options every request should
//! use, so callers stop repeating them.
//!
//! # Example
//!
//! ```rust,ignore
//! use sticker_bindings::{Binding, CallOpts};
//!
//! let session = sticker_type.call_session(CallOpts::at_block(9_500_000));
//! let count = session.invoke(|contract, opts| async move {
//!     contract.pack_count(&opts).await
//! }).await?;
//! ```

use std::future::Future;

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Bytes, TxHash};
use alloy_provider::Provider;
use alloy_sol_types::SolCall;

use crate::errors::BindingError;

use super::opts::{CallOpts, TransactOpts};
use super::BoundContract;

/// Anything backed by a [`BoundContract`].
///
/// Implemented by the untyped core and by every typed binding, so sessions
/// work with both.
pub trait Binding {
    type Provider: Provider;

    /// The underlying untyped binding.
    fn contract(&self) -> &BoundContract<Self::Provider>;

    /// Session for read-only calls.
    fn call_session(&self, opts: CallOpts) -> CallSession<'_, Self>
    where
        Self: Sized,
    {
        CallSession {
            binding: self,
            opts,
        }
    }

    /// Session for transactions.
    fn transact_session(&self, opts: TransactOpts) -> TransactSession<'_, Self>
    where
        Self: Sized,
    {
        TransactSession {
            binding: self,
            opts,
        }
    }

    /// Session for both calls and transactions.
    fn session(&self, call: CallOpts, transact: TransactOpts) -> Session<'_, Self>
    where
        Self: Sized,
    {
        Session {
            binding: self,
            call,
            transact,
        }
    }
}

impl<P: Provider> Binding for BoundContract<P> {
    type Provider = P;

    fn contract(&self) -> &BoundContract<P> {
        self
    }
}

/// A binding paired with fixed [`CallOpts`].
#[derive(Debug)]
pub struct CallSession<'a, B> {
    binding: &'a B,
    opts: CallOpts,
}

impl<B> Clone for CallSession<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for CallSession<'_, B> {}

impl<'a, B: Binding> CallSession<'a, B> {
    pub fn binding(&self) -> &'a B {
        self.binding
    }

    pub fn opts(&self) -> &CallOpts {
        &self.opts
    }

    /// Run a typed method of the binding with the session's options.
    pub async fn invoke<T, F, Fut>(&self, method: F) -> Result<T, BindingError>
    where
        F: FnOnce(&'a B, CallOpts) -> Fut,
        Fut: Future<Output = Result<T, BindingError>>,
    {
        method(self.binding, self.opts).await
    }

    pub async fn call<C: SolCall>(&self, call: &C) -> Result<C::Return, BindingError> {
        self.binding.contract().call(&self.opts, call).await
    }

    pub async fn raw_call(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, BindingError> {
        self.binding.contract().raw_call(&self.opts, method, args).await
    }
}

/// A binding paired with fixed [`TransactOpts`].
#[derive(Debug)]
pub struct TransactSession<'a, B> {
    binding: &'a B,
    opts: TransactOpts,
}

impl<B> Clone for TransactSession<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for TransactSession<'_, B> {}

impl<'a, B: Binding> TransactSession<'a, B> {
    pub fn binding(&self) -> &'a B {
        self.binding
    }

    pub fn opts(&self) -> &TransactOpts {
        &self.opts
    }

    /// Run a typed method of the binding with the session's options.
    pub async fn invoke<T, F, Fut>(&self, method: F) -> Result<T, BindingError>
    where
        F: FnOnce(&'a B, TransactOpts) -> Fut,
        Fut: Future<Output = Result<T, BindingError>>,
    {
        method(self.binding, self.opts).await
    }

    pub async fn transact<C: SolCall>(&self, call: &C) -> Result<TxHash, BindingError> {
        self.binding.contract().transact(&self.opts, call).await
    }

    pub async fn transfer(&self) -> Result<TxHash, BindingError> {
        self.binding.contract().transfer(&self.opts).await
    }

    pub async fn transact_calldata(&self, calldata: Bytes) -> Result<TxHash, BindingError> {
        self.binding
            .contract()
            .transact_calldata(&self.opts, calldata)
            .await
    }

    pub async fn estimate_gas<C: SolCall>(&self, call: &C) -> Result<u64, BindingError> {
        self.binding.contract().estimate_gas(&self.opts, call).await
    }

    pub async fn raw_transact(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<TxHash, BindingError> {
        self.binding
            .contract()
            .raw_transact(&self.opts, method, args)
            .await
    }
}

/// A binding paired with both option sets.
#[derive(Debug)]
pub struct Session<'a, B> {
    binding: &'a B,
    call: CallOpts,
    transact: TransactOpts,
}

impl<B> Clone for Session<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Session<'_, B> {}

impl<'a, B: Binding> Session<'a, B> {
    /// Narrow to the call half.
    pub fn caller(&self) -> CallSession<'a, B> {
        CallSession {
            binding: self.binding,
            opts: self.call,
        }
    }

    /// Narrow to the transaction half.
    pub fn transactor(&self) -> TransactSession<'a, B> {
        TransactSession {
            binding: self.binding,
            opts: self.transact,
        }
    }

    pub async fn call<C: SolCall>(&self, call: &C) -> Result<C::Return, BindingError> {
        self.caller().call(call).await
    }

    pub async fn transact<C: SolCall>(&self, call: &C) -> Result<TxHash, BindingError> {
        self.transactor().transact(call).await
    }

    pub async fn raw_call(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, BindingError> {
        self.caller().raw_call(method, args).await
    }

    pub async fn raw_transact(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<TxHash, BindingError> {
        self.transactor().raw_transact(method, args).await
    }
}
