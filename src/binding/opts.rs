// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-request options for calls, transactions, filters and watches.

use std::time::Duration;

use alloy_eips::BlockId;
use alloy_primitives::{Address, BlockNumber, Bytes, U256};
use alloy_rpc_types::{TransactionInput, TransactionRequest};

/// Options for a read-only contract call.
///
/// The block is chosen as: pending state if `pending` is set, otherwise
/// `block_number` if given, otherwise latest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOpts {
    /// Query against the pending state
    pub pending: bool,
    /// Caller address, visible to the contract as `msg.sender`
    pub from: Option<Address>,
    /// Block to query; latest if `None`
    pub block_number: Option<BlockNumber>,
    /// Overrides the binding's RPC timeout
    pub timeout: Option<Duration>,
}

impl CallOpts {
    /// Query the pending state.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            pending: true,
            ..Self::default()
        }
    }

    /// Query a historical block.
    #[must_use]
    pub fn at_block(block_number: BlockNumber) -> Self {
        Self {
            block_number: Some(block_number),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Block the call is executed against.
    pub fn block_id(&self) -> BlockId {
        if self.pending {
            BlockId::pending()
        } else if let Some(number) = self.block_number {
            BlockId::number(number)
        } else {
            BlockId::latest()
        }
    }
}

/// Options for a state-changing transaction.
///
/// Fields left as `None` are filled in by the node. Setting `gas_price`
/// produces a legacy transaction; the two EIP-1559 caps produce a dynamic fee
/// transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactOpts {
    /// Sending account, which the node must be able to sign for
    pub from: Address,
    /// Ether sent along, in wei
    pub value: Option<U256>,
    pub nonce: Option<u64>,
    pub gas_limit: Option<u64>,
    pub gas_price: Option<u128>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
    /// Overrides the binding's RPC timeout
    pub timeout: Option<Duration>,
}

impl TransactOpts {
    pub fn new(from: Address) -> Self {
        Self {
            from,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    #[must_use]
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    #[must_use]
    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Use EIP-1559 fees.
    #[must_use]
    pub fn with_eip1559_fees(
        mut self,
        max_fee_per_gas: u128,
        max_priority_fee_per_gas: u128,
    ) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Transaction request to `to` carrying `input` with these options applied.
    pub(crate) fn request(&self, to: Address, input: Vec<u8>) -> TransactionRequest {
        let mut tx = TransactionRequest::default()
            .from(self.from)
            .to(to)
            .input(TransactionInput::new(Bytes::from(input)));
        if let Some(value) = self.value {
            tx = tx.value(value);
        }
        if let Some(nonce) = self.nonce {
            tx = tx.nonce(nonce);
        }
        if let Some(gas) = self.gas_limit {
            tx = tx.gas_limit(gas);
        }
        if let Some(price) = self.gas_price {
            tx = tx.gas_price(price);
        }
        if let Some(max_fee) = self.max_fee_per_gas {
            tx = tx.max_fee_per_gas(max_fee);
        }
        if let Some(tip) = self.max_priority_fee_per_gas {
            tx = tx.max_priority_fee_per_gas(tip);
        }
        tx
    }
}

/// Block range for a log query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOpts {
    /// First block, inclusive
    pub start: BlockNumber,
    /// Last block, inclusive; latest if `None`
    pub end: Option<BlockNumber>,
}

impl FilterOpts {
    /// Query `[start, end]`.
    pub fn range(start: BlockNumber, end: BlockNumber) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Query from `start` to the chain head.
    pub fn from_block(start: BlockNumber) -> Self {
        Self { start, end: None }
    }
}

/// Options for a log subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchOpts {
    /// Replay logs from this block before following new ones
    pub start: Option<BlockNumber>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_eips::BlockNumberOrTag;

    #[test]
    fn test_pending_wins_over_block_number() {
        let opts = CallOpts {
            pending: true,
            block_number: Some(10),
            ..CallOpts::default()
        };
        assert_eq!(opts.block_id(), BlockId::Number(BlockNumberOrTag::Pending));
    }

    #[test]
    fn test_block_selection() {
        assert_eq!(
            CallOpts::at_block(42).block_id(),
            BlockId::Number(BlockNumberOrTag::Number(42))
        );
        assert_eq!(
            CallOpts::default().block_id(),
            BlockId::Number(BlockNumberOrTag::Latest)
        );
    }

    #[test]
    fn test_transact_request_carries_options() {
        let from = Address::repeat_byte(1);
        let to = Address::repeat_byte(2);
        let tx = TransactOpts::new(from)
            .with_value(U256::from(5))
            .with_nonce(7)
            .with_gas_limit(21_000)
            .request(to, vec![0xde, 0xad]);

        assert_eq!(tx.from, Some(from));
        assert_eq!(tx.value, Some(U256::from(5)));
        assert_eq!(tx.nonce, Some(7));
        assert_eq!(tx.gas, Some(21_000));
        assert_eq!(tx.input.input().map(|b| b.to_vec()), Some(vec![0xde, 0xad]));
    }
}
