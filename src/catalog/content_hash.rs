// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! EIP-1577 content hashes as stored in pack records.

use std::fmt;

use alloy_primitives::{hex, Bytes};

/// Storage network named by a content hash's multicodec prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCodec {
    /// `0xe301`
    Ipfs,
    /// `0xe501`
    Ipns,
    /// `0xe401`
    Swarm,
    Unknown,
}

/// Pointer to a pack's metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContentHash(Bytes);

impl ContentHash {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Network the content lives on.
    pub fn codec(&self) -> ContentCodec {
        match self.0.get(..2) {
            Some([0xe3, 0x01]) => ContentCodec::Ipfs,
            Some([0xe5, 0x01]) => ContentCodec::Ipns,
            Some([0xe4, 0x01]) => ContentCodec::Swarm,
            _ => ContentCodec::Unknown,
        }
    }

    /// Lowercase hex of the whole hash without `0x`; the key content fetchers use.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<Bytes> for ContentHash {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
