// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block range chunking for log queries.

use alloy_primitives::BlockNumber;
use serde::Deserialize;

/// Maximum number of blocks covered by a single `eth_getLogs` request.
///
/// # Example
///
/// ```rust
/// use sticker_bindings::MaxBlockRange;
///
/// let range = MaxBlockRange::new(30);
/// let chunks: Vec<_> = range.chunk_range(0, 99).collect();
/// assert_eq!(chunks, vec![(0, 29), (30, 59), (60, 89), (90, 99)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct MaxBlockRange(u64);

impl MaxBlockRange {
    /// Create a new range limit. A zero limit is raised to one block.
    #[must_use]
    pub const fn new(blocks: u64) -> Self {
        if blocks == 0 {
            Self(1)
        } else {
            Self(blocks)
        }
    }

    /// The limit as a plain block count.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Number of requests needed to cover `[start, end]`.
    #[must_use]
    pub fn chunks_needed(self, start: BlockNumber, end: BlockNumber) -> u64 {
        if end < start {
            return 0;
        }
        (end - start) / self.0 + 1
    }

    /// Iterate over consecutive inclusive `(from, to)` ranges covering `[start, end]`.
    pub fn chunk_range(self, start: BlockNumber, end: BlockNumber) -> ChunkRange {
        ChunkRange {
            next: start,
            end,
            size: self.0,
            done: end < start,
        }
    }
}

/// Iterator returned by [`MaxBlockRange::chunk_range`].
#[derive(Debug, Clone)]
pub struct ChunkRange {
    next: BlockNumber,
    end: BlockNumber,
    size: u64,
    done: bool,
}

impl Iterator for ChunkRange {
    type Item = (BlockNumber, BlockNumber);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let from = self.next;
        let to = from.saturating_add(self.size - 1).min(self.end);
        if to == self.end {
            self.done = true;
        } else {
            self.next = to + 1;
        }
        Some((from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_multiple() {
        let chunks: Vec<_> = MaxBlockRange::new(10).chunk_range(0, 29).collect();
        assert_eq!(chunks, vec![(0, 9), (10, 19), (20, 29)]);
    }

    #[test]
    fn test_single_block() {
        let chunks: Vec<_> = MaxBlockRange::new(500).chunk_range(7, 7).collect();
        assert_eq!(chunks, vec![(7, 7)]);
        assert_eq!(MaxBlockRange::new(500).chunks_needed(7, 7), 1);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert_eq!(MaxBlockRange::new(10).chunk_range(20, 10).count(), 0);
        assert_eq!(MaxBlockRange::new(10).chunks_needed(20, 10), 0);
    }

    #[test]
    fn test_zero_is_raised_to_one() {
        assert_eq!(MaxBlockRange::new(0).as_u64(), 1);
    }

    #[test]
    fn test_range_ending_at_max_block() {
        let chunks: Vec<_> = MaxBlockRange::new(10)
            .chunk_range(u64::MAX - 3, u64::MAX)
            .collect();
        assert_eq!(chunks, vec![(u64::MAX - 3, u64::MAX)]);
    }

    proptest! {
        #[test]
        fn prop_chunks_cover_range_exactly(start in 0u64..10_000, len in 0u64..5_000, size in 1u64..700) {
            let end = start + len;
            let range = MaxBlockRange::new(size);
            let chunks: Vec<_> = range.chunk_range(start, end).collect();

            prop_assert_eq!(chunks.len() as u64, range.chunks_needed(start, end));
            prop_assert_eq!(chunks.first().map(|c| c.0), Some(start));
            prop_assert_eq!(chunks.last().map(|c| c.1), Some(end));
            for window in chunks.windows(2) {
                prop_assert_eq!(window[0].1 + 1, window[1].0);
            }
            for (from, to) in chunks {
                prop_assert!(to >= from);
                prop_assert!(to - from < size);
            }
        }
    }
}
