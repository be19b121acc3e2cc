// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Indexed-argument filters for event queries.
//!
//! Each indexed event parameter occupies one topic slot after the signature.
//! A slot matches any of the listed values, and an empty list matches
//! everything.

use alloy_primitives::{Address, FixedBytes, B256, U256};
use alloy_rpc_types::Filter;

/// Conversion of an indexed event argument into its topic word.
pub trait IntoTopic {
    fn into_topic(self) -> B256;
}

impl IntoTopic for Address {
    fn into_topic(self) -> B256 {
        self.into_word()
    }
}

impl IntoTopic for U256 {
    fn into_topic(self) -> B256 {
        B256::from(self.to_be_bytes::<32>())
    }
}

impl IntoTopic for FixedBytes<4> {
    fn into_topic(self) -> B256 {
        B256::right_padding_from(self.as_slice())
    }
}

impl IntoTopic for B256 {
    fn into_topic(self) -> B256 {
        self
    }
}

impl IntoTopic for bool {
    fn into_topic(self) -> B256 {
        B256::with_last_byte(u8::from(self))
    }
}

/// Topic constraints for the three indexed slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicRules {
    slots: [Vec<B256>; 3],
}

impl TopicRules {
    /// No constraints: every log of the event matches.
    pub fn any() -> Self {
        Self::default()
    }

    /// Constrain the first indexed argument.
    #[must_use]
    pub fn topic1<T: IntoTopic + Copy>(self, values: &[T]) -> Self {
        self.slot(0, values)
    }

    /// Constrain the second indexed argument.
    #[must_use]
    pub fn topic2<T: IntoTopic + Copy>(self, values: &[T]) -> Self {
        self.slot(1, values)
    }

    /// Constrain the third indexed argument.
    #[must_use]
    pub fn topic3<T: IntoTopic + Copy>(self, values: &[T]) -> Self {
        self.slot(2, values)
    }

    fn slot<T: IntoTopic + Copy>(mut self, index: usize, values: &[T]) -> Self {
        self.slots[index] = values.iter().map(|v| v.into_topic()).collect();
        self
    }

    /// Whether no slot is constrained.
    pub fn is_wildcard(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Add the constraints to a filter.
    pub(crate) fn apply(&self, mut filter: Filter) -> Filter {
        let [first, second, third] = &self.slots;
        if !first.is_empty() {
            filter = filter.topic1(first.clone());
        }
        if !second.is_empty() {
            filter = filter.topic2(second.clone());
        }
        if !third.is_empty() {
            filter = filter.topic3(third.clone());
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, fixed_bytes};

    #[test]
    fn test_address_topic_is_left_padded() {
        let topic = address!("00000000000000000000000000000000deadbeef").into_topic();
        assert_eq!(
            topic,
            b256!("00000000000000000000000000000000000000000000000000000000deadbeef")
        );
    }

    #[test]
    fn test_uint_topic_is_big_endian() {
        assert_eq!(U256::from(258).into_topic(), B256::left_padding_from(&[1, 2]));
    }

    #[test]
    fn test_bytes4_topic_is_right_padded() {
        let topic = fixed_bytes!("12345678").into_topic();
        assert_eq!(&topic[..4], &[0x12, 0x34, 0x56, 0x78]);
        assert!(topic[4..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_empty_rules_leave_filter_untouched() {
        let rules = TopicRules::any().topic1::<Address>(&[]);
        assert!(rules.is_wildcard());
        let filter = rules.apply(Filter::new());
        assert!(filter.topics[1].is_empty());
    }

    #[test]
    fn test_rules_fill_slots() {
        let rules = TopicRules::any()
            .topic2(&[U256::from(1), U256::from(2)])
            .topic3(&[true]);
        let filter = rules.apply(Filter::new());
        assert!(filter.topics[1].is_empty());
        assert_eq!(filter.topics[2].len(), 2);
        assert!(filter.topics[3].matches(&B256::with_last_byte(1)));
    }
}
