//! Response rotation tracking.
//!
//! Remembers, per (topic, sub-topic) pair, which canned variant was served
//! last so that repeated questions cycle through the available phrasings
//! instead of repeating one. The tracker is owned by its engine; two
//! engines rotate independently.

use std::collections::HashMap;

use super::topic::{SubTopic, Topic};

/// Cyclic variant selector keyed by (topic, sub-topic).
#[derive(Debug, Default, Clone)]
pub struct RotationTracker {
    last_served: HashMap<(Topic, SubTopic), usize>,
}

impl RotationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the next variant index for the pair and records it.
    ///
    /// The first call for a pair always yields 0; every later call yields
    /// the successor of the recorded index, wrapping at `variant_count`.
    /// A `variant_count` of zero is treated as one so the result is always
    /// a valid index into a non-empty slice.
    pub fn next(&mut self, topic: Topic, sub_topic: SubTopic, variant_count: usize) -> usize {
        let count = variant_count.max(1);
        let index = match self.last_served.get(&(topic, sub_topic)) {
            Some(last) => (last + 1) % count,
            None => 0,
        };
        self.last_served.insert((topic, sub_topic), index);
        index
    }

    /// Forgets all recorded positions; the next pick for any pair is 0.
    pub fn clear(&mut self) {
        self.last_served.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.last_served.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pick_for_a_pair_is_zero() {
        let mut tracker = RotationTracker::new();
        assert_eq!(tracker.next(Topic::Fees, SubTopic::Payment, 3), 0);
    }

    #[test]
    fn picks_cycle_through_all_variants_and_wrap() {
        let mut tracker = RotationTracker::new();
        let picks: Vec<usize> = (0..7)
            .map(|_| tracker.next(Topic::Fees, SubTopic::Payment, 3))
            .collect();
        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn pairs_rotate_independently() {
        let mut tracker = RotationTracker::new();
        tracker.next(Topic::Fees, SubTopic::Payment, 3);
        tracker.next(Topic::Fees, SubTopic::Payment, 3);
        assert_eq!(tracker.next(Topic::Results, SubTopic::Access, 3), 0);
        assert_eq!(tracker.next(Topic::Fees, SubTopic::Balance, 3), 0);
    }

    #[test]
    fn zero_variant_count_is_clamped_to_one() {
        let mut tracker = RotationTracker::new();
        assert_eq!(tracker.next(Topic::General, SubTopic::Library, 0), 0);
        assert_eq!(tracker.next(Topic::General, SubTopic::Library, 0), 0);
    }

    #[test]
    fn clear_resets_every_pair() {
        let mut tracker = RotationTracker::new();
        tracker.next(Topic::Fees, SubTopic::Payment, 3);
        tracker.next(Topic::Fees, SubTopic::Payment, 3);
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.next(Topic::Fees, SubTopic::Payment, 3), 0);
    }
}
