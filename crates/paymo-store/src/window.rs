//! Last-seen timestamps per party pair

use paymo_domain::{PartyId, PartyPair, Timestamp, TransactionRecord};
use std::collections::HashMap;

/// Most recent transaction time recorded for each unordered pair
///
/// Seeded from the batch with the maximum timestamp per pair. During the
/// stream it only moves when a connected payment falls outside the freshness
/// window, in which case it slides to that payment's timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowTracker {
    last_seen: HashMap<PartyPair, Timestamp>,
}

impl WindowTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a tracker from batch records
    ///
    /// Malformed timestamps count as the sentinel, so any real timestamp for
    /// the same pair wins.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let mut tracker = Self::new();
        for record in records {
            tracker.observe(
                PartyPair::new(record.party_a, record.party_b),
                record.timestamp_or_sentinel(),
            );
        }
        tracker
    }

    /// Record `timestamp` for `pair`, keeping the later of old and new
    pub fn observe(&mut self, pair: PartyPair, timestamp: Timestamp) {
        self.last_seen
            .entry(pair)
            .and_modify(|seen| {
                if timestamp > *seen {
                    *seen = timestamp;
                }
            })
            .or_insert(timestamp);
    }

    /// Overwrite the last-seen time for `pair`
    ///
    /// Returns the previous value. Unlike [`observe`](Self::observe) this
    /// moves the window even when `timestamp` is older, which happens when
    /// the stream carries a sentinel timestamp.
    pub fn slide(&mut self, pair: PartyPair, timestamp: Timestamp) -> Option<Timestamp> {
        self.last_seen.insert(pair, timestamp)
    }

    /// Last-seen time for `pair`
    pub fn last_seen(&self, pair: PartyPair) -> Option<Timestamp> {
        self.last_seen.get(&pair).copied()
    }

    /// Last-seen time for the pair formed by `a` and `b`, in either order
    pub fn last_seen_between(&self, a: PartyId, b: PartyId) -> Option<Timestamp> {
        self.last_seen(PartyPair::new(a, b))
    }

    /// Number of tracked pairs
    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    /// Whether no pair is tracked
    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }
}
