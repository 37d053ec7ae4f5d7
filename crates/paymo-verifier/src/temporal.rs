//! Freshness-gated reachability
//!
//! A connected pair is only trusted if its last recorded payment is within
//! the configured number of days of the current one. Evaluation is pure; the
//! pass applies the tracker update for [`WindowOutcome::Stale`] afterwards.

use crate::config::VerifierConfig;
use crate::strategy::Strategy;
use paymo_domain::{GraphStore, Timestamp, TransactionRecord, Verdict};
use paymo_store::WindowTracker;

/// How a record fared against the freshness window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOutcome {
    /// Connected and within the window
    Fresh {
        /// Whole days since the pair's last payment
        days: i64,
    },

    /// Connected but outside the window; the window should slide to `current`
    Stale {
        /// Whole days since the pair's last payment
        days: i64,
        /// Timestamp of the record being classified
        current: Timestamp,
    },

    /// Connected, but the pair has no recorded payment to measure from
    UnknownPair,

    /// Not connected within the search budget
    Disconnected,
}

impl WindowOutcome {
    /// Verdict for this outcome; only `Fresh` is trusted
    pub fn verdict(&self) -> Verdict {
        Verdict::from_connected(matches!(self, WindowOutcome::Fresh { .. }))
    }
}

/// Classify `record` against the graph and the tracker without mutating either
///
/// A malformed record timestamp is measured as the sentinel date, which puts
/// it far outside any realistic window.
pub fn evaluate<G: GraphStore>(
    graph: &G,
    tracker: &WindowTracker,
    record: &TransactionRecord,
    config: &VerifierConfig,
) -> WindowOutcome {
    let (a, b) = (record.party_a, record.party_b);

    if !Strategy::TemporalWindow.is_connected(graph, a, b, config) {
        return WindowOutcome::Disconnected;
    }

    let Some(last_seen) = tracker.last_seen_between(a, b) else {
        return WindowOutcome::UnknownPair;
    };

    let current = record.timestamp_or_sentinel();
    let days = current.days_between(&last_seen);

    if days <= i64::from(config.window_days) {
        WindowOutcome::Fresh { days }
    } else {
        WindowOutcome::Stale { days, current }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paymo_domain::PartyId;
    use paymo_store::AdjacencyGraph;

    fn record(a: u64, b: u64, raw: &str) -> TransactionRecord {
        TransactionRecord::new(PartyId::new(a), PartyId::new(b), Timestamp::parse(raw).ok())
    }

    fn setup() -> (AdjacencyGraph, WindowTracker) {
        let batch = vec![
            record(1, 2, "2016-01-01 00:00:00"),
            record(2, 3, "2016-01-01 00:00:00"),
        ];
        (AdjacencyGraph::from_records(&batch), WindowTracker::from_records(&batch))
    }

    #[test]
    fn test_fresh_direct_pair() {
        let (graph, tracker) = setup();
        let config = VerifierConfig::default();
        let outcome = evaluate(&graph, &tracker, &record(1, 2, "2016-06-01 00:00:00"), &config);
        assert_eq!(outcome, WindowOutcome::Fresh { days: 152 });
        assert_eq!(outcome.verdict(), Verdict::Trusted);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let (graph, tracker) = setup();
        let config = VerifierConfig {
            window_days: 10,
            ..Default::default()
        };
        let at_edge = evaluate(&graph, &tracker, &record(2, 1, "2016-01-11 23:59:59"), &config);
        assert_eq!(at_edge, WindowOutcome::Fresh { days: 10 });

        let past_edge = evaluate(&graph, &tracker, &record(2, 1, "2016-01-12 00:00:00"), &config);
        assert!(matches!(past_edge, WindowOutcome::Stale { days: 11, .. }));
    }

    #[test]
    fn test_stale_direct_pair() {
        let (graph, tracker) = setup();
        let config = VerifierConfig::default();
        let outcome = evaluate(&graph, &tracker, &record(1, 2, "2018-01-01 00:00:00"), &config);
        match outcome {
            WindowOutcome::Stale { current, .. } => {
                assert_eq!(current.to_string(), "2018-01-01 00:00:00");
            }
            other => panic!("Expected Stale, got {:?}", other),
        }
        assert_eq!(outcome.verdict(), Verdict::Unverified);
    }

    #[test]
    fn test_reachable_pair_without_history_is_unknown() {
        let (graph, tracker) = setup();
        let config = VerifierConfig::default();
        let outcome = evaluate(&graph, &tracker, &record(1, 3, "2016-01-02 00:00:00"), &config);
        assert_eq!(outcome, WindowOutcome::UnknownPair);
        assert_eq!(outcome.verdict(), Verdict::Unverified);
    }

    #[test]
    fn test_disconnected() {
        let (mut graph, tracker) = setup();
        graph.add_edge(PartyId::new(8), PartyId::new(9));
        let config = VerifierConfig::default();
        let outcome = evaluate(&graph, &tracker, &record(1, 9, "2016-01-02 00:00:00"), &config);
        assert_eq!(outcome, WindowOutcome::Disconnected);
    }

    #[test]
    fn test_malformed_timestamp_is_stale() {
        let (graph, tracker) = setup();
        let config = VerifierConfig::default();
        let outcome = evaluate(&graph, &tracker, &record(1, 2, "??"), &config);
        match outcome {
            WindowOutcome::Stale { current, .. } => assert!(current.is_sentinel()),
            other => panic!("Expected Stale, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let (graph, tracker) = setup();
        let config = VerifierConfig::default();
        let rec = record(2, 1, "2017-06-01 00:00:00");
        assert_eq!(
            evaluate(&graph, &tracker, &rec, &config),
            evaluate(&graph, &tracker, &rec, &config)
        );
    }
}
