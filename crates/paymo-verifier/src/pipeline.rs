//! Verification pipeline
//!
//! A [`Verifier`] holds the graph and window tracker built from the batch.
//! Each strategy runs as a [`Pass`] over the stream on its own clone of that
//! state, so online insertions and window slides made by one strategy are
//! never seen by another.

use crate::config::VerifierConfig;
use crate::error::VerifierError;
use crate::strategy::Strategy;
use crate::temporal::{self, WindowOutcome};
use paymo_domain::{GraphStore, PartyPair, TransactionRecord, Verdict};
use paymo_store::{AdjacencyGraph, WindowTracker};
use tracing::{debug, info};

/// Batch-seeded verifier
#[derive(Debug, Clone)]
pub struct Verifier {
    graph: AdjacencyGraph,
    tracker: WindowTracker,
    config: VerifierConfig,
}

impl Verifier {
    /// Build the graph and window tracker from batch records
    pub fn from_batch(batch: &[TransactionRecord], config: VerifierConfig) -> Result<Self, VerifierError> {
        config.validate()?;

        let graph = AdjacencyGraph::from_records(batch);
        let tracker = WindowTracker::from_records(batch);
        debug_assert!(graph.is_symmetric());

        info!(
            records = batch.len(),
            parties = graph.party_count(),
            entries = graph.entry_count(),
            pairs = tracker.len(),
            "Loaded batch"
        );

        Ok(Self {
            graph,
            tracker,
            config,
        })
    }

    /// The batch-built graph
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// The batch-seeded window tracker
    pub fn tracker(&self) -> &WindowTracker {
        &self.tracker
    }

    /// Start a pass for `strategy` on a fresh copy of the batch state
    pub fn pass(&self, strategy: Strategy) -> Pass<'_> {
        Pass {
            strategy,
            graph: self.graph.clone(),
            tracker: self.tracker.clone(),
            config: &self.config,
            online_insertions: 0,
            window_slides: 0,
        }
    }

    /// Classify the stream under one strategy
    ///
    /// Honors `max_stream_records`; records past the limit get no verdict.
    pub fn run(&self, strategy: Strategy, stream: &[TransactionRecord]) -> PassReport {
        let limit = self.config.max_stream_records.unwrap_or(stream.len());
        let mut pass = self.pass(strategy);

        info!(strategy = %strategy, records = stream.len().min(limit), "Starting pass");

        let verdicts: Vec<Verdict> = stream
            .iter()
            .take(limit)
            .map(|record| pass.classify(record))
            .collect();

        let report = pass.finish(verdicts);
        info!(
            strategy = %strategy,
            trusted = report.trusted(),
            unverified = report.unverified(),
            online_insertions = report.online_insertions,
            window_slides = report.window_slides,
            "Finished pass"
        );
        report
    }

    /// Classify the stream under each strategy in turn
    pub fn run_all(&self, strategies: &[Strategy], stream: &[TransactionRecord]) -> Vec<PassReport> {
        strategies
            .iter()
            .map(|strategy| self.run(*strategy, stream))
            .collect()
    }
}

/// One strategy's walk over the stream, owning its mutable state
#[derive(Debug)]
pub struct Pass<'a> {
    strategy: Strategy,
    graph: AdjacencyGraph,
    tracker: WindowTracker,
    config: &'a VerifierConfig,
    online_insertions: usize,
    window_slides: usize,
}

impl Pass<'_> {
    /// Graph as mutated so far
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Window tracker as mutated so far
    pub fn tracker(&self) -> &WindowTracker {
        &self.tracker
    }

    /// Classify one record, applying any state change it triggers
    ///
    /// A payer with no entry in the graph is `unverified`, and the payee is
    /// added to the payer's set only. The reverse entry is deliberately not
    /// created.
    pub fn classify(&mut self, record: &TransactionRecord) -> Verdict {
        let (a, b) = (record.party_a, record.party_b);

        if !self.graph.contains(a) {
            debug!(strategy = %self.strategy, payer = %a, payee = %b, "Unknown payer, inserting directed edge");
            self.graph.insert_directed_edge(a, b);
            self.online_insertions += 1;
            return Verdict::Unverified;
        }

        match self.strategy {
            Strategy::TemporalWindow => self.classify_windowed(record),
            strategy => Verdict::from_connected(strategy.is_connected(&self.graph, a, b, self.config)),
        }
    }

    /// Evaluate the temporal check for `record` without changing any state
    pub fn evaluate_window(&self, record: &TransactionRecord) -> WindowOutcome {
        temporal::evaluate(&self.graph, &self.tracker, record, self.config)
    }

    fn classify_windowed(&mut self, record: &TransactionRecord) -> Verdict {
        let outcome = self.evaluate_window(record);

        if let WindowOutcome::Stale { days, current } = outcome {
            let pair = PartyPair::new(record.party_a, record.party_b);
            debug!(pair = %pair, days, to = %current, "Sliding freshness window");
            self.tracker.slide(pair, current);
            self.window_slides += 1;
        }

        outcome.verdict()
    }

    /// Close the pass and package its verdicts
    pub fn finish(self, verdicts: Vec<Verdict>) -> PassReport {
        PassReport {
            strategy: self.strategy,
            verdicts,
            online_insertions: self.online_insertions,
            window_slides: self.window_slides,
        }
    }
}

/// Verdicts and side-effect counts of one completed pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// Strategy that produced the verdicts
    pub strategy: Strategy,

    /// One verdict per classified stream record, in stream order
    pub verdicts: Vec<Verdict>,

    /// Records whose unknown payer caused a directed insertion
    pub online_insertions: usize,

    /// Records that slid a pair's freshness window
    pub window_slides: usize,
}

impl PassReport {
    /// Number of trusted verdicts
    pub fn trusted(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_trusted()).count()
    }

    /// Number of unverified verdicts
    pub fn unverified(&self) -> usize {
        self.verdicts.len() - self.trusted()
    }
}
