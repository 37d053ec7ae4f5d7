//! Trust strategies
//!
//! Each strategy starts from the direct-edge test and widens the notion of
//! "connected" in its own way. The temporal strategy additionally consults
//! the window tracker; its evaluation lives in [`crate::temporal`].

use crate::config::VerifierConfig;
use paymo_domain::{GraphStore, PartyId};
use paymo_store::bfs;
use serde::Serialize;
use std::fmt;

/// Round budget of the fixed-degree and temporal-window strategies
pub const FIXED_DEGREE: usize = 4;

/// One of the five verification strategies, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Trusted only when the payer has paid or been paid by the payee
    DirectEdge,

    /// Also trusted when the two share a neighbor
    CommonNeighbor,

    /// Also trusted when the bounded search with the fixed budget succeeds
    FixedDegree,

    /// Also trusted when the bounded search with a caller-chosen budget succeeds
    ConfigurableDegree,

    /// Fixed-budget reachability gated by the pair's freshness window
    TemporalWindow,
}

impl Strategy {
    /// All strategies in output order
    pub const ALL: [Strategy; 5] = [
        Strategy::DirectEdge,
        Strategy::CommonNeighbor,
        Strategy::FixedDegree,
        Strategy::ConfigurableDegree,
        Strategy::TemporalWindow,
    ];

    /// Strategies that always run
    pub const REQUIRED: [Strategy; 3] = [
        Strategy::DirectEdge,
        Strategy::CommonNeighbor,
        Strategy::FixedDegree,
    ];

    /// Kebab-case name used in logs and summaries
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DirectEdge => "direct-edge",
            Strategy::CommonNeighbor => "common-neighbor",
            Strategy::FixedDegree => "fixed-degree",
            Strategy::ConfigurableDegree => "configurable-degree",
            Strategy::TemporalWindow => "temporal-window",
        }
    }

    /// 1-based feature number, matching the output file position
    pub fn feature(&self) -> usize {
        match self {
            Strategy::DirectEdge => 1,
            Strategy::CommonNeighbor => 2,
            Strategy::FixedDegree => 3,
            Strategy::ConfigurableDegree => 4,
            Strategy::TemporalWindow => 5,
        }
    }

    /// Search budget used by this strategy, if it searches at all
    pub fn degree(&self, config: &VerifierConfig) -> Option<usize> {
        match self {
            Strategy::DirectEdge | Strategy::CommonNeighbor => None,
            Strategy::FixedDegree | Strategy::TemporalWindow => Some(FIXED_DEGREE),
            Strategy::ConfigurableDegree => Some(config.configurable_degree),
        }
    }

    /// Whether `a` and `b` are connected under this strategy's graph rule
    ///
    /// The direct edge is always tried first. The temporal strategy shares
    /// the bounded-search rule here; its freshness gate is applied on top by
    /// [`crate::temporal::evaluate`].
    pub fn is_connected<G: GraphStore>(
        &self,
        graph: &G,
        a: PartyId,
        b: PartyId,
        config: &VerifierConfig,
    ) -> bool {
        if graph.has_neighbor(a, b) {
            return true;
        }
        match self {
            Strategy::DirectEdge => false,
            Strategy::CommonNeighbor => has_common_neighbor(graph, a, b),
            Strategy::FixedDegree | Strategy::ConfigurableDegree | Strategy::TemporalWindow => {
                let degree = self.degree(config).unwrap_or_default();
                bfs::is_within_degree(graph, a, b, degree)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether some neighbor of `a` lists `b` as its own neighbor
pub fn has_common_neighbor<G: GraphStore>(graph: &G, a: PartyId, b: PartyId) -> bool {
    graph.neighbors(a).any(|friend| graph.has_neighbor(friend, b))
}
