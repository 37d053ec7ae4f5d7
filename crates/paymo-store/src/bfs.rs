//! Degree-bounded reachability
//!
//! The search is a breadth-first walk whose budget is counted in expansion
//! rounds: each round pops one `(node, neighbors)` entry off the work queue.
//! While expanding, every newly visited neighbor `n` is immediately probed for
//! `target ∈ neighbors(n)`, so the probe reaches one hop past the node being
//! expanded. With a budget of `k` rounds the search can therefore answer
//! "yes" for parties up to `k + 1` hops away. Verdicts downstream depend on
//! this exact counting, so it must not be normalised to a textbook BFS.

use paymo_domain::{GraphStore, PartyId};
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Result of a bounded search, with enough detail for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether `target` was found within the budget
    pub reachable: bool,

    /// Number of rounds started before the search stopped
    pub rounds: usize,

    /// Number of distinct parties marked visited (including the source)
    pub visited: usize,
}

/// Whether `target` is reachable from `source` within `k` expansion rounds
///
/// An unknown `source` has no neighbors and yields `false`.
pub fn is_within_degree<G: GraphStore>(graph: &G, source: PartyId, target: PartyId, k: usize) -> bool {
    search(graph, source, target, k).reachable
}

/// Run the bounded search and report how far it got
pub fn search<G: GraphStore>(graph: &G, source: PartyId, target: PartyId, k: usize) -> SearchOutcome {
    let empty = BTreeSet::new();
    let neighbors_of = |party: PartyId| graph.lookup(party).unwrap_or(&empty);

    let mut visited: HashSet<PartyId> = HashSet::from([source]);
    let mut queue: VecDeque<(PartyId, &BTreeSet<PartyId>)> = VecDeque::from([(source, neighbors_of(source))]);
    let mut rounds = 0;

    while rounds < k {
        let Some((_node, current)) = queue.pop_front() else {
            break;
        };
        rounds += 1;

        for &neighbor in current {
            if !visited.insert(neighbor) {
                continue;
            }
            let next = neighbors_of(neighbor);
            queue.push_back((neighbor, next));

            if next.contains(&target) {
                return SearchOutcome {
                    reachable: true,
                    rounds,
                    visited: visited.len(),
                };
            }
        }
    }

    SearchOutcome {
        reachable: false,
        rounds,
        visited: visited.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdjacencyGraph;

    fn p(v: u64) -> PartyId {
        PartyId::new(v)
    }

    /// 1 - 2 - 3 - ... - n
    fn chain(n: u64) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        for i in 1..n {
            graph.add_edge(p(i), p(i + 1));
        }
        graph
    }

    #[test]
    fn test_two_hops_found_in_first_round() {
        let graph = chain(3);
        let outcome = search(&graph, p(1), p(3), 4);
        assert!(outcome.reachable);
        assert_eq!(outcome.rounds, 1);
    }

    #[test]
    fn test_zero_rounds_never_reaches() {
        let graph = chain(3);
        assert!(!is_within_degree(&graph, p(1), p(3), 0));
    }

    #[test]
    fn test_probe_reaches_one_hop_past_budget() {
        // On a chain each round expands exactly one node, so round r probes
        // the party r + 1 hops away.
        let graph = chain(10);
        assert!(is_within_degree(&graph, p(1), p(5), 4));
        assert!(is_within_degree(&graph, p(1), p(6), 4));
        assert!(!is_within_degree(&graph, p(1), p(7), 4));
    }

    #[test]
    fn test_direct_neighbor_is_found_through_back_edge() {
        // The probe only inspects sets of newly visited parties. 2's own set
        // never contains 2, so the hit comes from 3's set in round two.
        let graph = chain(3);
        assert!(is_within_degree(&graph, p(1), p(2), 4));
    }

    #[test]
    fn test_unknown_source() {
        let graph = chain(3);
        let outcome = search(&graph, p(99), p(1), 4);
        assert!(!outcome.reachable);
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.visited, 1);
    }

    #[test]
    fn test_queue_exhaustion_stops_early() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(p(1), p(2));
        graph.add_edge(p(8), p(9));

        let outcome = search(&graph, p(1), p(9), 10);
        assert!(!outcome.reachable);
        assert!(outcome.rounds < 10);
    }

    #[test]
    fn test_disconnected_components() {
        let mut graph = chain(4);
        graph.add_edge(p(20), p(21));
        assert!(!is_within_degree(&graph, p(1), p(21), 100));
    }

    #[test]
    fn test_round_budget_counts_pops_not_levels() {
        // Star: 1 is connected to 2..=5, and only 5 knows 6.
        let mut graph = AdjacencyGraph::new();
        for leaf in 2..=5 {
            graph.add_edge(p(1), p(leaf));
        }
        graph.add_edge(p(5), p(6));
        graph.add_edge(p(6), p(7));

        // Round 1 expands 1 and probes 2..=5; 5's set contains 6.
        assert!(is_within_degree(&graph, p(1), p(6), 1));
        // 7 is only probed once 5 is popped and 6 visited. Rounds 2..=4 pop
        // the leaves 2, 3 and 4, so 7 needs the fifth round.
        assert!(!is_within_degree(&graph, p(1), p(7), 4));
        assert!(is_within_degree(&graph, p(1), p(7), 5));
    }
}
