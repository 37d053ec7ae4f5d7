//! Adjacency-set graph of parties

use paymo_domain::{GraphStore, PartyId, TransactionRecord};
use std::collections::{BTreeSet, HashMap};

/// Undirected payment graph stored as party -> neighbor set
///
/// Neighbor sets are ordered so traversal order, and therefore the verdicts
/// of the round-bounded search, is deterministic across runs.
///
/// Batch loading keeps the relation symmetric. The only asymmetric write is
/// [`GraphStore::insert_directed_edge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: HashMap<PartyId, BTreeSet<PartyId>>,
}

impl AdjacencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from batch records, adding each pair symmetrically
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        let mut graph = Self::new();
        for record in records {
            graph.add_edge(record.party_a, record.party_b);
        }
        graph
    }

    /// Number of parties with an entry
    pub fn party_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed adjacency entries
    ///
    /// For a purely symmetric graph without self-loops this is twice the
    /// number of undirected edges.
    pub fn entry_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Whether the graph has no parties
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether every entry has its mirror entry
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .all(|(a, ns)| ns.iter().all(|b| self.has_neighbor(*b, *a)))
    }
}

impl GraphStore for AdjacencyGraph {
    fn lookup(&self, party: PartyId) -> Option<&BTreeSet<PartyId>> {
        self.adjacency.get(&party)
    }

    fn add_edge(&mut self, a: PartyId, b: PartyId) {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    fn insert_directed_edge(&mut self, from: PartyId, to: PartyId) {
        self.adjacency.entry(from).or_default().insert(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(v: u64) -> PartyId {
        PartyId::new(v)
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(p(1), p(2));

        assert!(graph.has_neighbor(p(1), p(2)));
        assert!(graph.has_neighbor(p(2), p(1)));
        assert_eq!(graph.party_count(), 2);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_add_edge_deduplicates() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(p(1), p(2));
        graph.add_edge(p(2), p(1));
        graph.add_edge(p(1), p(2));

        assert_eq!(graph.entry_count(), 2);
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let graph = AdjacencyGraph::new();
        assert!(graph.lookup(p(9)).is_none());
        assert!(!graph.has_neighbor(p(9), p(1)));
        assert_eq!(graph.neighbors(p(9)).count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_directed_insert_is_one_way() {
        let mut graph = AdjacencyGraph::new();
        graph.insert_directed_edge(p(5), p(6));

        assert!(graph.has_neighbor(p(5), p(6)));
        assert!(!graph.has_neighbor(p(6), p(5)));
        assert!(graph.contains(p(5)));
        assert!(!graph.contains(p(6)));
        assert!(!graph.is_symmetric());
    }

    #[test]
    fn test_from_records() {
        let records = vec![
            TransactionRecord::between(1, 2),
            TransactionRecord::between(2, 3),
        ];
        let graph = AdjacencyGraph::from_records(&records);

        assert_eq!(graph.neighbors(p(2)).collect::<Vec<_>>(), vec![p(1), p(3)]);
        assert_eq!(graph.party_count(), 3);
    }

    #[test]
    fn test_self_payment() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge(p(4), p(4));
        assert!(graph.has_neighbor(p(4), p(4)));
        assert_eq!(graph.entry_count(), 1);
    }

    #[test]
    fn test_clone_isolates_mutation() {
        let mut original = AdjacencyGraph::new();
        original.add_edge(p(1), p(2));

        let mut copy = original.clone();
        copy.insert_directed_edge(p(7), p(8));

        assert!(copy.contains(p(7)));
        assert!(!original.contains(p(7)));
    }
}
