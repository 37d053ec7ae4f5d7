//! Trait definitions for the graph layer
//!
//! The verifier only talks to the adjacency relation through this trait.
//! The in-memory implementation lives in `paymo-store`.

use crate::party::PartyId;
use std::collections::BTreeSet;

/// Adjacency relation between parties
///
/// Reads never mutate. There are exactly two write paths: the symmetric
/// [`add_edge`](GraphStore::add_edge) used while loading the batch, and the
/// one-directional [`insert_directed_edge`](GraphStore::insert_directed_edge)
/// used when a stream record names a payer the graph has never seen.
pub trait GraphStore {
    /// Neighbor set of `party`, or `None` if the party never appeared as a key
    fn lookup(&self, party: PartyId) -> Option<&BTreeSet<PartyId>>;

    /// Insert `b` into `a`'s set and `a` into `b`'s set
    fn add_edge(&mut self, a: PartyId, b: PartyId);

    /// Insert `to` into `from`'s set only
    fn insert_directed_edge(&mut self, from: PartyId, to: PartyId);

    /// Whether `party` has an entry in the relation
    fn contains(&self, party: PartyId) -> bool {
        self.lookup(party).is_some()
    }

    /// Whether `b` is in `a`'s neighbor set
    fn has_neighbor(&self, a: PartyId, b: PartyId) -> bool {
        self.lookup(a).is_some_and(|ns| ns.contains(&b))
    }

    /// Iterate `party`'s neighbors; empty for unknown parties
    fn neighbors(&self, party: PartyId) -> impl Iterator<Item = PartyId> + '_ {
        self.lookup(party).into_iter().flatten().copied()
    }
}
