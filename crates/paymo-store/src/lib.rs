//! PayMo Storage Layer
//!
//! In-memory state the verifier queries and mutates while classifying a
//! stream.
//!
//! # Architecture
//!
//! - [`AdjacencyGraph`]: party -> neighbor set, implements `GraphStore`
//! - [`bfs`]: degree-bounded reachability over any `GraphStore`
//! - [`WindowTracker`]: last-seen timestamp per unordered party pair
//!
//! Nothing here persists across runs. Each strategy pass clones the
//! batch-built graph and tracker so mutations stay local to that pass.
//!
//! # Examples
//!
//! ```
//! use paymo_domain::{GraphStore, PartyId};
//! use paymo_store::{bfs, AdjacencyGraph};
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_edge(PartyId::new(1), PartyId::new(2));
//! graph.add_edge(PartyId::new(2), PartyId::new(3));
//!
//! assert!(!graph.has_neighbor(PartyId::new(1), PartyId::new(3)));
//! assert!(bfs::is_within_degree(&graph, PartyId::new(1), PartyId::new(3), 4));
//! ```

#![warn(missing_docs)]

pub mod bfs;
pub mod graph;
pub mod window;

pub use graph::AdjacencyGraph;
pub use window::WindowTracker;
