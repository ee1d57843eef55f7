//! Undirected adjacency lists and their builder.
//!
//! # Data layout
//!
//! `adjacency[p]` lists every neighbor of person `p` in insertion order.
//! Each undirected edge appears exactly twice (once per endpoint).  Degrees
//! stay tiny (about 0.2 on average with the default 10 % draw ratio), so a
//! linear scan of one list is the membership test.

use swarm_core::{PersonId, SimRng, SwarmError, SwarmResult};
use tracing::warn;

// ── SocialGraph ───────────────────────────────────────────────────────────────

/// Static, symmetric social graph over `PersonId`s.
///
/// Do not construct directly; use [`SocialGraphBuilder`] or
/// [`SocialGraph::random`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocialGraph {
    adjacency:  Vec<Vec<PersonId>>,
    edge_count: usize,
}

impl SocialGraph {
    /// A graph over `population` persons with no edges.
    pub fn empty(population: usize) -> Self {
        Self { adjacency: vec![Vec::new(); population], edge_count: 0 }
    }

    /// Draw `draws` random unordered pairs (with replacement).  Self-pairs
    /// are skipped and repeated pairs are kept once, so the result has at
    /// most `draws` edges.
    pub fn random(population: usize, draws: usize, rng: &mut SimRng) -> Self {
        let mut builder = SocialGraphBuilder::new(population);
        if population == 0 {
            return builder.build();
        }
        for _ in 0..draws {
            let a = PersonId(rng.gen_range(0..population as u32));
            let b = PersonId(rng.gen_range(0..population as u32));
            if a == b {
                continue;
            }
            if let Err(err) = builder.connect(a, b) {
                warn!(%err, "social edge draw rejected");
            }
        }
        builder.build()
    }

    /// Number of persons (vertices).
    #[inline]
    pub fn population(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `person` (empty for unknown ids).
    #[inline]
    pub fn neighbors(&self, person: PersonId) -> &[PersonId] {
        self.adjacency.get(person.index()).map_or(&[], Vec::as_slice)
    }

    #[inline]
    pub fn degree(&self, person: PersonId) -> usize {
        self.neighbors(person).len()
    }

    /// `true` if an edge joins `a` and `b`.  O(degree of `a`).
    #[inline]
    pub fn are_connected(&self, a: PersonId, b: PersonId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Every edge once, as `(lower, higher)` id pairs in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (PersonId, PersonId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, list)| {
            let a = PersonId(i as u32);
            list.iter().filter(move |&&b| a < b).map(move |&b| (a, b))
        })
    }
}

// ── SocialGraphBuilder ────────────────────────────────────────────────────────

/// Incremental construction of a [`SocialGraph`].
pub struct SocialGraphBuilder {
    graph: SocialGraph,
}

impl SocialGraphBuilder {
    pub fn new(population: usize) -> Self {
        Self { graph: SocialGraph::empty(population) }
    }

    /// Add the undirected edge `a – b`.
    ///
    /// Returns `Ok(true)` if the edge was new, `Ok(false)` if it already
    /// existed.
    ///
    /// # Errors
    ///
    /// [`SwarmError::PersonNotFound`] for out-of-range ids and
    /// [`SwarmError::Config`] for a self-pair.
    pub fn connect(&mut self, a: PersonId, b: PersonId) -> SwarmResult<bool> {
        let n = self.graph.population();
        for id in [a, b] {
            if id.index() >= n {
                return Err(SwarmError::PersonNotFound(id));
            }
        }
        if a == b {
            return Err(SwarmError::Config(format!("{a} cannot be connected to itself")));
        }
        if self.graph.are_connected(a, b) {
            return Ok(false);
        }
        self.graph.adjacency[a.index()].push(b);
        self.graph.adjacency[b.index()].push(a);
        self.graph.edge_count += 1;
        Ok(true)
    }

    pub fn build(self) -> SocialGraph {
        self.graph
    }
}
