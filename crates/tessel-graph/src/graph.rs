//! The undirected interaction graph.

use crate::key::InteractionKey;
use indexmap::{set, IndexMap, IndexSet};
use std::fmt;
use std::hash::Hash;
use tessel_core::GraphError;
use tracing::trace;

/// An undirected graph of interactions between nodes, with optional
/// metadata on nodes (`NM`) and on interactions (`EM`).
///
/// Node ids are opaque: any `Clone + Eq + Hash + Ord` value works. The
/// topology generators produce graphs keyed by
/// [`NodeId`](tessel_core::NodeId).
///
/// # Implicit node creation
///
/// [`add_interaction`](Self::add_interaction) creates missing endpoints
/// instead of failing. Every other operation that names a node requires
/// it to exist already and returns [`GraphError::UnknownNode`] otherwise.
///
/// # Ordering
///
/// Nodes and neighbour sets iterate in insertion order. Removing an
/// element moves the last element of that collection into its slot, so
/// iteration order is a deterministic function of the operation history.
///
/// # Examples
///
/// ```
/// use tessel_graph::InteractionGraph;
///
/// let mut g: InteractionGraph<u32, &str, f32> = InteractionGraph::new();
/// g.add_node(0, Some("source")).unwrap();
/// g.add_interaction(0, 1, Some(0.5));
///
/// assert!(g.contains_interaction(&1, &0));
/// assert_eq!(g.interaction_metadata(&1, &0), Some(&0.5));
/// assert_eq!(g.node_metadata(&0), Some(&"source"));
/// assert_eq!(g.node_metadata(&1), None);
/// ```
#[derive(Clone, Debug)]
pub struct InteractionGraph<N, NM = (), EM = ()> {
    adjacency: IndexMap<N, IndexSet<N>>,
    node_metadata: IndexMap<N, NM>,
    interaction_metadata: IndexMap<InteractionKey<N>, EM>,
    interaction_count: usize,
}

impl<N, NM, EM> Default for InteractionGraph<N, NM, EM> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
            node_metadata: IndexMap::new(),
            interaction_metadata: IndexMap::new(),
            interaction_count: 0,
        }
    }
}

impl<N, NM, EM> InteractionGraph<N, NM, EM>
where
    N: Clone + Eq + Hash + Ord,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(nodes),
            node_metadata: IndexMap::new(),
            interaction_metadata: IndexMap::new(),
            interaction_count: 0,
        }
    }

    /// Build a graph from an owned adjacency listing.
    ///
    /// Every listed node is created, and every listed pair is inserted in
    /// both directions, so an asymmetric listing is repaired rather than
    /// trusted.
    ///
    /// ```
    /// use tessel_graph::InteractionGraph;
    ///
    /// // 1 lists 0 but 0 does not list 1.
    /// let g: InteractionGraph<u8> =
    ///     InteractionGraph::from_adjacency([(0, vec![]), (1, vec![0])]);
    /// assert!(g.contains_interaction(&0, &1));
    /// assert_eq!(g.interaction_count(), 1);
    /// ```
    pub fn from_adjacency<I, J>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (node, neighbours) in adjacency {
            graph.ensure_node(node.clone());
            for other in neighbours {
                graph.link(node.clone(), other);
            }
        }
        graph
    }

    // ── Nodes ───────────────────────────────────────────────────

    /// Add a node with no neighbours.
    ///
    /// Returns [`GraphError::DuplicateNode`] if `id` already exists; the
    /// existing node and its metadata are left untouched.
    pub fn add_node(&mut self, id: N, metadata: Option<NM>) -> Result<(), GraphError<N>> {
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node: id });
        }
        if let Some(meta) = metadata {
            self.node_metadata.insert(id.clone(), meta);
        }
        self.adjacency.insert(id, IndexSet::new());
        Ok(())
    }

    /// Create `id` if it does not exist yet. Returns `true` if it was created.
    pub fn ensure_node(&mut self, id: N) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, IndexSet::new());
        true
    }

    /// Attach metadata to an existing node, returning the previous value.
    pub fn set_node_metadata(
        &mut self,
        id: &N,
        metadata: NM,
    ) -> Result<Option<NM>, GraphError<N>> {
        if !self.adjacency.contains_key(id) {
            return Err(GraphError::UnknownNode { node: id.clone() });
        }
        Ok(self.node_metadata.insert(id.clone(), metadata))
    }

    /// Remove a node together with every interaction touching it.
    ///
    /// Cascades to the reciprocal neighbour entries, to all interaction
    /// metadata naming `id` (including metadata set on pairs that were
    /// never connected), and to the node's own metadata, which is
    /// returned.
    pub fn remove_node(&mut self, id: &N) -> Result<Option<NM>, GraphError<N>> {
        let neighbours = self
            .adjacency
            .swap_remove(id)
            .ok_or_else(|| GraphError::UnknownNode { node: id.clone() })?;

        for other in &neighbours {
            if other == id {
                continue;
            }
            if let Some(set) = self.adjacency.get_mut(other) {
                set.swap_remove(id);
            }
        }
        self.interaction_count -= neighbours.len();

        let metadata_before = self.interaction_metadata.len();
        if metadata_before > 0 {
            self.interaction_metadata.retain(|key, _| !key.touches(id));
        }
        trace!(
            interactions = neighbours.len(),
            metadata = metadata_before - self.interaction_metadata.len(),
            "node removed"
        );

        Ok(self.node_metadata.swap_remove(id))
    }

    // ── Interactions ────────────────────────────────────────────

    /// Connect `a` and `b`, creating either endpoint if it is missing.
    ///
    /// Adding an interaction that already exists leaves the adjacency
    /// unchanged. Supplied metadata always overwrites, in both
    /// orientations. Returns `true` if the interaction is new.
    ///
    /// `a == b` is accepted and stored as a self-loop, but it is a caller
    /// error in every simulation this graph is built for; generators
    /// never produce one.
    pub fn add_interaction(&mut self, a: N, b: N, metadata: Option<EM>) -> bool {
        if let Some(meta) = metadata {
            self.interaction_metadata
                .insert(InteractionKey::new(a.clone(), b.clone()), meta);
        }
        self.ensure_node(a.clone());
        self.ensure_node(b.clone());
        self.link(a, b)
    }

    /// Attach metadata to the pair `{a, b}`, returning the previous value.
    ///
    /// Both endpoints must exist. The interaction itself does not have to:
    /// metadata may be staged on a pair before it is connected. Such
    /// metadata is still removed when either endpoint is removed.
    pub fn set_interaction_metadata(
        &mut self,
        a: &N,
        b: &N,
        metadata: EM,
    ) -> Result<Option<EM>, GraphError<N>> {
        self.require_node(a)?;
        self.require_node(b)?;
        Ok(self
            .interaction_metadata
            .insert(InteractionKey::new(a.clone(), b.clone()), metadata))
    }

    /// Disconnect `a` and `b`, returning the interaction's metadata.
    ///
    /// Fails with [`GraphError::UnknownNode`] if either endpoint is
    /// missing and with [`GraphError::NoSuchInteraction`] if they are not
    /// connected. Nothing is modified on failure.
    pub fn remove_interaction(&mut self, a: &N, b: &N) -> Result<Option<EM>, GraphError<N>> {
        self.require_node(a)?;
        self.require_node(b)?;
        if !self.contains_interaction(a, b) {
            return Err(GraphError::NoSuchInteraction {
                a: a.clone(),
                b: b.clone(),
            });
        }

        if let Some(set) = self.adjacency.get_mut(a) {
            set.swap_remove(b);
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.swap_remove(a);
        }
        self.interaction_count -= 1;
        trace!(remaining = self.interaction_count, "interaction removed");

        Ok(self
            .interaction_metadata
            .swap_remove(&InteractionKey::new(a.clone(), b.clone())))
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Neighbours of `id`. Unknown ids have no neighbours.
    pub fn neighbors(&self, id: &N) -> Neighbors<'_, N> {
        Neighbors {
            inner: self.adjacency.get(id).map(|set| set.iter()),
        }
    }

    /// Metadata attached to `id`, if any.
    pub fn node_metadata(&self, id: &N) -> Option<&NM> {
        self.node_metadata.get(id)
    }

    /// Metadata attached to the pair `{a, b}`, if any.
    pub fn interaction_metadata(&self, a: &N, b: &N) -> Option<&EM> {
        if self.interaction_metadata.is_empty() {
            return None;
        }
        self.interaction_metadata
            .get(&InteractionKey::new(a.clone(), b.clone()))
    }

    /// `true` if `id` is a node of this graph.
    pub fn contains_node(&self, id: &N) -> bool {
        self.adjacency.contains_key(id)
    }

    /// `true` if `a` and `b` are connected.
    pub fn contains_interaction(&self, a: &N, b: &N) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(b))
    }

    /// Number of neighbours of `id` (0 for unknown ids).
    pub fn degree(&self, id: &N) -> usize {
        self.adjacency.get(id).map_or(0, |set| set.len())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of interactions, each counted once.
    pub fn interaction_count(&self) -> usize {
        self.interaction_count
    }

    /// `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All node ids in iteration order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Every interaction exactly once, as `(a, b)` with `a <= b`.
    ///
    /// This is the flattened list a simulation loop samples from when it
    /// picks an interaction instead of a cell.
    pub fn interactions(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.adjacency.iter().flat_map(|(a, neighbours)| {
            neighbours
                .iter()
                .filter(move |b| a <= *b)
                .map(move |b| (a, b))
        })
    }

    /// Keys of every stored interaction metadata entry.
    ///
    /// May include pairs that are not connected; see
    /// [`set_interaction_metadata`](Self::set_interaction_metadata).
    pub fn metadata_keys(&self) -> impl ExactSizeIterator<Item = &InteractionKey<N>> + '_ {
        self.interaction_metadata.keys()
    }

    // ── Internals ───────────────────────────────────────────────

    fn require_node(&self, id: &N) -> Result<(), GraphError<N>> {
        if self.adjacency.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { node: id.clone() })
        }
    }

    /// Insert both adjacency entries. Endpoints must already exist or be
    /// creatable; missing ones are created.
    fn link(&mut self, a: N, b: N) -> bool {
        let added = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        if added {
            self.interaction_count += 1;
        }
        added
    }
}

/// Renders one line per node: `id: (id, n1) (id, n2) ...`.
///
/// Intended for logs and test failure output, not as a stable format.
impl<N: fmt::Display, NM, EM> fmt::Display for InteractionGraph<N, NM, EM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (node, neighbours)) in self.adjacency.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{node}:")?;
            for other in neighbours {
                write!(f, " ({node}, {other})")?;
            }
        }
        Ok(())
    }
}

/// Iterator over the neighbours of a node, returned by
/// [`InteractionGraph::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a, N> {
    inner: Option<set::Iter<'a, N>>,
}

impl<'a, N> Iterator for Neighbors<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<&'a N> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<N> ExactSizeIterator for Neighbors<'_, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    type Graph = InteractionGraph<u32, &'static str, &'static str>;

    fn sorted_neighbours(g: &Graph, id: u32) -> Vec<u32> {
        let mut v: Vec<u32> = g.neighbors(&id).copied().collect();
        v.sort_unstable();
        v
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_graphs_do_not_share_state() {
        let mut a = Graph::new();
        let b = Graph::new();
        a.add_interaction(0, 1, Some("x"));
        assert!(b.is_empty());
        assert_eq!(b.interaction_metadata(&0, &1), None);
    }

    #[test]
    fn from_adjacency_repairs_missing_reciprocal() {
        let g: InteractionGraph<u32> =
            InteractionGraph::from_adjacency([(0, vec![1, 2]), (1, vec![]), (3, vec![])]);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.interaction_count(), 2);
        assert!(g.contains_interaction(&1, &0));
        assert!(g.contains_interaction(&2, &0));
        assert_eq!(g.degree(&3), 0);
    }

    // ── Nodes ───────────────────────────────────────────────────

    #[test]
    fn add_node_with_and_without_metadata() {
        let mut g = Graph::new();
        g.add_node(0, Some("a")).unwrap();
        g.add_node(1, None).unwrap();
        assert_eq!(g.node_metadata(&0), Some(&"a"));
        assert_eq!(g.node_metadata(&1), None);
        assert_eq!(g.degree(&0), 0);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn add_node_duplicate_is_rejected_without_side_effects() {
        let mut g = Graph::new();
        g.add_node(7, Some("first")).unwrap();
        let err = g.add_node(7, Some("second")).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode { node: 7 });
        assert_eq!(g.node_metadata(&7), Some(&"first"));
    }

    #[test]
    fn set_node_metadata_requires_node() {
        let mut g = Graph::new();
        assert_eq!(
            g.set_node_metadata(&3, "x"),
            Err(GraphError::UnknownNode { node: 3 })
        );
        g.add_node(3, Some("old")).unwrap();
        assert_eq!(g.set_node_metadata(&3, "new"), Ok(Some("old")));
        assert_eq!(g.node_metadata(&3), Some(&"new"));
    }

    #[test]
    fn ensure_node_is_idempotent() {
        let mut g = Graph::new();
        assert!(g.ensure_node(1));
        assert!(!g.ensure_node(1));
        assert_eq!(g.node_count(), 1);
    }

    // ── Interactions ────────────────────────────────────────────

    #[test]
    fn add_interaction_creates_missing_endpoints() {
        let mut g = Graph::new();
        assert!(g.add_interaction(0, 1, None));
        assert!(g.contains_node(&0));
        assert!(g.contains_node(&1));
        assert_eq!(sorted_neighbours(&g, 0), vec![1]);
        assert_eq!(sorted_neighbours(&g, 1), vec![0]);
    }

    #[test]
    fn add_interaction_twice_is_idempotent_but_overwrites_metadata() {
        let mut g = Graph::new();
        assert!(g.add_interaction(0, 1, Some("a")));
        assert!(!g.add_interaction(1, 0, Some("b")));
        assert!(!g.add_interaction(0, 1, None));
        assert_eq!(g.interaction_count(), 1);
        assert_eq!(g.degree(&0), 1);
        assert_eq!(g.interaction_metadata(&0, &1), Some(&"b"));
        assert_eq!(g.interaction_metadata(&1, &0), Some(&"b"));
    }

    #[test]
    fn set_interaction_metadata_requires_both_endpoints() {
        let mut g = Graph::new();
        g.add_node(0, None).unwrap();
        assert_eq!(
            g.set_interaction_metadata(&0, &1, "x"),
            Err(GraphError::UnknownNode { node: 1 })
        );
        assert_eq!(
            g.set_interaction_metadata(&2, &0, "x"),
            Err(GraphError::UnknownNode { node: 2 })
        );
    }

    #[test]
    fn set_interaction_metadata_on_unconnected_pair_is_allowed() {
        let mut g = Graph::new();
        g.add_node(0, None).unwrap();
        g.add_node(1, None).unwrap();
        assert_eq!(g.set_interaction_metadata(&1, &0, "staged"), Ok(None));
        assert!(!g.contains_interaction(&0, &1));
        assert_eq!(g.interaction_metadata(&0, &1), Some(&"staged"));
    }

    #[test]
    fn remove_interaction_clears_both_sides_and_metadata() {
        let mut g = Graph::new();
        g.add_interaction(0, 1, Some("m"));
        g.add_interaction(1, 2, None);
        assert_eq!(g.remove_interaction(&1, &0), Ok(Some("m")));
        assert!(!g.contains_interaction(&0, &1));
        assert!(!g.contains_interaction(&1, &0));
        assert_eq!(g.interaction_metadata(&0, &1), None);
        assert_eq!(g.interaction_count(), 1);
        // Endpoints survive.
        assert!(g.contains_node(&0));
    }

    #[test]
    fn remove_interaction_errors() {
        let mut g = Graph::new();
        g.add_node(0, None).unwrap();
        g.add_node(1, None).unwrap();
        assert_eq!(
            g.remove_interaction(&0, &9),
            Err(GraphError::UnknownNode { node: 9 })
        );
        assert_eq!(
            g.remove_interaction(&0, &1),
            Err(GraphError::NoSuchInteraction { a: 0, b: 1 })
        );
    }

    // ── Node removal cascade ────────────────────────────────────

    #[test]
    fn remove_node_cascades() {
        let mut g = Graph::new();
        g.add_node(0, Some("center")).unwrap();
        g.add_interaction(0, 1, Some("e01"));
        g.add_interaction(2, 0, Some("e02"));
        g.add_interaction(1, 2, Some("e12"));

        assert_eq!(g.remove_node(&0), Ok(Some("center")));
        assert!(!g.contains_node(&0));
        assert_eq!(sorted_neighbours(&g, 1), vec![2]);
        assert_eq!(sorted_neighbours(&g, 2), vec![1]);
        assert_eq!(g.interaction_metadata(&0, &1), None);
        assert_eq!(g.interaction_metadata(&2, &0), None);
        assert_eq!(g.interaction_metadata(&1, &2), Some(&"e12"));
        assert_eq!(g.node_metadata(&0), None);
        assert_eq!(g.interaction_count(), 1);
    }

    #[test]
    fn remove_node_purges_staged_metadata() {
        let mut g = Graph::new();
        g.add_node(0, None).unwrap();
        g.add_node(1, None).unwrap();
        g.set_interaction_metadata(&0, &1, "staged").unwrap();
        g.remove_node(&1).unwrap();
        g.add_node(1, None).unwrap();
        assert_eq!(g.interaction_metadata(&0, &1), None);
    }

    #[test]
    fn remove_unknown_node_fails() {
        let mut g = Graph::new();
        assert_eq!(g.remove_node(&4), Err(GraphError::UnknownNode { node: 4 }));
    }

    #[test]
    fn self_loop_is_counted_once_and_removed_cleanly() {
        let mut g = Graph::new();
        g.add_interaction(5, 5, None);
        g.add_interaction(5, 6, None);
        assert_eq!(g.interaction_count(), 2);
        assert_eq!(g.interactions().count(), 2);
        g.remove_node(&5).unwrap();
        assert_eq!(g.interaction_count(), 0);
        assert_eq!(g.degree(&6), 0);
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn queries_on_unknown_nodes_are_empty() {
        let g = Graph::new();
        assert_eq!(g.neighbors(&42).len(), 0);
        assert_eq!(g.neighbors(&42).next(), None);
        assert_eq!(g.node_metadata(&42), None);
        assert_eq!(g.interaction_metadata(&42, &43), None);
        assert_eq!(g.degree(&42), 0);
    }

    #[test]
    fn interactions_lists_each_pair_once() {
        let mut g = Graph::new();
        g.add_interaction(2, 1, None);
        g.add_interaction(0, 2, None);
        let mut pairs: Vec<(u32, u32)> = g.interactions().map(|(a, b)| (*a, *b)).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);
    }

    // ── Rendering ───────────────────────────────────────────────

    #[test]
    fn display_lists_nodes_in_insertion_order() {
        let mut g: InteractionGraph<u32> = InteractionGraph::new();
        g.add_interaction(0, 1, None);
        g.add_interaction(0, 2, None);
        g.add_node(3, None).unwrap();
        assert_eq!(
            g.to_string(),
            "0: (0, 1) (0, 2)\n1: (1, 0)\n2: (2, 0)\n3:"
        );
    }

    #[test]
    fn display_of_empty_graph_is_empty() {
        let g: InteractionGraph<u32> = InteractionGraph::new();
        assert_eq!(g.to_string(), "");
    }
}
