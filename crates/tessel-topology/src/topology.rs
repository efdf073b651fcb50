//! The `Topology` trait and graph population.

use std::fmt;
use tessel_core::{EdgeBehavior, NodeId};
use tessel_graph::InteractionGraph;
use tracing::debug;

/// A validated lattice geometry that can populate an interaction graph.
///
/// Implementations are cheap value types holding only dimensions and an
/// [`EdgeBehavior`]; all validation happens in their constructors, so
/// [`build`](Self::build) cannot fail.
///
/// The trait is object safe apart from `build`; use [`populate`] with a
/// `&dyn Topology`.
pub trait Topology: fmt::Debug {
    /// Short lowercase name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Number of nodes. Ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Boundary behavior of this lattice.
    fn edge_behavior(&self) -> EdgeBehavior;

    /// Call `emit` for every interaction of the lattice.
    ///
    /// Each interaction is emitted at least once. Small wrapped lattices
    /// may emit a pair twice (for example both wrap directions of a
    /// two-wide torus); the graph collapses repeats. A pair with equal
    /// endpoints is never emitted.
    fn for_each_interaction(&self, emit: &mut dyn FnMut(NodeId, NodeId));

    /// Allocate and populate a fresh graph.
    fn build<NM, EM>(&self) -> InteractionGraph<NodeId, NM, EM>
    where
        Self: Sized,
    {
        populate(self)
    }
}

/// Populate a fresh graph from any topology.
///
/// Nodes are inserted first, in id order, so isolated nodes (a
/// single-cell lattice) exist and iteration order matches id order.
pub fn populate<NM, EM>(topology: &dyn Topology) -> InteractionGraph<NodeId, NM, EM> {
    let node_count = topology.node_count();
    let mut graph = InteractionGraph::with_capacity(node_count);
    for i in 0..node_count {
        graph.ensure_node(NodeId(i as u32));
    }
    topology.for_each_interaction(&mut |a, b| {
        debug_assert_ne!(a, b, "{} emitted a self-loop", topology.name());
        graph.add_interaction(a, b, None);
    });
    debug!(
        topology = ?topology,
        nodes = graph.node_count(),
        interactions = graph.interaction_count(),
        "topology generated"
    );
    graph
}
