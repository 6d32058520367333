//! Graph primitives (spec.md §4.A).
//!
//! The crate represents `G` as a `petgraph::graph::DiGraph<(), W>` with
//! contiguous `NodeIndex`es. Every function here takes `&DiGraph<(), W>`
//! and returns an owned, fresh value — nothing in this module mutates the
//! caller's graph, per spec.md §4.A's "no mutation of the caller's graph
//! outside the entry point".

use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;

use crate::weight::Weight;

/// The set of `(source, target)` pairs whose edge weight is negative,
/// kept consistent with a `DiGraph<(), W>` across reweighting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegativeIndex(pub HashSet<(NodeIndex, NodeIndex)>);

impl NegativeIndex {
    /// Scans every edge of `g` and records the negative ones.
    pub fn from_graph<W: Weight>(g: &DiGraph<(), W>) -> Self {
        let mut set = HashSet::new();
        for edge in g.edge_references() {
            if *edge.weight() < W::zero() {
                set.insert((edge.source(), edge.target()));
            }
        }
        NegativeIndex(set)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.0.contains(&(u, v))
    }

    /// Distinct vertices that are the head of at least one negative edge.
    ///
    /// `spec.md` §4.C calls these out specifically (every vertex with an
    /// outgoing negative edge must end up with out-degree one); §4.D/E/F
    /// call the same set "the residual set of negative-edge heads".
    pub fn heads(&self) -> HashSet<NodeIndex> {
        self.0.iter().map(|(u, _)| *u).collect()
    }
}

/// Outgoing `(target, weight)` pairs of `v`.
pub fn successors<W: Weight>(g: &DiGraph<(), W>, v: NodeIndex) -> Vec<(NodeIndex, W)> {
    g.edges(v).map(|e| (e.target(), *e.weight())).collect()
}

/// Incoming `(source, weight)` pairs of `v`.
pub fn predecessors<W: Weight>(g: &DiGraph<(), W>, v: NodeIndex) -> Vec<(NodeIndex, W)> {
    g.edges_directed(v, Direction::Incoming)
        .map(|e| (e.source(), *e.weight()))
        .collect()
}

/// The weight of the edge `u -> v`, if any.
pub fn weight<W: Weight>(g: &DiGraph<(), W>, u: NodeIndex, v: NodeIndex) -> Option<W> {
    g.find_edge(u, v).and_then(|e| g.edge_weight(e)).copied()
}

/// Builds `G^T`: same vertex set, every edge reversed, weights unchanged.
pub fn transpose<W: Weight>(g: &DiGraph<(), W>) -> DiGraph<(), W> {
    let mut t = DiGraph::<(), W>::with_capacity(g.node_count(), g.edge_count());
    for _ in g.node_indices() {
        t.add_node(());
    }
    for edge in g.edge_references() {
        t.add_edge(edge.target(), edge.source(), *edge.weight());
    }
    t
}

/// Reweights `G` by a price function `phi`, indexed by `NodeIndex::index()`.
///
/// `w'(u, v) = w(u, v) + phi(u) - phi(v)`. Returns the fresh graph together
/// with its recomputed negative-edge index.
pub fn reweight<W: Weight>(g: &DiGraph<(), W>, phi: &[W]) -> (DiGraph<(), W>, NegativeIndex) {
    let mut out = DiGraph::<(), W>::with_capacity(g.node_count(), g.edge_count());
    for _ in g.node_indices() {
        out.add_node(());
    }
    let mut negatives = HashSet::new();
    for edge in g.edge_references() {
        let u = edge.source();
        let v = edge.target();
        let w_prime = *edge.weight() + phi[u.index()] - phi[v.index()];
        out.add_edge(u, v, w_prime);
        if w_prime < W::zero() {
            negatives.insert((u, v));
        }
    }
    (out, NegativeIndex(negatives))
}
