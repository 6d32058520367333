//! Howard's algorithm for negative-cycle detection.
//!
//! The edge-weight bound is generalized from `Add<Output = Domain> +
//! PartialOrd + Copy` to this crate's [`crate::weight::Weight`], and
//! `relax` composes distances with
//! [`crate::weight::Weight::saturating_add`] instead of raw `+` so that
//! callers seeding most vertices at `Weight::infinite()` (as
//! `bfd::subset_bfd` does) don't manufacture spurious improvements out of
//! an unreached vertex.

use petgraph::graph::{EdgeReference, NodeIndex};
use petgraph::prelude::*;
use petgraph::visit::EdgeRef;
use petgraph::visit::IntoNodeIdentifiers;
use std::collections::HashMap;

use crate::weight::Weight;

/// Finds negative cycles in a directed graph via Howard's algorithm.
#[derive(Debug)]
pub struct NegCycleFinder<'a, Value, Domain> {
    pub digraph: &'a DiGraph<Value, Domain>,
    pub pred: HashMap<NodeIndex, (NodeIndex, EdgeReference<'a, Domain>)>,
}

impl<'a, Value, Domain> NegCycleFinder<'a, Value, Domain>
where
    Domain: Weight,
{
    /// Creates a new finder with an empty predecessor map.
    pub fn new(digraph: &'a DiGraph<Value, Domain>) -> Self {
        NegCycleFinder {
            digraph,
            pred: HashMap::new(),
        }
    }

    /// Returns a node known to lie on a cycle in the predecessor graph
    /// built up so far by [`NegCycleFinder::relax`], if one exists.
    pub fn find_cycle(&self) -> Option<NodeIndex> {
        let mut visited = HashMap::new();
        for vtx in self.digraph.node_identifiers() {
            if visited.contains_key(&vtx) {
                continue;
            }
            let mut utx = vtx;
            while !visited.contains_key(&utx) {
                visited.insert(utx, vtx);
                if !self.pred.contains_key(&utx) {
                    break;
                }
                let result = *self.pred.get(&utx).unwrap();
                utx = result.0;
                if visited.contains_key(&utx) {
                    if visited[&utx] == vtx {
                        return Some(utx);
                    }
                    break;
                }
            }
        }
        None
    }

    /// Relaxes every edge once. Returns whether any distance improved.
    pub fn relax<Callable>(&mut self, dist: &mut [Domain], get_weight: Callable) -> bool
    where
        Callable: Fn(EdgeReference<Domain>) -> Domain,
    {
        let mut changed = false;
        for utx in self.digraph.node_identifiers() {
            for edge in self.digraph.edges(utx) {
                let vtx = edge.target();
                let weight = get_weight(edge);
                let distance = dist[utx.index()].saturating_add(weight);
                if dist[vtx.index()] > distance {
                    dist[vtx.index()] = distance;
                    self.pred.insert(vtx, (utx, edge));
                    changed = true;
                }
            }
        }
        changed
    }

    /// Walks the predecessor chain from `handle` back to itself, returning
    /// the edges of the cycle in traversal order.
    pub fn cycle_list(&self, handle: NodeIndex) -> Vec<EdgeReference<'a, Domain>> {
        let mut vtx = handle;
        let mut cycle = Vec::new();
        loop {
            let (utx, edge) = self.pred[&vtx];
            cycle.push(edge);
            vtx = utx;
            if vtx == handle {
                break;
            }
        }
        cycle
    }

    /// Relaxes to a fixpoint, returning the first negative cycle found (as
    /// its edges) or `None` if the graph has none.
    pub fn howard<F>(
        &mut self,
        dist: &mut [Domain],
        get_weight: F,
    ) -> Option<Vec<EdgeReference<'a, Domain>>>
    where
        F: Fn(EdgeReference<Domain>) -> Domain,
    {
        self.pred.clear();
        while self.relax(dist, &get_weight) {
            let v_opt = self.find_cycle();
            if let Some(vtx) = v_opt {
                return Some(self.cycle_list(vtx));
            }
        }
        None
    }
}
