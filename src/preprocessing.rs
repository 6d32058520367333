//! Graph preprocessing (spec.md §4.C).
//!
//! Grounded on `examples/original_source/src/fineman/preprocessing.py`'s
//! `ensure_neg_vertices_has_degree_of_one` / `ensure_max_degree` /
//! `preproces_graph`, reimplemented over `petgraph::graph::DiGraph<(), W>`
//! instead of a `dict[int, set[tuple[int, int]]]`, and returning a
//! [`Preprocessed`] value that remembers how many of its vertices are
//! original so a caller can project distances back onto them (spec.md §9's
//! redesign: "return a new graph plus an auxiliary-vertex projection map").

use std::collections::VecDeque;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::fineman::Distance;
use crate::graph::transpose;
use crate::weight::Weight;

/// A preprocessed graph plus the boundary between original and
/// auxiliary vertices.
#[derive(Debug, Clone)]
pub struct Preprocessed<W: Weight> {
    pub graph: DiGraph<(), W>,
    /// Vertices `0..original_count` are the caller's; everything from
    /// `original_count` on was introduced by preprocessing.
    pub original_count: usize,
}

impl<W: Weight> Preprocessed<W> {
    /// Truncates a full (original + auxiliary) distance vector back down
    /// to the caller's original vertex set.
    pub fn project(&self, distances: &[Distance<W>]) -> Vec<Distance<W>> {
        distances[..self.original_count].to_vec()
    }
}

/// For every vertex with at least one outgoing negative edge and
/// out-degree greater than one, introduces a fresh vertex carrying all of
/// its former outgoing edges (shifted to be non-negative by the minimum
/// of those edges) and replaces the original vertex's edge set with a
/// single non-negative edge into it.
///
/// `w(v, v') = m` (the minimum outgoing weight, which is negative) and
/// `w(v', x) = w(v, x) - m` for every former outgoing edge `(x, w(v,x))`
/// — non-negative because `m` is the minimum.
pub fn ensure_negative_heads_degree_one<W: Weight>(g: &DiGraph<(), W>) -> DiGraph<(), W> {
    let mut out = g.clone();

    let negative_heads: Vec<NodeIndex> = out
        .node_indices()
        .filter(|&v| out.edges(v).any(|e| *e.weight() < W::zero()))
        .collect();

    for v in negative_heads {
        let old_edges: Vec<(NodeIndex, W)> = out.edges(v).map(|e| (e.target(), *e.weight())).collect();
        if old_edges.len() <= 1 {
            continue;
        }

        let most_neg = old_edges
            .iter()
            .map(|(_, w)| *w)
            .fold(old_edges[0].1, |acc, w| if w < acc { w } else { acc });

        let to_remove: Vec<_> = out.edges(v).map(|e| e.id()).collect();
        for e in to_remove {
            out.remove_edge(e);
        }

        let fresh = out.add_node(());
        out.add_edge(v, fresh, most_neg);
        for (x, w) in old_edges {
            out.add_edge(fresh, x, w - most_neg);
        }
    }

    out
}

/// Splits every vertex whose out-degree exceeds `threshold` into a small
/// binary tree of fresh vertices joined by zero-weight edges, until no
/// vertex (original or freshly introduced) violates the bound.
///
/// The new vertices are linked only by zero-weight edges forming a tree
/// rooted at the split vertex, so this can never introduce a cycle of any
/// sign (spec.md §9's third open question).
pub fn ensure_max_out_degree<W: Weight>(g: &DiGraph<(), W>, threshold: usize) -> DiGraph<(), W> {
    let mut out = g.clone();
    let mut queue: VecDeque<NodeIndex> = out
        .node_indices()
        .filter(|&v| out.edges(v).count() > threshold)
        .collect();

    while let Some(v) = queue.pop_front() {
        let outgoing: Vec<(NodeIndex, W)> = out.edges(v).map(|e| (e.target(), *e.weight())).collect();
        if outgoing.len() <= threshold {
            continue;
        }

        let to_remove: Vec<_> = out.edges(v).map(|e| e.id()).collect();
        for e in to_remove {
            out.remove_edge(e);
        }

        let mid = outgoing.len().div_ceil(2);
        let (first_half, second_half) = outgoing.split_at(mid);

        let child1 = out.add_node(());
        let child2 = out.add_node(());
        out.add_edge(v, child1, W::zero());
        out.add_edge(v, child2, W::zero());
        for &(x, w) in first_half {
            out.add_edge(child1, x, w);
        }
        for &(x, w) in second_half {
            out.add_edge(child2, x, w);
        }

        if first_half.len() > threshold {
            queue.push_back(child1);
        }
        if second_half.len() > threshold {
            queue.push_back(child2);
        }
    }

    out
}

/// Applies [`ensure_max_out_degree`] to `G^T` and transposes back, bounding
/// in-degree the same way out-degree is bounded.
pub fn ensure_max_in_degree<W: Weight>(g: &DiGraph<(), W>, threshold: usize) -> DiGraph<(), W> {
    let gt = transpose(g);
    let gt_bounded = ensure_max_out_degree(&gt, threshold);
    transpose(&gt_bounded)
}

/// Runs the full preprocessing pipeline: degree-one negative heads, then
/// bounded out-degree, then (via transpose) bounded in-degree.
pub fn preprocess<W: Weight>(g: &DiGraph<(), W>, threshold: usize) -> Preprocessed<W> {
    let original_count = g.node_count();
    let step1 = ensure_negative_heads_degree_one(g);
    let step2 = ensure_max_out_degree(&step1, threshold);
    let step3 = ensure_max_in_degree(&step2, threshold);
    Preprocessed {
        graph: step3,
        original_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_head_with_single_edge_is_untouched() {
        let g = DiGraph::<(), i64>::from_edges([(0, 1, -5)]);
        let out = ensure_negative_heads_degree_one(&g);
        assert_eq!(out.node_count(), 2);
        assert_eq!(out.edge_count(), 1);
    }

    #[test]
    fn negative_head_with_multiple_edges_gets_split() {
        let mut g = DiGraph::<(), i64>::new();
        let v = g.add_node(());
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(v, a, -2);
        g.add_edge(v, b, 3);

        let out = ensure_negative_heads_degree_one(&g);
        assert_eq!(out.node_count(), 4); // v, a, b, plus one fresh vertex
        let v_edges: Vec<_> = out.edges(v).map(|e| *e.weight()).collect();
        assert_eq!(v_edges, vec![-2]);
        let fresh = out.edges(v).next().unwrap().target();
        let mut fresh_edges: Vec<_> = out.edges(fresh).map(|e| *e.weight()).collect();
        fresh_edges.sort();
        // shifted by the minimum (-2): (a, -2-(-2)=0), (b, 3-(-2)=5)
        assert_eq!(fresh_edges, vec![0, 5]);
    }

    #[test]
    fn max_out_degree_is_enforced() {
        let mut g = DiGraph::<(), i64>::new();
        let v = g.add_node(());
        let targets: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
        for &t in &targets {
            g.add_edge(v, t, 1);
        }
        let out = ensure_max_out_degree(&g, 2);
        for node in out.node_indices() {
            assert!(out.edges(node).count() <= 2);
        }
    }

    #[test]
    fn max_in_degree_is_enforced() {
        let mut g = DiGraph::<(), i64>::new();
        let v = g.add_node(());
        let sources: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
        for &s in &sources {
            g.add_edge(s, v, 1);
        }
        let out = ensure_max_in_degree(&g, 2);
        for node in out.node_indices() {
            let indeg = out
                .edges_directed(node, petgraph::Direction::Incoming)
                .count();
            assert!(indeg <= 2);
        }
    }

    #[test]
    fn preprocess_keeps_original_vertices_as_a_prefix() {
        let mut g = DiGraph::<(), i64>::new();
        let v = g.add_node(());
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(v, a, -2);
        g.add_edge(v, b, 3);

        let pre = preprocess(&g, 10);
        assert_eq!(pre.original_count, 3);
        assert!(pre.graph.node_count() >= 3);
    }
}
