//! Betweenness reduction (spec.md §4.D).
//!
//! Grounded on `examples/original_source/src/fineman/betweenness_reduction.py`:
//! sample a pivot set `T`, build an auxiliary graph `H` out of bounded-hop
//! distances to and from each pivot, run a super-source BFD over `H` to
//! recover a price function. Pivot sampling follows `habedi-graphina`'s
//! `StdRng::seed_from_u64` + `rand::seq` idiom rather than the Python
//! source's wall-clock reseeding (spec.md §9's redesign: seedable, testable
//! randomness).

use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::bfd::{beta_hop_sssp, beta_hop_stsp, super_source_bfd};
use crate::cancel::CancellationToken;
use crate::error::FinemanError;
use crate::weight::Weight;

/// Parameters controlling the size and cost of the betweenness reduction.
#[derive(Debug, Clone, Copy)]
pub struct BetweennessParams {
    /// Target pivot-set size multiplier.
    pub tau: usize,
    /// Hop bound used for every pivot's `beta_hop_sssp`/`beta_hop_stsp` scan.
    pub beta: usize,
    /// Oversampling constant (`c * tau * ceil(log n)` pivots are drawn).
    pub c: f64,
}

impl BetweennessParams {
    pub fn validate(&self, vertex_count: usize) -> Result<(), FinemanError> {
        if self.beta < 1 {
            return Err(FinemanError::InvalidParameter("beta must be >= 1".into()));
        }
        if self.tau < 1 || self.tau > vertex_count {
            return Err(FinemanError::InvalidParameter(
                "tau must be in 1..=|V|".into(),
            ));
        }
        if self.c <= 1.0 {
            return Err(FinemanError::InvalidParameter("c must be > 1".into()));
        }
        Ok(())
    }
}

/// Draws `ceil(c * tau * ln(n))` distinct pivots (capped at `n`) uniformly
/// at random from the graph's vertices.
pub fn sample_pivots(
    vertex_count: usize,
    params: &BetweennessParams,
    rng: &mut StdRng,
) -> Vec<NodeIndex> {
    let n = vertex_count.max(1);
    let target = ((params.c * params.tau as f64 * (n as f64).ln().max(1.0)).ceil() as usize)
        .clamp(1, n);
    let mut all: Vec<NodeIndex> = (0..vertex_count).map(NodeIndex::new).collect();
    all.shuffle(rng);
    all.truncate(target);
    all
}

/// Builds the auxiliary graph `H`: one vertex per pivot plus one per
/// original vertex, with a `pivot -> v` edge carrying the pivot's
/// `beta_hop_sssp` out-distance to `v`, and a `v -> pivot` edge carrying
/// the pivot's `beta_hop_stsp` in-distance from `v` (spec.md §9's
/// resolution of the ambiguous `distances[t][2][v]` indexing in the
/// Python source: that second table is the in-distance, not a second
/// out-distance).
///
/// `H`'s vertex indices are `0..pivots.len()` for the pivot copies
/// followed by `pivots.len()..pivots.len()+vertex_count` for the original
/// vertices, so a price function recovered over `H` can be read back onto
/// `G` by slicing off the tail.
pub fn construct_h<W: Weight>(
    g: &DiGraph<(), W>,
    pivots: &[NodeIndex],
    beta: usize,
    cancel: Option<&CancellationToken>,
) -> Result<(DiGraph<(), W>, usize), FinemanError> {
    let vertex_count = g.node_count();
    let mut h = DiGraph::<(), W>::with_capacity(
        pivots.len() + vertex_count,
        2 * pivots.len() * vertex_count,
    );
    for _ in 0..pivots.len() {
        h.add_node(());
    }
    let offset = pivots.len();
    for _ in 0..vertex_count {
        h.add_node(());
    }

    for (pi, &pivot) in pivots.iter().enumerate() {
        let out_dist = beta_hop_sssp(g, pivot, beta, cancel)?;
        let in_dist = beta_hop_stsp(g, pivot, beta, cancel)?;
        let pivot_h = NodeIndex::new(pi);
        for v in g.node_indices() {
            let v_h = NodeIndex::new(offset + v.index());
            // Every pivot gets an edge to and from every vertex
            // unconditionally (spec.md §3, §8 item 5), even when the
            // underlying β-hop scan left it at `Weight::infinite()`.
            h.add_edge(pivot_h, v_h, out_dist[v.index()]);
            h.add_edge(v_h, pivot_h, in_dist[v.index()]);
        }
    }

    Ok((h, offset))
}

/// Runs the full betweenness reduction, returning a price function over
/// `g`'s original vertices.
pub fn betweenness_reduction<W: Weight>(
    g: &DiGraph<(), W>,
    params: &BetweennessParams,
    rng: &mut StdRng,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<W>, FinemanError> {
    params.validate(g.node_count())?;
    let pivots = sample_pivots(g.node_count(), params, rng);
    #[cfg(feature = "std")]
    log::trace!(
        "betweenness reduction: sampled {} pivots out of {} vertices",
        pivots.len(),
        g.node_count()
    );
    let (h, offset) = construct_h(g, &pivots, params.beta, cancel)?;
    let phi_h = super_source_bfd(&h, 2 * pivots.len().max(1), true, cancel)?;
    Ok(phi_h[offset..].to_vec())
}
