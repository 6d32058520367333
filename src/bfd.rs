//! Bounded-hop shortest-path primitives (spec.md §4.B).
//!
//! Every scan here bounds its relaxation rounds explicitly, the way a
//! textbook Bellman-Ford relaxation loop bounds itself to `|V| - 1` rounds
//! — the difference is that these take the round count (or a stopping
//! rule) as a parameter instead of hard-coding `|V| - 1`, because the
//! bounded-hop scans below are deliberately cheaper than a full
//! Bellman-Ford pass.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::cancel::CancellationToken;
use crate::error::{FinemanError, NegativeCycleWitness};
use crate::graph::transpose;
use crate::neg_cycle::NegCycleFinder;
use crate::weight::Weight;

fn check_cancelled(cancel: Option<&CancellationToken>) -> Result<(), FinemanError> {
    if cancel.map(|c| c.is_cancelled()).unwrap_or(false) {
        Err(FinemanError::Cancelled)
    } else {
        Ok(())
    }
}

/// Distance from `src` to every vertex using at most `beta` edges.
/// Unreached-within-`beta` vertices hold `Weight::infinite()`.
pub fn beta_hop_sssp<W: Weight>(
    g: &DiGraph<(), W>,
    src: NodeIndex,
    beta: usize,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<W>, FinemanError> {
    let n = g.node_count();
    let mut dist = vec![W::infinite(); n];
    dist[src.index()] = W::zero();

    for _ in 0..beta {
        check_cancelled(cancel)?;
        let mut changed = false;
        for u in g.node_indices() {
            if dist[u.index()].is_infinite() {
                continue;
            }
            for edge in g.edges(u) {
                let v = edge.target();
                let cand = dist[u.index()].saturating_add(*edge.weight());
                if cand < dist[v.index()] {
                    dist[v.index()] = cand;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    Ok(dist)
}

/// Distance from every vertex to `tgt` using at most `beta` edges;
/// symmetric to [`beta_hop_sssp`] via the transpose graph.
pub fn beta_hop_stsp<W: Weight>(
    g: &DiGraph<(), W>,
    tgt: NodeIndex,
    beta: usize,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<W>, FinemanError> {
    let gt = transpose(g);
    beta_hop_sssp(&gt, tgt, beta, cancel)
}

/// Bellman-Ford-style potential computation from a virtual source joined
/// to every vertex by zero-weight edges (equivalent to seeding every
/// vertex's distance at `Weight::zero()` and relaxing `G`'s own edges).
///
/// Runs `l` relaxation rounds; if `cycle_detect` is set, an `(l+1)`-th
/// round is used to check for a still-improving edge, and
/// [`FinemanError::NegativeCycle`] is raised with a witness extracted via
/// [`NegCycleFinder`] when one is found (spec.md §4.B, §9: "the underlying
/// BFD must expose potentials, not just a cycle flag").
pub fn super_source_bfd<W: Weight>(
    g: &DiGraph<(), W>,
    l: usize,
    cycle_detect: bool,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<W>, FinemanError> {
    let n = g.node_count();
    let mut dist = vec![W::zero(); n];
    let mut ncf = NegCycleFinder::new(g);

    for _ in 0..l {
        check_cancelled(cancel)?;
        if !ncf.relax(&mut dist, |e| *e.weight()) {
            return Ok(dist);
        }
    }

    if cycle_detect {
        check_cancelled(cancel)?;
        if ncf.relax(&mut dist, |e| *e.weight()) {
            let witness = match ncf.find_cycle() {
                Some(handle) => {
                    let cycle: Vec<usize> = ncf
                        .cycle_list(handle)
                        .iter()
                        .map(|e| e.source().index())
                        .collect();
                    NegativeCycleWitness::from_cycle(cycle)
                }
                None => NegativeCycleWitness::default(),
            };
            return Err(FinemanError::NegativeCycle(witness));
        }
    }

    Ok(dist)
}

/// Bellman-Ford-style distances seeded at zero from every vertex in
/// `sources` and `Weight::infinite()` elsewhere, bounded to
/// `min(l, |V|)` rounds. Used by the heavy/light partition and the
/// independent-set/crust routines to detect "reachable via a negative
/// path", never to raise `NegativeCycle` (spec.md §4.B/§7: only the
/// designated super-source and final scans are authorized to do that).
pub fn subset_bfd<W: Weight>(
    g: &DiGraph<(), W>,
    sources: &[NodeIndex],
    l: usize,
    return_parents: bool,
    cancel: Option<&CancellationToken>,
) -> Result<(Vec<W>, Option<Vec<Option<NodeIndex>>>), FinemanError> {
    let n = g.node_count();
    let mut dist = vec![W::infinite(); n];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
    for &s in sources {
        dist[s.index()] = W::zero();
    }

    let rounds = l.min(n);
    for _ in 0..rounds {
        check_cancelled(cancel)?;
        let mut changed = false;
        for u in g.node_indices() {
            if dist[u.index()].is_infinite() {
                continue;
            }
            for edge in g.edges(u) {
                let v = edge.target();
                let cand = dist[u.index()].saturating_add(*edge.weight());
                if cand < dist[v.index()] {
                    dist[v.index()] = cand;
                    parent[v.index()] = Some(u);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    Ok((dist, if return_parents { Some(parent) } else { None }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> DiGraph<(), i64> {
        DiGraph::<(), i64>::from_edges([(0, 1, 2), (1, 2, -1), (2, 3, 3)])
    }

    #[test]
    fn beta_hop_sssp_respects_the_bound() {
        let g = path_graph();
        let dist = beta_hop_sssp(&g, NodeIndex::new(0), 1, None).unwrap();
        assert_eq!(dist[0], 0);
        assert_eq!(dist[1], 2);
        assert!(dist[2].is_infinite(), "2 hops away, beta=1 shouldn't reach it");
    }

    #[test]
    fn beta_hop_sssp_reaches_with_enough_hops() {
        let g = path_graph();
        let dist = beta_hop_sssp(&g, NodeIndex::new(0), 3, None).unwrap();
        assert_eq!(dist, vec![0, 2, 1, 4]);
    }

    #[test]
    fn beta_hop_stsp_matches_sssp_on_transpose() {
        let g = path_graph();
        let dist = beta_hop_stsp(&g, NodeIndex::new(3), 3, None).unwrap();
        assert_eq!(dist, vec![4, 2, 3, 0]);
    }

    #[test]
    fn super_source_bfd_computes_potentials_without_cycle() {
        let g = path_graph();
        let phi = super_source_bfd(&g, g.node_count(), true, None).unwrap();
        // Every vertex starts at distance 0 from the virtual source; only
        // the 1 -> 2 edge (weight -1) ever improves on that.
        assert_eq!(phi, vec![0, 0, -1, 0]);
    }

    #[test]
    fn super_source_bfd_detects_negative_cycle() {
        let g = DiGraph::<(), i64>::from_edges([(0, 1, 1), (1, 2, 1), (2, 0, -3)]);
        let result = super_source_bfd(&g, g.node_count(), true, None);
        assert!(matches!(result, Err(FinemanError::NegativeCycle(_))));
    }

    #[test]
    fn subset_bfd_finds_negative_reach() {
        let g = DiGraph::<(), i64>::from_edges([(0, 1, -3), (1, 2, 1)]);
        let (dist, _) = subset_bfd(&g, &[NodeIndex::new(0)], g.node_count(), false, None).unwrap();
        assert!(dist[2] < 0, "0 -> 1 -> 2 totals -2, a negative-weight path");
        assert_eq!(dist[0], 0);
    }

    #[test]
    fn subset_bfd_can_report_parents() {
        let g = path_graph();
        let (_, parents) =
            subset_bfd(&g, &[NodeIndex::new(0)], g.node_count(), true, None).unwrap();
        let parents = parents.unwrap();
        assert_eq!(parents[1], Some(NodeIndex::new(0)));
        assert_eq!(parents[2], Some(NodeIndex::new(1)));
    }

    #[test]
    fn cancellation_short_circuits_beta_hop_sssp() {
        let g = path_graph();
        let token = CancellationToken::new();
        token.cancel();
        let result = beta_hop_sssp(&g, NodeIndex::new(0), 5, Some(&token));
        assert!(matches!(result, Err(FinemanError::Cancelled)));
    }
}
