//! Heavy/light partition (spec.md §4.E).
//!
//! Grounded on `examples/original_source/src/fineman/heavy_light_partition.py`
//! (repeated Bernoulli sampling of a subset, then a reach computation over
//! it, tallying how often each vertex is reached into a `Heavy` / `Light`
//! split). `compute_reach` here is `bfd::subset_bfd` run to `|V|` rounds,
//! the same bound `crust::rand_is` uses for its own negative-reach check:
//! spec.md §4.B's default for subset BFD, since reach here means "via a
//! negative-weight path", not just a single negative-weight edge.

use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;
use rand::Rng;

use crate::bfd::subset_bfd;
use crate::cancel::CancellationToken;
use crate::error::FinemanError;
use crate::weight::Weight;

/// Vertices reachable from `from` by a negative-weight path, per
/// `bfd::subset_bfd`'s full-round distance table.
fn compute_reach<W: Weight>(
    g: &DiGraph<(), W>,
    from: &[NodeIndex],
    cancel: Option<&CancellationToken>,
) -> Result<HashSet<NodeIndex>, FinemanError> {
    let (dist, _) = subset_bfd(g, from, g.node_count(), false, cancel)?;
    Ok(dist
        .iter()
        .enumerate()
        .filter(|(_, d)| **d < W::zero())
        .map(|(i, _)| NodeIndex::new(i))
        .collect())
}

/// Splits `negative_subset` into `(heavy, light)`: vertices reached often
/// enough across repeated random subsampling are "heavy", the rest are
/// "light".
///
/// `rho` is the target subsample size relative to `negative_subset`'s
/// size (`k_hat`); `c` scales both the number of sampling rounds
/// (`c * ceil(ln k_hat)`) and the heaviness threshold (`count >= (c/2) *
/// ceil(ln k_hat)`).
pub fn heavy_light_partition<W: Weight>(
    g: &DiGraph<(), W>,
    negative_subset: &HashSet<NodeIndex>,
    rho: f64,
    c: f64,
    rng: &mut StdRng,
    cancel: Option<&CancellationToken>,
) -> Result<(HashSet<NodeIndex>, HashSet<NodeIndex>), FinemanError> {
    let k_hat = negative_subset.len().max(1) as f64;
    if rho > k_hat {
        return Err(FinemanError::InvalidParameter(
            "rho must not exceed |negative_subset|".into(),
        ));
    }
    let sample_prob = (rho / k_hat).clamp(0.0, 1.0);
    let rounds = (c * k_hat.ln().max(1.0)).ceil() as usize;
    let threshold = (c / 2.0) * k_hat.ln().max(1.0);

    let mut count: std::collections::HashMap<NodeIndex, usize> = std::collections::HashMap::new();
    let subset: Vec<NodeIndex> = negative_subset.iter().copied().collect();

    for _ in 0..rounds.max(1) {
        let u_prime: Vec<NodeIndex> = subset
            .iter()
            .copied()
            .filter(|_| rng.gen::<f64>() < sample_prob)
            .collect();
        if u_prime.is_empty() {
            continue;
        }
        let reach = compute_reach(g, &u_prime, cancel)?;
        for v in reach {
            *count.entry(v).or_insert(0) += 1;
        }
    }

    let heavy: HashSet<NodeIndex> = negative_subset
        .iter()
        .copied()
        .filter(|v| *count.get(v).unwrap_or(&0) as f64 >= threshold)
        .collect();
    let light: HashSet<NodeIndex> = negative_subset.difference(&heavy).copied().collect();

    Ok((heavy, light))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn small_graph() -> DiGraph<(), i64> {
        DiGraph::<(), i64>::from_edges([(0, 1, -3), (1, 2, -2), (2, 3, 1)])
    }

    #[test]
    fn partition_covers_the_whole_subset() {
        let g = small_graph();
        let subset: HashSet<NodeIndex> = [0, 1, 2].into_iter().map(NodeIndex::new).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let (heavy, light) = heavy_light_partition(&g, &subset, 2.0, 4.0, &mut rng, None).unwrap();
        let union: HashSet<_> = heavy.union(&light).copied().collect();
        assert_eq!(union, subset);
        assert!(heavy.is_disjoint(&light));
    }

    #[test]
    fn rejects_rho_larger_than_subset() {
        let g = small_graph();
        let subset: HashSet<NodeIndex> = [0].into_iter().map(NodeIndex::new).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let result = heavy_light_partition(&g, &subset, 5.0, 4.0, &mut rng, None);
        assert!(result.is_err());
    }
}
