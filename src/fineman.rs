//! Final distance computation and the crate's public entry point
//! (spec.md §4.H, §6).
//!
//! Once [`crate::elimination::eliminate`] has produced a price function
//! that leaves the graph non-negative, the remaining scan is an ordinary
//! single-source shortest path computation — so this module hands off
//! directly to `petgraph::algo::dijkstra` rather than reimplementing one.
//! The result is un-reweighted back
//! (`d(s, v) = d'(s, v) - phi(s) + phi(v)`) and preprocessing's auxiliary
//! vertices are projected away before returning to the caller.

use std::collections::HashMap;

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use rand::SeedableRng;

use crate::cancel::CancellationToken;
use crate::elimination::{eliminate, EliminationConfig};
use crate::error::FinemanError;
use crate::graph::NegativeIndex;
use crate::preprocessing::preprocess;
use crate::weight::Weight;

/// A vertex's distance from the source, or a marker that it is
/// unreachable. Kept distinct from `Weight::infinite()` so callers never
/// have to guess whether a returned "infinite" value is a real sentinel
/// or a saturated computation artifact.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance<W: Weight> {
    Finite(W),
    Unreachable,
}

/// Caller-tunable knobs for a single `fineman` call. `None` fields fall
/// back to graph-size-derived defaults from
/// [`EliminationConfig::for_graph`].
#[derive(Debug, Clone, Default)]
pub struct FinemanConfig {
    pub max_degree: Option<usize>,
    pub elimination: Option<EliminationConfig>,
    pub seed: Option<u64>,
    pub cancel: Option<CancellationToken>,
}

/// Computes single-source shortest-path distances from `source` in a
/// directed graph whose edges may carry negative weights, provided it has
/// no negative-weight cycle.
///
/// This is the crate's external interface (spec.md §6):
/// `fineman(G, s) -> Vec<Distance> | raises NegativeCycle`.
pub fn fineman<W: Weight>(
    graph: &DiGraph<(), W>,
    source: NodeIndex,
    config: FinemanConfig,
) -> Result<Vec<Distance<W>>, FinemanError> {
    if source.index() >= graph.node_count() {
        return Err(FinemanError::InvalidParameter(
            "source is not a vertex of this graph".into(),
        ));
    }

    let threshold = config.max_degree.unwrap_or_else(|| {
        (graph.node_count().max(2) as f64).sqrt().ceil() as usize
    });
    let preprocessed = preprocess(graph, threshold.max(1));
    let working = &preprocessed.graph;

    let negative = NegativeIndex::from_graph(working);
    let mut rng = match config.seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::seed_from_u64(0x46_49_4e_45), // "FINE" in ASCII bytes
    };

    let phi = if negative.is_empty() {
        vec![W::zero(); working.node_count()]
    } else {
        let elim_config = config
            .elimination
            .unwrap_or_else(|| EliminationConfig::for_graph(working));
        eliminate(working, &elim_config, &mut rng, config.cancel.as_ref())?
    };

    let (reweighted, still_negative) = crate::graph::reweight(working, &phi);
    debug_assert!(
        still_negative.is_empty(),
        "elimination must leave no negative edges before the final scan"
    );

    let dijkstra_dist: HashMap<NodeIndex, W> = dijkstra(&reweighted, source, None, |e| *e.weight());

    let full: Vec<Distance<W>> = working
        .node_indices()
        .map(|v| match dijkstra_dist.get(&v) {
            Some(&d_prime) => Distance::Finite(d_prime - phi[source.index()] + phi[v.index()]),
            None => Distance::Unreachable,
        })
        .collect();

    Ok(preprocessed.project(&full))
}
