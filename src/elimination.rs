//! The elimination loop (spec.md §4.G).
//!
//! Orchestrates components D/E/F into the outer loop that drives a
//! graph's negative-edge count to zero: reduce betweenness to get a price
//! function, reweight, then cancel a batch of negative edges incident on
//! the residual heads (either an independent set or a crust) with a
//! second price function, reweight again. The orchestration style — a
//! `run` loop accumulating state across bounded rounds and returning once
//! a termination predicate holds — mirrors a cycle-cancelling solver's
//! main loop: accumulate a correction, apply it, loop until no
//! correction remains to make.

use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;

use crate::betweenness::{betweenness_reduction, BetweennessParams};
use crate::bfd::subset_bfd;
use crate::cancel::CancellationToken;
use crate::crust::{find_is_or_crust, IsOrCrust};
use crate::error::FinemanError;
use crate::graph::{reweight, successors, NegativeIndex};
use crate::weight::Weight;

/// Tuning knobs for the elimination loop, separate from the per-round
/// betweenness parameters so a caller can scale them with graph size.
#[derive(Debug, Clone, Copy)]
pub struct EliminationConfig {
    pub beta: usize,
    pub c: f64,
    pub c_prime: f64,
    /// Caps the number of outer rounds; spec.md's complexity bound is
    /// `O(|N|^(1/3) * (log |V|)^2)` but a hard cap keeps this loop total
    /// even on pathological inputs.
    pub max_rounds: usize,
}

impl EliminationConfig {
    pub fn for_graph<W: Weight>(g: &DiGraph<(), W>) -> Self {
        let n = g.node_count().max(2) as f64;
        let beta = (n.cbrt().ceil() as usize).max(1);
        let max_rounds = ((n.cbrt() * n.ln().max(1.0).powi(2)).ceil() as usize).max(1);
        EliminationConfig {
            beta,
            c: 3.0,
            c_prime: 4.0,
            max_rounds,
        }
    }
}

/// Runs the elimination loop to completion, returning a price function
/// `phi` over `g`'s vertices such that reweighting `g` by `phi` leaves no
/// negative edges, or a [`FinemanError`] if a negative cycle is found, the
/// retry budget is exhausted, or the caller cancels.
pub fn eliminate<W: Weight>(
    g: &DiGraph<(), W>,
    config: &EliminationConfig,
    rng: &mut StdRng,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<W>, FinemanError> {
    let n = g.node_count();
    let mut phi = vec![W::zero(); n];
    let mut current = g.clone();
    let mut negative = NegativeIndex::from_graph(&current);
    let mut retired: HashSet<NodeIndex> = HashSet::new();

    for round in 0..config.max_rounds {
        if let Some(c) = cancel {
            if c.is_cancelled() {
                return Err(FinemanError::Cancelled);
            }
        }
        if negative.is_empty() {
            break;
        }

        let active: HashSet<NodeIndex> = negative
            .heads()
            .into_iter()
            .filter(|v| !retired.contains(v))
            .collect();
        if active.is_empty() {
            break;
        }

        #[cfg(feature = "std")]
        log::debug!(
            "elimination round {round}: {} negative edges, {} active heads, {} retired",
            negative.len(),
            active.len(),
            retired.len()
        );

        let k = active.len();
        let tau = ((k as f64).powf(1.0 / 9.0).ceil() as usize).clamp(1, n.max(1));
        let params = BetweennessParams {
            tau,
            beta: config.beta,
            c: config.c,
        };

        let phi_round = betweenness_reduction(&current, &params, rng, cancel)?;
        let (reweighted, new_negative) = reweight(&current, &phi_round);
        for i in 0..n {
            phi[i] = phi[i] + phi_round[i];
        }
        current = reweighted;
        negative = new_negative;

        if negative.is_empty() {
            break;
        }

        let residual: HashSet<NodeIndex> = negative
            .heads()
            .into_iter()
            .filter(|v| !retired.contains(v))
            .collect();
        if residual.is_empty() {
            continue;
        }

        let phi_step = match find_is_or_crust(&current, &residual, config.c, config.c_prime, rng, cancel)? {
            IsOrCrust::IndependentSet(is) => {
                // Each v in the independent set has at most one outgoing
                // negative edge post-preprocessing (the degree-one
                // invariant of §4.C); shift v so that edge lands exactly
                // at zero. Independence in the negative subgraph means no
                // two members of `is` share a negative edge, so these
                // per-vertex shifts don't interact with each other.
                let mut delta = vec![W::zero(); n];
                for v in &is {
                    if let Some((_, w)) = successors(&current, *v)
                        .into_iter()
                        .find(|(_, w)| *w < W::zero())
                    {
                        delta[v.index()] = -w;
                    }
                }
                retired.extend(is);
                delta
            }
            IsOrCrust::Crust { anchor, reachable } => {
                // A bounded-hop BFD seeded at the crust's reachable set
                // plays the same role here as the virtual source does in
                // `bfd::super_source_bfd`: the resulting distances are a
                // valid price function that cancels every negative edge
                // reachable from `reachable` without reopening any edge
                // elsewhere, since `subset_bfd` never raises on negative
                // cycles and only ever tightens distances downward.
                let sources: Vec<NodeIndex> = reachable.iter().copied().collect();
                let (dist, _) = subset_bfd(&current, &sources, n, false, cancel)?;
                retired.insert(anchor);
                retired.extend(reachable);
                dist.into_iter()
                    .map(|d| if d.is_infinite() { W::zero() } else { d })
                    .collect()
            }
        };

        let (reweighted2, new_negative2) = reweight(&current, &phi_step);
        for i in 0..n {
            phi[i] = phi[i] + phi_step[i];
        }
        current = reweighted2;
        negative = new_negative2;
    }

    if negative.is_empty() {
        Ok(phi)
    } else {
        Err(FinemanError::Exhaustion)
    }
}
