//! Error types for the Fineman pipeline.
//!
//! Four variants with distinct payloads, which is squarely `thiserror`'s
//! job rather than a single unit-struct error like
//! `petgraph::algo::NegativeCycle`.

use thiserror::Error;

/// What a negative-cycle-detecting scan managed to recover about the
/// cycle it found.
///
/// `spec.md` §6: "carries a witness cycle (ordered vertex list) when the
/// detecting scan can extract one; otherwise carries the triggering edge."
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NegativeCycleWitness {
    /// An ordered list of original vertex ids forming the cycle, if the
    /// detecting scan could walk the predecessor chain back to a repeat.
    pub cycle: Option<Vec<usize>>,
    /// The `(source, target)` edge whose relaxation exposed the cycle.
    pub edge: Option<(usize, usize)>,
}

impl NegativeCycleWitness {
    pub fn from_cycle(cycle: Vec<usize>) -> Self {
        NegativeCycleWitness {
            cycle: Some(cycle),
            edge: None,
        }
    }

    pub fn from_edge(source: usize, target: usize) -> Self {
        NegativeCycleWitness {
            cycle: None,
            edge: Some((source, target)),
        }
    }
}

/// Errors the pipeline can raise, per `spec.md` §7.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FinemanError {
    /// An out-of-range `tau`, `beta`, `rho`, `c`, or source vertex.
    /// Raised eagerly at the boundary that receives the bad parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Detected by a super-source BFD or the final scan's invariant check.
    /// Fatal — never caught internally, always propagated to the caller.
    #[error("negative cycle detected")]
    NegativeCycle(NegativeCycleWitness),

    /// A randomized subroutine (`crust::find_is_or_crust`) exceeded its
    /// retry budget. The caller may retry the whole call with a fresh
    /// seed; this crate never masks it by silently retrying forever.
    #[error("randomized subroutine exhausted its retry budget")]
    Exhaustion,

    /// Cooperative cancellation was requested mid-computation.
    #[error("computation cancelled")]
    Cancelled,
}
