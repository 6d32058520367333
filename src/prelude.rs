//! Prelude module for convenient imports

//! # Example
//!
//! ```rust
//! use fineman_sssp::prelude::*;
//! use petgraph::graph::DiGraph;
//!
//! let g: DiGraph<(), i64> = DiGraph::new();
//! ```

pub use crate::bellman_ford;
pub use crate::bellman_ford_initialize_relax;
pub use crate::find_negative_cycle;
pub use crate::betweenness::{betweenness_reduction, BetweennessParams};
pub use crate::bfd::{beta_hop_sssp, beta_hop_stsp, subset_bfd, super_source_bfd};
pub use crate::cancel::CancellationToken;
pub use crate::crust::{find_is_or_crust, rand_is, IsOrCrust};
pub use crate::elimination::{eliminate, EliminationConfig};
pub use crate::error::{FinemanError, NegativeCycleWitness};
pub use crate::fineman::{fineman, Distance, FinemanConfig};
pub use crate::graph::NegativeIndex;
pub use crate::neg_cycle::NegCycleFinder;
pub use crate::partition::heavy_light_partition;
pub use crate::preprocessing::{preprocess, Preprocessed};
pub use crate::weight::Weight;
pub use crate::Paths;
