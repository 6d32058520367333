//! Single-source shortest paths with a negative edge, via `fineman`.

use fineman_sssp::{fineman, Distance, FinemanConfig};
use petgraph::graph::{DiGraph, NodeIndex};

fn main() {
    let g = DiGraph::<(), i64>::from_edges([
        (0, 1, 4),
        (0, 2, 1),
        (2, 1, -3),
        (1, 3, 2),
        (2, 3, 6),
    ]);

    let distances = fineman(&g, NodeIndex::new(0), FinemanConfig::default()).unwrap();

    println!("Shortest path distances from node 0:");
    for (i, d) in distances.iter().enumerate() {
        match d {
            Distance::Finite(w) => println!("  {i}: {w}"),
            Distance::Unreachable => println!("  {i}: unreachable"),
        }
    }
}
