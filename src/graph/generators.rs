use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random directed graph with `n` vertices and `m` edges.
///
/// Endpoints are drawn uniformly, so self-loops and parallel edges occur.
/// Weights are drawn from `0..=max_weight`.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    m: usize,
    max_weight: u64,
    rng: &mut R,
) -> DirectedGraph<u64> {
    assert!(n > 0 || m == 0, "cannot place edges in an empty graph");

    let mut graph = DirectedGraph::with_capacity(n);
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a layered graph where every vertex of layer `i` links to every
/// vertex of layer `i + 1` with unit weight, then a detour from the first
/// vertex straight to the last with weight `detour`.
///
/// All layer-to-layer routes tie, which makes it a worst case for the
/// predecessor sets recorded by the almost-shortest-path solver.
pub fn generate_layered_graph(layers: usize, width: usize, detour: u64) -> DirectedGraph<u64> {
    assert!(width > 0, "width must be positive");

    // source + layers * width + target
    let n = layers * width + 2;
    let target = n - 1;
    let mut graph = DirectedGraph::with_capacity(n);

    let layer_vertex = |layer: usize, i: usize| 1 + layer * width + i;

    if layers == 0 {
        graph.add_edge(0, target, 1);
    } else {
        for i in 0..width {
            graph.add_edge(0, layer_vertex(0, i), 1);
            graph.add_edge(layer_vertex(layers - 1, i), target, 1);
        }
        for layer in 0..layers.saturating_sub(1) {
            for i in 0..width {
                for j in 0..width {
                    graph.add_edge(layer_vertex(layer, i), layer_vertex(layer + 1, j), 1);
                }
            }
        }
    }

    graph.add_edge(0, target, detour);
    graph
}
