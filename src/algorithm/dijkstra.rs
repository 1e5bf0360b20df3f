use std::collections::HashSet;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{HeapEntry, IndexedMinHeap};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Distances and, when recorded, every shortest-path predecessor per vertex
#[derive(Debug, Clone)]
pub struct Traversal<W>
where
    W: Weight,
{
    /// Shortest distance from the source, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// `predecessors[v]` holds every `u` with `(u, v)` on some shortest path to `v`.
    /// Empty when the traversal ran without recording.
    pub predecessors: Vec<Vec<usize>>,
}

/// Per-run options for [`traverse`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TraversalOptions<'a> {
    /// Record all tied predecessors of each vertex
    pub record_predecessors: bool,

    /// Ordered vertex pairs whose edges are treated as absent
    pub skip_edges: Option<&'a HashSet<(usize, usize)>>,
}

/// Heap-driven Dijkstra from `source`.
///
/// Every vertex is loaded into a fresh [`IndexedMinHeap`] at `W::max_value()`
/// and the source is then decreased to zero, so each vertex is extracted and
/// relaxed from at most once. When recording, an edge into an already
/// finalized vertex is still recorded if it ties, which only happens over
/// zero-weight edges. The recorded sets do not depend on the order in which
/// equal priorities leave the heap. The run stops as soon as the extracted vertex is
/// still at the sentinel, since nothing left in the heap is reachable.
pub fn traverse<W, G>(graph: &G, source: usize, options: TraversalOptions<'_>) -> Result<Traversal<W>>
where
    W: Weight,
    G: Graph<W>,
{
    if !graph.has_vertex(source) {
        return Err(Error::SourceNotFound);
    }

    let n = graph.vertex_count();
    let unreachable = W::max_value();

    let mut distances = vec![unreachable; n];
    let mut predecessors = if options.record_predecessors {
        vec![Vec::new(); n]
    } else {
        Vec::new()
    };
    let mut finalized = vec![false; n];

    let mut heap = IndexedMinHeap::with_capacity(n);
    for v in 0..n {
        heap.insert(v, unreachable)?;
    }
    distances[source] = W::zero();
    heap.change_priority(source, W::zero());

    while let Some(HeapEntry { item: u, priority: dist_u }) = heap.extract_min() {
        if dist_u == unreachable {
            break;
        }
        finalized[u] = true;

        for (v, weight) in graph.outgoing_edges(u) {
            if options.skip_edges.map_or(false, |skip| skip.contains(&(u, v))) {
                continue;
            }

            // Sums that reach the sentinel count as unreachable
            let alt = match dist_u.checked_add(&weight) {
                Some(alt) if alt < unreachable => alt,
                _ => continue,
            };

            if finalized[v] {
                // Only a zero-weight edge between equally distant vertices ties here
                if options.record_predecessors && alt == distances[v] {
                    predecessors[v].push(u);
                }
                continue;
            }

            if alt < distances[v] {
                distances[v] = alt;
                if options.record_predecessors {
                    predecessors[v].clear();
                    predecessors[v].push(u);
                }
                heap.change_priority(v, alt);
            } else if options.record_predecessors && alt == distances[v] {
                predecessors[v].push(u);
            }
        }
    }

    Ok(Traversal {
        distances: distances
            .into_iter()
            .map(|d| if d == unreachable { None } else { Some(d) })
            .collect(),
        predecessors,
    })
}

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let traversal = traverse(
            graph,
            source,
            TraversalOptions {
                record_predecessors: true,
                skip_edges: None,
            },
        )?;

        // The first recorded predecessor is the one that set the final distance
        let predecessors = traversal
            .predecessors
            .iter()
            .enumerate()
            .map(|(v, preds)| if v == source { None } else { preds.first().copied() })
            .collect();

        Ok(ShortestPathResult {
            distances: traversal.distances,
            predecessors,
            source,
        })
    }
}
