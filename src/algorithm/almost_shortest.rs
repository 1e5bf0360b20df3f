use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use crate::algorithm::dijkstra::{traverse, TraversalOptions};
use crate::graph::{DirectedGraph, Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// Outcome of one almost-shortest-path query
#[derive(Debug, Clone)]
pub struct AlmostShortestResult<W>
where
    W: Weight,
{
    pub source: usize,
    pub destination: usize,

    /// Length of the shortest `source -> destination` path
    pub shortest_distance: Option<W>,

    /// Length of the shortest path that avoids every shortest-path edge
    pub almost_shortest_distance: Option<W>,

    /// Ordered vertex pairs lying on at least one shortest path
    pub removed_edges: HashSet<(usize, usize)>,
}

impl<W> AlmostShortestResult<W>
where
    W: Weight,
{
    /// Formats the answer the way the batch reader prints it: the distance, or `-1`
    pub fn answer(&self) -> String {
        match self.almost_shortest_distance {
            Some(distance) => distance.to_string(),
            None => "-1".to_string(),
        }
    }
}

/// Almost shortest path solver.
///
/// Runs Dijkstra once recording all tied predecessors, walks them back from
/// the destination to collect every edge on some shortest path, then runs
/// Dijkstra again with those edges removed.
#[derive(Debug, Default)]
pub struct AlmostShortestPath;

impl AlmostShortestPath {
    /// Creates a new solver instance
    pub fn new() -> Self {
        AlmostShortestPath
    }

    /// Convenience wrapper returning only the almost-shortest distance
    pub fn distance<W, G>(&self, graph: &G, source: usize, destination: usize) -> Result<Option<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        Ok(self.solve(graph, source, destination)?.almost_shortest_distance)
    }

    pub fn solve<W, G>(&self, graph: &G, source: usize, destination: usize) -> Result<AlmostShortestResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex(destination));
        }

        let shortest = traverse(
            graph,
            source,
            TraversalOptions {
                record_predecessors: true,
                skip_edges: None,
            },
        )?;

        let shortest_distance = shortest.distances[destination];
        debug!(
            "Shortest {} -> {}: {:?} ({} vertices, {} edges)",
            source,
            destination,
            shortest_distance,
            graph.vertex_count(),
            graph.edge_count()
        );

        if shortest_distance.is_none() {
            return Ok(AlmostShortestResult {
                source,
                destination,
                shortest_distance,
                almost_shortest_distance: None,
                removed_edges: HashSet::new(),
            });
        }

        // The trivial path has no edges, so a query back to the source removes nothing
        let removed_edges = if source == destination {
            HashSet::new()
        } else {
            shortest_path_edges(&shortest.predecessors, destination)
        };
        debug!("Removing {} edges that lie on a shortest path", removed_edges.len());

        let almost_shortest_distance = if source == destination {
            shortest_cycle_through(graph, source, &removed_edges)?
        } else {
            traverse(
                graph,
                source,
                TraversalOptions {
                    record_predecessors: false,
                    skip_edges: Some(&removed_edges),
                },
            )?
            .distances[destination]
        };
        debug!("Almost shortest {} -> {}: {:?}", source, destination, almost_shortest_distance);

        Ok(AlmostShortestResult {
            source,
            destination,
            shortest_distance,
            almost_shortest_distance,
            removed_edges,
        })
    }
}

/// Breadth-first walk over the predecessor lists starting at `destination`,
/// collecting every `(u, v)` met along the way.
///
/// Only vertices that reach the destination through predecessor links are
/// visited, so shortest paths to other vertices keep their edges.
fn shortest_path_edges(predecessors: &[Vec<usize>], destination: usize) -> HashSet<(usize, usize)> {
    let mut removed = HashSet::new();
    let mut visited = vec![false; predecessors.len()];
    let mut queue = VecDeque::new();

    visited[destination] = true;
    queue.push_back(destination);

    while let Some(v) = queue.pop_front() {
        for &u in &predecessors[v] {
            if removed.insert((u, v)) {
                trace!("Edge {} -> {} is on a shortest path", u, v);
            }
            if !visited[u] {
                visited[u] = true;
                queue.push_back(u);
            }
        }
    }

    removed
}

/// Shortest positive-length closed walk from `source` back to itself.
///
/// Runs the traversal over a doubled graph whose vertex `2 * v + 1` means "at
/// `v` after at least one positive edge" and `2 * v` means "at `v` over
/// zero-weight edges only". The distance to `2 * source + 1` is the shortest
/// cycle that is not tied with the trivial path; some shortest such walk is
/// a simple cycle through `source`.
fn shortest_cycle_through<W, G>(
    graph: &G,
    source: usize,
    removed: &HashSet<(usize, usize)>,
) -> Result<Option<W>>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let mut layered = DirectedGraph::with_capacity(2 * n);

    for u in 0..n {
        for (v, weight) in graph.outgoing_edges(u) {
            if removed.contains(&(u, v)) {
                continue;
            }
            if weight > W::zero() {
                layered.add_edge(2 * u, 2 * v + 1, weight);
            } else {
                layered.add_edge(2 * u, 2 * v, weight);
            }
            layered.add_edge(2 * u + 1, 2 * v + 1, weight);
        }
    }
    trace!("Cycle search over {} states and {} edges", 2 * n, layered.edge_count());

    let traversal = traverse(&layered, 2 * source, TraversalOptions::default())?;
    Ok(traversal.distances[2 * source + 1])
}
