use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

/// Edge weight: a non-negative integer
///
/// `max_value()` is reserved as the "unreachable" sentinel inside the
/// traversals, so real distances must stay below it.
pub trait Weight: PrimInt + Unsigned + Debug + Display {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the smallest weight among the edges `from -> to`, if any exist
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Parallel edges are kept as separate entries. Returns false when either
    /// endpoint is not a vertex of the graph.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes every edge `from -> to`, returning true if any existed
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
