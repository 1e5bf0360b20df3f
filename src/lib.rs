//! Almost Shortest Path - shortest route that avoids every shortest route
//!
//! For a weighted directed graph and a pair of vertices `S`, `D`, this library
//! computes the length of the shortest `S -> D` path that shares no edge with
//! any shortest `S -> D` path.
//!
//! The computation runs Dijkstra twice on top of an indexed binary min-heap
//! that supports decrease-key and deletion by item identity.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod input;
pub mod web;

pub use algorithm::{
    almost_shortest::{AlmostShortestPath, AlmostShortestResult},
    dijkstra::Dijkstra,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use data_structures::{HeapEntry, HeapError, IndexedMinHeap};
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Heap fault: {0}")]
    Heap(#[from] HeapError),

    #[error("Malformed input on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
