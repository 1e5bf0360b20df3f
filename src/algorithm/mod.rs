pub mod traits;
pub mod dijkstra;
pub mod almost_shortest;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
