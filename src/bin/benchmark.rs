use std::env;
use std::time::{Duration, Instant};

use almost_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use almost_sssp::graph::generators::generate_random_graph;
use almost_sssp::graph::{DirectedGraph, Graph};
use almost_sssp::AlmostShortestPath;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Time a plain Dijkstra run, the baseline for one traversal
fn benchmark_dijkstra(graph: &DirectedGraph<u64>, source: usize) -> Duration {
    let start = Instant::now();
    let result = Dijkstra::new().compute_shortest_paths(graph, source).unwrap();
    let duration = start.elapsed();

    let reachable = result.distances.iter().filter(|d| d.is_some()).count();
    println!("  - Dijkstra reached {} vertices in {:?}", reachable, duration);
    duration
}

// Time a full almost-shortest-path query (two traversals plus edge marking)
fn benchmark_almost_shortest(graph: &DirectedGraph<u64>, source: usize, destination: usize) -> Duration {
    let start = Instant::now();
    let result = AlmostShortestPath::new().solve(graph, source, destination).unwrap();
    let duration = start.elapsed();

    println!(
        "  - Almost shortest {} -> {}: shortest {:?}, answer {} ({} edges removed) in {:?}",
        source,
        destination,
        result.shortest_distance,
        result.answer(),
        result.removed_edges.len(),
        duration
    );
    duration
}

fn main() {
    env_logger::init();

    // Graph sizes may be given on the command line
    let args: Vec<String> = env::args().skip(1).collect();
    let graph_sizes: Vec<usize> = if args.is_empty() {
        vec![1_000, 10_000, 50_000, 100_000, 200_000]
    } else {
        args.iter().filter_map(|a| a.parse::<usize>().ok()).filter(|&n| n > 0).collect()
    };

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Almost Shortest Path");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, size * edge_factor, 100, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let source = 0;
        let destination = size - 1;

        let dijkstra_time = benchmark_dijkstra(&graph, source);
        let almost_time = benchmark_almost_shortest(&graph, source, destination);

        results.push((size, dijkstra_time, almost_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<18} | {:<10}", "Vertices", "Dijkstra (ms)", "Almost SP (ms)", "Ratio");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, almost_time) in &results {
        let ratio = almost_time.as_secs_f64() / dijkstra_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<18} | {:<10.2}",
            size,
            dijkstra_time.as_millis(),
            almost_time.as_millis(),
            ratio
        );
    }
}
