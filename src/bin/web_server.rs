use almost_sssp::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(3005)
    } else {
        3005
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("Starting almost shortest path server...");
    println!("Configuration:");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max vertices per request: {}", config.max_vertices);
    println!("   Max edges per request: {}", config.max_edges);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
