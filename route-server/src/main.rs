use route_server::cache::{CacheConfig, GraphCache};
use route_server::config::ServerConfig;
use route_server::logging;
use route_server::planner::QueryLimits;
use route_server::web::{AppState, create_router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = ServerConfig::from_env()?;

    // Load the startup graph (fail fast if the data file is unreadable)
    let graph = config.data_source().load_graph().await?;

    let cache = GraphCache::new(&CacheConfig::default());
    let state = AppState::new(graph, cache, QueryLimits::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Route query server listening");
    println!("Route query server listening on http://{}", config.addr);
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /graph         - Startup graph summary");
    println!("  GET  /graph/report  - Standard queries on the startup graph");
    println!("  POST /graph/query   - Run queries");

    axum::serve(listener, app).await?;
    Ok(())
}
