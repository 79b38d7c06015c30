//! # pizzeriad — pizzeria daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod seed;

use tracing_subscriber::EnvFilter;

use pizzeria_adapter_http_axum::state::AppState;
use pizzeria_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqlitePizzaRepository, SqliteRestaurantPizzaRepository,
    SqliteRestaurantRepository,
};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let restaurant_service = RestaurantService::new(
        SqliteRestaurantRepository::new(pool.clone()),
        SqliteRestaurantPizzaRepository::new(pool.clone()),
    );
    let pizza_service = PizzaService::new(SqlitePizzaRepository::new(pool.clone()));
    let restaurant_pizza_service = RestaurantPizzaService::new(
        SqliteRestaurantPizzaRepository::new(pool.clone()),
        SqliteRestaurantRepository::new(pool.clone()),
        SqlitePizzaRepository::new(pool),
    );

    if config.database.seed_demo {
        seed::demo_data(&restaurant_service, &pizza_service, &restaurant_pizza_service).await?;
    }

    // HTTP
    let state = AppState::new(restaurant_service, pizza_service, restaurant_pizza_service);
    let app = pizzeria_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "pizzeriad listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
