//! # pizzeria-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RestaurantRepository` — insert, fetch, list, cascade-delete restaurants
//!   - `PizzaRepository` — insert, fetch, list pizzas
//!   - `RestaurantPizzaRepository` — insert and query priced associations
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RestaurantService` — list, fetch with menu, delete (cascading)
//!   - `PizzaService` — list
//!   - `RestaurantPizzaService` — validated association creation
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `pizzeria-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
