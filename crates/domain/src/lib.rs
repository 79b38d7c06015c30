//! # pizzeria-domain
//!
//! Pure domain model for the pizzeria data service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Restaurant** and **Pizza** entities
//! - Define **`RestaurantPizza`**, the priced association between them
//! - Contain all invariant enforcement (non-empty fields, price range)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod error;
pub mod id;

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
