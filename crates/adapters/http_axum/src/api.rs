//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod pizzas;
#[allow(clippy::missing_errors_doc)]
pub mod restaurant_pizzas;
#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::{get, post};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the resource routes.
pub fn routes<RR, PR, MR>() -> Router<AppState<RR, PR, MR>>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    MR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    Router::new()
        // Restaurants
        .route("/restaurants", get(restaurants::list::<RR, PR, MR>))
        .route(
            "/restaurants/{id}",
            get(restaurants::get::<RR, PR, MR>).delete(restaurants::delete::<RR, PR, MR>),
        )
        // Pizzas
        .route("/pizzas", get(pizzas::list::<RR, PR, MR>))
        // Associations
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizzas::create::<RR, PR, MR>),
        )
}
