//! Shared application state for axum handlers.

use std::sync::Arc;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<RR, PR, MR> {
    /// Restaurant listing, detail, and removal.
    pub restaurant_service: Arc<RestaurantService<RR, MR>>,
    /// Pizza listing.
    pub pizza_service: Arc<PizzaService<PR>>,
    /// Validated creation of priced associations.
    pub restaurant_pizza_service: Arc<RestaurantPizzaService<MR, RR, PR>>,
}

impl<RR, PR, MR> Clone for AppState<RR, PR, MR> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
            pizza_service: Arc::clone(&self.pizza_service),
            restaurant_pizza_service: Arc::clone(&self.restaurant_pizza_service),
        }
    }
}

impl<RR, PR, MR> AppState<RR, PR, MR>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    MR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        restaurant_service: RestaurantService<RR, MR>,
        pizza_service: PizzaService<PR>,
        restaurant_pizza_service: RestaurantPizzaService<MR, RR, PR>,
    ) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
            pizza_service: Arc::new(pizza_service),
            restaurant_pizza_service: Arc::new(restaurant_pizza_service),
        }
    }
}
