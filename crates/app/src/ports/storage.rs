//! Storage port — repository traits for persistence.

use std::future::Future;

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::{NewPizza, Pizza};
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};

/// Persistence operations for restaurants.
pub trait RestaurantRepository {
    /// Insert a new restaurant and return it with its assigned id.
    fn insert(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send;

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send;

    /// Delete a restaurant and, atomically, every association that
    /// references it. Returns `true` when a row existed.
    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<bool, PizzeriaError>> + Send;
}

/// Persistence operations for pizzas.
pub trait PizzaRepository {
    /// Insert a new pizza and return it with its assigned id.
    fn insert(&self, pizza: NewPizza)
    -> impl Future<Output = Result<Pizza, PizzeriaError>> + Send;

    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, PizzeriaError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send;
}

/// Persistence operations for restaurant-pizza associations.
pub trait RestaurantPizzaRepository {
    /// Insert a new association and return it with its assigned id.
    ///
    /// A dangling `restaurant_id`/`pizza_id` must never produce a persisted
    /// row; implementations surface it as a validation failure.
    fn insert(
        &self,
        association: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send;

    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send;

    /// All associations owned by the given restaurant, the derived
    /// "menu of a restaurant" view.
    fn find_by_restaurant_id(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send;
}
