//! `RestaurantPizza` — the priced association between a restaurant and a
//! pizza.
//!
//! Restaurant ↔ Pizza is many-to-many; this entity is the join record and
//! carries the `price` attribute. The other side of the relationship is
//! always derived by querying these rows, never stored as an object
//! reference, so the cyclic relationship graph never materializes in
//! memory.

use serde::{Deserialize, Serialize};

use crate::error::{PizzeriaError, ValidationError};
use crate::id::{PizzaId, RestaurantId, RestaurantPizzaId};

/// Lowest accepted menu price.
pub const MIN_PRICE: i64 = 1;
/// Highest accepted menu price.
pub const MAX_PRICE: i64 = 30;

/// A persisted restaurant-pizza association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: RestaurantPizzaId,
    pub price: i64,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

/// An association awaiting insertion; the id is assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

impl NewRestaurantPizza {
    /// Create a builder for constructing a [`NewRestaurantPizza`].
    #[must_use]
    pub fn builder() -> NewRestaurantPizzaBuilder {
        NewRestaurantPizzaBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// This is the only place the price rule lives; every creation path
    /// goes through it so no entry point can persist an out-of-range
    /// price.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when `price` is outside
    /// [`MIN_PRICE`]..=[`MAX_PRICE`].
    pub fn validate(&self) -> Result<(), PizzeriaError> {
        if !(MIN_PRICE..=MAX_PRICE).contains(&self.price) {
            return Err(ValidationError::PriceOutOfRange(self.price).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewRestaurantPizza`].
#[derive(Debug, Default)]
pub struct NewRestaurantPizzaBuilder {
    price: Option<i64>,
    restaurant_id: Option<RestaurantId>,
    pizza_id: Option<PizzaId>,
}

impl NewRestaurantPizzaBuilder {
    #[must_use]
    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn restaurant_id(mut self, restaurant_id: RestaurantId) -> Self {
        self.restaurant_id = Some(restaurant_id);
        self
    }

    #[must_use]
    pub fn pizza_id(mut self, pizza_id: PizzaId) -> Self {
        self.pizza_id = Some(pizza_id);
        self
    }

    /// Consume the builder, validate, and return a [`NewRestaurantPizza`].
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if `price` is missing or out
    /// of range.
    pub fn build(self) -> Result<NewRestaurantPizza, PizzeriaError> {
        let association = NewRestaurantPizza {
            price: self.price.unwrap_or_default(),
            restaurant_id: self.restaurant_id.unwrap_or(RestaurantId::from_i64(0)),
            pizza_id: self.pizza_id.unwrap_or(PizzaId::from_i64(0)),
        };
        association.validate()?;
        Ok(association)
    }
}
