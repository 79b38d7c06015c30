//! Restaurant-pizza service — validated creation of priced associations.

use pizzeria_domain::error::{PizzeriaError, ValidationError};
use pizzeria_domain::id::{PizzaId, RestaurantId};
use pizzeria_domain::pizza::Pizza;
use pizzeria_domain::restaurant::Restaurant;
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};

use crate::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

/// A created association bundled with both referenced entities, the read
/// model behind the `POST /restaurant_pizzas` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

/// Application service for creating restaurant-pizza associations.
pub struct RestaurantPizzaService<MR, RR, PR> {
    menu: MR,
    restaurants: RR,
    pizzas: PR,
}

impl<MR, RR, PR> RestaurantPizzaService<MR, RR, PR>
where
    MR: RestaurantPizzaRepository,
    RR: RestaurantRepository,
    PR: PizzaRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(menu: MR, restaurants: RR, pizzas: PR) -> Self {
        Self {
            menu,
            restaurants,
            pizzas,
        }
    }

    /// Create a priced association between an existing pizza and an
    /// existing restaurant.
    ///
    /// The price range is validated first, then both references are
    /// resolved; the resolved entities are returned alongside the new row.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when the price is out of
    /// range or either reference does not exist, or a storage error from
    /// the repositories.
    pub async fn create(
        &self,
        price: i64,
        pizza_id: PizzaId,
        restaurant_id: RestaurantId,
    ) -> Result<MenuItem, PizzeriaError> {
        let association = NewRestaurantPizza::builder()
            .price(price)
            .pizza_id(pizza_id)
            .restaurant_id(restaurant_id)
            .build()?;

        let pizza = self
            .pizzas
            .get_by_id(pizza_id)
            .await?
            .ok_or(ValidationError::UnknownPizza(pizza_id))?;
        let restaurant = self
            .restaurants
            .get_by_id(restaurant_id)
            .await?
            .ok_or(ValidationError::UnknownRestaurant(restaurant_id))?;

        let restaurant_pizza = self.menu.insert(association).await?;
        tracing::debug!(
            restaurant_pizza_id = %restaurant_pizza.id,
            restaurant_id = %restaurant_id,
            pizza_id = %pizza_id,
            "created restaurant-pizza association"
        );

        Ok(MenuItem {
            restaurant_pizza,
            pizza,
            restaurant,
        })
    }
}
