//! Response bodies for the JSON API.
//!
//! Domain entities are never serialized directly; each endpoint has an
//! explicit view struct with a field allowlist. The detail views expand
//! related records exactly one level, which keeps the
//! restaurant/association/pizza graph from recursing.

use serde::Serialize;

use pizzeria_app::services::restaurant_pizza_service::MenuItem;
use pizzeria_app::services::restaurant_service::RestaurantWithMenu;
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::Pizza;
use pizzeria_domain::restaurant::Restaurant;
use pizzeria_domain::restaurant_pizza::RestaurantPizza;

/// Restaurant as it appears in list responses and inside association
/// details.
#[derive(Debug, Serialize)]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
        }
    }
}

/// Association as it appears inside a restaurant detail. Carries the
/// pizza reference as a bare id, not an embedded record.
#[derive(Debug, Serialize)]
pub struct MenuEntry {
    pub id: RestaurantPizzaId,
    pub price: i64,
    pub pizza_id: PizzaId,
}

impl From<RestaurantPizza> for MenuEntry {
    fn from(row: RestaurantPizza) -> Self {
        Self {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
        }
    }
}

/// Single restaurant with its menu entries.
#[derive(Debug, Serialize)]
pub struct RestaurantDetail {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuEntry>,
}

impl From<RestaurantWithMenu> for RestaurantDetail {
    fn from(value: RestaurantWithMenu) -> Self {
        Self {
            id: value.restaurant.id,
            name: value.restaurant.name,
            address: value.restaurant.address,
            restaurant_pizzas: value
                .restaurant_pizzas
                .into_iter()
                .map(MenuEntry::from)
                .collect(),
        }
    }
}

/// Pizza as it appears in list responses and inside association details.
#[derive(Debug, Serialize)]
pub struct PizzaView {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
}

impl From<Pizza> for PizzaView {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}

/// Newly created association with both referenced records embedded one
/// level deep.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaDetail {
    pub id: RestaurantPizzaId,
    pub price: i64,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
    pub pizza: PizzaView,
    pub restaurant: RestaurantSummary,
}

impl From<MenuItem> for RestaurantPizzaDetail {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.restaurant_pizza.id,
            price: item.restaurant_pizza.price,
            pizza_id: item.restaurant_pizza.pizza_id,
            restaurant_id: item.restaurant_pizza.restaurant_id,
            pizza: item.pizza.into(),
            restaurant: item.restaurant.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};

    fn restaurant() -> Restaurant {
        Restaurant {
            id: RestaurantId::from_i64(1),
            name: "Karen's Pizza Shack".to_string(),
            address: "address1".to_string(),
        }
    }

    fn pizza() -> Pizza {
        Pizza {
            id: PizzaId::from_i64(2),
            name: "Emma".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        }
    }

    #[test]
    fn should_serialize_restaurant_summary_with_flat_fields() {
        let view = RestaurantSummary::from(restaurant());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Karen's Pizza Shack",
                "address": "address1",
            })
        );
    }

    #[test]
    fn should_embed_menu_entries_without_pizza_records() {
        let detail = RestaurantDetail::from(RestaurantWithMenu {
            restaurant: restaurant(),
            restaurant_pizzas: vec![RestaurantPizza {
                id: RestaurantPizzaId::from_i64(3),
                price: 15,
                restaurant_id: RestaurantId::from_i64(1),
                pizza_id: PizzaId::from_i64(2),
            }],
        });
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Karen's Pizza Shack",
                "address": "address1",
                "restaurant_pizzas": [
                    { "id": 3, "price": 15, "pizza_id": 2 },
                ],
            })
        );
    }

    #[test]
    fn should_expand_both_sides_of_created_association_once() {
        let detail = RestaurantPizzaDetail::from(MenuItem {
            restaurant_pizza: RestaurantPizza {
                id: RestaurantPizzaId::from_i64(3),
                price: 15,
                restaurant_id: RestaurantId::from_i64(1),
                pizza_id: PizzaId::from_i64(2),
            },
            pizza: pizza(),
            restaurant: restaurant(),
        });
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "price": 15,
                "pizza_id": 2,
                "restaurant_id": 1,
                "pizza": {
                    "id": 2,
                    "name": "Emma",
                    "ingredients": "Dough, Tomato Sauce, Cheese",
                },
                "restaurant": {
                    "id": 1,
                    "name": "Karen's Pizza Shack",
                    "address": "address1",
                },
            })
        );
    }
}
