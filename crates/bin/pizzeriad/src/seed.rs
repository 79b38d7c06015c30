//! Demo data inserted on startup when `database.seed_demo` is enabled.

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;
use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::pizza::NewPizza;
use pizzeria_domain::restaurant::NewRestaurant;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red Peppers, Mustard"),
];

/// Populate the database with demo restaurants, pizzas, and menu entries.
///
/// Skipped when restaurants already exist, so restarting against the same
/// database file does not duplicate rows.
///
/// # Errors
///
/// Returns a storage or validation error from the services.
pub async fn demo_data<RR, PR, MR>(
    restaurants: &RestaurantService<RR, MR>,
    pizzas: &PizzaService<PR>,
    menu: &RestaurantPizzaService<MR, RR, PR>,
) -> Result<(), PizzeriaError>
where
    RR: RestaurantRepository,
    PR: PizzaRepository,
    MR: RestaurantPizzaRepository,
{
    if !restaurants.list_restaurants().await?.is_empty() {
        tracing::debug!("database already populated, skipping demo data");
        return Ok(());
    }

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let created = restaurants
            .create_restaurant(
                NewRestaurant::builder()
                    .name(*name)
                    .address(*address)
                    .build()?,
            )
            .await?;
        restaurant_ids.push(created.id);
    }

    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let created = pizzas
            .create_pizza(
                NewPizza::builder()
                    .name(*name)
                    .ingredients(*ingredients)
                    .build()?,
            )
            .await?;
        pizza_ids.push(created.id);
    }

    let mut price = 5;
    for restaurant_id in &restaurant_ids {
        for pizza_id in &pizza_ids {
            menu.create(price, *pizza_id, *restaurant_id).await?;
            price = if price >= 30 { 5 } else { price + 3 };
        }
    }

    tracing::info!(
        restaurants = restaurant_ids.len(),
        pizzas = pizza_ids.len(),
        "inserted demo data"
    );
    Ok(())
}
