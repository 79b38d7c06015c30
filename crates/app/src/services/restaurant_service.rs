//! Restaurant service — use-cases for listing, fetching, and deleting
//! restaurants.

use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::RestaurantPizza;

use crate::ports::{RestaurantPizzaRepository, RestaurantRepository};

/// A restaurant together with its priced menu entries, the detailed read
/// model behind `GET /restaurants/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantWithMenu {
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizza>,
}

/// Application service for restaurant operations.
pub struct RestaurantService<RR, MR> {
    restaurants: RR,
    menu: MR,
}

impl<RR, MR> RestaurantService<RR, MR>
where
    RR: RestaurantRepository,
    MR: RestaurantPizzaRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(restaurants: RR, menu: MR) -> Self {
        Self { restaurants, menu }
    }

    /// Create a new restaurant after validating domain invariants.
    ///
    /// Not exposed over HTTP; used by seeding and tests.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant, PizzeriaError> {
        restaurant.validate()?;
        self.restaurants.insert(restaurant).await
    }

    /// List all restaurants.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, PizzeriaError> {
        self.restaurants.get_all().await
    }

    /// Look up a restaurant by id together with its menu entries.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no restaurant with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_restaurant(
        &self,
        id: RestaurantId,
    ) -> Result<RestaurantWithMenu, PizzeriaError> {
        let restaurant = self
            .restaurants
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let restaurant_pizzas = self.menu.find_by_restaurant_id(id).await?;

        Ok(RestaurantWithMenu {
            restaurant,
            restaurant_pizzas,
        })
    }

    /// Delete a restaurant by id, cascading to its menu entries.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no restaurant with `id`
    /// exists, or a storage error from the repository.
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), PizzeriaError> {
        if self.restaurants.delete(id).await? {
            tracing::debug!(restaurant_id = %id, "deleted restaurant and its menu entries");
            Ok(())
        } else {
            Err(not_found(id).into())
        }
    }
}

fn not_found(id: RestaurantId) -> NotFoundError {
    NotFoundError {
        entity: "Restaurant",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{InMemoryMenuRepo, InMemoryRestaurantRepo};
    use pizzeria_domain::error::ValidationError;
    use pizzeria_domain::id::PizzaId;
    use pizzeria_domain::restaurant_pizza::NewRestaurantPizza;

    fn make_service() -> RestaurantService<InMemoryRestaurantRepo, InMemoryMenuRepo> {
        let menu = InMemoryMenuRepo::default();
        RestaurantService::new(InMemoryRestaurantRepo::with_menu(&menu), menu)
    }

    fn valid_restaurant() -> NewRestaurant {
        NewRestaurant::builder()
            .name("Karen's Pizza Shack")
            .address("address1")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_restaurant_and_assign_id() {
        let svc = make_service();

        let created = svc.create_restaurant(valid_restaurant()).await.unwrap();
        assert_eq!(created.name, "Karen's Pizza Shack");

        let fetched = svc.get_restaurant(created.id).await.unwrap();
        assert_eq!(fetched.restaurant, created);
        assert!(fetched.restaurant_pizzas.is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let restaurant = NewRestaurant {
            name: String::new(),
            address: "address1".to_string(),
        };

        let result = svc.create_restaurant(restaurant).await;
        assert!(matches!(
            result,
            Err(PizzeriaError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_restaurant_missing() {
        let svc = make_service();
        let result = svc.get_restaurant(RestaurantId::from_i64(999_999)).await;
        assert!(matches!(result, Err(PizzeriaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_restaurants() {
        let svc = make_service();
        svc.create_restaurant(valid_restaurant()).await.unwrap();
        svc.create_restaurant(
            NewRestaurant::builder()
                .name("Sanjay's Pizza")
                .address("address2")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

        let all = svc.list_restaurants().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_restaurant() {
        let svc = make_service();
        let result = svc.delete_restaurant(RestaurantId::from_i64(1)).await;
        assert!(matches!(result, Err(PizzeriaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_restaurant_and_cascade_menu_entries() {
        let svc = make_service();

        let restaurant = svc.create_restaurant(valid_restaurant()).await.unwrap();
        let association = svc
            .menu
            .insert(
                NewRestaurantPizza::builder()
                    .price(10)
                    .restaurant_id(restaurant.id)
                    .pizza_id(PizzaId::from_i64(1))
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();

        svc.delete_restaurant(restaurant.id).await.unwrap();

        let result = svc.get_restaurant(restaurant.id).await;
        assert!(matches!(result, Err(PizzeriaError::NotFound(_))));
        let orphan = svc.menu.get_by_id(association.id).await.unwrap();
        assert!(orphan.is_none());
    }

    #[tokio::test]
    async fn should_include_menu_entries_in_detailed_view() {
        let svc = make_service();

        let restaurant = svc.create_restaurant(valid_restaurant()).await.unwrap();
        svc.menu
            .insert(
                NewRestaurantPizza::builder()
                    .price(15)
                    .restaurant_id(restaurant.id)
                    .pizza_id(PizzaId::from_i64(1))
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();

        let detailed = svc.get_restaurant(restaurant.id).await.unwrap();
        assert_eq!(detailed.restaurant_pizzas.len(), 1);
        assert_eq!(detailed.restaurant_pizzas[0].price, 15);
    }
}
