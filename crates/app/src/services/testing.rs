//! In-memory repository fakes shared by the service unit tests.
//!
//! The menu store is shared through an `Arc` so the restaurant fake can
//! honor the cascade contract of
//! [`RestaurantRepository::delete`](crate::ports::RestaurantRepository).

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::{NewPizza, Pizza};
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};

use crate::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

type SharedMenuRows = Arc<Mutex<HashMap<RestaurantPizzaId, RestaurantPizza>>>;

/// In-memory [`RestaurantPizzaRepository`]; clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryMenuRepo {
    rows: SharedMenuRows,
    next_id: Arc<AtomicI64>,
}

impl RestaurantPizzaRepository for InMemoryMenuRepo {
    fn insert(
        &self,
        association: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send {
        let id = RestaurantPizzaId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let row = RestaurantPizza {
            id,
            price: association.price,
            restaurant_id: association.restaurant_id,
            pizza_id: association.pizza_id,
        };
        let mut rows = self.rows.lock().unwrap();
        rows.insert(id, row.clone());
        async { Ok(row) }
    }

    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send {
        let rows = self.rows.lock().unwrap();
        let result = rows.get(&id).cloned();
        async { Ok(result) }
    }

    fn find_by_restaurant_id(
        &self,
        restaurant_id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        let rows = self.rows.lock().unwrap();
        let mut result: Vec<RestaurantPizza> = rows
            .values()
            .filter(|row| row.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        result.sort_by_key(|row| row.id);
        async { Ok(result) }
    }
}

/// In-memory [`RestaurantRepository`] that cascades deletes into a shared
/// menu store.
#[derive(Default)]
pub struct InMemoryRestaurantRepo {
    rows: Mutex<HashMap<RestaurantId, Restaurant>>,
    next_id: AtomicI64,
    menu: SharedMenuRows,
}

impl InMemoryRestaurantRepo {
    /// Build a repository whose deletes cascade into `menu`'s rows.
    pub fn with_menu(menu: &InMemoryMenuRepo) -> Self {
        Self {
            menu: Arc::clone(&menu.rows),
            ..Self::default()
        }
    }
}

impl RestaurantRepository for InMemoryRestaurantRepo {
    fn insert(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send {
        let id = RestaurantId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let row = Restaurant {
            id,
            name: restaurant.name,
            address: restaurant.address,
        };
        let mut rows = self.rows.lock().unwrap();
        rows.insert(id, row.clone());
        async { Ok(row) }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send {
        let rows = self.rows.lock().unwrap();
        let result = rows.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send {
        let rows = self.rows.lock().unwrap();
        let result: Vec<Restaurant> = rows.values().cloned().collect();
        async { Ok(result) }
    }

    fn delete(&self, id: RestaurantId) -> impl Future<Output = Result<bool, PizzeriaError>> + Send {
        let existed = self.rows.lock().unwrap().remove(&id).is_some();
        if existed {
            let mut menu = self.menu.lock().unwrap();
            menu.retain(|_, row| row.restaurant_id != id);
        }
        async move { Ok(existed) }
    }
}

/// In-memory [`PizzaRepository`].
#[derive(Default)]
pub struct InMemoryPizzaRepo {
    rows: Mutex<HashMap<PizzaId, Pizza>>,
    next_id: AtomicI64,
}

impl PizzaRepository for InMemoryPizzaRepo {
    fn insert(
        &self,
        pizza: NewPizza,
    ) -> impl Future<Output = Result<Pizza, PizzeriaError>> + Send {
        let id = PizzaId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let row = Pizza {
            id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        };
        let mut rows = self.rows.lock().unwrap();
        rows.insert(id, row.clone());
        async { Ok(row) }
    }

    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, PizzeriaError>> + Send {
        let rows = self.rows.lock().unwrap();
        let result = rows.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send {
        let rows = self.rows.lock().unwrap();
        let result: Vec<Pizza> = rows.values().cloned().collect();
        async { Ok(result) }
    }
}
