//! `SQLite` implementation of [`RestaurantPizzaRepository`].

use std::future::Future;

use sqlx::error::DatabaseError;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pizzeria_app::ports::RestaurantPizzaRepository;
use pizzeria_domain::error::{PizzeriaError, ValidationError};
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`RestaurantPizza`].
struct Wrapper(RestaurantPizza);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<RestaurantPizza> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let price: i64 = row.try_get("price")?;
        let restaurant_id: i64 = row.try_get("restaurant_id")?;
        let pizza_id: i64 = row.try_get("pizza_id")?;

        Ok(Self(RestaurantPizza {
            id: RestaurantPizzaId::from_i64(id),
            price,
            restaurant_id: RestaurantId::from_i64(restaurant_id),
            pizza_id: PizzaId::from_i64(pizza_id),
        }))
    }
}

const INSERT: &str =
    "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM restaurant_pizzas WHERE id = ?";
const SELECT_BY_RESTAURANT: &str =
    "SELECT * FROM restaurant_pizzas WHERE restaurant_id = ? ORDER BY id";
const SELECT_PIZZA_ID: &str = "SELECT id FROM pizzas WHERE id = ?";

/// `SQLite`-backed restaurant-pizza repository.
pub struct SqliteRestaurantPizzaRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantPizzaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Turn an insert failure into a domain error.
///
/// Foreign-key violations mean the caller raced a delete of one of the
/// referenced rows; look up which side is gone so the error names it.
async fn map_insert_error(
    pool: &SqlitePool,
    association: NewRestaurantPizza,
    err: sqlx::Error,
) -> PizzeriaError {
    let fk_violation = err
        .as_database_error()
        .is_some_and(DatabaseError::is_foreign_key_violation);
    if !fk_violation {
        return StorageError::from(err).into();
    }

    let pizza: Result<Option<(i64,)>, sqlx::Error> = sqlx::query_as(SELECT_PIZZA_ID)
        .bind(association.pizza_id.as_i64())
        .fetch_optional(pool)
        .await;

    match pizza {
        Ok(Some(_)) => ValidationError::UnknownRestaurant(association.restaurant_id).into(),
        Ok(None) => ValidationError::UnknownPizza(association.pizza_id).into(),
        Err(err) => StorageError::from(err).into(),
    }
}

impl RestaurantPizzaRepository for SqliteRestaurantPizzaRepository {
    fn insert(
        &self,
        association: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(association.price)
                .bind(association.restaurant_id.as_i64())
                .bind(association.pizza_id.as_i64())
                .execute(&pool)
                .await;

            let result = match result {
                Ok(result) => result,
                Err(err) => return Err(map_insert_error(&pool, association, err).await),
            };

            Ok(RestaurantPizza {
                id: RestaurantPizzaId::from_i64(result.last_insert_rowid()),
                price: association.price,
                restaurant_id: association.restaurant_id,
                pizza_id: association.pizza_id,
            })
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantPizzaId,
    ) -> impl Future<Output = Result<Option<RestaurantPizza>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_by_restaurant_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizza>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_RESTAURANT)
                .bind(id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
