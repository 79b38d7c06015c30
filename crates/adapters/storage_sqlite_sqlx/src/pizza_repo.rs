//! `SQLite` implementation of [`PizzaRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pizzeria_app::ports::PizzaRepository;
use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::PizzaId;
use pizzeria_domain::pizza::{NewPizza, Pizza};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Pizza`].
struct Wrapper(Pizza);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Pizza> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let ingredients: String = row.try_get("ingredients")?;

        Ok(Self(Pizza {
            id: PizzaId::from_i64(id),
            name,
            ingredients,
        }))
    }
}

const INSERT: &str = "INSERT INTO pizzas (name, ingredients) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM pizzas WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM pizzas ORDER BY id";

/// `SQLite`-backed pizza repository.
pub struct SqlitePizzaRepository {
    pool: SqlitePool,
}

impl SqlitePizzaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PizzaRepository for SqlitePizzaRepository {
    fn insert(&self, pizza: NewPizza) -> impl Future<Output = Result<Pizza, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&pizza.name)
                .bind(&pizza.ingredients)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Pizza {
                id: PizzaId::from_i64(result.last_insert_rowid()),
                name: pizza.name,
                ingredients: pizza.ingredients,
            })
        }
    }

    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, PizzeriaError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqlitePizzaRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqlitePizzaRepository::new(db.pool().clone())
    }

    fn test_pizza() -> NewPizza {
        NewPizza::builder()
            .name("Emma")
            .ingredients("Dough, Tomato Sauce, Cheese")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_pizza_when_valid() {
        let repo = setup().await;

        let created = repo.insert(test_pizza()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.ingredients, "Dough, Tomato Sauce, Cheese");
    }

    #[tokio::test]
    async fn should_return_none_when_pizza_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(PizzaId::from_i64(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_pizzas_in_id_order() {
        let repo = setup().await;
        let first = repo.insert(test_pizza()).await.unwrap();
        let second = repo
            .insert(
                NewPizza::builder()
                    .name("Geri")
                    .ingredients("Dough, Tomato Sauce, Cheese, Pepperoni")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }
}
