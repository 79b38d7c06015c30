//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PizzeriaError`] via `#[from]`. Adapters box their errors into the
//! [`Storage`](PizzeriaError::Storage) variant so the domain stays free of
//! IO dependencies.

use crate::id::{PizzaId, RestaurantId};

/// Top-level error for all domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum PizzeriaError {
    /// A domain invariant was violated by caller input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on entity creation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A restaurant or pizza name was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// A restaurant address was empty.
    #[error("address must not be empty")]
    EmptyAddress,

    /// A pizza ingredient list was empty.
    #[error("ingredients must not be empty")]
    EmptyIngredients,

    /// A menu price fell outside the accepted range.
    #[error("price must be between 1 and 30, got {0}")]
    PriceOutOfRange(i64),

    /// An association referenced a pizza that does not exist.
    #[error("pizza {0} does not exist")]
    UnknownPizza(PizzaId),

    /// An association referenced a restaurant that does not exist.
    #[error("restaurant {0} does not exist")]
    UnknownRestaurant(RestaurantId),
}

/// A lookup by primary key found no row.
///
/// The display form is part of the HTTP contract: a missing restaurant
/// renders as `Restaurant not found`.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Restaurant"`.
    pub entity: &'static str,
    /// Stringified primary key that was requested.
    pub id: String,
}
