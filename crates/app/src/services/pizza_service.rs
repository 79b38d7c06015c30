//! Pizza service — use-cases for listing pizzas.

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::pizza::{NewPizza, Pizza};

use crate::ports::PizzaRepository;

/// Application service for pizza operations.
pub struct PizzaService<PR> {
    pizzas: PR,
}

impl<PR: PizzaRepository> PizzaService<PR> {
    /// Create a new service backed by the given repository.
    pub fn new(pizzas: PR) -> Self {
        Self { pizzas }
    }

    /// Create a new pizza after validating domain invariants.
    ///
    /// Not exposed over HTTP; used by seeding and tests.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_pizza(&self, pizza: NewPizza) -> Result<Pizza, PizzeriaError> {
        pizza.validate()?;
        self.pizzas.insert(pizza).await
    }

    /// List all pizzas.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, PizzeriaError> {
        self.pizzas.get_all().await
    }
}
