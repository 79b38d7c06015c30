//! Pizza — a menu item described by its ingredient list.

use serde::{Deserialize, Serialize};

use crate::error::{PizzeriaError, ValidationError};
use crate::id::PizzaId;

/// A persisted pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
}

/// A pizza awaiting insertion; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

impl NewPizza {
    /// Create a builder for constructing a [`NewPizza`].
    #[must_use]
    pub fn builder() -> NewPizzaBuilder {
        NewPizzaBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when `name` or `ingredients`
    /// is empty.
    pub fn validate(&self) -> Result<(), PizzeriaError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.ingredients.is_empty() {
            return Err(ValidationError::EmptyIngredients.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewPizza`].
#[derive(Debug, Default)]
pub struct NewPizzaBuilder {
    name: Option<String>,
    ingredients: Option<String>,
}

impl NewPizzaBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewPizza`].
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if `name` or `ingredients` is
    /// missing or empty.
    pub fn build(self) -> Result<NewPizza, PizzeriaError> {
        let pizza = NewPizza {
            name: self.name.unwrap_or_default(),
            ingredients: self.ingredients.unwrap_or_default(),
        };
        pizza.validate()?;
        Ok(pizza)
    }
}
