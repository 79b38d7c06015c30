//! Restaurant — a venue that offers pizzas through priced menu entries.

use serde::{Deserialize, Serialize};

use crate::error::{PizzeriaError, ValidationError};
use crate::id::RestaurantId;

/// A persisted restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

/// A restaurant awaiting insertion; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    /// Create a builder for constructing a [`NewRestaurant`].
    #[must_use]
    pub fn builder() -> NewRestaurantBuilder {
        NewRestaurantBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when `name` or `address` is
    /// empty.
    pub fn validate(&self) -> Result<(), PizzeriaError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.address.is_empty() {
            return Err(ValidationError::EmptyAddress.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewRestaurant`].
#[derive(Debug, Default)]
pub struct NewRestaurantBuilder {
    name: Option<String>,
    address: Option<String>,
}

impl NewRestaurantBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewRestaurant`].
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if `name` or `address` is
    /// missing or empty.
    pub fn build(self) -> Result<NewRestaurant, PizzeriaError> {
        let restaurant = NewRestaurant {
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
        };
        restaurant.validate()?;
        Ok(restaurant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_restaurant_when_fields_provided() {
        let restaurant = NewRestaurant::builder()
            .name("Karen's Pizza Shack")
            .address("address1")
            .build()
            .unwrap();
        assert_eq!(restaurant.name, "Karen's Pizza Shack");
        assert_eq!(restaurant.address, "address1");
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = NewRestaurant::builder().address("address1").build();
        assert!(matches!(
            result,
            Err(PizzeriaError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_address_is_empty() {
        let result = NewRestaurant::builder().name("Kiki's Pizza").build();
        assert!(matches!(
            result,
            Err(PizzeriaError::Validation(ValidationError::EmptyAddress))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let restaurant = Restaurant {
            id: RestaurantId::from_i64(1),
            name: "Sanjay's Pizza".to_string(),
            address: "address2".to_string(),
        };
        let json = serde_json::to_string(&restaurant).unwrap();
        let parsed: Restaurant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, restaurant);
    }
}
