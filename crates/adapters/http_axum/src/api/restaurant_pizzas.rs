//! JSON REST handlers for restaurant-pizza associations.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::id::{PizzaId, RestaurantId};

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::RestaurantPizzaDetail;

/// Request body for creating an association.
#[derive(Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<RestaurantPizzaDetail>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /restaurant_pizzas`
pub async fn create<RR, PR, MR>(
    State(state): State<AppState<RR, PR, MR>>,
    Json(req): Json<CreateRestaurantPizzaRequest>,
) -> Result<CreateResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    MR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let item = state
        .restaurant_pizza_service
        .create(
            req.price,
            PizzaId::from_i64(req.pizza_id),
            RestaurantId::from_i64(req.restaurant_id),
        )
        .await?;
    Ok(CreateResponse::Created(Json(item.into())))
}
