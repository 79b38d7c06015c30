//! JSON REST handlers for restaurants.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::id::RestaurantId;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::{RestaurantDetail, RestaurantSummary};

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RestaurantSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RestaurantDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /restaurants`
pub async fn list<RR, PR, MR>(
    State(state): State<AppState<RR, PR, MR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    MR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(ListResponse::Ok(Json(
        restaurants.into_iter().map(RestaurantSummary::from).collect(),
    )))
}

/// `GET /restaurants/{id}`
pub async fn get<RR, PR, MR>(
    State(state): State<AppState<RR, PR, MR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    MR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let detail = state
        .restaurant_service
        .get_restaurant(RestaurantId::from_i64(id))
        .await?;
    Ok(GetResponse::Ok(Json(detail.into())))
}

/// `DELETE /restaurants/{id}`
pub async fn delete<RR, PR, MR>(
    State(state): State<AppState<RR, PR, MR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    MR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    state
        .restaurant_service
        .delete_restaurant(RestaurantId::from_i64(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}
