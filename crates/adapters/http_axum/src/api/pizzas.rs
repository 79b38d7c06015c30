//! JSON REST handlers for pizzas.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::PizzaView;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<PizzaView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /pizzas`
pub async fn list<RR, PR, MR>(
    State(state): State<AppState<RR, PR, MR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    MR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let pizzas = state.pizza_service.list_pizzas().await?;
    Ok(ListResponse::Ok(Json(
        pizzas.into_iter().map(PizzaView::from).collect(),
    )))
}
