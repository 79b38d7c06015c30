//! Axum router assembly.

use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::state::AppState;

const INDEX_HTML: &str = concat!(
    "<h1>Pizzeria API</h1>\n",
    "<p>Browse <code>/restaurants</code> and <code>/pizzas</code>, ",
    "or POST to <code>/restaurant_pizzas</code>.</p>\n",
);

/// Build the top-level axum [`Router`].
///
/// Serves the JSON resource routes at the root, a static landing page at
/// `/` and a health probe at `/health`. Includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<RR, PR, MR>(state: AppState<RR, PR, MR>) -> Router
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    MR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use pizzeria_app::services::pizza_service::PizzaService;
    use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
    use pizzeria_app::services::restaurant_service::RestaurantService;
    use pizzeria_domain::error::PizzeriaError;
    use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
    use pizzeria_domain::pizza::{NewPizza, Pizza};
    use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
    use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};
    use tower::ServiceExt;

    struct StubRestaurantRepo;
    struct StubPizzaRepo;
    struct StubMenuRepo;

    impl pizzeria_app::ports::RestaurantRepository for StubRestaurantRepo {
        async fn insert(&self, restaurant: NewRestaurant) -> Result<Restaurant, PizzeriaError> {
            Ok(Restaurant {
                id: RestaurantId::from_i64(1),
                name: restaurant.name,
                address: restaurant.address,
            })
        }
        async fn get_by_id(&self, _id: RestaurantId) -> Result<Option<Restaurant>, PizzeriaError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Restaurant>, PizzeriaError> {
            Ok(vec![])
        }
        async fn delete(&self, _id: RestaurantId) -> Result<bool, PizzeriaError> {
            Ok(false)
        }
    }

    impl pizzeria_app::ports::PizzaRepository for StubPizzaRepo {
        async fn insert(&self, pizza: NewPizza) -> Result<Pizza, PizzeriaError> {
            Ok(Pizza {
                id: PizzaId::from_i64(1),
                name: pizza.name,
                ingredients: pizza.ingredients,
            })
        }
        async fn get_by_id(&self, _id: PizzaId) -> Result<Option<Pizza>, PizzeriaError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Pizza>, PizzeriaError> {
            Ok(vec![])
        }
    }

    impl pizzeria_app::ports::RestaurantPizzaRepository for StubMenuRepo {
        async fn insert(
            &self,
            association: NewRestaurantPizza,
        ) -> Result<RestaurantPizza, PizzeriaError> {
            Ok(RestaurantPizza {
                id: RestaurantPizzaId::from_i64(1),
                price: association.price,
                restaurant_id: association.restaurant_id,
                pizza_id: association.pizza_id,
            })
        }
        async fn get_by_id(
            &self,
            _id: RestaurantPizzaId,
        ) -> Result<Option<RestaurantPizza>, PizzeriaError> {
            Ok(None)
        }
        async fn find_by_restaurant_id(
            &self,
            _id: RestaurantId,
        ) -> Result<Vec<RestaurantPizza>, PizzeriaError> {
            Ok(vec![])
        }
    }

    fn test_state() -> AppState<StubRestaurantRepo, StubPizzaRepo, StubMenuRepo> {
        AppState::new(
            RestaurantService::new(StubRestaurantRepo, StubMenuRepo),
            PizzaService::new(StubPizzaRepo),
            RestaurantPizzaService::new(StubMenuRepo, StubRestaurantRepo, StubPizzaRepo),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_landing_page_as_html() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_restaurants() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/restaurants")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn should_return_not_found_body_for_missing_restaurant() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/restaurants/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Restaurant not found"}));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_restaurant() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/restaurants/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_association_with_validation_body_when_price_invalid() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/restaurant_pizzas")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"price": 42, "pizza_id": 1, "restaurant_id": 1}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"errors": ["validation errors"]}));
    }
}
