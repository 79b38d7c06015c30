//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pizzeria_domain::error::PizzeriaError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON body returned for rejected writes. The `errors` array carries a
/// single generic message regardless of which rule failed.
#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<&'static str>,
}

/// Maps [`PizzeriaError`] to an HTTP response with appropriate status code.
pub struct ApiError(PizzeriaError);

impl From<PizzeriaError> for ApiError {
    fn from(err: PizzeriaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            PizzeriaError::Validation(err) => {
                tracing::debug!(error = %err, "rejected invalid request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationBody {
                        errors: vec!["validation errors"],
                    }),
                )
                    .into_response()
            }
            PizzeriaError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            PizzeriaError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_domain::error::{NotFoundError, ValidationError};
    use pizzeria_domain::id::RestaurantId;

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let err = ApiError::from(PizzeriaError::from(ValidationError::PriceOutOfRange(42)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_missing_restaurant_to_not_found() {
        let err = ApiError::from(PizzeriaError::from(NotFoundError {
            entity: "Restaurant",
            id: RestaurantId::from_i64(7).to_string(),
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_storage_details_behind_internal_error() {
        let err = ApiError::from(PizzeriaError::Storage(Box::new(std::io::Error::other(
            "disk on fire",
        ))));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
