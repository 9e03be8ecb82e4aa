use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use promo_core::MatchOutcome;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/search", get(search))
}

/// Single search endpoint: validate, query primary then fallback, return
/// the winning promotion or a typed error response.
pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let input = match query.into_input() {
        Ok(input) => input,
        Err(details) => return errors::validation_error(details),
    };

    let criteria = match promo_core::validate(&input) {
        Ok(criteria) => criteria,
        Err(details) => return errors::validation_error(details),
    };

    match services.lookup.lookup(&criteria).await {
        Ok(MatchOutcome::Found { promotion, tier }) => {
            tracing::debug!(tier = ?tier, promotion_id = %promotion.id, "search matched");
            (StatusCode::OK, Json(dto::PromotionResponse::from(promotion))).into_response()
        }
        Ok(MatchOutcome::NotFound { field, value }) => errors::not_found(&field, &value),
        Err(err) => {
            tracing::error!(error = %err, "promotion store query failed");
            errors::server_error()
        }
    }
}
