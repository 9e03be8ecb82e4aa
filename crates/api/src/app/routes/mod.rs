use axum::Router;

pub mod promotions;
pub mod system;

pub fn router() -> Router {
    Router::new().nest("/admin/promotions", promotions::router())
}
