use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod serializer;

use handlers::{AppState, docs_router, pizza_router, restaurant_pizza_router, restaurant_router};

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(docs_router())
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
