use axum::{Router, extract::State, response::Json, routing::get};
use pizzeria_store::repository;
use tracing::instrument;

use crate::error::ApiError;
use crate::models::*;
use crate::serializer::serialize_pizza;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = [PizzaResponse]),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaResponse>>, ApiError> {
    let pizzas = state.db.run(repository::list_pizzas).await?;

    Ok(Json(pizzas.iter().map(serialize_pizza).collect()))
}
