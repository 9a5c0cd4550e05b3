use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::post,
};
use pizzeria_store::{models::NewRestaurantPizza, repository};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::models::*;
use crate::serializer::serialize_created_restaurant_pizza;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Restaurant pizza created", body = CreateRestaurantPizzaResponse),
        (status = 400, description = "Validation errors", body = ValidationErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRestaurantPizzaResponse>), ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%rejection, "malformed restaurant pizza");
        ApiError::ValidationFailed
    })?;

    let new_restaurant_pizza =
        NewRestaurantPizza::new(payload.price, payload.pizza_id, payload.restaurant_id).map_err(
            |err| {
                warn!(error = %err, "invalid restaurant pizza");
                ApiError::ValidationFailed
            },
        )?;

    let created = state
        .db
        .run(move |conn| repository::create_restaurant_pizza(conn, new_restaurant_pizza))
        .await
        .map_err(|err| {
            warn!(error = %err, "failed to create restaurant pizza");
            ApiError::ValidationFailed
        })?;
    info!(id = created.restaurant_pizza.id, "created restaurant pizza");

    Ok((
        StatusCode::CREATED,
        Json(serialize_created_restaurant_pizza(&created)),
    ))
}
