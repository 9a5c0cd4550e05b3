use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Json,
    routing::get,
};
use pizzeria_store::repository;
use tracing::{info, instrument};

use crate::error::{ApiError, RESTAURANT_NOT_FOUND};
use crate::models::*;
use crate::serializer::{serialize_restaurant, serialize_restaurant_details};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

// Any id that is not an integer cannot name a restaurant.
fn restaurant_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::NotFound(RESTAURANT_NOT_FOUND))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = [RestaurantResponse]),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    let restaurants = state.db.run(repository::list_restaurants).await?;

    Ok(Json(restaurants.iter().map(serialize_restaurant).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant details", body = RestaurantDetailsResponse),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetailsResponse>, ApiError> {
    let id = restaurant_id(id)?;

    let details = state
        .db
        .run(move |conn| repository::find_restaurant_details(conn, id))
        .await
        .map_err(ApiError::restaurant_lookup)?;

    Ok(Json(serialize_restaurant_details(&details)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its restaurant pizzas deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(id)?;

    let removed = state
        .db
        .run(move |conn| repository::delete_restaurant(conn, id))
        .await
        .map_err(ApiError::restaurant_lookup)?;
    info!(restaurant_id = id, restaurant_pizzas = removed, "deleted restaurant");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use pizzeria_store::repository;
    use serde_json::json;

    use super::super::test_support::*;

    #[tokio::test]
    async fn test_list_restaurants() {
        let state = setup_state().await;
        let (status, body) = request_json(create_test_app(&state), "GET", "/restaurants").await;

        assert_eq!(status, StatusCode::OK);
        let restaurants = body.as_array().unwrap();
        assert_eq!(restaurants.len(), 3);
        assert_eq!(
            restaurants[0],
            json!({ "id": 1, "name": "Karen's Pizza Shack", "address": "address1" })
        );
        assert!(
            restaurants
                .iter()
                .all(|r| r.get("restaurant_pizzas").is_none())
        );
    }

    #[tokio::test]
    async fn test_list_restaurants_matches_row_count() {
        let state = setup_state().await;
        state
            .db
            .run(|conn| repository::delete_restaurant(conn, 3))
            .await
            .unwrap();

        let (_, body) = request_json(create_test_app(&state), "GET", "/restaurants").await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_restaurant() {
        let state = setup_state().await;
        let (status, body) =
            request_json(create_test_app(&state), "GET", "/restaurants/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 2);
        assert_eq!(body["name"], "Sanjay's Pizza");
        assert_eq!(body["address"], "address2");

        let restaurant_pizzas = body["restaurant_pizzas"].as_array().unwrap();
        assert_eq!(restaurant_pizzas.len(), 2);
        for rp in restaurant_pizzas {
            assert_eq!(rp["restaurant_id"], 2);
            assert_eq!(rp["pizza"]["id"], rp["pizza_id"]);
            assert!(rp.get("restaurant").is_none());
        }
        assert_eq!(restaurant_pizzas[0]["pizza"]["name"], "Geri");
    }

    #[tokio::test]
    async fn test_get_restaurant_not_found() {
        let state = setup_state().await;
        for uri in ["/restaurants/0", "/restaurants/999", "/restaurants/abc"] {
            let (status, body) = request_json(create_test_app(&state), "GET", uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "error": "Restaurant not found" }));
        }
    }

    #[tokio::test]
    async fn test_delete_restaurant() {
        let state = setup_state().await;
        assert_eq!(restaurant_pizza_count(&state, Some(2)).await, 2);

        let request = Request::builder()
            .method("DELETE")
            .uri("/restaurants/2")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(create_test_app(&state), request).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = request_json(create_test_app(&state), "GET", "/restaurants/2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert_eq!(restaurant_pizza_count(&state, Some(2)).await, 0);
        assert_eq!(restaurant_pizza_count(&state, None).await, 2);
    }

    #[tokio::test]
    async fn test_delete_restaurant_not_found() {
        let state = setup_state().await;
        let (status, body) =
            request_json(create_test_app(&state), "DELETE", "/restaurants/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Restaurant not found" }));
    }
}
