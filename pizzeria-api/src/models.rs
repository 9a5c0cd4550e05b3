use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RestaurantResponse {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Address of the restaurant
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PizzaResponse {
    /// Unique identifier for the pizza
    pub id: i32,
    /// Name of the pizza
    pub name: String,
    /// Comma separated ingredients
    pub ingredients: String,
}

/// A restaurant pizza as listed under its restaurant. Does not embed the
/// restaurant again.
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RestaurantPizzaResponse {
    pub id: i32,
    /// Price in whole currency units, 1 to 30
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaResponse,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RestaurantDetailsResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaResponse>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price in whole currency units, 1 to 30
    pub price: i32,
    /// Id of an existing pizza
    pub pizza_id: i32,
    /// Id of an existing restaurant
    pub restaurant_id: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CreateRestaurantPizzaResponse {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaResponse,
    pub restaurant: RestaurantResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Always `["validation errors"]`
    pub errors: Vec<String>,
}
