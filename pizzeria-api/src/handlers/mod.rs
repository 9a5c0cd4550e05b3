pub mod docs;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use docs::router as docs_router;
pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use pizzeria_store::Database;
use utoipa::OpenApi;

use crate::models::*;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            RestaurantResponse,
            RestaurantDetailsResponse,
            RestaurantPizzaResponse,
            PizzaResponse,
            CreateRestaurantPizzaRequest,
            CreateRestaurantPizzaResponse,
            ApiErrorResponse,
            ValidationErrorResponse,
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Prices of pizzas at restaurants")
    ),
    info(
        title = "Pizzeria API",
        description = "Restaurants, pizzas and what they cost where",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
