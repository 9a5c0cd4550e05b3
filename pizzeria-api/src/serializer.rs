//! Builds the JSON views of store rows. Each view embeds related rows in one
//! direction only, so a restaurant's pizzas never point back at it.

use pizzeria_store::models::{
    CreatedRestaurantPizza, Pizza, Restaurant, RestaurantDetails, RestaurantPizza,
};

use crate::models::{
    CreateRestaurantPizzaResponse, PizzaResponse, RestaurantDetailsResponse,
    RestaurantPizzaResponse, RestaurantResponse,
};

pub fn serialize_restaurant(restaurant: &Restaurant) -> RestaurantResponse {
    RestaurantResponse {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
    }
}

pub fn serialize_pizza(pizza: &Pizza) -> PizzaResponse {
    PizzaResponse {
        id: pizza.id,
        name: pizza.name.clone(),
        ingredients: pizza.ingredients.clone(),
    }
}

pub fn serialize_restaurant_pizza(
    restaurant_pizza: &RestaurantPizza,
    pizza: &Pizza,
) -> RestaurantPizzaResponse {
    RestaurantPizzaResponse {
        id: restaurant_pizza.id,
        price: restaurant_pizza.price,
        pizza_id: restaurant_pizza.pizza_id,
        restaurant_id: restaurant_pizza.restaurant_id,
        pizza: serialize_pizza(pizza),
    }
}

pub fn serialize_restaurant_details(details: &RestaurantDetails) -> RestaurantDetailsResponse {
    RestaurantDetailsResponse {
        id: details.restaurant.id,
        name: details.restaurant.name.clone(),
        address: details.restaurant.address.clone(),
        restaurant_pizzas: details
            .restaurant_pizzas
            .iter()
            .map(|(rp, pizza)| serialize_restaurant_pizza(rp, pizza))
            .collect(),
    }
}

pub fn serialize_created_restaurant_pizza(
    created: &CreatedRestaurantPizza,
) -> CreateRestaurantPizzaResponse {
    let rp = &created.restaurant_pizza;
    CreateRestaurantPizzaResponse {
        id: rp.id,
        price: rp.price,
        pizza_id: rp.pizza_id,
        restaurant_id: rp.restaurant_id,
        pizza: serialize_pizza(&created.pizza),
        restaurant: serialize_restaurant(&created.restaurant),
    }
}
