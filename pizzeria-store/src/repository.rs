//! Queries over restaurants, pizzas and the prices that link them.
//!
//! Every function takes the connection explicitly. Writes run in a single
//! `BEGIN IMMEDIATE` transaction that rolls back on any error: SQLite fails
//! a read lock upgrade under contention with SQLITE_BUSY without waiting on
//! the busy timeout.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::error::StoreError;
use crate::models::{
    CreatedRestaurantPizza, NewRestaurantPizza, Pizza, Restaurant, RestaurantDetails,
    RestaurantPizza,
};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

pub fn list_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>, StoreError> {
    Ok(restaurants::table
        .select(Restaurant::as_select())
        .order(restaurants::id)
        .load(conn)?)
}

pub fn find_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> Result<Restaurant, StoreError> {
    restaurants::table
        .find(restaurant_id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| StoreError::not_found("restaurant", restaurant_id))
}

pub fn find_pizza(conn: &mut SqliteConnection, pizza_id: i32) -> Result<Pizza, StoreError> {
    pizzas::table
        .find(pizza_id)
        .select(Pizza::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| StoreError::not_found("pizza", pizza_id))
}

/// Loads a restaurant and each of its restaurant pizzas paired with the pizza.
pub fn find_restaurant_details(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> Result<RestaurantDetails, StoreError> {
    conn.transaction(|conn| {
        let restaurant = find_restaurant(conn, restaurant_id)?;
        let restaurant_pizzas = RestaurantPizza::belonging_to(&restaurant)
            .inner_join(pizzas::table)
            .select((RestaurantPizza::as_select(), Pizza::as_select()))
            .order(restaurant_pizzas::id)
            .load::<(RestaurantPizza, Pizza)>(conn)?;

        Ok(RestaurantDetails {
            restaurant,
            restaurant_pizzas,
        })
    })
}

/// Deletes a restaurant along with its restaurant pizzas. Returns how many
/// restaurant pizzas went with it.
pub fn delete_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> Result<usize, StoreError> {
    conn.immediate_transaction(|conn| {
        let removed = diesel::delete(
            restaurant_pizzas::table.filter(restaurant_pizzas::restaurant_id.eq(restaurant_id)),
        )
        .execute(conn)?;

        let deleted = diesel::delete(restaurants::table.find(restaurant_id)).execute(conn)?;
        if deleted == 0 {
            return Err(StoreError::not_found("restaurant", restaurant_id));
        }

        Ok(removed)
    })
}

pub fn list_pizzas(conn: &mut SqliteConnection) -> Result<Vec<Pizza>, StoreError> {
    Ok(pizzas::table
        .select(Pizza::as_select())
        .order(pizzas::id)
        .load(conn)?)
}

pub fn count_restaurant_pizzas(
    conn: &mut SqliteConnection,
    restaurant_id: Option<i32>,
) -> Result<i64, StoreError> {
    let count: i64 = match restaurant_id {
        Some(restaurant_id) => restaurant_pizzas::table
            .filter(restaurant_pizzas::restaurant_id.eq(restaurant_id))
            .count()
            .get_result(conn)?,
        None => restaurant_pizzas::table.count().get_result(conn)?,
    };
    Ok(count)
}

pub fn create_restaurant_pizza(
    conn: &mut SqliteConnection,
    new_restaurant_pizza: NewRestaurantPizza,
) -> Result<CreatedRestaurantPizza, StoreError> {
    conn.immediate_transaction(|conn| insert_restaurant_pizza(conn, new_restaurant_pizza))
}

/// Resolves both references and inserts. Opens no transaction of its own,
/// so callers already inside one can use it.
pub(crate) fn insert_restaurant_pizza(
    conn: &mut SqliteConnection,
    new_restaurant_pizza: NewRestaurantPizza,
) -> Result<CreatedRestaurantPizza, StoreError> {
    let pizza = find_pizza(conn, new_restaurant_pizza.pizza_id())?;
    let restaurant = find_restaurant(conn, new_restaurant_pizza.restaurant_id())?;

    let restaurant_pizza = diesel::insert_into(restaurant_pizzas::table)
        .values(&new_restaurant_pizza)
        .returning(RestaurantPizza::as_returning())
        .get_result(conn)?;

    Ok(CreatedRestaurantPizza {
        restaurant_pizza,
        pizza,
        restaurant,
    })
}
