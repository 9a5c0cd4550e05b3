use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::error::StoreError;
use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant};
use crate::repository::insert_restaurant_pizza;
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (price, pizza index, restaurant index)
const RESTAURANT_PIZZAS: [(i32, usize, usize); 4] = [(1, 0, 0), (4, 1, 1), (5, 2, 2), (12, 0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replaces every row with the fixed sample data. Ids restart at 1.
pub fn seed(conn: &mut SqliteConnection) -> Result<SeedSummary, StoreError> {
    conn.immediate_transaction(|conn| {
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(pizzas::table).execute(conn)?;
        diesel::delete(restaurants::table).execute(conn)?;
        diesel::sql_query(
            "DELETE FROM sqlite_sequence \
             WHERE name IN ('restaurants', 'pizzas', 'restaurant_pizzas')",
        )
        .execute(conn)?;

        let mut created_restaurants = Vec::with_capacity(RESTAURANTS.len());
        for (name, address) in RESTAURANTS {
            let restaurant = diesel::insert_into(restaurants::table)
                .values(NewRestaurant { name, address })
                .returning(Restaurant::as_returning())
                .get_result(conn)?;
            created_restaurants.push(restaurant);
        }

        let mut created_pizzas = Vec::with_capacity(PIZZAS.len());
        for (name, ingredients) in PIZZAS {
            let pizza = diesel::insert_into(pizzas::table)
                .values(NewPizza { name, ingredients })
                .returning(Pizza::as_returning())
                .get_result(conn)?;
            created_pizzas.push(pizza);
        }

        for (price, pizza, restaurant) in RESTAURANT_PIZZAS {
            let new = NewRestaurantPizza::new(
                price,
                created_pizzas[pizza].id,
                created_restaurants[restaurant].id,
            )?;
            insert_restaurant_pizza(conn, new)?;
        }

        let summary = SeedSummary {
            restaurants: created_restaurants.len(),
            pizzas: created_pizzas.len(),
            restaurant_pizzas: RESTAURANT_PIZZAS.len(),
        };
        info!(?summary, "seeded database");
        Ok(summary)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::run_migrations;
    use crate::repository::{find_restaurant_details, list_pizzas, list_restaurants};

    fn setup_database() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        run_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_seed() {
        let conn = &mut setup_database();
        let summary = seed(conn).unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                restaurants: 3,
                pizzas: 3,
                restaurant_pizzas: 4,
            }
        );

        let restaurants = list_restaurants(conn).unwrap();
        assert_eq!(restaurants[0].id, 1);
        assert_eq!(restaurants[0].name, "Karen's Pizza Shack");
        assert_eq!(list_pizzas(conn).unwrap()[0].id, 1);

        let details = find_restaurant_details(conn, 2).unwrap();
        assert_eq!(details.restaurant_pizzas.len(), 2);
    }

    #[test]
    fn test_seed_twice_restarts_ids() {
        let conn = &mut setup_database();
        seed(conn).unwrap();
        seed(conn).unwrap();

        let restaurants = list_restaurants(conn).unwrap();
        assert_eq!(restaurants.len(), 3);
        assert_eq!(restaurants[0].id, 1);
    }
}
