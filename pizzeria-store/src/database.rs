use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

use crate::error::StoreError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Applied to every connection the pool hands out. SQLite keeps foreign key
/// enforcement off unless each connection asks for it.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Handle to the pizzeria database, passed explicitly to whoever needs it.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn connect(database_url: &str, pool_size: u32) -> Result<Self, StoreError> {
        let pool = Pool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout: Duration::from_secs(5),
            }))
            .build(ConnectionManager::<SqliteConnection>::new(database_url))?;
        Ok(Self { pool })
    }

    /// A private in-memory database. The pool holds exactly one connection
    /// that is never recycled, otherwise the data would vanish with it.
    pub fn in_memory() -> Result<Self, StoreError> {
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout: Duration::from_secs(5),
            }))
            .build(ConnectionManager::<SqliteConnection>::new(":memory:"))?;
        Ok(Self { pool })
    }

    /// Runs blocking diesel work on the blocking thread pool with a pooled
    /// connection.
    pub async fn run<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut *conn)
        })
        .await?
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        self.run(run_migrations).await
    }
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use diesel::prelude::*;

    use super::*;
    use crate::schema::restaurants;

    #[tokio::test]
    async fn test_in_memory_database_keeps_state_between_runs() {
        let db = Database::in_memory().unwrap();
        db.run_migrations().await.unwrap();

        db.run(|conn| {
            diesel::insert_into(restaurants::table)
                .values((
                    restaurants::name.eq("Test Restaurant"),
                    restaurants::address.eq("Test Address"),
                ))
                .execute(conn)?;
            Ok(())
        })
        .await
        .unwrap();

        let count: i64 = db
            .run(|conn| Ok(restaurants::table.count().get_result::<i64>(conn)?))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_foreign_keys_enabled() {
        let db = Database::in_memory().unwrap();
        let enabled: i32 = db
            .run(|conn| {
                #[derive(QueryableByName)]
                struct Pragma {
                    #[diesel(sql_type = diesel::sql_types::Integer)]
                    foreign_keys: i32,
                }
                let row = diesel::sql_query("PRAGMA foreign_keys").get_result::<Pragma>(conn)?;
                Ok(row.foreign_keys)
            })
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = Database::in_memory().unwrap();
        db.run_migrations().await.unwrap();
        db.run_migrations().await.unwrap();
    }
}
