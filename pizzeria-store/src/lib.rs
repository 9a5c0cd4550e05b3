pub mod database;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;
pub mod validation;

pub use database::{run_migrations, Database, MIGRATIONS};
pub use error::StoreError;
