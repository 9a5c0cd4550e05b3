use clap::{Parser, Subcommand};
use pizzeria_api::{app, config::Config, handlers::AppState};
use pizzeria_store::{Database, seed::seed};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations and serve the HTTP API (default)
    Serve,
    /// Apply pending migrations and exit
    Migrate,
    /// Replace all rows with the sample restaurants and pizzas
    Seed,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let db = Database::connect(&config.database_url, config.pool_size)?;
    db.run_migrations().await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config, db).await,
        Commands::Migrate => Ok(()),
        Commands::Seed => {
            let summary = db.run(seed).await?;
            info!(
                restaurants = summary.restaurants,
                pizzas = summary.pizzas,
                restaurant_pizzas = summary.restaurant_pizzas,
                "seed complete"
            );
            Ok(())
        }
    }
}

async fn serve(config: Config, db: Database) -> Result<(), Box<dyn std::error::Error>> {
    let app = app(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(database = %config.database_url, "Pizzeria API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
