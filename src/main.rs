use deed_drafter::{
    api::{self, AppState},
    config::{
        self,
        database::{create_connection, create_tables, get_database_url},
    },
    core::reference::seed_reference_data,
    errors::{Error, Result},
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Connect and create any missing tables
    let db = create_connection(&get_database_url())
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Seed reference data declared in config.toml
    seed_reference_data(&db, &app_config.reference)
        .await
        .inspect_err(|e| error!("Failed to seed reference data: {}", e))?;

    // 6. Serve the API until ctrl-c
    let listener = tokio::net::TcpListener::bind(&app_config.server.bind_address).await?;
    info!("Listening on {}", listener.local_addr()?);

    let app = api::router(AppState::new(db, app_config.defaults));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Server {
            message: e.to_string(),
        })?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
