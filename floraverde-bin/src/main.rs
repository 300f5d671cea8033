use clap::Parser;
use floraverde_error::{init::InitError, FvError, FvResult};
use floraverde_models::{
    constants::DEFAULT_CONFIG_FILE_NAME, seed::CatalogSeeder, settings::Settings,
};
use floraverde_storage::FvDbManager;
use floraverde_web::{AppState, FvWebServer};
use std::{env::current_dir, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Floraverde - plant store catalog/order backend
///
/// Serves product and category data and accepts customer orders over an
/// HTTP/JSON API, persisting everything in SQLite.
#[derive(Parser)]
#[command(name = "floraverde")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Floraverde backend", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the server will look for 'floraverde.toml'
    /// in the current working directory.
    #[arg(short, long, env = "FLORAVERDE_CONFIG")]
    config: Option<PathBuf>,

    /// Reinitialize the database with the seed catalog before serving.
    /// Clears existing orders, items, products and categories.
    #[arg(long)]
    init: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> FvResult<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Determine the configuration file path; fall back to the default
    // name in the working directory.
    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| FvError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let settings = Settings::new(&config_path.to_string_lossy())?;

    // Connect and migrate. Any failure up to the point the listener is
    // bound aborts startup; there is no degraded mode.
    let db_manager = FvDbManager::init(&settings).await?;
    let db = db_manager.get_connection()?;

    if cli.init {
        CatalogSeeder::reseed(&db)
            .await
            .map_err(|e| InitError::Seed(e.to_string()))?;
    } else {
        CatalogSeeder::seed_if_empty(&db)
            .await
            .map_err(|e| InitError::Seed(e.to_string()))?;
    }

    let server = FvWebServer::create_server(&settings, AppState::new(db))?;
    server.await?;

    info!("Server stopped");
    db_manager.close().await?;
    Ok(())
}
