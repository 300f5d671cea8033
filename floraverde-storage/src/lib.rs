mod migration;
mod sql;

use floraverde_error::{init::InitError, storage::StorageError, FvResult};
use floraverde_models::settings::Settings;
use sea_orm::DatabaseConnection;
use sql::sqlite;
use std::sync::Arc;
use tracing::{info, instrument};

pub use migration::{Migrator, MigratorTrait};

/// Database manager owning the pooled SQLite connection handle.
pub struct FvDbManager {
    db_conn: Option<DatabaseConnection>,
}

impl FvDbManager {
    /// Connect and bring the schema up to date. Any failure here is fatal:
    /// the process must not serve with an unknown schema state.
    #[instrument(name = "init-db-manager", skip_all)]
    pub async fn init(settings: &Settings) -> FvResult<Arc<Self>, InitError> {
        let db = sqlite::init_db(&settings.db.sqlite)
            .await
            .map_err(|e| InitError::Database(format!("Failed to init SQLite database: {e}")))?;

        Migrator::up(&db, None)
            .await
            .map_err(|e| InitError::Migration(format!("Failed to migrate SQLite database: {e}")))?;

        let db_manager = Arc::new(FvDbManager { db_conn: Some(db) });

        info!("Database manager initialized successfully");
        Ok(db_manager)
    }

    #[inline]
    pub fn get_connection(&self) -> FvResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[instrument(name = "db-close", skip_all)]
    pub async fn close(&self) -> FvResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed successfully");
        Ok(())
    }
}
