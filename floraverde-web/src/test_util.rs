//! Shared helpers for in-crate handler tests: an in-memory store with the
//! schema applied, and an app wired exactly like the real router.

use crate::AppState;
use actix_web::{
    dev::{Service, ServiceResponse},
    test, web, App, Error,
};
use floraverde_storage::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub(crate) async fn setup_db() -> DatabaseConnection {
    // A single pooled connection: every pool member of an in-memory
    // SQLite would otherwise see its own database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub(crate) async fn setup_state() -> AppState {
    AppState::new(setup_db().await)
}

pub(crate) async fn setup_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api").configure(crate::api::configure_routes)),
    )
    .await
}
