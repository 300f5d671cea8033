//! Web server for the Floraverde catalog/order API.
mod api;
mod middleware;
mod static_ui;

#[cfg(test)]
mod test_util;

use actix_web::{
    dev::Server,
    middleware::{Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use floraverde_error::init::InitError;
use floraverde_models::settings::Settings;
use floraverde_repository::{CategoryRepository, OrderRepository, ProductRepository};
use sea_orm::DatabaseConnection;
use tracing::info;

/// Shared application state: one repository per aggregate, each holding a
/// clone of the same pooled connection handle. Constructed once at
/// startup and injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductRepository,
    pub categories: CategoryRepository,
    pub orders: OrderRepository,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: ProductRepository::new(db.clone()),
            categories: CategoryRepository::new(db.clone()),
            orders: OrderRepository::new(db),
        }
    }
}

/// FvWebServer handles HTTP server construction and binding.
pub struct FvWebServer;

impl FvWebServer {
    /// Create and bind the HTTP server. A bind failure is fatal.
    pub fn create_server(settings: &Settings, state: AppState) -> Result<Server, InitError> {
        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let router_prefix = settings.web.router_prefix.clone();
        let static_dir = settings.web.static_dir.clone();

        let server = HttpServer::new(move || {
            let mut app = App::new()
                .app_data(Data::new(state.clone()))
                .wrap(middleware::cors::middleware())
                .wrap(Logger::default())
                .wrap(NormalizePath::trim())
                .service(web::scope(&router_prefix).configure(api::configure_routes));

            // Static front-end assets are external collaborators; serve
            // them only when the configured directory actually exists.
            if static_ui::enabled(&static_dir) {
                let dir = static_dir.clone();
                app = app.configure(move |cfg| static_ui::configure_ui_routes(cfg, &dir));
            }

            app
        })
        .bind(&addr)
        .map_err(|e| InitError::Bind(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!("HTTP server listening on {addr}");
        Ok(server.run())
    }
}
