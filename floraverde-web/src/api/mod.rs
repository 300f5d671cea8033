//! REST API routes.
mod category;
mod order;
mod product;

use actix_web::web;

/// Configure all API routes under the router prefix.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(product::configure_routes)
        .configure(category::configure_routes)
        .configure(order::configure_routes);
}
