use crate::AppState;
use actix_web::{web, HttpResponse};
use floraverde_error::WebResult;

pub(super) const ROUTER_PREFIX: &str = "/categories";

/// Configure category routes. Categories are read-only: they exist from
/// seed time onward and have no write endpoints.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(ROUTER_PREFIX).route(web::get().to(list_categories)));
}

async fn list_categories(state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let categories = state.categories.find_all().await?;
    Ok(HttpResponse::Ok().json(categories))
}
