use crate::AppState;
use actix_web::{web, HttpResponse};
use floraverde_error::{web::WebError, WebResult};
use floraverde_models::domain::prelude::{IdQuery, ProductListQuery, ProductPayload};
use serde_json::json;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/products";

/// Configure product routes
///
/// # Routes
/// - GET `/products`: list products, optionally filtered by `?category=NAME`
/// - POST `/products`: create a new product
/// - PUT `/products?id=N`: replace an existing product
/// - DELETE `/products?id=N`: delete a product
///
/// Any other verb on the resource is answered with 405.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(ROUTER_PREFIX)
            .route(web::get().to(list_products))
            .route(web::post().to(create_product))
            .route(web::put().to(update_product))
            .route(web::delete().to(delete_product)),
    );
}

async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductListQuery>,
) -> WebResult<HttpResponse> {
    let products = state.products.find_all(query.category_filter()).await?;
    Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "create-product", skip_all)]
async fn create_product(
    state: web::Data<AppState>,
    payload: web::Json<ProductPayload>,
) -> WebResult<HttpResponse> {
    let created = state.products.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[instrument(name = "update-product", skip_all)]
async fn update_product(
    state: web::Data<AppState>,
    query: web::Query<IdQuery>,
    payload: web::Json<ProductPayload>,
) -> WebResult<HttpResponse> {
    let mut payload = payload.into_inner();
    // The query parameter wins over the payload id when both are given.
    if let Some(id) = query.id {
        payload.id = id;
    }
    if payload.id == 0 {
        return Err(WebError::BadRequest("product id is required".to_string()));
    }

    let updated = state.products.update(payload).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(name = "delete-product", skip_all)]
async fn delete_product(
    state: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> WebResult<HttpResponse> {
    let id = query
        .id
        .ok_or_else(|| WebError::BadRequest("product id is required".to_string()))?;

    state.products.delete(id).await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "deleted" })))
}
