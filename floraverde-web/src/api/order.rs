use crate::AppState;
use actix_web::{web, HttpResponse};
use floraverde_error::WebResult;
use floraverde_models::domain::prelude::NewOrder;
use serde_json::json;
use tracing::instrument;

pub(super) const ROUTER_PREFIX: &str = "/orders";

/// Configure order routes. Orders are create-only; any other verb is
/// answered with 405.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(ROUTER_PREFIX).route(web::post().to(create_order)));
}

#[instrument(name = "create-order", skip_all)]
async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<NewOrder>,
) -> WebResult<HttpResponse> {
    let id = state.orders.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({ "id": id, "status": "created" })))
}

#[cfg(test)]
mod tests {
    use crate::test_util::{setup_app, setup_state};
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn created_order_returns_id_and_status() {
        let app = setup_app(setup_state().await).await;

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(json!({
                "customer_name": "Valentina Rojas",
                "customer_email": "valentina@example.com",
                "address": "Av. Siempreviva 742, Santiago",
                "total": 28980,
                "items": [
                    { "product_id": 1, "quantity": 1 },
                    { "product_id": 2, "quantity": 2 }
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "id": 1, "status": "created" }));
    }

    #[actix_web::test]
    async fn malformed_body_is_a_client_error() {
        let app = setup_app(setup_state().await).await;

        let req = test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"items\": [")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn get_is_method_not_allowed() {
        let app = setup_app(setup_state().await).await;

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
