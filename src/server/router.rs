use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{fallback, order, product},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "E-commerce Dashboard API"),
    tags(
        (name = "orders", description = "Order management"),
        (name = "products", description = "Product catalogue")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at `/swagger`.
///
/// Unmatched paths and unsupported methods are answered with the error envelope.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(order::update_order_status))
        .routes(routes!(order::get_all_orders))
        .routes(routes!(order::get_order_by_id, order::delete_order))
        .routes(routes!(order::get_order_detail))
        .routes(routes!(product::create_product, product::get_all_products))
        .routes(routes!(product::get_product_by_id, product::delete_product))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", api))
        .fallback(fallback::route_not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
