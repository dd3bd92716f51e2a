use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, EmptyResponse, ErrorDto},
        product::{CreateProductDto, ProductDto},
    },
    server::{
        error::{product::ProductError, AppError},
        model::product::CreateProductParams,
        state::AppState,
        util::{parse::parse_id, response},
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "products";

fn parse_product_id(path: Result<Path<String>, PathRejection>) -> Result<i32, AppError> {
    let Path(raw) = path.map_err(|rejection| {
        tracing::error!(error = %rejection, "Invalid product ID");
        AppError::bad_request("Invalid product ID", rejection.body_text())
    })?;

    parse_id(&raw).map_err(|e| {
        tracing::error!(id = %raw, error = %e, "Invalid product ID");
        AppError::bad_request("Invalid product ID", e)
    })
}

/// Create a new product.
///
/// # Returns
/// - `201 Created` - The created product
/// - `400 Bad Request` - Malformed body, blank name, or negative price/stock
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/products/",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Successfully created product", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 500, description = "Failed to create product", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "Invalid input");
        AppError::bad_request("Invalid input", rejection.body_text())
    })?;

    let params = CreateProductParams::from_dto(payload).map_err(|e| {
        tracing::error!(error = %e, "Invalid input");
        AppError::bad_request("Invalid input", e)
    })?;

    let product = state
        .product_service
        .create_product(params)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "Failed to create product");
            AppError::operation_failed("Failed to create product", e)
        })?;

    tracing::info!(id = product.id, "Created product");

    Ok(response::with_data(
        StatusCode::CREATED,
        product.into_dto(),
        "Product created successfully",
    ))
}

/// Get all products.
#[utoipa::path(
    get,
    path = "/products/",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Successfully fetched all products", body = ApiResponse<Vec<ProductDto>>),
        (status = 500, description = "Failed to fetch all products", body = ErrorDto)
    ),
)]
pub async fn get_all_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.product_service.get_all_products().await.map_err(|e| {
        tracing::error!(error = ?e, "Failed to fetch all products");
        AppError::operation_failed("Failed to fetch all products", e)
    })?;

    let products: Vec<ProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok(response::with_data(
        StatusCode::OK,
        products,
        "Fetched all products successfully",
    ))
}

/// Get a single product by ID.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully fetched the product", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid product ID", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Failed to fetch product", body = ErrorDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_product_id(path)?;

    let product = state
        .product_service
        .get_product_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(id, error = ?e, "Failed to fetch product by ID");
            match e {
                ProductError::NotFound(_) => AppError::not_found("Product not found", e),
                _ => AppError::operation_failed("Failed to fetch product by ID", e),
            }
        })?;

    Ok(response::with_data(
        StatusCode::OK,
        product.into_dto(),
        "Fetched product by ID successfully",
    ))
}

/// Delete a product that is not part of any order.
///
/// # Returns
/// - `200 OK` - Product deleted, `data` is `null`
/// - `400 Bad Request` - Invalid product ID
/// - `500 Internal Server Error` - Product not found, still ordered, or store failure
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted the product", body = EmptyResponse),
        (status = 400, description = "Invalid product ID", body = ErrorDto),
        (status = 500, description = "Failed to delete the product", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_product_id(path)?;

    if let Err(e) = state.product_service.delete_product(id).await {
        tracing::error!(id, error = ?e, "Failed to delete product");
        return Err(AppError::operation_failed("Failed to delete product", e));
    }

    tracing::info!(id, "Successfully deleted product");

    Ok(response::empty("Product deleted successfully"))
}
