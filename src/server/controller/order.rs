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
        order::{OrderDetailDto, OrderDto, UpdateOrderStatusDto},
    },
    server::{
        error::{order::OrderError, AppError},
        model::order::OrderItem,
        state::AppState,
        util::{
            parse::{parse_id, require_text},
            response,
        },
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "orders";

const INVALID_ORDER_ID: &str = "Invalid order ID";

/// Parses the order ID path segment, logging receipt and rejection.
fn parse_order_id(path: Result<Path<String>, PathRejection>) -> Result<i32, AppError> {
    let Path(raw) = path.map_err(|rejection| {
        tracing::error!(error = %rejection, "Invalid order ID");
        AppError::bad_request(INVALID_ORDER_ID, rejection.body_text())
    })?;

    tracing::info!(id = %raw, "Received order ID from path");

    parse_id(&raw).map_err(|e| {
        tracing::error!(id = %raw, error = %e, "Invalid order ID");
        AppError::bad_request(INVALID_ORDER_ID, e)
    })
}

/// Update the status of an order.
///
/// The status is an open-ended label; any non-blank value is stored as given.
///
/// # Returns
/// - `200 OK` - Status updated, `data` is `null`
/// - `400 Bad Request` - Invalid order ID, malformed body, or blank status
/// - `500 Internal Server Error` - Order not found or store failure
#[utoipa::path(
    put,
    path = "/orders/update/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Successfully updated the order status", body = EmptyResponse),
        (status = 400, description = "Invalid order ID or input", body = ErrorDto),
        (status = 500, description = "Failed to update order status", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateOrderStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_order_id(path)?;

    let Json(payload) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "Invalid input");
        AppError::bad_request("Invalid input", rejection.body_text())
    })?;

    require_text("status", &payload.status).map_err(|e| {
        tracing::error!(error = %e, "Invalid input");
        AppError::bad_request("Invalid input", e)
    })?;

    let status = payload.status;

    if let Err(e) = state
        .order_service
        .update_order_status(id, status.clone())
        .await
    {
        tracing::error!(id, error = ?e, "Failed to update order status");
        return Err(AppError::operation_failed(
            "Failed to update order status",
            e,
        ));
    }

    tracing::info!(id, status = %status, "Successfully updated order status");

    Ok(response::empty("Order status updated successfully"))
}

/// Get all orders.
///
/// # Returns
/// - `200 OK` - All orders, possibly an empty list
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/orders/",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Successfully fetched all orders", body = ApiResponse<Vec<OrderDto>>),
        (status = 500, description = "Failed to fetch all orders", body = ErrorDto)
    ),
)]
pub async fn get_all_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = state.order_service.get_all_orders().await.map_err(|e| {
        tracing::error!(error = ?e, "Failed to fetch all orders");
        AppError::operation_failed("Failed to fetch all orders", e)
    })?;

    let orders: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok(response::with_data(
        StatusCode::OK,
        orders,
        "Fetched all orders successfully",
    ))
}

/// Get a single order by ID.
///
/// # Returns
/// - `200 OK` - The order
/// - `400 Bad Request` - Invalid order ID
/// - `404 Not Found` - No order with this ID
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully fetched the order", body = ApiResponse<OrderDto>),
        (status = 400, description = "Invalid order ID", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Failed to fetch order", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_order_id(path)?;

    let order = state
        .order_service
        .get_order_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(id, error = ?e, "Failed to fetch order by ID");
            match e {
                OrderError::NotFound(_) => AppError::not_found("Order not found", e),
                OrderError::Store(_) => AppError::operation_failed("Failed to fetch order by ID", e),
            }
        })?;

    Ok(response::with_data(
        StatusCode::OK,
        order.into_dto(),
        "Fetched order by ID successfully",
    ))
}

/// Delete an order and its items.
///
/// # Returns
/// - `200 OK` - Order deleted, `data` is `null`
/// - `400 Bad Request` - Invalid order ID
/// - `500 Internal Server Error` - Order not found or store failure
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted the order", body = EmptyResponse),
        (status = 400, description = "Invalid order ID", body = ErrorDto),
        (status = 500, description = "Failed to delete the order", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_order_id(path)?;

    if let Err(e) = state.order_service.delete_order(id).await {
        tracing::error!(id, error = ?e, "Failed to delete order");
        return Err(AppError::operation_failed("Failed to delete order", e));
    }

    tracing::info!(id, "Successfully deleted order");

    Ok(response::empty("Order deleted successfully"))
}

/// Get an order together with its line items.
///
/// # Returns
/// - `200 OK` - `{order, items}` with items in ID order
/// - `400 Bad Request` - Invalid order ID
/// - `500 Internal Server Error` - Order not found or store failure
#[utoipa::path(
    get,
    path = "/orders/detail/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully fetched order details", body = ApiResponse<OrderDetailDto>),
        (status = 400, description = "Invalid order ID", body = ErrorDto),
        (status = 500, description = "Failed to fetch order details", body = ErrorDto)
    ),
)]
pub async fn get_order_detail(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_order_id(path)?;

    let (order, items) = state
        .order_service
        .get_order_detail(id)
        .await
        .map_err(|e| {
            tracing::error!(id, error = ?e, "Failed to fetch order details");
            AppError::operation_failed("Failed to fetch order details", e)
        })?;

    let detail = OrderDetailDto {
        order: order.into_dto(),
        items: items.into_iter().map(OrderItem::into_dto).collect(),
    };

    tracing::info!(id, items = detail.items.len(), "Fetched order details");

    Ok(response::with_data(
        StatusCode::OK,
        detail,
        "Fetched order details successfully",
    ))
}
