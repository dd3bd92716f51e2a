//! Controller tests run against fake services through the real router.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use crate::server::{
    error::{order::OrderError, product::ProductError},
    model::{
        order::{Order, OrderItem},
        product::{CreateProductParams, Product},
    },
    router::router,
    service::{order::OrderService, product::ProductService},
    state::AppState,
};


#[derive(Debug, Clone, PartialEq)]
pub enum OrderCall {
    UpdateStatus(i32, String),
    GetAll,
    GetById(i32),
    Delete(i32),
    GetDetail(i32),
}

/// In-memory order service recording every call it receives.
#[derive(Default)]
pub struct FakeOrderService {
    orders: Vec<Order>,
    items: Vec<OrderItem>,
    store_down: bool,
    calls: Mutex<Vec<OrderCall>>,
}

impl FakeOrderService {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Default::default()
        }
    }

    pub fn with_items(mut self, items: Vec<OrderItem>) -> Self {
        self.items = items;
        self
    }

    /// Makes every operation fail as if the database were unreachable.
    pub fn failing() -> Self {
        Self {
            store_down: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<OrderCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: OrderCall) -> Result<(), OrderError> {
        self.calls.lock().unwrap().push(call);

        if self.store_down {
            return Err(OrderError::Store(DbErr::Custom(
                "connection refused".to_string(),
            )));
        }

        Ok(())
    }

    fn find(&self, id: i32) -> Result<Order, OrderError> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(OrderError::NotFound(id))
    }
}

#[async_trait]
impl OrderService for FakeOrderService {
    async fn update_order_status(&self, id: i32, status: String) -> Result<(), OrderError> {
        self.record(OrderCall::UpdateStatus(id, status))?;
        self.find(id).map(|_| ())
    }

    async fn get_all_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.record(OrderCall::GetAll)?;
        Ok(self.orders.clone())
    }

    async fn get_order_by_id(&self, id: i32) -> Result<Order, OrderError> {
        self.record(OrderCall::GetById(id))?;
        self.find(id)
    }

    async fn delete_order(&self, id: i32) -> Result<(), OrderError> {
        self.record(OrderCall::Delete(id))?;
        self.find(id).map(|_| ())
    }

    async fn get_order_detail(&self, id: i32) -> Result<(Order, Vec<OrderItem>), OrderError> {
        self.record(OrderCall::GetDetail(id))?;
        let order = self.find(id)?;
        let items = self
            .items
            .iter()
            .filter(|i| i.order_id == id)
            .cloned()
            .collect();
        Ok((order, items))
    }
}

/// In-memory product service recording created products and requested IDs.
#[derive(Default)]
pub struct FakeProductService {
    products: Vec<Product>,
    referenced: Vec<i32>,
    created: Mutex<Vec<CreateProductParams>>,
    requested_ids: Mutex<Vec<i32>>,
}

impl FakeProductService {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    /// Marks products as used by order items so deleting them fails.
    pub fn referencing(mut self, ids: Vec<i32>) -> Self {
        self.referenced = ids;
        self
    }

    pub fn created(&self) -> Vec<CreateProductParams> {
        self.created.lock().unwrap().clone()
    }

    pub fn requested_ids(&self) -> Vec<i32> {
        self.requested_ids.lock().unwrap().clone()
    }

    fn find(&self, id: i32) -> Result<Product, ProductError> {
        self.requested_ids.lock().unwrap().push(id);
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }
}

#[async_trait]
impl ProductService for FakeProductService {
    async fn create_product(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.created.lock().unwrap().push(params.clone());
        Ok(Product {
            id: 100,
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
            created_at: timestamp(),
        })
    }

    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.products.clone())
    }

    async fn get_product_by_id(&self, id: i32) -> Result<Product, ProductError> {
        self.find(id)
    }

    async fn delete_product(&self, id: i32) -> Result<(), ProductError> {
        self.find(id)?;
        if self.referenced.contains(&id) {
            return Err(ProductError::InUse(id));
        }
        Ok(())
    }
}

pub fn timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 1, 12, 0, 0).unwrap()
}

pub fn sample_order(id: i32, status: &str) -> Order {
    Order {
        id,
        customer_name: format!("Customer {}", id),
        status: status.to_string(),
        total_amount: 59.5,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn sample_item(id: i32, order_id: i32) -> OrderItem {
    OrderItem {
        id,
        order_id,
        product_id: id * 10,
        quantity: 2,
        price: 14.875,
    }
}

pub fn sample_product(id: i32) -> Product {
    Product {
        id,
        name: format!("Product {}", id),
        description: None,
        price: 9.99,
        stock: 5,
        created_at: timestamp(),
    }
}

pub fn state(orders: Arc<FakeOrderService>, products: Arc<FakeProductService>) -> AppState {
    AppState::new(orders, products)
}

pub fn app(orders: Arc<FakeOrderService>) -> Router {
    router().with_state(state(orders, Arc::new(FakeProductService::default())))
}

pub fn product_app(products: Arc<FakeProductService>) -> Router {
    router().with_state(state(Arc::new(FakeOrderService::default()), products))
}

/// Sends a request through the router and decodes the JSON envelope.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();

    read(response).await
}

pub async fn read(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
