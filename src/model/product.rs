use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductDto {
    #[schema(example = "Mechanical keyboard")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(example = 49.99)]
    pub price: f64,
    #[serde(default)]
    pub stock: i32,
}
