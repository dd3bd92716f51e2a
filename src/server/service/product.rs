use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::product::ProductError,
    model::product::{CreateProductParams, Product},
};

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn create_product(&self, params: CreateProductParams) -> Result<Product, ProductError>;

    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError>;

    async fn get_product_by_id(&self, id: i32) -> Result<Product, ProductError>;

    /// Deletes a product that no order item references.
    async fn delete_product(&self, id: i32) -> Result<(), ProductError>;
}

pub struct DbProductService {
    db: DatabaseConnection,
}

impl DbProductService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductService for DbProductService {
    async fn create_product(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let repo = ProductRepository::new(&self.db);

        let product = repo.create(params).await?;

        Ok(Product::from_entity(product))
    }

    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        let repo = ProductRepository::new(&self.db);

        let products = repo.get_all().await?;

        Ok(products.into_iter().map(Product::from_entity).collect())
    }

    async fn get_product_by_id(&self, id: i32) -> Result<Product, ProductError> {
        let repo = ProductRepository::new(&self.db);

        repo.get_by_id(id)
            .await?
            .map(Product::from_entity)
            .ok_or(ProductError::NotFound(id))
    }

    async fn delete_product(&self, id: i32) -> Result<(), ProductError> {
        let repo = ProductRepository::new(&self.db);

        if repo.is_referenced(id).await? {
            return Err(ProductError::InUse(id));
        }

        if !repo.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
