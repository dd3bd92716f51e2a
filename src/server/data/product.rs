use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::CreateProductParams;

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new product
    pub async fn create(&self, params: CreateProductParams) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            stock: ActiveValue::Set(params.stock),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all products ordered by ID ascending
    pub async fn get_all(&self) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a product by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Checks whether any order item references the product
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::ProductId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a product
    ///
    /// # Returns
    /// - `Ok(true)`: Product deleted
    /// - `Ok(false)`: Product not found
    /// - `Err(DbErr)`: Database error, including foreign key violations
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
