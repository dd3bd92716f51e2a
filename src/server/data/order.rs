use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all orders ordered by ID ascending
    pub async fn get_all(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets an order by ID
    ///
    /// # Returns
    /// - `Ok(Some(order))`: Order found
    /// - `Ok(None)`: Order not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Gets an order by ID together with its items ordered by item ID ascending
    ///
    /// # Returns
    /// - `Ok(Some((order, items)))`: Order found, `items` may be empty
    /// - `Ok(None)`: Order not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_with_items(
        &self,
        id: i32,
    ) -> Result<Option<(entity::order::Model, Vec<entity::order_item::Model>)>, DbErr> {
        let Some(order) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((order, items)))
    }

    /// Sets an order's status and refreshes its `updated_at` timestamp
    ///
    /// # Returns
    /// - `Ok(Some(order))`: The updated order
    /// - `Ok(None)`: Order not found, nothing written
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: String,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        let Some(order) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = order.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes an order and its items in a single transaction
    ///
    /// # Returns
    /// - `Ok(true)`: Order deleted
    /// - `Ok(false)`: Order not found, nothing deleted
    /// - `Err(DbErr)`: Database error, transaction rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Order::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }
}
