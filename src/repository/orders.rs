use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::db::OrmConn;
use crate::entity::orders::{ActiveModel, Column, Entity as Orders, Model};
use crate::error::AppResult;

/// Field subset applied by a partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct OrderChanges {
    pub product: Option<String>,
    pub price: Option<f64>,
}

/// The only code that issues queries against the orders table.
#[derive(Clone)]
pub struct OrderRepository {
    conn: OrmConn,
}

impl OrderRepository {
    pub fn new(conn: OrmConn) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, product: String, price: f64) -> AppResult<Model> {
        // one timestamp for both columns, so a fresh row has created_at == updated_at
        let now = Utc::now();
        let active = ActiveModel {
            id: NotSet,
            product: Set(product),
            price: Set(price),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        Ok(active.insert(&self.conn).await?)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Model>> {
        Ok(Orders::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.conn)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Model>> {
        Ok(Orders::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn update_by_id(&self, id: i32, changes: OrderChanges) -> AppResult<Option<Model>> {
        let existing = Orders::find_by_id(id).one(&self.conn).await?;
        let existing = match existing {
            Some(order) => order,
            None => return Ok(None),
        };

        let mut active: ActiveModel = existing.into();
        if let Some(product) = changes.product {
            active.product = Set(product);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        active.updated_at = Set(Utc::now().into());

        Ok(Some(active.update(&self.conn).await?))
    }

    pub async fn delete_by_id(&self, id: i32) -> AppResult<Option<Model>> {
        let existing = Orders::find_by_id(id).one(&self.conn).await?;
        let existing = match existing {
            Some(order) => order,
            None => return Ok(None),
        };

        let result = Orders::delete_by_id(id).exec(&self.conn).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(Some(existing))
    }
}
