use chrono::Utc;

use crate::dto::orders::{CreateOrderRequest, UpdateOrderRequest};
use crate::entity::orders::Model as OrderModel;
use crate::error::{AppError, AppResult};
use crate::models::Order;
use crate::repository::{OrderChanges, OrderRepository};

/// Domain contract over the orders table. The only caller of
/// [`OrderRepository`]; translates a missing row into [`AppError::NotFound`]
/// carrying the requested id.
#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
}

impl OrderService {
    pub fn new(repo: OrderRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreateOrderRequest) -> AppResult<Order> {
        payload.validate()?;
        let order = self.repo.insert(payload.product, payload.price).await?;
        Ok(order_from_entity(order))
    }

    pub async fn list_all(&self) -> AppResult<Vec<Order>> {
        let orders = self.repo.list_all().await?;
        Ok(orders.into_iter().map(order_from_entity).collect())
    }

    pub async fn get(&self, id: i32) -> AppResult<Order> {
        match self.repo.find_by_id(id).await? {
            Some(order) => Ok(order_from_entity(order)),
            None => Err(AppError::NotFound(format!("order {id}"))),
        }
    }

    pub async fn update(&self, id: i32, payload: UpdateOrderRequest) -> AppResult<Order> {
        payload.validate()?;
        let changes = OrderChanges {
            product: payload.product,
            price: payload.price,
        };
        match self.repo.update_by_id(id, changes).await? {
            Some(order) => Ok(order_from_entity(order)),
            None => Err(AppError::NotFound(format!("order {id}"))),
        }
    }

    pub async fn remove(&self, id: i32) -> AppResult<Order> {
        match self.repo.delete_by_id(id).await? {
            Some(order) => Ok(order_from_entity(order)),
            None => Err(AppError::NotFound(format!("order {id}"))),
        }
    }
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        product: model.product,
        price: model.price,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
