use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::Order;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub product: String,
    pub price: f64,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_product(&self.product)?;
        validate_price(self.price)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub product: Option<String>,
    pub price: Option<f64>,
}

impl UpdateOrderRequest {
    /// Absent fields are left as-is, so only supplied values are checked.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(product) = self.product.as_deref() {
            validate_product(product)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_product(product: &str) -> AppResult<()> {
    if product.trim().is_empty() {
        return Err(AppError::BadRequest("product must not be empty".into()));
    }
    Ok(())
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::BadRequest(
            "price must be a positive number".into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
