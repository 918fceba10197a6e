use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        access_logs::{AccessLogList, AccessLogStats, IpHits},
        orders::{CreateOrderRequest, OrderList, UpdateOrderRequest},
    },
    models::{AccessLog, Order},
    response::{ApiResponse, Meta},
    routes::{access_logs, health, orders},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        access_logs::record_access,
        access_logs::list_access_logs,
        access_logs::access_log_stats,
    ),
    components(
        schemas(
            Order,
            AccessLog,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderList,
            AccessLogList,
            AccessLogStats,
            IpHits,
            Meta,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<AccessLog>,
            ApiResponse<AccessLogList>,
            ApiResponse<AccessLogStats>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Orders", description = "Order CRUD endpoints"),
        (name = "Access Logs", description = "Access log collection endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
