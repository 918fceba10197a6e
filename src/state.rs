use crate::db::OrmConn;
use crate::repository::{AccessLogRepository, OrderRepository};
use crate::services::{AccessLogService, OrderService};

#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
    pub access_logs: AccessLogService,
}

impl AppState {
    /// Wire the services to their repositories over a shared connection.
    pub fn new(conn: OrmConn) -> Self {
        Self {
            orders: OrderService::new(OrderRepository::new(conn.clone())),
            access_logs: AccessLogService::new(AccessLogRepository::new(conn)),
        }
    }
}
