pub mod access_log_service;
pub mod order_service;

pub use access_log_service::AccessLogService;
pub use order_service::OrderService;
