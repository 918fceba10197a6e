pub mod access_logs;
pub mod orders;

pub use access_logs::AccessLogRepository;
pub use orders::{OrderChanges, OrderRepository};
