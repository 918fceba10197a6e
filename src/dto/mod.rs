pub mod access_logs;
pub mod orders;
