use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::AccessLog;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessLogList {
    pub items: Vec<AccessLog>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IpHits {
    pub ip: String,
    pub hits: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessLogStats {
    pub items: Vec<IpHits>,
}
