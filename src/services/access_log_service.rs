use chrono::Utc;

use crate::dto::access_logs::IpHits;
use crate::entity::access_logs::Model as AccessLogModel;
use crate::error::AppResult;
use crate::models::AccessLog;
use crate::repository::AccessLogRepository;

const RECENT_LIMIT: u64 = 100;

#[derive(Clone)]
pub struct AccessLogService {
    repo: AccessLogRepository,
}

impl AccessLogService {
    pub fn new(repo: AccessLogRepository) -> Self {
        Self { repo }
    }

    pub async fn record(&self, ip: String, user_agent: Option<String>) -> AppResult<AccessLog> {
        let log = self.repo.record(ip, user_agent).await?;
        Ok(access_log_from_entity(log))
    }

    /// Newest entries first, capped at [`RECENT_LIMIT`], with the overall count.
    pub async fn list_recent(&self) -> AppResult<(Vec<AccessLog>, i64)> {
        let total = self.repo.count().await?;
        let logs = self.repo.list_recent(RECENT_LIMIT).await?;
        Ok((
            logs.into_iter().map(access_log_from_entity).collect(),
            total,
        ))
    }

    pub async fn stats(&self) -> AppResult<Vec<IpHits>> {
        let rows = self.repo.count_by_ip().await?;
        Ok(rows
            .into_iter()
            .map(|row| IpHits {
                ip: row.ip,
                hits: row.hits,
            })
            .collect())
    }
}

fn access_log_from_entity(model: AccessLogModel) -> AccessLog {
    AccessLog {
        id: model.id,
        ip: model.ip,
        user_agent: model.user_agent,
        timestamp: model.timestamp.with_timezone(&Utc),
    }
}
